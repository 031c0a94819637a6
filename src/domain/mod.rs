// ==========================================
// 客服坐席排班系统 - 领域层
// ==========================================
// 职责: 值对象与领域类型定义，不含业务流程
// ==========================================

pub mod capacity;
pub mod plan;
pub mod requirement;
pub mod types;

// 重导出核心领域对象
pub use capacity::{CapacityConstraint, CapacityLimits};
pub use plan::{
    HireRecommendation, MixedHirePlan, PlanArtifacts, PlanResult, RosterEntry, ShiftWindow,
};
pub use requirement::{ForecastRow, HourlyRequirement};
pub use types::{PtShiftHours, ShiftClass, FT_SHIFT_HOURS, HOURS_PER_DAY};
