// ==========================================
// 客服坐席排班系统 - 引擎层
// ==========================================
// 职责: 实现排班业务规则，不做 I/O
// 红线: 引擎对全输入域总是终止并产出完整结果
// ==========================================

pub mod hire;
pub mod normalizer;
pub mod orchestrator;
pub mod roster;
pub mod shift_planner;
pub mod strategy;

// 重导出核心引擎
pub use hire::HireAdvisor;
pub use normalizer::RequirementNormalizer;
pub use orchestrator::PlanOrchestrator;
pub use roster::RosterBuilder;
pub use shift_planner::{PlannerParams, ShiftPlanner};
pub use strategy::PlanStrategy;
