// ==========================================
// 客服坐席排班系统 - 核心库
// ==========================================
// 技术栈: Rust + CSV/Excel 导入 + CSV/JSON 导出
// 系统定位: 决策支持系统 (排班建议，人工最终控制权)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 导入层 - 外部预测数据
pub mod importer;

// 导出层 - 产物序列化
pub mod export;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{PtShiftHours, ShiftClass, FT_SHIFT_HOURS, HOURS_PER_DAY};

// 领域实体
pub use domain::{
    CapacityConstraint, CapacityLimits, ForecastRow, HireRecommendation, HourlyRequirement,
    MixedHirePlan, PlanArtifacts, PlanResult, RosterEntry, ShiftWindow,
};

// 引擎
pub use engine::{
    HireAdvisor, PlanOrchestrator, PlanStrategy, PlannerParams, RequirementNormalizer,
    RosterBuilder, ShiftPlanner,
};

// 配置
pub use config::{ConfigManager, PlanConfig};

// API
pub use api::PlanApi;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "客服坐席排班系统";

// ==========================================
// 预编译检查
// ==========================================

// 确保编译时所有模块可见
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
