// ==========================================
// 客服坐席排班系统 - API 层
// ==========================================
// 职责: 面向消费方的业务接口
// ==========================================

pub mod error;
pub mod plan_api;

pub use error::{ApiError, ApiResult};
pub use plan_api::PlanApi;
