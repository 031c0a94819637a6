// ==========================================
// 客服坐席排班系统 - 配置层
// ==========================================
// 职责: 用户配置面定义、文件加载与快照
// ==========================================

pub mod config_manager;
pub mod plan_config;

pub use config_manager::{config_snapshot, ConfigManager};
pub use plan_config::PlanConfig;

use thiserror::Error;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {0}")]
    FileNotFound(String),

    #[error("配置文件读取失败: {0}")]
    ReadError(String),

    #[error("配置解析失败: {0}")]
    ParseError(String),

    #[error("配置写入失败: {0}")]
    WriteError(String),
}
