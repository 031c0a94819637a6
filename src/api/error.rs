// ==========================================
// 客服坐席排班系统 - API层错误类型
// ==========================================
// 职责: 把各层技术错误转换为用户友好的业务错误
// 红线: 所有错误信息必须包含显式原因（可解释性）
// ==========================================

use crate::config::ConfigError;
use crate::export::ExportError;
use crate::importer::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ==========================================
    // 数据导入错误
    // ==========================================
    #[error("预测文件导入失败: {0}")]
    ImportFailed(String),

    // ==========================================
    // 配置错误
    // ==========================================
    #[error("配置加载失败: {0}")]
    ConfigFailed(String),

    // ==========================================
    // 导出错误
    // ==========================================
    #[error("产物导出失败: {0}")]
    ExportFailed(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 各层错误转换
// ==========================================

impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::Other(inner) => ApiError::Other(inner),
            other => ApiError::ImportFailed(other.to_string()),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::ConfigFailed(err.to_string())
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        ApiError::ExportFailed(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
