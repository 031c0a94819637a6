// ==========================================
// 客服坐席排班系统 - 导出层
// ==========================================
// 职责: 把排班产物序列化为 CSV / JSON 供展示协作方消费
// ==========================================

pub mod csv_export;

pub use csv_export::{artifacts_to_json, format_hhmm, format_hour, CsvExporter};

use thiserror::Error;

/// 导出层错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV 写入失败: {0}")]
    CsvWriteError(String),

    #[error("文件写入失败: {0}")]
    FileWriteError(String),

    #[error("JSON 序列化失败: {0}")]
    JsonError(String),
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::CsvWriteError(err.to_string())
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::FileWriteError(err.to_string())
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::JsonError(err.to_string())
    }
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;
