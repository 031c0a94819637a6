// ==========================================
// 客服坐席排班系统 - 导入层
// ==========================================
// 职责: 从外部预测协作方的文件读取人力需求记录
// ==========================================

pub mod error;
pub mod file_parser;
pub mod forecast_importer;

pub use error::{ImportError, ImportResult};
pub use file_parser::{ForecastFileReader, RawRecord};
pub use forecast_importer::ForecastImporter;
