// ==========================================
// 客服坐席排班系统 - 预测记录映射器
// ==========================================
// 职责: 把原始文件记录映射为 ForecastRow
// 规则: 数值格式非法按缺失处理（整数化阶段按 0），
//       小时序号越界按数据质量错误拒绝
// ==========================================

use crate::domain::requirement::ForecastRow;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::{ForecastFileReader, RawRecord};
use chrono::{Datelike, NaiveDate, Weekday};
use std::path::Path;
use tracing::{debug, info};

// ===== 字段别名（中英文表头）=====
const HOUR_ALIASES: [&str; 3] = ["hour", "hour_of_day", "小时"];
const REQUIRED_ALIASES: [&str; 4] = ["required_staff", "required", "staff", "需求人数"];
const WEEKEND_ALIASES: [&str; 3] = ["is_weekend", "weekend", "周末"];
const DATE_ALIASES: [&str; 3] = ["date", "forecast_date", "日期"];

// ==========================================
// ForecastImporter - 预测导入器
// ==========================================
pub struct ForecastImporter;

impl ForecastImporter {
    pub fn new() -> Self {
        Self
    }

    /// 从文件导入预测记录
    pub fn import_file<P: AsRef<Path>>(&self, path: P) -> ImportResult<Vec<ForecastRow>> {
        let path = path.as_ref();
        info!(path = %path.display(), "开始导入预测文件");

        let records = ForecastFileReader::read(path)?;
        let rows = self.map_records(&records)?;

        info!(rows_count = rows.len(), "预测文件导入完成");
        Ok(rows)
    }

    /// 把原始记录映射为预测记录（行号从1计，用于错误定位）
    pub fn map_records(&self, records: &[RawRecord]) -> ImportResult<Vec<ForecastRow>> {
        let mut rows = Vec::with_capacity(records.len());

        for (idx, record) in records.iter().enumerate() {
            let row_no = idx + 1;
            rows.push(self.map_record(record, row_no)?);
        }

        Ok(rows)
    }

    fn map_record(&self, record: &RawRecord, row_no: usize) -> ImportResult<ForecastRow> {
        // ===== 小时序号（必填，越界拒绝）=====
        let hour_raw = lookup(record, &HOUR_ALIASES).ok_or_else(|| {
            ImportError::FieldMappingError {
                row: row_no,
                message: "缺少小时序号列 (hour/小时)".to_string(),
            }
        })?;
        let hour_val: f64 =
            hour_raw
                .parse()
                .map_err(|_| ImportError::TypeConversionError {
                    row: row_no,
                    field: "hour".to_string(),
                    message: format!("无法解析为数值: {}", hour_raw),
                })?;
        if !(0.0..=23.0).contains(&hour_val) || hour_val.fract() != 0.0 {
            return Err(ImportError::ValueRangeError {
                row: row_no,
                field: "hour".to_string(),
                value: hour_val,
                min: 0.0,
                max: 23.0,
            });
        }
        let hour = hour_val as u8;

        // ===== 需求人力（非法按缺失处理）=====
        let required_staff = lookup(record, &REQUIRED_ALIASES)
            .filter(|v| !v.is_empty())
            .and_then(|v| v.parse::<f64>().ok());

        // ===== 预测日期（可选）=====
        let forecast_date = match lookup(record, &DATE_ALIASES).filter(|v| !v.is_empty()) {
            Some(raw) => Some(parse_date(raw, row_no)?),
            None => None,
        };

        // ===== 周末标志（缺失时由日期推导）=====
        let is_weekend = match lookup(record, &WEEKEND_ALIASES).filter(|v| !v.is_empty()) {
            Some(raw) => parse_flag(raw),
            None => forecast_date
                .map(|d| matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
                .unwrap_or(false),
        };

        debug!(row = row_no, hour, is_weekend, "预测记录映射完成");

        Ok(ForecastRow {
            hour,
            required_staff,
            is_weekend,
            forecast_date,
        })
    }
}

impl Default for ForecastImporter {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 解析辅助
// ==========================================

/// 按别名列表查字段值
fn lookup<'a>(record: &'a RawRecord, aliases: &[&str]) -> Option<&'a String> {
    aliases.iter().find_map(|key| record.get(*key))
}

/// 解析布尔标志（1/true/y/yes/是 => true）
fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_lowercase().as_str(),
        "1" | "true" | "y" | "yes" | "是"
    )
}

/// 解析日期（YYYY-MM-DD 或 YYYYMMDD）
fn parse_date(raw: &str, row_no: usize) -> ImportResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y%m%d"))
        .map_err(|_| ImportError::DateFormatError {
            row: row_no,
            field: "date".to_string(),
            value: raw.to_string(),
        })
}
