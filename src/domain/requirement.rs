// ==========================================
// 客服坐席排班系统 - 人力需求领域模型
// ==========================================
// 输入来源: 外部话务预测模型（每小时一条记录）
// 红线: 需求曲线在一次排班计算中不可变
// ==========================================

use crate::domain::types::HOURS_PER_DAY;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// ForecastRow - 预测输入记录
// ==========================================
// 外部协作方每个排班日提供 24 条记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastRow {
    pub hour: u8,                    // 小时序号 (0-23)
    pub required_staff: Option<f64>, // 预测所需人力（可缺失，缺失按 0 处理）
    pub is_weekend: bool,            // 周末标志
    pub forecast_date: Option<NaiveDate>, // 预测日期（可选，用于推导周末标志）
}

impl ForecastRow {
    pub fn new(hour: u8, required_staff: f64, is_weekend: bool) -> Self {
        Self {
            hour,
            required_staff: Some(required_staff),
            is_weekend,
            forecast_date: None,
        }
    }
}

// ==========================================
// HourlyRequirement - 整数化小时需求向量
// ==========================================
// 不变式: 每小时恰好一个值，按小时序号索引，无空洞
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyRequirement {
    values: [u32; HOURS_PER_DAY], // 每小时所需坐席数（整数化后）
    is_weekend: bool,             // 日级周末标志
}

impl HourlyRequirement {
    pub fn new(values: [u32; HOURS_PER_DAY], is_weekend: bool) -> Self {
        Self { values, is_weekend }
    }

    /// 全量需求向量
    pub fn values(&self) -> &[u32; HOURS_PER_DAY] {
        &self.values
    }

    /// 指定小时的需求
    pub fn at(&self, hour: usize) -> u32 {
        self.values[hour]
    }

    pub fn is_weekend(&self) -> bool {
        self.is_weekend
    }

    /// 全天需求总量（人·小时）
    pub fn total(&self) -> u32 {
        self.values.iter().sum()
    }

    /// 单小时需求峰值
    pub fn peak(&self) -> u32 {
        self.values.iter().copied().max().unwrap_or(0)
    }
}
