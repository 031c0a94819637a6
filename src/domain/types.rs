// ==========================================
// 客服坐席排班系统 - 领域类型定义
// ==========================================
// 红线: 总人数上限不得隐含超过并发上限的坐席数
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 基础常量
// ==========================================

/// 一天的小时槽位数（0..23，不支持跨天班次）
pub const HOURS_PER_DAY: usize = 24;

/// 全职班次固定时长（小时）
pub const FT_SHIFT_HOURS: u8 = 8;

// ==========================================
// 班次类别 (Shift Class)
// ==========================================
// 红线: 只有两类，全职固定8小时，兼职4或6小时
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftClass {
    #[serde(rename = "FT")]
    FullTime, // 全职
    #[serde(rename = "PT")]
    PartTime, // 兼职
}

impl ShiftClass {
    /// 转换为导出/展示用的字符串
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftClass::FullTime => "FT",
            ShiftClass::PartTime => "PT",
        }
    }

    pub fn title_cn(&self) -> &'static str {
        match self {
            ShiftClass::FullTime => "全职",
            ShiftClass::PartTime => "兼职",
        }
    }
}

impl fmt::Display for ShiftClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 兼职班次时长 (PT Shift Hours)
// ==========================================
// 只允许 4 或 6 小时两档
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PtShiftHours {
    H4, // 4小时班
    H6, // 6小时班
}

impl PtShiftHours {
    /// 档位对应的小时数
    pub fn as_hours(&self) -> u8 {
        match self {
            PtShiftHours::H4 => 4,
            PtShiftHours::H6 => 6,
        }
    }

    /// 从配置数值解析档位
    ///
    /// # 返回
    /// - 4 -> H4, 6 -> H6
    /// - 其他值: None（调用方决定回退档位）
    pub fn from_hours(hours: u8) -> Option<Self> {
        match hours {
            4 => Some(PtShiftHours::H4),
            6 => Some(PtShiftHours::H6),
            _ => None,
        }
    }
}

impl Default for PtShiftHours {
    fn default() -> Self {
        PtShiftHours::H6
    }
}

impl fmt::Display for PtShiftHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h", self.as_hours())
    }
}
