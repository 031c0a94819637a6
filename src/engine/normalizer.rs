// ==========================================
// 客服坐席排班系统 - 需求整数化引擎
// ==========================================
// 职责: 把外部预测的小数人力曲线整数化为 24 槽需求向量
// 输入: 预测记录列表（每小时一条）
// 输出: HourlyRequirement
// ==========================================

use crate::domain::requirement::{ForecastRow, HourlyRequirement};
use crate::domain::types::HOURS_PER_DAY;

// ==========================================
// RequirementNormalizer - 需求整数化引擎
// ==========================================
pub struct RequirementNormalizer;

impl RequirementNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// 整数化预测记录
    ///
    /// 规则：
    /// 1) 每小时需求 = ceil(预测值)，负值与非法值按 0 处理；
    /// 2) 缺失的预测值按 0 处理；
    /// 3) 小时序号重复时后出现的记录覆盖先出现的；
    /// 4) 日级周末标志 = 任一记录标记周末即为周末。
    pub fn normalize(&self, rows: &[ForecastRow]) -> HourlyRequirement {
        let mut values = [0u32; HOURS_PER_DAY];
        let mut is_weekend = false;

        for row in rows {
            if (row.hour as usize) >= HOURS_PER_DAY {
                continue;
            }
            is_weekend |= row.is_weekend;

            let raw = row.required_staff.unwrap_or(0.0);
            values[row.hour as usize] = if raw.is_finite() && raw > 0.0 {
                raw.ceil() as u32
            } else {
                0
            };
        }

        HourlyRequirement::new(values, is_weekend)
    }
}

impl Default for RequirementNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
