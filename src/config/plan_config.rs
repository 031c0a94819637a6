// ==========================================
// 客服坐席排班系统 - 排班配置
// ==========================================
// 职责: 用户配置面的定义与宽松解析
// 红线: 非法配置降级为零值并产出零落位方案，不报错中断
// ==========================================

use crate::domain::capacity::CapacityLimits;
use crate::domain::types::PtShiftHours;
use crate::engine::strategy::PlanStrategy;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

fn default_mixed_ft_percent() -> u32 {
    50
}

fn default_pt_shift_hours() -> u8 {
    PtShiftHours::default().as_hours()
}

fn default_lunch_minutes() -> u32 {
    30
}

// ==========================================
// PlanConfig - 用户配置面
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    // ===== 并发上限（必填）=====
    pub cap_ft: u32, // 全职同时在班上限
    pub cap_pt: u32, // 兼职同时在班上限

    // ===== 班次总数上限（可缺省，缺省=并发上限）=====
    #[serde(default)]
    pub total_ft: Option<u32>,
    #[serde(default)]
    pub total_pt: Option<u32>,

    // ===== 策略 =====
    #[serde(default)]
    pub strategy: PlanStrategy,

    /// mixed 策略的目标全职占比（0-100，仅 mixed 生效）
    #[serde(default = "default_mixed_ft_percent")]
    pub mixed_ft_percent: u32,

    // ===== 兼职档位 =====
    /// 兼职班次时长（4 或 6，其他值回退默认档位）
    #[serde(default = "default_pt_shift_hours")]
    pub pt_shift_hours: u8,

    /// 周末兼职档位覆盖（可缺省）
    #[serde(default)]
    pub weekend_pt_shift_hours: Option<u8>,

    // ===== 用餐 =====
    #[serde(default = "default_lunch_minutes")]
    pub lunch_minutes: u32,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            cap_ft: 0,
            cap_pt: 0,
            total_ft: None,
            total_pt: None,
            strategy: PlanStrategy::default(),
            mixed_ft_percent: default_mixed_ft_percent(),
            pt_shift_hours: default_pt_shift_hours(),
            weekend_pt_shift_hours: None,
            lunch_minutes: default_lunch_minutes(),
        }
    }
}

impl PlanConfig {
    /// 宽松解析 JSON 配置
    ///
    /// 非数字或负数的容量/总数值一律按 0 处理；未知策略回退默认策略。
    /// 排班引擎对零容量配置产出全缺口方案，因此这里从不失败。
    pub fn from_value(value: &Value) -> Self {
        let defaults = Self::default();
        Self {
            cap_ft: lenient_u32(value.get("cap_ft")),
            cap_pt: lenient_u32(value.get("cap_pt")),
            total_ft: lenient_opt_u32(value.get("total_ft")),
            total_pt: lenient_opt_u32(value.get("total_pt")),
            strategy: value
                .get("strategy")
                .and_then(Value::as_str)
                .and_then(|s| PlanStrategy::from_str(s).ok())
                .unwrap_or_default(),
            mixed_ft_percent: value
                .get("mixed_ft_percent")
                .map(|v| lenient_u32(Some(v)))
                .unwrap_or(defaults.mixed_ft_percent),
            pt_shift_hours: value
                .get("pt_shift_hours")
                .map(|v| lenient_u32(Some(v)) as u8)
                .unwrap_or(defaults.pt_shift_hours),
            weekend_pt_shift_hours: lenient_opt_u32(value.get("weekend_pt_shift_hours"))
                .map(|v| v as u8),
            lunch_minutes: value
                .get("lunch_minutes")
                .map(|v| lenient_u32(Some(v)))
                .unwrap_or(defaults.lunch_minutes),
        }
    }

    /// 解析容量约束（总数上限缺省回退为并发上限）
    pub fn resolved_limits(&self) -> CapacityLimits {
        CapacityLimits::resolve(self.cap_ft, self.cap_pt, self.total_ft, self.total_pt)
    }

    /// mixed 策略目标全职占比（钳制到 0..1）
    pub fn mixed_ft_share(&self) -> f64 {
        (self.mixed_ft_percent.min(100)) as f64 / 100.0
    }

    /// 解析兼职档位（周末取覆盖档位；非法值回退默认档位）
    pub fn resolved_pt_hours(&self, is_weekend: bool) -> PtShiftHours {
        let configured = if is_weekend {
            self.weekend_pt_shift_hours.unwrap_or(self.pt_shift_hours)
        } else {
            self.pt_shift_hours
        };
        PtShiftHours::from_hours(configured).unwrap_or_default()
    }
}

// ==========================================
// 宽松数值解析辅助
// ==========================================

/// 数值按非负整数读取，非数字/负数/非法值 => 0
fn lenient_u32(value: Option<&Value>) -> u32 {
    match value.and_then(Value::as_f64) {
        Some(v) if v.is_finite() && v > 0.0 => v as u32,
        _ => 0,
    }
}

/// 缺失或 null => None（由调用方回退），其余按宽松规则取值
fn lenient_opt_u32(value: Option<&Value>) -> Option<u32> {
    match value {
        None => None,
        Some(Value::Null) => None,
        Some(v) => Some(lenient_u32(Some(v))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lenient_parse_negative_and_non_numeric_to_zero() {
        // 非法容量值降级为 0，不报错
        let value = json!({
            "cap_ft": -3,
            "cap_pt": "many",
            "strategy": "ft_first"
        });
        let config = PlanConfig::from_value(&value);

        assert_eq!(config.cap_ft, 0);
        assert_eq!(config.cap_pt, 0);
        assert_eq!(config.strategy, PlanStrategy::FtFirst);
    }

    #[test]
    fn test_totals_absent_default_to_caps() {
        let value = json!({ "cap_ft": 8, "cap_pt": 4 });
        let config = PlanConfig::from_value(&value);
        let limits = config.resolved_limits();

        assert_eq!(limits.max_ft_shifts, 8);
        assert_eq!(limits.max_pt_shifts, 4);
    }

    #[test]
    fn test_explicit_totals_kept() {
        let value = json!({ "cap_ft": 8, "cap_pt": 4, "total_ft": 12, "total_pt": 2 });
        let limits = PlanConfig::from_value(&value).resolved_limits();

        assert_eq!(limits.max_ft_shifts, 12);
        assert_eq!(limits.max_pt_shifts, 2);
    }

    #[test]
    fn test_unknown_strategy_falls_back_to_auto() {
        let value = json!({ "cap_ft": 1, "cap_pt": 1, "strategy": "optimal" });
        let config = PlanConfig::from_value(&value);
        assert_eq!(config.strategy, PlanStrategy::Auto);
    }

    #[test]
    fn test_mixed_percent_clamped() {
        let mut config = PlanConfig::default();
        config.mixed_ft_percent = 250;
        assert_eq!(config.mixed_ft_share(), 1.0);

        config.mixed_ft_percent = 30;
        assert!((config.mixed_ft_share() - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_weekend_pt_override() {
        let mut config = PlanConfig::default();
        config.pt_shift_hours = 4;
        config.weekend_pt_shift_hours = Some(6);

        assert_eq!(config.resolved_pt_hours(false), PtShiftHours::H4);
        assert_eq!(config.resolved_pt_hours(true), PtShiftHours::H6);
    }

    #[test]
    fn test_invalid_pt_hours_falls_back_to_default() {
        let mut config = PlanConfig::default();
        config.pt_shift_hours = 5;
        assert_eq!(config.resolved_pt_hours(false), PtShiftHours::default());
    }

    #[test]
    fn test_defaults() {
        let config = PlanConfig::default();
        assert_eq!(config.lunch_minutes, 30);
        assert_eq!(config.mixed_ft_percent, 50);
        assert_eq!(config.strategy, PlanStrategy::Auto);
        assert_eq!(config.pt_shift_hours, 6);
    }
}
