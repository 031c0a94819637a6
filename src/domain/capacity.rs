// ==========================================
// 客服坐席排班系统 - 容量约束领域模型
// ==========================================
// 红线: 总班次数上限缺省时等于并发上限
//       （总人数不得隐含超过并发容量的坐席数）
// ==========================================

use crate::domain::types::ShiftClass;
use serde::{Deserialize, Serialize};

// ==========================================
// CapacityLimits - 排班容量约束
// ==========================================
// 两个维度同时生效: 每小时并发上限 + 全天班次总数上限
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityLimits {
    // ===== 每小时并发上限 =====
    pub cap_ft: u32, // 全职同时在班上限
    pub cap_pt: u32, // 兼职同时在班上限

    // ===== 全天班次总数上限 =====
    pub max_ft_shifts: u32, // 全职班次总数上限
    pub max_pt_shifts: u32, // 兼职班次总数上限
}

impl CapacityLimits {
    /// 从用户配置解析约束
    ///
    /// # 参数
    /// - `cap_ft` / `cap_pt`: 并发上限（必填）
    /// - `total_ft` / `total_pt`: 班次总数上限（可缺省）
    ///
    /// 总数上限缺省时回退为对应并发上限。
    pub fn resolve(cap_ft: u32, cap_pt: u32, total_ft: Option<u32>, total_pt: Option<u32>) -> Self {
        Self {
            cap_ft,
            cap_pt,
            max_ft_shifts: total_ft.unwrap_or(cap_ft),
            max_pt_shifts: total_pt.unwrap_or(cap_pt),
        }
    }
}

// ==========================================
// Trait: CapacityConstraint
// ==========================================
// 用途: Shift Planner 约束检查接口
pub trait CapacityConstraint {
    /// 指定类别的每小时并发上限
    fn class_cap(&self, class: ShiftClass) -> u32;

    /// 指定类别的全天班次总数上限
    fn class_total(&self, class: ShiftClass) -> u32;

    /// 两类合计的每小时并发上限
    fn combined_cap(&self) -> u32;
}

impl CapacityConstraint for CapacityLimits {
    fn class_cap(&self, class: ShiftClass) -> u32 {
        match class {
            ShiftClass::FullTime => self.cap_ft,
            ShiftClass::PartTime => self.cap_pt,
        }
    }

    fn class_total(&self, class: ShiftClass) -> u32 {
        match class {
            ShiftClass::FullTime => self.max_ft_shifts,
            ShiftClass::PartTime => self.max_pt_shifts,
        }
    }

    fn combined_cap(&self) -> u32 {
        self.cap_ft + self.cap_pt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults_totals_to_caps() {
        // 总数上限缺省时回退为并发上限
        let limits = CapacityLimits::resolve(10, 4, None, None);
        assert_eq!(limits.max_ft_shifts, 10);
        assert_eq!(limits.max_pt_shifts, 4);
    }

    #[test]
    fn test_resolve_explicit_totals() {
        let limits = CapacityLimits::resolve(10, 4, Some(6), Some(2));
        assert_eq!(limits.max_ft_shifts, 6);
        assert_eq!(limits.max_pt_shifts, 2);
        assert_eq!(limits.cap_ft, 10);
        assert_eq!(limits.cap_pt, 4);
    }

    #[test]
    fn test_capacity_constraint_queries() {
        let limits = CapacityLimits::resolve(10, 4, Some(6), None);
        assert_eq!(limits.class_cap(ShiftClass::FullTime), 10);
        assert_eq!(limits.class_cap(ShiftClass::PartTime), 4);
        assert_eq!(limits.class_total(ShiftClass::FullTime), 6);
        assert_eq!(limits.class_total(ShiftClass::PartTime), 4);
        assert_eq!(limits.combined_cap(), 14);
    }
}
