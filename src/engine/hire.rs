// ==========================================
// 客服坐席排班系统 - 增员建议引擎
// ==========================================
// 职责: 从残余缺口向量推导三种增员场景的下界估计
// 输入: shortage[24] + 当前兼职档位
// 输出: HireRecommendation（无缺口时为 None）
// ==========================================

use crate::domain::plan::{HireRecommendation, MixedHirePlan};
use crate::domain::types::{PtShiftHours, FT_SHIFT_HOURS, HOURS_PER_DAY};

// ==========================================
// HireAdvisor - 增员建议引擎
// ==========================================
pub struct HireAdvisor;

impl HireAdvisor {
    pub fn new() -> Self {
        Self
    }

    /// 计算增员建议
    ///
    /// 所有数值均为启发式下界：总工时下界与单小时峰值下界的组合，
    /// 不回灌排班引擎验证（并发上限与总工时约束正交，建议人数在
    /// 边界配置下仍可能无法消除缺口）。这是有意保留的已记录近似。
    ///
    /// # 返回
    /// - Some(HireRecommendation): 存在缺口
    /// - None: 无缺口，无需增员
    pub fn recommend(
        &self,
        shortage: &[u32; HOURS_PER_DAY],
        pt_shift_hours: PtShiftHours,
    ) -> Option<HireRecommendation> {
        let total_short: u32 = shortage.iter().sum();
        if total_short == 0 {
            return None;
        }
        let peak_short = shortage.iter().copied().max().unwrap_or(0);

        let ft_hours = FT_SHIFT_HOURS as u32;
        let pt_hours = pt_shift_hours.as_hours() as u32;

        // 全职方案: 总工时下界，且不低于最差小时的并发缺口
        let min_ft8 = total_short.div_ceil(ft_hours).max(peak_short);

        // 兼职方案: 仅总工时下界（不加峰值下限）
        let min_pt_current = total_short.div_ceil(pt_hours);
        let min_pt4 = total_short.div_ceil(4);
        let min_pt6 = total_short.div_ceil(6);

        // 混合方案示例: 全职兜住峰值，剩余工时用兼职补齐
        let mixed_ft = peak_short.max(total_short / ft_hours);
        let remaining = total_short.saturating_sub(mixed_ft * ft_hours);
        let mixed_pt = remaining.div_ceil(pt_hours);

        Some(HireRecommendation {
            total_short,
            peak_short,
            min_ft8,
            min_pt_current,
            min_pt4,
            min_pt6,
            mixed: MixedHirePlan {
                ft: mixed_ft,
                pt: mixed_pt,
                pt_length_hours: pt_shift_hours.as_hours(),
            },
        })
    }
}

impl Default for HireAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 测试模块
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    fn shortage_at(pairs: &[(usize, u32)]) -> [u32; HOURS_PER_DAY] {
        let mut shortage = [0u32; HOURS_PER_DAY];
        for &(hour, value) in pairs {
            shortage[hour] = value;
        }
        shortage
    }

    #[test]
    fn test_no_shortage_no_recommendation() {
        let advisor = HireAdvisor::new();
        assert!(advisor
            .recommend(&[0; HOURS_PER_DAY], PtShiftHours::H4)
            .is_none());
    }

    #[test]
    fn test_peak_floor_dominates_ft_bound() {
        // 单小时缺3: 总工时下界 ceil(3/8)=1，峰值下界 3 => 取 3
        let advisor = HireAdvisor::new();
        let rec = advisor
            .recommend(&shortage_at(&[(7, 3)]), PtShiftHours::H4)
            .unwrap();

        assert_eq!(rec.total_short, 3);
        assert_eq!(rec.peak_short, 3);
        assert_eq!(rec.min_ft8, 3);
        // 兼职方案不加峰值下限
        assert_eq!(rec.min_pt_current, 1);
        assert_eq!(rec.min_pt4, 1);
        assert_eq!(rec.min_pt6, 1);
    }

    #[test]
    fn test_total_hours_bound_dominates_ft_bound() {
        // 缺口摊薄: 总量20，峰值1 => ceil(20/8)=3 占优
        let advisor = HireAdvisor::new();
        let mut shortage = [0u32; HOURS_PER_DAY];
        for hour in 0..20 {
            shortage[hour] = 1;
        }
        let rec = advisor.recommend(&shortage, PtShiftHours::H6).unwrap();

        assert_eq!(rec.total_short, 20);
        assert_eq!(rec.peak_short, 1);
        assert_eq!(rec.min_ft8, 3);
        assert_eq!(rec.min_pt_current, 4); // ceil(20/6)
        assert_eq!(rec.min_pt4, 5);
        assert_eq!(rec.min_pt6, 4);
    }

    #[test]
    fn test_mixed_plan_peak_then_pt_fill() {
        // 峰值2、总量18: ft = max(2, 18/8=2) = 2，剩余 18-16=2 => pt = ceil(2/4)=1
        let advisor = HireAdvisor::new();
        let rec = advisor
            .recommend(
                &shortage_at(&[(9, 2), (10, 2), (11, 2), (12, 2), (13, 2), (14, 2), (15, 2), (16, 2), (17, 2)]),
                PtShiftHours::H4,
            )
            .unwrap();

        assert_eq!(rec.total_short, 18);
        assert_eq!(rec.peak_short, 2);
        assert_eq!(rec.mixed.ft, 2);
        assert_eq!(rec.mixed.pt, 1);
        assert_eq!(rec.mixed.pt_length_hours, 4);
    }

    #[test]
    fn test_mixed_plan_no_pt_needed() {
        // ft*8 已吞掉全部缺口 => pt = 0
        let advisor = HireAdvisor::new();
        let rec = advisor
            .recommend(&shortage_at(&[(8, 3)]), PtShiftHours::H6)
            .unwrap();

        assert_eq!(rec.mixed.ft, 3);
        assert_eq!(rec.mixed.pt, 0);
    }
}
