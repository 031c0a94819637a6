// ==========================================
// 客服坐席排班系统 - 花名册与用餐窗口引擎
// ==========================================
// 职责: 把合并窗口按人数展开为单人记录并安排班中用餐
// 红线: 一人一班，花名册不给同一编号分配第二个窗口
// ==========================================

use crate::domain::plan::{RosterEntry, ShiftWindow};
use crate::domain::types::ShiftClass;

/// 用餐吸附网格（分钟）
const LUNCH_GRID_MIN: i64 = 30;

// ==========================================
// RosterBuilder - 花名册构建引擎
// ==========================================
pub struct RosterBuilder;

impl RosterBuilder {
    pub fn new() -> Self {
        Self
    }

    /// 构建花名册
    ///
    /// 每个窗口展开 count 条记录，类别内编号从 1 顺序递增。
    /// 用餐窗口: 以班次中点为中心，开始时刻按半小时网格四舍五入
    /// （逢半进位），整体钳制在班次时间范围内。
    pub fn build(
        &self,
        shifts_ft: &[ShiftWindow],
        shifts_pt: &[ShiftWindow],
        lunch_minutes: u32,
    ) -> Vec<RosterEntry> {
        let mut roster = Vec::new();
        self.expand_class(&mut roster, shifts_ft, ShiftClass::FullTime, lunch_minutes);
        self.expand_class(&mut roster, shifts_pt, ShiftClass::PartTime, lunch_minutes);
        roster
    }

    fn expand_class(
        &self,
        roster: &mut Vec<RosterEntry>,
        windows: &[ShiftWindow],
        class: ShiftClass,
        lunch_minutes: u32,
    ) {
        let mut next_id: u32 = 1;
        for window in windows {
            let (lunch_start_min, lunch_end_min) = self.lunch_window(window, lunch_minutes);
            for _ in 0..window.count {
                roster.push(RosterEntry {
                    employee_id: next_id,
                    class,
                    start: window.start,
                    end: window.end,
                    lunch_start_min,
                    lunch_end_min,
                    hours: window.duration_hours(),
                });
                next_id += 1;
            }
        }
    }

    /// 计算窗口的用餐时段（自0点起的分钟数）
    fn lunch_window(&self, window: &ShiftWindow, lunch_minutes: u32) -> (u16, u16) {
        let shift_start_min = window.start as i64 * 60;
        let shift_end_min = window.end as i64 * 60;
        let duration_min = shift_end_min - shift_start_min;

        let midpoint = shift_start_min + duration_min / 2;
        let raw_start = midpoint - lunch_minutes as i64 / 2;

        // 半小时网格四舍五入（逢半进位）
        let snapped = ((raw_start + LUNCH_GRID_MIN / 2).div_euclid(LUNCH_GRID_MIN)) * LUNCH_GRID_MIN;

        let lunch_start = snapped.clamp(shift_start_min, shift_end_min);
        let lunch_end = (lunch_start + lunch_minutes as i64).min(shift_end_min);

        (lunch_start as u16, lunch_end as u16)
    }
}

impl Default for RosterBuilder {
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

    fn window(class: ShiftClass, start: u8, end: u8, count: u32) -> ShiftWindow {
        ShiftWindow { class, start, end, count }
    }

    #[test]
    fn test_expand_counts_and_sequential_ids() {
        // 测试：窗口按人数展开，类别内编号连续
        let builder = RosterBuilder::new();
        let ft = vec![
            window(ShiftClass::FullTime, 8, 16, 2),
            window(ShiftClass::FullTime, 9, 17, 1),
        ];
        let pt = vec![window(ShiftClass::PartTime, 12, 16, 2)];

        let roster = builder.build(&ft, &pt, 30);

        assert_eq!(roster.len(), 5);
        let ft_ids: Vec<u32> = roster
            .iter()
            .filter(|e| e.class == ShiftClass::FullTime)
            .map(|e| e.employee_id)
            .collect();
        let pt_ids: Vec<u32> = roster
            .iter()
            .filter(|e| e.class == ShiftClass::PartTime)
            .map(|e| e.employee_id)
            .collect();
        assert_eq!(ft_ids, vec![1, 2, 3]);
        assert_eq!(pt_ids, vec![1, 2]);
    }

    #[test]
    fn test_lunch_snap_half_up() {
        // 9点上班8小时班: 中点 780 分，原始开始 765 => 逢半进位吸附到 780
        let builder = RosterBuilder::new();
        let roster = builder.build(&[window(ShiftClass::FullTime, 9, 17, 1)], &[], 30);

        assert_eq!(roster[0].lunch_start_min, 780); // 13:00
        assert_eq!(roster[0].lunch_end_min, 810); // 13:30
    }

    #[test]
    fn test_lunch_snap_down() {
        // 8点上班4小时班, 60分钟用餐: 中点 600, 原始开始 570 已在半小时网格上
        let builder = RosterBuilder::new();
        let roster = builder.build(&[], &[window(ShiftClass::PartTime, 8, 12, 1)], 60);

        assert_eq!(roster[0].lunch_start_min, 570); // 09:30
        assert_eq!(roster[0].lunch_end_min, 630); // 10:30
    }

    #[test]
    fn test_lunch_clamped_within_shift() {
        // 用餐时长超过班次时长时钳制在班次范围内
        let builder = RosterBuilder::new();
        let roster = builder.build(&[], &[window(ShiftClass::PartTime, 20, 24, 1)], 600);

        let entry = &roster[0];
        assert!(entry.lunch_start_min >= 20 * 60);
        assert!(entry.lunch_end_min <= 24 * 60);
        assert!(entry.lunch_start_min <= entry.lunch_end_min);
    }

    #[test]
    fn test_zero_lunch_minutes() {
        // 0分钟用餐: 空窗口，仍在班次范围内
        let builder = RosterBuilder::new();
        let roster = builder.build(&[window(ShiftClass::FullTime, 0, 8, 1)], &[], 0);

        assert_eq!(roster[0].lunch_start_min, 240); // 中点 04:00
        assert_eq!(roster[0].lunch_end_min, 240);
        assert_eq!(roster[0].hours, 8);
    }
}
