// ==========================================
// 客服坐席排班系统 - 排班方案领域模型
// ==========================================
// 红线: 方案对象只是一次计算的快照，计算结束后不可变
// ==========================================

use crate::domain::types::{ShiftClass, HOURS_PER_DAY};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// ShiftWindow - 班次窗口
// ==========================================
// 同一 (类别, 起, 止) 的多次落位合并为一个窗口，人数累加
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftWindow {
    pub class: ShiftClass, // 班次类别
    pub start: u8,         // 起始小时（含）
    pub end: u8,           // 结束小时（不含），end = start + 时长
    pub count: u32,        // 该窗口的坐席人数
}

impl ShiftWindow {
    /// 窗口时长（小时）
    pub fn duration_hours(&self) -> u8 {
        self.end - self.start
    }

    /// 窗口是否覆盖指定小时
    pub fn covers(&self, hour: u8) -> bool {
        self.start <= hour && hour < self.end
    }
}

// ==========================================
// PlanResult - 排班计算结果
// ==========================================
// 不变式: coverage[h] = 覆盖 h 的所有窗口 count 之和
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanResult {
    pub shifts_ft: Vec<ShiftWindow>, // 全职窗口（按起止排序）
    pub shifts_pt: Vec<ShiftWindow>, // 兼职窗口（按起止排序）

    pub coverage: [u32; HOURS_PER_DAY], // 每小时实际在班坐席数
    pub shortage: [u32; HOURS_PER_DAY], // 每小时缺口 = max(0, 需求-覆盖)
    pub excess: [u32; HOURS_PER_DAY],   // 每小时冗余 = max(0, 覆盖-需求)

    pub max_concurrent: u32, // 全天最大并发在班数
}

impl PlanResult {
    /// 全天缺口总量（人·小时）
    pub fn total_shortage(&self) -> u32 {
        self.shortage.iter().sum()
    }

    /// 全天冗余总量（人·小时）
    pub fn total_excess(&self) -> u32 {
        self.excess.iter().sum()
    }

    /// 全职班次总人数
    pub fn ft_headcount(&self) -> u32 {
        self.shifts_ft.iter().map(|w| w.count).sum()
    }

    /// 兼职班次总人数
    pub fn pt_headcount(&self) -> u32 {
        self.shifts_pt.iter().map(|w| w.count).sum()
    }
}

// ==========================================
// HireRecommendation - 增员建议
// ==========================================
// 仅为下界启发式估计，未回灌排班引擎验证可行性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HireRecommendation {
    pub total_short: u32, // 全天缺口总量（人·小时）
    pub peak_short: u32,  // 单小时最大并发缺口

    // ===== 三种纯类别方案的下界 =====
    pub min_ft8: u32,        // 全部用8小时全职的最少人数
    pub min_pt_current: u32, // 全部用当前档位兼职的最少人数
    pub min_pt4: u32,        // 全部用4小时兼职的最少人数
    pub min_pt6: u32,        // 全部用6小时兼职的最少人数

    // ===== 混合方案示例 =====
    pub mixed: MixedHirePlan,
}

/// 全职+兼职混合增员示例
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixedHirePlan {
    pub ft: u32,              // 建议增加的全职人数
    pub pt: u32,              // 建议增加的兼职人数
    pub pt_length_hours: u8,  // 兼职按此档位计算
}

// ==========================================
// RosterEntry - 花名册条目
// ==========================================
// 每个窗口按 count 展开为单人记录，一人一班
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub employee_id: u32,    // 类别内顺序编号（从1开始）
    pub class: ShiftClass,   // 班次类别
    pub start: u8,           // 上班小时
    pub end: u8,             // 下班小时
    pub lunch_start_min: u16, // 用餐开始（自0点起的分钟数）
    pub lunch_end_min: u16,   // 用餐结束（自0点起的分钟数）
    pub hours: u8,           // 班次时长（小时）
}

// ==========================================
// PlanArtifacts - 排班产物封装
// ==========================================
// 一次计算的全部下游产物；version_id/generated_at 为元数据，
// 不参与结果确定性对比
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanArtifacts {
    pub version_id: String,             // 产物版本ID (uuid)
    pub generated_at: DateTime<Utc>,    // 生成时间 (UTC)
    pub config_snapshot_json: String,   // 解析后配置快照 (JSON)

    pub requirement: [u32; HOURS_PER_DAY], // 整数化后的需求曲线
    pub is_weekend: bool,                  // 排班日是否周末
    pub pt_shift_hours: u8,                // 实际采用的兼职档位

    pub result: PlanResult,                // 排班计算结果
    pub hire: Option<HireRecommendation>,  // 增员建议（无缺口时为 None）
    pub roster: Vec<RosterEntry>,          // 花名册
}
