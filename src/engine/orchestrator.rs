// ==========================================
// 客服坐席排班系统 - 引擎编排器
// ==========================================
// 用途: 协调需求整数化、班次落位、增员建议、花名册四个阶段
// 数据流: Normalizer -> Planner -> {HireAdvisor, RosterBuilder}
// ==========================================

use crate::config::{config_snapshot, PlanConfig};
use crate::domain::plan::PlanArtifacts;
use crate::domain::requirement::ForecastRow;
use crate::engine::hire::HireAdvisor;
use crate::engine::normalizer::RequirementNormalizer;
use crate::engine::roster::RosterBuilder;
use crate::engine::shift_planner::{PlannerParams, ShiftPlanner};
use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

// ==========================================
// PlanOrchestrator - 引擎编排器
// ==========================================
pub struct PlanOrchestrator {
    normalizer: RequirementNormalizer,
    planner: ShiftPlanner,
    hire: HireAdvisor,
    roster: RosterBuilder,
}

impl PlanOrchestrator {
    pub fn new() -> Self {
        Self {
            normalizer: RequirementNormalizer::new(),
            planner: ShiftPlanner::new(),
            hire: HireAdvisor::new(),
            roster: RosterBuilder::new(),
        }
    }

    /// 执行完整排班流程（单日）
    ///
    /// 中间状态仅在本次调用内存活，返回产物封装后全部丢弃。
    ///
    /// # 参数
    /// - `rows`: 外部预测记录（每小时一条）
    /// - `config`: 用户配置面
    pub fn execute(&self, rows: &[ForecastRow], config: &PlanConfig) -> PlanArtifacts {
        info!(
            rows_count = rows.len(),
            strategy = %config.strategy,
            "开始执行排班流程"
        );

        // ==========================================
        // 步骤1: Requirement Normalizer - 需求整数化
        // ==========================================
        debug!("步骤1: 执行需求整数化");

        let requirement = self.normalizer.normalize(rows);
        let is_weekend = requirement.is_weekend();

        info!(
            total_required = requirement.total(),
            peak_required = requirement.peak(),
            is_weekend,
            "需求整数化完成"
        );

        // ==========================================
        // 步骤2: 解析容量约束与兼职档位
        // ==========================================
        debug!("步骤2: 解析容量约束与兼职档位");

        let limits = config.resolved_limits();
        let pt_shift_hours = config.resolved_pt_hours(is_weekend);
        let params = PlannerParams {
            limits,
            strategy: config.strategy,
            mixed_ft_share: config.mixed_ft_share(),
            pt_shift_hours,
            is_weekend,
        };

        info!(
            cap_ft = limits.cap_ft,
            cap_pt = limits.cap_pt,
            max_ft_shifts = limits.max_ft_shifts,
            max_pt_shifts = limits.max_pt_shifts,
            pt_hours = pt_shift_hours.as_hours(),
            "容量约束解析完成"
        );

        // ==========================================
        // 步骤3: Shift Planner - 班次落位
        // ==========================================
        debug!("步骤3: 执行班次落位");

        let result = self.planner.plan(requirement.values(), &params);

        info!(
            ft_headcount = result.ft_headcount(),
            pt_headcount = result.pt_headcount(),
            total_shortage = result.total_shortage(),
            max_concurrent = result.max_concurrent,
            "班次落位完成"
        );

        // ==========================================
        // 步骤4: Hire Advisor - 增员建议
        // ==========================================
        debug!("步骤4: 计算增员建议");

        let hire = self.hire.recommend(&result.shortage, pt_shift_hours);

        info!(has_shortage = hire.is_some(), "增员建议计算完成");

        // ==========================================
        // 步骤5: Roster Builder - 花名册构建
        // ==========================================
        debug!("步骤5: 构建花名册");

        let roster = self
            .roster
            .build(&result.shifts_ft, &result.shifts_pt, config.lunch_minutes);

        info!(roster_count = roster.len(), "花名册构建完成");

        // ==========================================
        // 返回产物封装
        // ==========================================

        PlanArtifacts {
            version_id: Uuid::new_v4().to_string(),
            generated_at: Utc::now(),
            config_snapshot_json: config_snapshot(config),
            requirement: *requirement.values(),
            is_weekend,
            pt_shift_hours: pt_shift_hours.as_hours(),
            result,
            hire,
            roster,
        }
    }
}

impl Default for PlanOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}
