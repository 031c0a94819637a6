// ==========================================
// 客服坐席排班系统 - 班次落位引擎
// ==========================================
// 红线: 容量约束优先于覆盖收益
// ==========================================
// 职责: 贪心迭代落位，单次落一个班
// 输入: 整数化需求向量 + 容量约束 + 策略参数
// 输出: PlanResult（窗口、覆盖、缺口、冗余）
// ==========================================

use crate::domain::capacity::{CapacityConstraint, CapacityLimits};
use crate::domain::plan::{PlanResult, ShiftWindow};
use crate::domain::types::{PtShiftHours, ShiftClass, FT_SHIFT_HOURS, HOURS_PER_DAY};
use crate::engine::strategy::PlanStrategy;
use tracing::{debug, instrument};

// ==========================================
// PlannerParams - 一次计算的策略参数
// ==========================================
#[derive(Debug, Clone)]
pub struct PlannerParams {
    pub limits: CapacityLimits,       // 并发上限 + 班次总数上限
    pub strategy: PlanStrategy,       // 落位策略
    pub mixed_ft_share: f64,          // mixed 策略的目标全职占比 (0..1)
    pub pt_shift_hours: PtShiftHours, // 兼职档位
    pub is_weekend: bool,             // auto 策略依赖的周末标志
}

// ==========================================
// PlannerState - 单次计算的可变状态
// ==========================================
// 显式状态对象，仅在一次 plan 调用内存活，不跨调用共享
struct PlannerState {
    deficit: [u32; HOURS_PER_DAY], // 剩余缺口（初始 = 需求）
    cov_ft: [u32; HOURS_PER_DAY],  // 全职每小时覆盖
    cov_pt: [u32; HOURS_PER_DAY],  // 兼职每小时覆盖
    placed_ft: u32,                // 已落位全职班次数
    placed_pt: u32,                // 已落位兼职班次数
    windows: Vec<ShiftWindow>,     // 已落位窗口（同起止合并）
}

impl PlannerState {
    fn new(required: &[u32; HOURS_PER_DAY]) -> Self {
        Self {
            deficit: *required,
            cov_ft: [0; HOURS_PER_DAY],
            cov_pt: [0; HOURS_PER_DAY],
            placed_ft: 0,
            placed_pt: 0,
            windows: Vec::new(),
        }
    }

    fn class_coverage(&self, class: ShiftClass, hour: usize) -> u32 {
        match class {
            ShiftClass::FullTime => self.cov_ft[hour],
            ShiftClass::PartTime => self.cov_pt[hour],
        }
    }

    fn combined_coverage(&self, hour: usize) -> u32 {
        self.cov_ft[hour] + self.cov_pt[hour]
    }

    fn placed(&self, class: ShiftClass) -> u32 {
        match class {
            ShiftClass::FullTime => self.placed_ft,
            ShiftClass::PartTime => self.placed_pt,
        }
    }
}

// ==========================================
// ShiftPlanner - 班次落位引擎
// ==========================================
pub struct ShiftPlanner {
    // 无状态引擎，不需要注入依赖
}

impl ShiftPlanner {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 执行一次排班计算
    ///
    /// 确定性：相同输入必然产出相同 PlanResult（无随机、无时钟依赖）。
    /// 算法对全输入域总是终止并返回完整结果，零容量配置产出全缺口方案，
    /// 这是正常业务结果而非错误。
    #[instrument(skip(self, required, params), fields(
        strategy = %params.strategy,
        is_weekend = params.is_weekend,
        pt_hours = params.pt_shift_hours.as_hours()
    ))]
    pub fn plan(&self, required: &[u32; HOURS_PER_DAY], params: &PlannerParams) -> PlanResult {
        let mut state = PlannerState::new(required);

        match params.strategy {
            PlanStrategy::Auto => {
                // 周末兼职优先，工作日全职优先
                let (first, second) = if params.is_weekend {
                    (ShiftClass::PartTime, ShiftClass::FullTime)
                } else {
                    (ShiftClass::FullTime, ShiftClass::PartTime)
                };
                self.fill_alternating(&mut state, first, second, params);
            }
            PlanStrategy::FtFirst => {
                self.fill_alternating(&mut state, ShiftClass::FullTime, ShiftClass::PartTime, params)
            }
            PlanStrategy::PtFirst => {
                self.fill_alternating(&mut state, ShiftClass::PartTime, ShiftClass::FullTime, params)
            }
            PlanStrategy::Mixed => self.fill_mixed(&mut state, params),
        }

        let result = self.build_result(state, required);

        debug!(
            ft_windows = result.shifts_ft.len(),
            pt_windows = result.shifts_pt.len(),
            total_shortage = result.total_shortage(),
            max_concurrent = result.max_concurrent,
            "班次落位完成"
        );

        result
    }

    // ==========================================
    // 策略落位循环
    // ==========================================

    /// 固定顺序落位：每轮先试 first，失败才试 second；
    /// 同一轮两类都失败则结束。
    fn fill_alternating(
        &self,
        state: &mut PlannerState,
        first: ShiftClass,
        second: ShiftClass,
        params: &PlannerParams,
    ) {
        // 每次成功落位都使有界的已落位计数严格递增，循环必然终止
        loop {
            let placed =
                self.place_one(state, first, params) || self.place_one(state, second, params);
            if !placed {
                break;
            }
        }
    }

    /// 按目标全职占比落位：占比低于目标先补全职，否则先补兼职；
    /// 每轮两类都尝试，整轮无落位则结束。
    fn fill_mixed(&self, state: &mut PlannerState, params: &PlannerParams) {
        let target = params.mixed_ft_share.clamp(0.0, 1.0);

        loop {
            let total = state.placed_ft + state.placed_pt;
            // 尚未落位时按占比 1 处理（先补兼职方向）
            let share = if total == 0 {
                1.0
            } else {
                state.placed_ft as f64 / total as f64
            };

            let any = if share < target {
                let ft = self.place_one(state, ShiftClass::FullTime, params);
                let pt = self.place_one(state, ShiftClass::PartTime, params);
                ft || pt
            } else {
                let pt = self.place_one(state, ShiftClass::PartTime, params);
                let ft = self.place_one(state, ShiftClass::FullTime, params);
                pt || ft
            };

            if !any {
                break;
            }
        }
    }

    // ==========================================
    // 单班落位原语
    // ==========================================

    fn shift_len(&self, class: ShiftClass, params: &PlannerParams) -> usize {
        match class {
            ShiftClass::FullTime => FT_SHIFT_HOURS as usize,
            ShiftClass::PartTime => params.pt_shift_hours.as_hours() as usize,
        }
    }

    /// 落一个指定类别的班
    ///
    /// 升序扫描全部可行起始小时，取评分最高者；评分比较使用严格大于，
    /// 同分保留更小的起始小时。最高分为 0 时落位失败（无有效容量）。
    fn place_one(&self, state: &mut PlannerState, class: ShiftClass, params: &PlannerParams) -> bool {
        let len = self.shift_len(class, params);
        let last_start = HOURS_PER_DAY - len;

        let mut best_start = 0usize;
        let mut best_score = 0u32;

        for start in 0..=last_start {
            if !self.is_feasible(state, class, start, len, &params.limits) {
                continue;
            }
            let score = self.window_score(state, class, start, len, &params.limits);
            if score > best_score {
                best_score = score;
                best_start = start;
            }
        }

        if best_score == 0 {
            return false;
        }

        self.commit(state, class, best_start, len);
        true
    }

    /// 起始小时可行性：类别班次总数未达上限，且窗口内每小时
    /// 类别覆盖低于类别并发上限、合计覆盖低于合计并发上限
    fn is_feasible(
        &self,
        state: &PlannerState,
        class: ShiftClass,
        start: usize,
        len: usize,
        limits: &CapacityLimits,
    ) -> bool {
        if state.placed(class) >= limits.class_total(class) {
            return false;
        }

        let class_cap = limits.class_cap(class);
        let combined_cap = limits.combined_cap();

        for hour in start..start + len {
            if state.class_coverage(class, hour) >= class_cap {
                return false;
            }
            if state.combined_coverage(hour) >= combined_cap {
                return false;
            }
        }

        true
    }

    /// 窗口评分：逐小时累加 min(缺口, 剩余容量)，
    /// 剩余容量取合计余量与类别余量的较小者
    ///
    /// 仅对可行窗口调用（窗口内每小时余量至少为 1）。
    fn window_score(
        &self,
        state: &PlannerState,
        class: ShiftClass,
        start: usize,
        len: usize,
        limits: &CapacityLimits,
    ) -> u32 {
        let class_cap = limits.class_cap(class);
        let combined_cap = limits.combined_cap();

        let mut score = 0u32;
        for hour in start..start + len {
            let combined_room = combined_cap - state.combined_coverage(hour);
            let class_room = class_cap - state.class_coverage(class, hour);
            let room = combined_room.min(class_room);
            score += state.deficit[hour].min(room);
        }
        score
    }

    /// 落位生效：窗口内逐小时覆盖 +1、缺口 -1（下界 0），
    /// 类别已落位计数 +1，同 (类别,起,止) 窗口合并人数
    fn commit(&self, state: &mut PlannerState, class: ShiftClass, start: usize, len: usize) {
        for hour in start..start + len {
            match class {
                ShiftClass::FullTime => state.cov_ft[hour] += 1,
                ShiftClass::PartTime => state.cov_pt[hour] += 1,
            }
            state.deficit[hour] = state.deficit[hour].saturating_sub(1);
        }

        match class {
            ShiftClass::FullTime => state.placed_ft += 1,
            ShiftClass::PartTime => state.placed_pt += 1,
        }

        let start_h = start as u8;
        let end_h = (start + len) as u8;
        if let Some(window) = state
            .windows
            .iter_mut()
            .find(|w| w.class == class && w.start == start_h && w.end == end_h)
        {
            window.count += 1;
        } else {
            state.windows.push(ShiftWindow {
                class,
                start: start_h,
                end: end_h,
                count: 1,
            });
        }
    }

    // ==========================================
    // 结果派生
    // ==========================================

    /// 从最终状态派生覆盖/缺口/冗余向量与排序后的窗口列表
    fn build_result(&self, state: PlannerState, required: &[u32; HOURS_PER_DAY]) -> PlanResult {
        let mut shifts_ft: Vec<ShiftWindow> = state
            .windows
            .iter()
            .copied()
            .filter(|w| w.class == ShiftClass::FullTime)
            .collect();
        let mut shifts_pt: Vec<ShiftWindow> = state
            .windows
            .iter()
            .copied()
            .filter(|w| w.class == ShiftClass::PartTime)
            .collect();
        shifts_ft.sort_by_key(|w| (w.start, w.end));
        shifts_pt.sort_by_key(|w| (w.start, w.end));

        let mut coverage = [0u32; HOURS_PER_DAY];
        let mut shortage = [0u32; HOURS_PER_DAY];
        let mut excess = [0u32; HOURS_PER_DAY];
        let mut max_concurrent = 0u32;

        for hour in 0..HOURS_PER_DAY {
            let cov = state.cov_ft[hour] + state.cov_pt[hour];
            coverage[hour] = cov;
            shortage[hour] = required[hour].saturating_sub(cov);
            excess[hour] = cov.saturating_sub(required[hour]);
            max_concurrent = max_concurrent.max(cov);
        }

        PlanResult {
            shifts_ft,
            shifts_pt,
            coverage,
            shortage,
            excess,
            max_concurrent,
        }
    }
}

impl Default for ShiftPlanner {
    fn default() -> Self {
        Self::new()
    }
}
