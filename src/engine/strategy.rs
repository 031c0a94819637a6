// ==========================================
// 客服坐席排班系统 - 排班策略定义
// ==========================================
// 用途：
// - 同一套"落一个班"原语按不同顺序调度，避免每种策略重复可行性/评分逻辑；
// - 相同策略参数重复计算结果可复现。

use serde::{Deserialize, Serialize};

/// 排班落位策略（封闭枚举，分派到不同的落位顺序函数）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStrategy {
    Auto,
    FtFirst,
    PtFirst,
    Mixed,
}

impl PlanStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStrategy::Auto => "auto",
            PlanStrategy::FtFirst => "ft_first",
            PlanStrategy::PtFirst => "pt_first",
            PlanStrategy::Mixed => "mixed",
        }
    }

    pub fn title_cn(&self) -> &'static str {
        match self {
            PlanStrategy::Auto => "自动（工作日全职优先，周末兼职优先）",
            PlanStrategy::FtFirst => "全职优先",
            PlanStrategy::PtFirst => "兼职优先",
            PlanStrategy::Mixed => "按比例混合",
        }
    }
}

impl Default for PlanStrategy {
    fn default() -> Self {
        PlanStrategy::Auto
    }
}

impl std::fmt::Display for PlanStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PlanStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(PlanStrategy::Auto),
            "ft_first" | "ft-first" => Ok(PlanStrategy::FtFirst),
            "pt_first" | "pt-first" => Ok(PlanStrategy::PtFirst),
            "mixed" => Ok(PlanStrategy::Mixed),
            other => Err(format!("未知策略类型: {}", other)),
        }
    }
}
