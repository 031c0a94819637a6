// ==========================================
// 客服坐席排班系统 - 命令行主入口
// ==========================================
// 用法: agent-shift-aps <预测文件> [配置文件] [输出目录]
// 系统定位: 决策支持系统
// ==========================================

use agent_shift_aps::config::ConfigManager;
use agent_shift_aps::i18n::{t, t_with_args};
use agent_shift_aps::{logging, PlanApi};
use anyhow::{bail, Result};
use std::path::PathBuf;

fn main() -> Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 决策支持系统", agent_shift_aps::APP_NAME);
    tracing::info!("系统版本: {}", agent_shift_aps::VERSION);
    tracing::info!("==================================================");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let forecast_path = match args.first() {
        Some(path) => PathBuf::from(path),
        None => {
            eprintln!("用法: agent-shift-aps <预测文件.csv|.xlsx> [配置文件.json] [输出目录]");
            bail!("缺少预测文件参数");
        }
    };

    // 配置: 指定路径 > 默认路径；文件缺失回退默认配置
    let config_manager = match args.get(1) {
        Some(path) => ConfigManager::new(path),
        None => ConfigManager::with_default_path(),
    };
    tracing::info!("使用配置文件: {}", config_manager.path().display());
    let config = config_manager.load_or_default();

    let out_dir = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("plan_output"));

    // 执行排班流程
    let api = PlanApi::new();
    let artifacts = api.generate_plan_from_file(&forecast_path, &config)?;

    // 结果摘要
    match &artifacts.hire {
        Some(hire) => tracing::warn!(
            "{}",
            t_with_args(
                "plan.shortage_detected",
                &[
                    ("total", &hire.total_short.to_string()),
                    ("peak", &hire.peak_short.to_string()),
                ],
            )
        ),
        None => tracing::info!("{}", t("plan.fully_covered")),
    }
    tracing::info!(
        ft_headcount = artifacts.result.ft_headcount(),
        pt_headcount = artifacts.result.pt_headcount(),
        max_concurrent = artifacts.result.max_concurrent,
        "排班摘要"
    );

    // 导出产物
    let written = api.export_artifacts(&artifacts, &out_dir)?;
    tracing::info!(
        "{}",
        t_with_args("plan.exported", &[("dir", &out_dir.display().to_string())])
    );
    for path in &written {
        tracing::info!("  - {}", path.display());
    }

    Ok(())
}
