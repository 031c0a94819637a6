// ==========================================
// 客服坐席排班系统 - 产物 CSV 导出
// ==========================================
// 红线: 列顺序与数字字面格式固定（下游按列位消费）
//       整点格式 H:00，用餐时刻格式补零 HH:MM
// ==========================================

use crate::domain::plan::{HireRecommendation, PlanArtifacts, PlanResult, RosterEntry};
use crate::domain::types::HOURS_PER_DAY;
use crate::export::{ExportError, ExportResult};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// 整点时刻字面格式（不补零）
pub fn format_hour(hour: u8) -> String {
    format!("{}:00", hour)
}

/// 分钟时刻字面格式（补零）
pub fn format_hhmm(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

// ==========================================
// CsvExporter - 产物 CSV 导出器
// ==========================================
pub struct CsvExporter;

impl CsvExporter {
    pub fn new() -> Self {
        Self
    }

    /// 覆盖表：每小时一行
    pub fn write_coverage<W: Write>(
        &self,
        writer: W,
        requirement: &[u32; HOURS_PER_DAY],
        result: &PlanResult,
    ) -> ExportResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(["hour", "required", "coverage", "short", "excess"])?;

        for hour in 0..HOURS_PER_DAY {
            wtr.write_record([
                format_hour(hour as u8),
                requirement[hour].to_string(),
                result.coverage[hour].to_string(),
                result.shortage[hour].to_string(),
                result.excess[hour].to_string(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    /// 班次计划：全职窗口在前，兼职窗口在后
    pub fn write_shift_plan<W: Write>(&self, writer: W, result: &PlanResult) -> ExportResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(["type", "start", "end", "count"])?;

        for window in result.shifts_ft.iter().chain(result.shifts_pt.iter()) {
            wtr.write_record([
                window.class.as_str().to_string(),
                format_hour(window.start),
                format_hour(window.end),
                window.count.to_string(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    /// 增员建议：单行，三种场景值 + 混合方案
    pub fn write_hire<W: Write>(&self, writer: W, hire: &HireRecommendation) -> ExportResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record([
            "total_short",
            "peak_short",
            "min_ft8",
            "min_pt_current",
            "min_pt4",
            "min_pt6",
            "mixed_ft",
            "mixed_pt",
            "mixed_pt_length_hours",
        ])?;
        wtr.write_record([
            hire.total_short.to_string(),
            hire.peak_short.to_string(),
            hire.min_ft8.to_string(),
            hire.min_pt_current.to_string(),
            hire.min_pt4.to_string(),
            hire.min_pt6.to_string(),
            hire.mixed.ft.to_string(),
            hire.mixed.pt.to_string(),
            hire.mixed.pt_length_hours.to_string(),
        ])?;

        wtr.flush()?;
        Ok(())
    }

    /// 花名册：每人一行，用餐时刻补零 HH:MM
    pub fn write_roster<W: Write>(&self, writer: W, roster: &[RosterEntry]) -> ExportResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record([
            "employee_id",
            "type",
            "start",
            "end",
            "lunch_start",
            "lunch_end",
            "hours",
        ])?;

        for entry in roster {
            wtr.write_record([
                entry.employee_id.to_string(),
                entry.class.as_str().to_string(),
                format_hour(entry.start),
                format_hour(entry.end),
                format_hhmm(entry.lunch_start_min),
                format_hhmm(entry.lunch_end_min),
                entry.hours.to_string(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    /// 全套产物写入目录
    ///
    /// 无缺口时不生成增员建议文件。
    ///
    /// # 返回
    /// 实际写入的文件路径列表
    pub fn export_all(&self, artifacts: &PlanArtifacts, dir: &Path) -> ExportResult<Vec<PathBuf>> {
        std::fs::create_dir_all(dir)
            .map_err(|e| ExportError::FileWriteError(format!("{}: {}", dir.display(), e)))?;

        let mut written = Vec::new();

        let coverage_path = dir.join("coverage.csv");
        self.write_coverage(File::create(&coverage_path)?, &artifacts.requirement, &artifacts.result)?;
        written.push(coverage_path);

        let plan_path = dir.join("shift_plan.csv");
        self.write_shift_plan(File::create(&plan_path)?, &artifacts.result)?;
        written.push(plan_path);

        if let Some(hire) = &artifacts.hire {
            let hire_path = dir.join("hire_recommendation.csv");
            self.write_hire(File::create(&hire_path)?, hire)?;
            written.push(hire_path);
        }

        let roster_path = dir.join("roster.csv");
        self.write_roster(File::create(&roster_path)?, &artifacts.roster)?;
        written.push(roster_path);

        let json_path = dir.join("plan_artifacts.json");
        std::fs::write(&json_path, artifacts_to_json(artifacts)?)?;
        written.push(json_path);

        info!(
            dir = %dir.display(),
            files = written.len(),
            "排班产物导出完成"
        );

        Ok(written)
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

/// 产物封装整体序列化为 JSON
pub fn artifacts_to_json(artifacts: &PlanArtifacts) -> ExportResult<String> {
    Ok(serde_json::to_string_pretty(artifacts)?)
}
