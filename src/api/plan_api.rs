// ==========================================
// 客服坐席排班系统 - 排班业务接口
// ==========================================
// 职责: 面向消费方的业务门面，组合导入、编排、导出
// ==========================================

use crate::api::error::ApiResult;
use crate::config::PlanConfig;
use crate::domain::plan::PlanArtifacts;
use crate::domain::requirement::ForecastRow;
use crate::engine::PlanOrchestrator;
use crate::export::{artifacts_to_json, CsvExporter};
use crate::importer::ForecastImporter;
use std::path::{Path, PathBuf};

// ==========================================
// PlanApi - 排班业务接口
// ==========================================
pub struct PlanApi {
    importer: ForecastImporter,
    orchestrator: PlanOrchestrator,
    exporter: CsvExporter,
}

impl PlanApi {
    pub fn new() -> Self {
        Self {
            importer: ForecastImporter::new(),
            orchestrator: PlanOrchestrator::new(),
            exporter: CsvExporter::new(),
        }
    }

    /// 对内存中的预测记录执行排班
    pub fn generate_plan(&self, rows: &[ForecastRow], config: &PlanConfig) -> ApiResult<PlanArtifacts> {
        Ok(self.orchestrator.execute(rows, config))
    }

    /// 从预测文件执行排班
    pub fn generate_plan_from_file<P: AsRef<Path>>(
        &self,
        path: P,
        config: &PlanConfig,
    ) -> ApiResult<PlanArtifacts> {
        let rows = self.importer.import_file(path)?;
        Ok(self.orchestrator.execute(&rows, config))
    }

    /// 把产物全套导出到目录（CSV + JSON）
    pub fn export_artifacts<P: AsRef<Path>>(
        &self,
        artifacts: &PlanArtifacts,
        dir: P,
    ) -> ApiResult<Vec<PathBuf>> {
        Ok(self.exporter.export_all(artifacts, dir.as_ref())?)
    }

    /// 产物封装序列化为 JSON
    pub fn artifacts_json(&self, artifacts: &PlanArtifacts) -> ApiResult<String> {
        Ok(artifacts_to_json(artifacts)?)
    }
}

impl Default for PlanApi {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_plan_in_memory() {
        let api = PlanApi::new();
        let rows: Vec<ForecastRow> = (0..24)
            .map(|hour| ForecastRow::new(hour, if hour == 10 { 2.0 } else { 0.0 }, false))
            .collect();
        let mut config = PlanConfig::default();
        config.cap_ft = 2;
        config.cap_pt = 0;

        let artifacts = api.generate_plan(&rows, &config).unwrap();

        assert_eq!(artifacts.result.coverage[10], 2);
        assert_eq!(artifacts.result.total_shortage(), 0);
        assert!(artifacts.hire.is_none());
        assert_eq!(artifacts.roster.len(), 2);
    }

    #[test]
    fn test_artifacts_json_roundtrip() {
        let api = PlanApi::new();
        let rows = vec![ForecastRow::new(9, 1.0, false)];
        let mut config = PlanConfig::default();
        config.cap_ft = 1;

        let artifacts = api.generate_plan(&rows, &config).unwrap();
        let json = api.artifacts_json(&artifacts).unwrap();
        let parsed: PlanArtifacts = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.result, artifacts.result);
        assert_eq!(parsed.version_id, artifacts.version_id);
    }
}
