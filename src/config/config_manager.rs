// ==========================================
// 客服坐席排班系统 - 配置管理器
// ==========================================
// 职责: 配置文件加载、保存、快照
// 存储: JSON 文件（默认位于用户配置目录）
// ==========================================

use crate::config::plan_config::PlanConfig;
use crate::config::ConfigError;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// 创建指向指定配置文件的管理器
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// 默认配置文件路径（用户配置目录下）
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("agent-shift-aps")
            .join("config.json")
    }

    /// 使用默认路径创建管理器
    pub fn with_default_path() -> Self {
        Self::new(Self::default_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 加载配置（宽松解析：非法数值降级为零）
    pub fn load(&self) -> Result<PlanConfig, ConfigError> {
        if !self.path.exists() {
            return Err(ConfigError::FileNotFound(self.path.display().to_string()));
        }

        let raw = fs::read_to_string(&self.path)
            .map_err(|e| ConfigError::ReadError(format!("{}: {}", self.path.display(), e)))?;
        let value: Value = serde_json::from_str(&raw)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", self.path.display(), e)))?;

        Ok(PlanConfig::from_value(&value))
    }

    /// 加载配置；文件缺失时回退默认配置（零容量 => 全缺口方案）
    pub fn load_or_default(&self) -> PlanConfig {
        match self.load() {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "配置加载失败，使用默认配置");
                PlanConfig::default()
            }
        }
    }

    /// 保存配置（自动创建父目录）
    pub fn save(&self, config: &PlanConfig) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::WriteError(format!("{}: {}", parent.display(), e)))?;
        }

        let raw = serde_json::to_string_pretty(config)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(&self.path, raw)
            .map_err(|e| ConfigError::WriteError(format!("{}: {}", self.path.display(), e)))?;
        Ok(())
    }
}

/// 生成解析后配置的 JSON 快照（嵌入产物封装，保证结果可复现）
pub fn config_snapshot(config: &PlanConfig) -> String {
    serde_json::to_string(config).unwrap_or_else(|_| "{}".to_string())
}
