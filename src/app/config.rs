use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

/// 指定配置文件路径的环境变量
pub const CONFIG_ENV: &str = "COACHBOOK_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "coachbook.toml";

/// 应用配置，所有字段都有默认值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 存放球场图片的目录
    pub court_dir: PathBuf,
    /// env_logger 的默认过滤级别，RUST_LOG 优先
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            court_dir: PathBuf::from("courts"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// 按 `COACHBOOK_CONFIG` → `./coachbook.toml` 的顺序查找；文件不存在时使用默认值
    pub fn load() -> Result<Self> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("无法读取配置文件: {}", path.display()))?;
        let config: AppConfig = toml::from_str(&text)
            .with_context(|| format!("配置文件格式错误: {}", path.display()))?;
        // logger 尚未初始化时这条日志会被丢弃，不影响
        info!("已加载配置: {}", path.display());
        Ok(config)
    }
}
