use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const URL_ENV: &str = "NEIGHBORLINK_STORE_URL";
pub const KEY_ENV: &str = "NEIGHBORLINK_STORE_KEY";

/// 配置文件结构 (config.toml)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub clock: ClockConfig,
}

/// 远程数据存储；url 或 anon_key 为空时不启用
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub url: String,
    pub anon_key: String,
    pub table: String,
    pub limit: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            table: "profile".to_string(),
            limit: 5,
        }
    }
}

impl StoreConfig {
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty() && !self.anon_key.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub tick_ms: u64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self { tick_ms: 1000 }
    }
}

impl Config {
    /// 解析 TOML 文本
    pub fn parse(content: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(content)?)
    }

    /// 从文件加载，文件不存在时使用默认值
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// 环境变量覆盖文件中的存储配置
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(URL_ENV) {
            self.store.url = url;
        }
        if let Some(key) = lookup(KEY_ENV) {
            self.store.anon_key = key;
        }
    }

    pub fn from_env_and_file(path: &Path) -> Result<Self, AppError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides(|name| env::var(name).ok());
        Ok(config)
    }
}

/// 配置文件路径 (~/.config/neighborlink/config.toml)
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("neighborlink").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.store.table, "profile");
        assert_eq!(config.store.limit, 5);
        assert_eq!(config.clock.tick_ms, 1000);
        assert!(!config.store.is_configured());
    }

    #[test]
    fn test_parse_partial_file() {
        let config = Config::parse(
            r#"
            [store]
            url = "https://example.supabase.co"
            anon_key = "anon"
            "#,
        )
        .unwrap();
        assert!(config.store.is_configured());
        assert_eq!(config.store.limit, 5);
        assert_eq!(config.clock, ClockConfig::default());
    }

    #[test]
    fn test_parse_rejects_bad_types() {
        assert!(matches!(
            Config::parse("[clock]\ntick_ms = \"soon\""),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.store.url = "https://file.example".to_string();
        config.apply_env_overrides(|name| match name {
            KEY_ENV => Some("from-env".to_string()),
            _ => None,
        });
        assert_eq!(config.store.url, "https://file.example");
        assert_eq!(config.store.anon_key, "from-env");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load(Path::new("/nonexistent/neighborlink.toml")).unwrap();
        assert_eq!(config, Config::default());
    }
}
