//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Read TOML configuration files / 读取 TOML 配置文件
//! - ✅ Parse TOML into AppConfig DTO / 将 TOML 解析为 AppConfig DTO
//! - ✅ Overlay secrets from the environment / 用环境变量覆盖密钥
//! - ✅ Report I/O and parsing errors with context / 报告带上下文的 I/O 和解析错误
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//! ❌ **No default value logic / 禁止默认值逻辑**
//!
//! Missing settings are detected in `wiring`, defaults are applied there too.

use anyhow::Context;
use std::path::Path;
use rl_core::config::AppConfig;

/// Overrides `content_store.api_token`.
pub const CONTENT_STORE_TOKEN_ENV: &str = "RELINK_CONTENT_STORE_TOKEN";
/// Overrides `oracle.api_key`.
pub const ORACLE_API_KEY_ENV: &str = "RELINK_ORACLE_API_KEY";

/// Load configuration from a TOML file, then apply environment overrides.
/// 从 TOML 文件加载配置，然后应用环境变量覆盖。
///
/// Empty strings and zero numbers are accepted as they are (they are facts).
///
/// # Errors / 错误
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    let config = AppConfig::from_toml(&toml_value)?;

    Ok(apply_env_overrides(config, |key| std::env::var(key).ok()))
}

/// Replace secrets with values from `lookup` when present and non-empty.
pub fn apply_env_overrides<F>(mut config: AppConfig, lookup: F) -> AppConfig
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| lookup(key).filter(|value| !value.is_empty());

    if let Some(token) = lookup(CONTENT_STORE_TOKEN_ENV) {
        config.content_store.api_token = token;
    }
    if let Some(key) = lookup(ORACLE_API_KEY_ENV) {
        config.oracle.api_key = key;
    }
    config
}
