//! # Pure Data Module / 纯数据模块 - Data Transfer Objects Only
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Define configuration data structures / 定义配置数据结构
//! - ✅ Provide TOML → DTO mapping / 提供 TOML → DTO 的映射
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//! ❌ **No default value calculation / 禁止默认值计算**
//!
//! Missing values become empty strings or `0`; wiring decides what those mean.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub content_store: ContentStoreConfig,
    pub oracle: OracleConfig,
    pub matching: MatchingConfig,
    pub http: HttpConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentStoreConfig {
    /// Base URL of the article API, e.g. `https://cms.example.com/api`
    pub base_url: String,
    /// Bearer token (may be empty - anonymous access)
    pub api_token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OracleConfig {
    /// Base URL of an OpenAI-compatible API, e.g. `https://api.openai.com/v1`
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchingConfig {
    /// Candidates evaluated at once (0 = unset)
    pub max_concurrency: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpConfig {
    /// Per-request timeout in seconds (0 = unset)
    pub timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Default level directive when `RUST_LOG` is not set (may be empty)
    pub level: String,
    /// Directory for the log file (empty = stderr only)
    pub directory: PathBuf,
}

fn str_at<'a>(toml_value: &'a toml::Value, section: &str, key: &str) -> &'a str {
    toml_value
        .get(section)
        .and_then(|s| s.get(key))
        .and_then(|v| v.as_str())
        .unwrap_or("")
}

/// Integer read into the field's own type. A value the type cannot hold
/// (negative, or too large) is mapped like a missing one.
fn uint_at<T>(toml_value: &toml::Value, section: &str, key: &str) -> T
where
    T: TryFrom<i64> + Default,
{
    toml_value
        .get(section)
        .and_then(|s| s.get(key))
        .and_then(|v| v.as_integer())
        .and_then(|n| T::try_from(n).ok())
        .unwrap_or_default()
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// **Prohibited / 禁止**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            content_store: ContentStoreConfig {
                base_url: str_at(toml_value, "content_store", "base_url").to_string(),
                api_token: str_at(toml_value, "content_store", "api_token").to_string(),
            },
            oracle: OracleConfig {
                base_url: str_at(toml_value, "oracle", "base_url").to_string(),
                api_key: str_at(toml_value, "oracle", "api_key").to_string(),
                model: str_at(toml_value, "oracle", "model").to_string(),
            },
            matching: MatchingConfig {
                max_concurrency: uint_at(toml_value, "matching", "max_concurrency"),
            },
            http: HttpConfig {
                timeout_secs: uint_at(toml_value, "http", "timeout_secs"),
                user_agent: str_at(toml_value, "http", "user_agent").to_string(),
            },
            logging: LoggingConfig {
                level: str_at(toml_value, "logging", "level").to_string(),
                directory: PathBuf::from(str_at(toml_value, "logging", "directory")),
            },
        })
    }

    /// Create empty AppConfig (all empty/default values)
    /// 创建空的 AppConfig（所有字段为空/默认值）
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn test_from_toml_parses_all_sections() {
        let toml_str = r#"
            [content_store]
            base_url = "https://cms.example.com/api"
            api_token = "cms-token"

            [oracle]
            base_url = "https://api.openai.com/v1"
            api_key = "sk-test"
            model = "gpt-4o-mini"

            [matching]
            max_concurrency = 4

            [http]
            timeout_secs = 15
            user_agent = "relink/test"

            [logging]
            level = "debug"
            directory = "/var/log/relink"
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.content_store.base_url, "https://cms.example.com/api");
        assert_eq!(config.content_store.api_token, "cms-token");
        assert_eq!(config.oracle.api_key, "sk-test");
        assert_eq!(config.oracle.model, "gpt-4o-mini");
        assert_eq!(config.matching.max_concurrency, 4);
        assert_eq!(config.http.timeout_secs, 15);
        assert_eq!(config.http.user_agent, "relink/test");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.directory, PathBuf::from("/var/log/relink"));
    }

    #[test]
    fn test_from_toml_returns_empty_values_when_missing() {
        let toml_value: Value = toml::from_str("[oracle]\nmodel = \"m\"").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        // Empty is a valid fact, not an error
        assert_eq!(config.content_store.base_url, "");
        assert_eq!(config.oracle.api_key, "");
        assert_eq!(config.oracle.model, "m");
        assert_eq!(config.matching.max_concurrency, 0);
        assert_eq!(config.http.timeout_secs, 0);
        assert_eq!(config.logging.directory, PathBuf::new());
    }

    #[test]
    fn test_from_toml_maps_negative_numbers_like_missing_ones() {
        let toml_value: Value =
            toml::from_str("[matching]\nmax_concurrency = -3\n[http]\ntimeout_secs = -1").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.matching.max_concurrency, 0);
        assert_eq!(config.http.timeout_secs, 0);
    }

    #[test]
    fn test_from_toml_never_truncates_out_of_range_numbers() {
        let toml_value: Value =
            toml::from_str("[matching]\nmax_concurrency = 4294967297\n[http]\ntimeout_secs = 4294967297")
                .unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        // Too large for u32: mapped like a missing value, not wrapped to 1.
        assert_eq!(config.matching.max_concurrency, 0);
        // Fits in u64 and is kept as written.
        assert_eq!(config.http.timeout_secs, 4_294_967_297);
    }
}
