//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Validate the settings the adapters cannot work without / 校验必需配置
//! - ✅ Apply defaults for unset numeric values / 为未设置的数值应用默认值
//! - ✅ Create infra adapters and inject them into the App / 创建适配器并注入 App
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic / 禁止业务逻辑**
//! ❌ **No network calls / 禁止网络调用**

use std::sync::Arc;
use std::time::Duration;

use rl_app::{App, AppDeps, MatchingOptions};
use rl_core::config::AppConfig;
use rl_infra::{
    build_http_client, HttpArticleStore, HttpClientSettings, HttpImageFetcher, OpenAiVisionOracle,
};
use tracing::info;

const DEFAULT_MAX_CONCURRENCY: usize = 1;
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_USER_AGENT: &str = concat!("relink/", env!("CARGO_PKG_VERSION"));

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误（基础设施初始化失败）
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Missing required setting: {0}")]
    MissingSetting(&'static str),

    #[error("HTTP client initialization failed: {0}")]
    HttpClientInit(String),
}

fn require(value: &str, key: &'static str) -> WiringResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(WiringError::MissingSetting(key));
    }
    Ok(value.to_string())
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Matching options with defaults applied (`0` means unset).
pub fn matching_options(config: &AppConfig) -> MatchingOptions {
    let max_concurrency = match config.matching.max_concurrency {
        0 => DEFAULT_MAX_CONCURRENCY,
        n => n as usize,
    };
    MatchingOptions { max_concurrency }
}

/// HTTP client settings with defaults applied.
pub fn http_settings(config: &AppConfig) -> HttpClientSettings {
    let timeout_secs = match config.http.timeout_secs {
        0 => DEFAULT_TIMEOUT_SECS,
        n => n,
    };
    HttpClientSettings {
        timeout: Duration::from_secs(timeout_secs),
        user_agent: non_empty(&config.http.user_agent)
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
    }
}

/// Wire all dependencies together
/// 将所有依赖连接在一起
///
/// One reqwest client is shared by the content store, the image fetcher
/// and the oracle.
///
/// # Errors / 错误
///
/// Returns `WiringError::MissingSetting` when `content_store.base_url`,
/// `oracle.base_url` or `oracle.model` is empty.
pub fn wire_dependencies(config: &AppConfig) -> WiringResult<App> {
    let content_store_url = require(&config.content_store.base_url, "content_store.base_url")?;
    let oracle_url = require(&config.oracle.base_url, "oracle.base_url")?;
    let model = require(&config.oracle.model, "oracle.model")?;

    let settings = http_settings(config);
    let client = build_http_client(&settings)
        .map_err(|e| WiringError::HttpClientInit(e.to_string()))?;
    let options = matching_options(config);

    info!(
        content_store = %content_store_url,
        oracle = %oracle_url,
        model = %model,
        max_concurrency = options.max_concurrency,
        timeout_secs = settings.timeout.as_secs(),
        "Dependencies wired"
    );

    let deps = AppDeps {
        article_store: Arc::new(HttpArticleStore::new(
            client.clone(),
            content_store_url,
            non_empty(&config.content_store.api_token),
        )),
        image_fetcher: Arc::new(HttpImageFetcher::new(client.clone())),
        oracle: Arc::new(OpenAiVisionOracle::new(
            client,
            oracle_url,
            non_empty(&config.oracle.api_key),
            model,
        )),
    };

    Ok(App::new(deps, options))
}
