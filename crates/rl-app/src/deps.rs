//! # Application Dependencies / 应用依赖
//!
//! This module defines the dependency grouping for App construction.
//! 此模块定义 App 构造的依赖分组。
//!
//! **Note / 注意**: This is NOT a Builder pattern.
//! - No build steps / 无构建步骤
//! - No hidden logic / 无隐藏逻辑
//! - Just parameter grouping / 仅用于参数打包

use std::sync::Arc;
use rl_core::ports::*;

/// Application dependency grouping (non-Builder, just parameter grouping)
/// 应用依赖分组（非 Builder，仅参数打包）
pub struct AppDeps {
    // Content store / 内容存储
    pub article_store: Arc<dyn ArticleStorePort>,

    // Image hosts / 图片主机
    pub image_fetcher: Arc<dyn ImageFetcherPort>,

    // Visual equivalence / 视觉等价判断
    pub oracle: Arc<dyn EquivalenceOraclePort>,
}

/// Tuning for candidate evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingOptions {
    /// Candidates evaluated at once; `1` is strictly sequential.
    pub max_concurrency: usize,
}

impl Default for MatchingOptions {
    fn default() -> Self {
        Self { max_concurrency: 1 }
    }
}
