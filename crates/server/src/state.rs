//! Application state shared across handlers.

use std::sync::Arc;

use crate::analytics::Analytics;
use crate::catalog::ProductRepository;
use crate::config::ServerConfig;
use crate::services::imgbb::ImgbbClient;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// catalog repository, the analytics aggregator, and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    repository: Arc<dyn ProductRepository>,
    analytics: Analytics,
    imgbb: ImgbbClient,
}

impl AppState {
    /// Create a new application state over the given repository.
    #[must_use]
    pub fn new(config: ServerConfig, repository: Arc<dyn ProductRepository>) -> Self {
        let analytics = Analytics::new(Arc::clone(&repository));
        let imgbb = ImgbbClient::new(config.imgbb_api_key.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                repository,
                analytics,
                imgbb,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the product repository.
    #[must_use]
    pub fn repository(&self) -> &Arc<dyn ProductRepository> {
        &self.inner.repository
    }

    /// Get a reference to the analytics aggregator.
    #[must_use]
    pub fn analytics(&self) -> &Analytics {
        &self.inner.analytics
    }

    /// Get a reference to the image host client.
    #[must_use]
    pub fn imgbb(&self) -> &ImgbbClient {
        &self.inner.imgbb
    }
}
