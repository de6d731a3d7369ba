//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::{CATALOG, Catalog};
use crate::config::StorefrontConfig;
use crate::content::ContentStore;
use crate::services::gemini::{GeminiClient, GeminiError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the content store and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    content: ContentStore,
    gemini: GeminiClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Storefront configuration
    /// * `content` - Loaded markdown page store
    ///
    /// # Errors
    ///
    /// Returns an error if the Gemini client cannot be built from the
    /// configuration.
    pub fn new(config: StorefrontConfig, content: ContentStore) -> Result<Self, GeminiError> {
        let gemini = GeminiClient::new(&config.gemini)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                content,
                gemini,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &'static Catalog {
        &CATALOG
    }

    /// Get a reference to the markdown page store.
    #[must_use]
    pub fn content(&self) -> &ContentStore {
        &self.inner.content
    }

    /// Get a reference to the Gemini API client.
    #[must_use]
    pub fn gemini(&self) -> &GeminiClient {
        &self.inner.gemini
    }
}
