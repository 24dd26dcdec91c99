use std::path::PathBuf;
use std::time::Duration;

use log::debug;

use crate::config::AppConfig;
use crate::error::Result;
use crate::likes::LikedRecipesStore;
use crate::session::Session;
use crate::source::{ForkifyApiClient, RecipeSource};
use crate::storage::{FileStorage, KeyValueStorage};

/// Builder for configuring and starting a session
#[derive(Default)]
pub struct SessionBuilder {
    config: Option<AppConfig>,
    source: Option<Box<dyn RecipeSource>>,
    storage: Option<Box<dyn KeyValueStorage>>,
    storage_path: Option<PathBuf>,
    timeout: Option<Duration>,
    default_servings: Option<u32>,
}

impl SessionBuilder {
    /// Use an explicit configuration instead of loading one
    ///
    /// # Example
    /// ```
    /// use forkify::{AppConfig, Forkify};
    ///
    /// let builder = Forkify::builder().config(AppConfig::default());
    /// ```
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Use a custom recipe source instead of the forkify API
    pub fn source(mut self, source: impl RecipeSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Use a custom storage backend for liked recipes
    ///
    /// # Example
    /// ```
    /// use forkify::{Forkify, MemoryStorage};
    ///
    /// let builder = Forkify::builder().storage(MemoryStorage::new());
    /// ```
    pub fn storage(mut self, storage: impl KeyValueStorage + 'static) -> Self {
        self.storage = Some(Box::new(storage));
        self
    }

    /// Keep liked recipes in the file at `path`
    pub fn storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = Some(path.into());
        self
    }

    /// Set a timeout for HTTP requests
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Serving count newly opened recipes start with
    pub fn default_servings(mut self, servings: u32) -> Self {
        self.default_servings = Some(servings);
        self
    }

    /// Build the session and restore liked recipes from storage
    ///
    /// # Errors
    /// Returns `ForkifyError` if:
    /// - No configuration was given and loading one fails
    /// - The HTTP client cannot be created
    pub fn build(self) -> Result<Session> {
        let config = match self.config {
            Some(config) => config,
            None => AppConfig::load()?,
        };

        let source: Box<dyn RecipeSource> = match self.source {
            Some(source) => source,
            None => {
                let timeout = self.timeout.unwrap_or_else(|| config.request_timeout());
                Box::new(ForkifyApiClient::new(
                    config.api_base_url.clone(),
                    Some(timeout),
                )?)
            }
        };

        let storage: Box<dyn KeyValueStorage> = match self.storage {
            Some(storage) => storage,
            None => {
                let path = self.storage_path.unwrap_or_else(|| config.storage_path.clone());
                debug!("Using likes storage at {}", path.display());
                Box::new(FileStorage::new(path))
            }
        };

        let servings = self.default_servings.unwrap_or(config.default_servings);
        let mut session = Session::new(source, LikedRecipesStore::new(storage), servings);
        session.restore_likes();
        Ok(session)
    }
}

/// Main entry point for the builder API
pub struct Forkify;

impl Forkify {
    /// Creates a new builder for a session
    ///
    /// # Example
    /// ```
    /// use forkify::Forkify;
    ///
    /// let builder = Forkify::builder();
    /// ```
    pub fn builder() -> SessionBuilder {
        SessionBuilder::default()
    }
}
