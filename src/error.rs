use thiserror::Error;

/// Errors that can occur while driving a forkify session
#[derive(Error, Debug)]
pub enum ForkifyError {
    /// Search or single-recipe retrieval failed
    #[error("Failed to fetch recipe data: {0}")]
    FetchFailed(String),

    /// A mutation referenced an id that is not in the collection
    #[error("No entry with id '{0}'")]
    NotFound(String),

    /// A mutation was called with an argument it cannot accept
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The persisted payload could not be decoded
    #[error("Stored data is corrupt: {0}")]
    StorageCorrupt(String),

    /// A recipe action was requested before any recipe was loaded
    #[error("No recipe is currently loaded")]
    NoActiveRecipe,

    /// Failed to read or write durable storage
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Failed to encode or decode JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl From<reqwest::Error> for ForkifyError {
    fn from(err: reqwest::Error) -> Self {
        ForkifyError::FetchFailed(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ForkifyError>;
