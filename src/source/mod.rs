mod forkify_api;

pub use forkify_api::ForkifyApiClient;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{RecipeData, RecipeSummary};

/// Unified trait for recipe catalogs
///
/// Any transport failure is reported as
/// [`ForkifyError::FetchFailed`](crate::ForkifyError::FetchFailed).
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Get the source name (e.g., "forkify")
    fn source_name(&self) -> &str;

    /// Search the catalog, returning summaries in catalog order
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>>;

    /// Fetch one recipe's raw data by id
    async fn get_recipe(&self, id: &str) -> Result<RecipeData>;
}
