use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::RecipeSource;
use crate::config::AppConfig;
use crate::error::{ForkifyError, Result};
use crate::model::{RecipeData, RecipeSummary};

/// Client for the forkify recipe API
///
/// - `GET {base}/search?q={query}` returns `{"recipes": [...]}`
/// - `GET {base}/get?rId={id}` returns `{"recipe": {...}}`
///
/// Both endpoints answer with `{"error": "..."}` when nothing matches.
pub struct ForkifyApiClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    recipes: Option<Vec<ApiSummary>>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GetResponse {
    recipe: Option<ApiRecipe>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiSummary {
    recipe_id: String,
    title: String,
    #[serde(default)]
    publisher: String,
    #[serde(default)]
    image_url: String,
}

#[derive(Debug, Deserialize)]
struct ApiRecipe {
    title: String,
    #[serde(default)]
    publisher: String,
    #[serde(default)]
    image_url: String,
    #[serde(default)]
    ingredients: Vec<String>,
    #[serde(default)]
    source_url: String,
}

impl From<ApiSummary> for RecipeSummary {
    fn from(api: ApiSummary) -> Self {
        RecipeSummary {
            id: api.recipe_id,
            title: api.title,
            publisher: api.publisher,
            image_url: api.image_url,
        }
    }
}

impl From<ApiRecipe> for RecipeData {
    fn from(api: ApiRecipe) -> Self {
        RecipeData {
            title: api.title,
            publisher: api.publisher,
            image_url: api.image_url,
            ingredients: api.ingredients,
            source_url: api.source_url,
        }
    }
}

impl ForkifyApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (compatible; forkify/0.1)")
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(config.api_base_url.clone(), Some(config.request_timeout()))
    }
}

#[async_trait]
impl RecipeSource for ForkifyApiClient {
    fn source_name(&self) -> &str {
        "forkify"
    }

    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>> {
        let url = format!("{}/search", self.base_url);
        debug!("Searching {} for '{}'", url, query);

        let response: SearchResponse = self
            .client
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        match (response.recipes, response.error) {
            (Some(recipes), _) => {
                info!("Search for '{}' returned {} recipes", query, recipes.len());
                Ok(recipes.into_iter().map(RecipeSummary::from).collect())
            }
            (None, Some(error)) => Err(ForkifyError::FetchFailed(error)),
            (None, None) => Err(ForkifyError::FetchFailed(
                "search response carried no recipes".to_string(),
            )),
        }
    }

    async fn get_recipe(&self, id: &str) -> Result<RecipeData> {
        let url = format!("{}/get", self.base_url);
        debug!("Fetching recipe {} from {}", id, url);

        let response: GetResponse = self
            .client
            .get(&url)
            .query(&[("rId", id)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        match (response.recipe, response.error) {
            (Some(recipe), _) => Ok(recipe.into()),
            (None, Some(error)) => Err(ForkifyError::FetchFailed(error)),
            (None, None) => Err(ForkifyError::FetchFailed(format!(
                "no recipe returned for id '{}'",
                id
            ))),
        }
    }
}
