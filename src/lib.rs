pub mod builder;
pub mod config;
pub mod error;
pub mod likes;
pub mod model;
pub mod parser;
pub mod scaler;
pub mod search;
pub mod session;
pub mod shopping_list;
pub mod source;
pub mod storage;
pub mod units;

// Re-export commonly used types
pub use builder::{Forkify, SessionBuilder};
pub use config::AppConfig;
pub use error::{ForkifyError, Result};
pub use likes::{LikedRecipesStore, LIKES_STORAGE_KEY};
pub use model::{Ingredient, LikedRecipe, Recipe, RecipeData, RecipeSummary, ShoppingListItem};
pub use parser::IngredientParser;
pub use scaler::Direction;
pub use search::{Pagination, SearchResultSet, RESULTS_PER_PAGE};
pub use session::{recipe_id_from_hash, LikeToggle, RequestTicket, Session};
pub use shopping_list::ShoppingList;
pub use source::{ForkifyApiClient, RecipeSource};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use units::UnitTable;

/// Search the configured catalog without setting up a session
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let results = forkify::search_recipes("pizza").await?;
/// println!("{} recipes", results.len());
/// # Ok(())
/// # }
/// ```
pub async fn search_recipes(query: &str) -> Result<SearchResultSet> {
    let config = AppConfig::load()?;
    let client = ForkifyApiClient::from_config(&config)?;
    let results = client.search(query).await?;
    Ok(SearchResultSet::new(query, results))
}

/// Fetch and parse one recipe without setting up a session
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let recipe = forkify::fetch_recipe("47746").await?;
/// for ingredient in &recipe.ingredients {
///     println!("{:?} {}", ingredient.count, ingredient.label());
/// }
/// # Ok(())
/// # }
/// ```
pub async fn fetch_recipe(id: &str) -> Result<Recipe> {
    let config = AppConfig::load()?;
    let client = ForkifyApiClient::from_config(&config)?;
    let data = client.get_recipe(id).await?;
    Ok(Recipe::from_data(id, data, config.default_servings))
}
