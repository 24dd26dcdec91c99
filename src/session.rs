//! Application state and the controller operations that drive it.
//!
//! A [`Session`] owns the current search, the open recipe, the shopping list
//! and the liked recipes. Every user action maps to one method; the caller
//! renders whatever the method returns.

use log::{debug, info, warn};

use crate::error::{ForkifyError, Result};
use crate::likes::LikedRecipesStore;
use crate::model::{LikedRecipe, Recipe, RecipeData, RecipeSummary, ShoppingListItem};
use crate::scaler::{self, Direction};
use crate::search::{SearchResultSet, RESULTS_PER_PAGE};
use crate::shopping_list::ShoppingList;
use crate::source::RecipeSource;

/// Identifies one in-flight fetch
///
/// Only the most recently issued ticket is current; results delivered with an
/// older ticket are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Outcome of toggling the like on the open recipe
#[derive(Debug, Clone, PartialEq)]
pub struct LikeToggle {
    /// Whether the recipe is liked after the toggle
    pub liked: bool,
    pub entry: LikedRecipe,
    pub num_likes: usize,
}

pub struct Session {
    source: Box<dyn RecipeSource>,
    default_servings: u32,
    search: Option<SearchResultSet>,
    recipe: Option<Recipe>,
    list: ShoppingList,
    likes: LikedRecipesStore,
    latest_request: u64,
}

/// Extract the recipe id from a location fragment such as `#47746`
pub fn recipe_id_from_hash(hash: &str) -> Option<&str> {
    let id = hash.trim().trim_start_matches('#');
    (!id.is_empty()).then_some(id)
}

impl Session {
    pub fn new(
        source: Box<dyn RecipeSource>,
        likes: LikedRecipesStore,
        default_servings: u32,
    ) -> Self {
        Self {
            source,
            default_servings: default_servings.max(1),
            search: None,
            recipe: None,
            list: ShoppingList::new(),
            likes,
            latest_request: 0,
        }
    }

    /// Restore liked recipes from storage, as done once at application start
    pub fn restore_likes(&mut self) -> &[LikedRecipe] {
        self.likes.read_storage();
        self.likes.likes()
    }

    pub fn search_results(&self) -> Option<&SearchResultSet> {
        self.search.as_ref()
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }

    pub fn shopping_list(&self) -> &ShoppingList {
        &self.list
    }

    pub fn likes(&self) -> &LikedRecipesStore {
        &self.likes
    }

    /// Issue a new ticket, making every earlier one stale
    pub fn begin_request(&mut self) -> RequestTicket {
        self.latest_request += 1;
        RequestTicket(self.latest_request)
    }

    fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest_request
    }

    /// Run a search and return its first page
    ///
    /// The previous results are cleared up front, so a failed search leaves
    /// no results behind.
    pub async fn search(&mut self, query: &str) -> Result<&[RecipeSummary]> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ForkifyError::InvalidArgument(
                "search query is empty".to_string(),
            ));
        }

        let ticket = self.begin_request();
        self.search = None;
        let results = self.source.search(query).await?;
        self.finish_search(ticket, query, results);

        Ok(self.results_page(1))
    }

    /// Store search results fetched under `ticket`
    ///
    /// Returns `false` and drops the results when a newer request was issued
    /// in the meantime.
    pub fn finish_search(
        &mut self,
        ticket: RequestTicket,
        query: &str,
        results: Vec<RecipeSummary>,
    ) -> bool {
        if !self.is_current(ticket) {
            debug!("Dropping stale results for '{}'", query);
            return false;
        }
        self.search = Some(SearchResultSet::new(query, results));
        true
    }

    /// Results on `page` of the current search; empty without a search
    pub fn results_page(&self, page: usize) -> &[RecipeSummary] {
        match &self.search {
            Some(search) => search.page(page, RESULTS_PER_PAGE),
            None => &[],
        }
    }

    /// Load, parse and open the recipe with `id`
    pub async fn load_recipe_by_id(&mut self, id: &str) -> Result<&Recipe> {
        let ticket = self.begin_request();
        self.recipe = None;
        let data = self.source.get_recipe(id).await?;
        if !self.finish_recipe_load(ticket, id, data) {
            return Err(ForkifyError::FetchFailed(format!(
                "request for recipe '{}' was superseded",
                id
            )));
        }
        self.recipe.as_ref().ok_or(ForkifyError::NoActiveRecipe)
    }

    /// Load the recipe named by a location fragment such as `#47746`
    pub async fn load_recipe_from_hash(&mut self, hash: &str) -> Result<Option<&Recipe>> {
        match recipe_id_from_hash(hash) {
            Some(id) => {
                let id = id.to_string();
                self.load_recipe_by_id(&id).await.map(Some)
            }
            None => Ok(None),
        }
    }

    /// Open a recipe fetched under `ticket`; `false` if the ticket is stale
    pub fn finish_recipe_load(&mut self, ticket: RequestTicket, id: &str, data: RecipeData) -> bool {
        if !self.is_current(ticket) {
            debug!("Dropping stale recipe {}", id);
            return false;
        }
        let recipe = Recipe::from_data(id, data, self.default_servings);
        info!(
            "Loaded recipe {} with {} ingredients",
            recipe.id,
            recipe.ingredients.len()
        );
        self.recipe = Some(recipe);
        true
    }

    /// Step the servings of the open recipe
    ///
    /// Stepping below one serving is ignored; the recipe comes back unchanged.
    pub fn update_servings(&mut self, direction: Direction) -> Result<&Recipe> {
        let recipe = self.recipe.as_mut().ok_or(ForkifyError::NoActiveRecipe)?;
        if let Err(e) = scaler::rescale(recipe, direction) {
            debug!("Ignoring servings change: {}", e);
        }
        Ok(&*recipe)
    }

    /// Scale the open recipe to an explicit serving count
    pub fn set_servings(&mut self, servings: u32) -> Result<&Recipe> {
        let recipe = self.recipe.as_mut().ok_or(ForkifyError::NoActiveRecipe)?;
        scaler::scale_to(recipe, servings)?;
        Ok(&*recipe)
    }

    /// Add every ingredient of the open recipe to the shopping list
    pub fn add_recipe_to_list(&mut self) -> Result<Vec<ShoppingListItem>> {
        let recipe = self.recipe.as_ref().ok_or(ForkifyError::NoActiveRecipe)?;
        self.list.add_ingredients(&recipe.ingredients)
    }

    /// Remove a shopping list item; unknown ids are logged and ignored
    pub fn delete_list_item(&mut self, id: &str) -> Option<ShoppingListItem> {
        match self.list.delete_item(id) {
            Ok(item) => Some(item),
            Err(e) => {
                debug!("Ignoring list delete: {}", e);
                None
            }
        }
    }

    /// Change a shopping list item's count; invalid input is logged and ignored
    pub fn update_list_count(&mut self, id: &str, count: f64) -> bool {
        match self.list.update_count(id, count) {
            Ok(()) => true,
            Err(e) => {
                debug!("Ignoring count update: {}", e);
                false
            }
        }
    }

    pub fn is_current_recipe_liked(&self) -> bool {
        self.recipe
            .as_ref()
            .is_some_and(|recipe| self.likes.is_liked(&recipe.id))
    }

    /// Like the open recipe, or unlike it if it is already liked
    pub fn toggle_like(&mut self) -> Result<LikeToggle> {
        let recipe = self.recipe.as_ref().ok_or(ForkifyError::NoActiveRecipe)?;

        let (liked, entry) = if self.likes.is_liked(&recipe.id) {
            (false, self.likes.delete_like(&recipe.id)?)
        } else {
            let entry = self.likes.add_like(
                recipe.id.clone(),
                recipe.title.clone(),
                recipe.author.clone(),
                recipe.img.clone(),
            )?;
            (true, entry)
        };

        if liked {
            info!("Liked '{}'", entry.title);
        } else {
            info!("Unliked '{}'", entry.title);
        }
        Ok(LikeToggle {
            liked,
            entry,
            num_likes: self.likes.num_likes(),
        })
    }

    /// Remove a like by id, e.g. from the likes menu; unknown ids are ignored
    pub fn delete_like(&mut self, id: &str) -> Option<LikedRecipe> {
        match self.likes.delete_like(id) {
            Ok(like) => Some(like),
            Err(e) => {
                warn!("Could not remove like: {}", e);
                None
            }
        }
    }
}
