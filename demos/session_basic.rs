//! Basic usage of the Session builder API
//!
//! This example runs offline against an in-memory catalog and shows:
//! 1. Searching and paging through results
//! 2. Loading a recipe and stepping its servings
//! 3. Building a shopping list and liking the recipe

use async_trait::async_trait;
use forkify::{
    Direction, Forkify, ForkifyError, MemoryStorage, RecipeData, RecipeSource, RecipeSummary,
};

struct Catalog;

#[async_trait]
impl RecipeSource for Catalog {
    fn source_name(&self) -> &str {
        "catalog"
    }

    async fn search(&self, query: &str) -> forkify::Result<Vec<RecipeSummary>> {
        Ok((1..=12)
            .map(|i| RecipeSummary {
                id: format!("{}-{}", query, i),
                title: format!("{} number {}", query, i),
                publisher: "Closet Cooking".to_string(),
                image_url: format!("https://example.com/{}.jpg", i),
            })
            .collect())
    }

    async fn get_recipe(&self, id: &str) -> forkify::Result<RecipeData> {
        if !id.starts_with("pizza") {
            return Err(ForkifyError::FetchFailed(format!("no recipe {}", id)));
        }
        Ok(RecipeData {
            title: "Margherita Pizza".to_string(),
            publisher: "Closet Cooking".to_string(),
            image_url: "https://example.com/pizza.jpg".to_string(),
            source_url: "https://example.com/pizza".to_string(),
            ingredients: vec![
                "2 1/2 cups flour".to_string(),
                "1 teaspoon salt".to_string(),
                "3 tablespoons olive oil (extra virgin)".to_string(),
                "1/2 pound mozzarella".to_string(),
                "basil to taste".to_string(),
            ],
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let storage = MemoryStorage::new();
    let mut session = Forkify::builder()
        .source(Catalog)
        .storage(storage.clone())
        .build()?;

    println!("=== Use Case 1: Search and paging ===");
    let first = session.search("pizza").await?;
    println!("First page has {} results", first.len());
    for summary in session.results_page(2) {
        println!("  {} ({})", summary.title, summary.id);
    }

    println!("\n=== Use Case 2: Load a recipe and step servings ===");
    let recipe = session.load_recipe_from_hash("#pizza-3").await?;
    if let Some(recipe) = recipe {
        println!("{}: {} servings, ~{} minutes", recipe.title, recipe.servings, recipe.time);
    }
    let recipe = session.update_servings(Direction::Dec)?;
    for ingredient in &recipe.ingredients {
        match ingredient.count {
            Some(count) => println!("  {:.2} {}", count, ingredient.label()),
            None => println!("  {}", ingredient.label()),
        }
    }

    println!("\n=== Use Case 3: Shopping list and likes ===");
    let items = session.add_recipe_to_list()?;
    println!("Added {} items to the shopping list", items.len());
    let toggle = session.toggle_like()?;
    println!("Liked '{}' ({} liked)", toggle.entry.title, toggle.num_likes);

    let restarted = Forkify::builder()
        .source(Catalog)
        .storage(storage)
        .build()?;
    println!(
        "After a restart {} recipe(s) are still liked",
        restarted.likes().num_likes()
    );

    Ok(())
}
