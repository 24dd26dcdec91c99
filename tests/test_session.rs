use async_trait::async_trait;
use forkify::{
    Direction, Forkify, ForkifyError, MemoryStorage, RecipeData, RecipeSource, RecipeSummary,
    Session,
};
use std::collections::HashMap;

struct FakeSource {
    summaries: Vec<RecipeSummary>,
    recipes: HashMap<String, RecipeData>,
}

#[async_trait]
impl RecipeSource for FakeSource {
    fn source_name(&self) -> &str {
        "fake"
    }

    async fn search(&self, query: &str) -> forkify::Result<Vec<RecipeSummary>> {
        if query == "offline" {
            return Err(ForkifyError::FetchFailed("network down".to_string()));
        }
        Ok(self
            .summaries
            .iter()
            .filter(|s| s.title.to_lowercase().contains(query))
            .cloned()
            .collect())
    }

    async fn get_recipe(&self, id: &str) -> forkify::Result<RecipeData> {
        self.recipes
            .get(id)
            .cloned()
            .ok_or_else(|| ForkifyError::FetchFailed(format!("no recipe {}", id)))
    }
}

fn fake_source() -> FakeSource {
    let summaries = (0..23)
        .map(|i| RecipeSummary {
            id: format!("p{}", i),
            title: format!("Pizza number {}", i),
            publisher: "Closet Cooking".to_string(),
            image_url: format!("https://example.com/p{}.jpg", i),
        })
        .collect();

    let mut recipes = HashMap::new();
    recipes.insert(
        "pie".to_string(),
        RecipeData {
            title: "Apple Pie".to_string(),
            publisher: "Baker".to_string(),
            image_url: "pie.png".to_string(),
            ingredients: vec![
                "2 cups flour".to_string(),
                "1 teaspoon salt".to_string(),
                "6 apples".to_string(),
                "cinnamon to taste".to_string(),
            ],
            source_url: "https://example.com/pie".to_string(),
        },
    );

    FakeSource {
        summaries,
        recipes,
    }
}

fn session_on(storage: &MemoryStorage) -> Session {
    Forkify::builder()
        .config(forkify::AppConfig::default())
        .source(fake_source())
        .storage(storage.clone())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_search_and_paginate() {
    let mut session = session_on(&MemoryStorage::new());

    let first = session.search("pizza").await.unwrap();
    assert_eq!(first.len(), 10);
    assert_eq!(first[0].id, "p0");

    assert_eq!(session.results_page(3).len(), 3);
    assert!(session.results_page(4).is_empty());
    assert_eq!(session.search_results().unwrap().query(), "pizza");
}

#[tokio::test]
async fn test_failed_search_leaves_no_results() {
    let mut session = session_on(&MemoryStorage::new());
    session.search("pizza").await.unwrap();

    let result = session.search("offline").await;

    assert!(matches!(result, Err(ForkifyError::FetchFailed(_))));
    assert!(session.search_results().is_none());
    assert!(session.results_page(1).is_empty());
}

#[tokio::test]
async fn test_empty_query_is_rejected() {
    let mut session = session_on(&MemoryStorage::new());
    assert!(matches!(
        session.search("   ").await,
        Err(ForkifyError::InvalidArgument(_))
    ));
}

#[tokio::test]
async fn test_load_recipe_parses_and_estimates_time() {
    let mut session = session_on(&MemoryStorage::new());

    let recipe = session.load_recipe_from_hash("#pie").await.unwrap().unwrap();

    assert_eq!(recipe.title, "Apple Pie");
    assert_eq!(recipe.author, "Baker");
    assert_eq!(recipe.servings, 4);
    assert_eq!(recipe.time, 30);
    assert_eq!(recipe.ingredients[0].count, Some(2.0));
    assert_eq!(recipe.ingredients[0].unit, "cup");
    assert_eq!(recipe.ingredients[2].ingredient, "apples");
    assert_eq!(recipe.ingredients[3].count, None);
}

#[tokio::test]
async fn test_empty_hash_loads_nothing() {
    let mut session = session_on(&MemoryStorage::new());
    assert!(session.load_recipe_from_hash("#").await.unwrap().is_none());
    assert!(session.recipe().is_none());
}

#[tokio::test]
async fn test_failed_load_clears_recipe() {
    let mut session = session_on(&MemoryStorage::new());
    session.load_recipe_by_id("pie").await.unwrap();

    let result = session.load_recipe_by_id("missing").await;

    assert!(matches!(result, Err(ForkifyError::FetchFailed(_))));
    assert!(session.recipe().is_none());
    assert!(matches!(
        session.update_servings(Direction::Inc),
        Err(ForkifyError::NoActiveRecipe)
    ));
}

#[tokio::test]
async fn test_update_servings() {
    let mut session = session_on(&MemoryStorage::new());
    session.load_recipe_by_id("pie").await.unwrap();

    let recipe = session.update_servings(Direction::Inc).unwrap();
    assert_eq!(recipe.servings, 5);
    assert_eq!(recipe.ingredients[0].count, Some(2.5));
    assert_eq!(recipe.ingredients[3].count, None);

    for _ in 0..10 {
        session.update_servings(Direction::Dec).unwrap();
    }
    let recipe = session.recipe().unwrap();
    assert_eq!(recipe.servings, 1);
    assert!((recipe.ingredients[0].count.unwrap() - 0.5).abs() < 1e-9);
}

#[tokio::test]
async fn test_shopping_list_from_recipe() {
    let mut session = session_on(&MemoryStorage::new());
    session.load_recipe_by_id("pie").await.unwrap();

    let items = session.add_recipe_to_list().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[3].count, 1.0);

    // adding twice keeps distinct entries
    session.add_recipe_to_list().unwrap();
    assert_eq!(session.shopping_list().len(), 8);

    assert!(session.update_list_count(&items[0].id, 3.0));
    assert_eq!(session.shopping_list().get(&items[0].id).unwrap().count, 3.0);
    assert!(!session.update_list_count(&items[0].id, f64::NAN));
    assert!(!session.update_list_count("missing", 1.0));

    assert!(session.delete_list_item(&items[0].id).is_some());
    assert!(session.delete_list_item(&items[0].id).is_none());
    assert_eq!(session.shopping_list().len(), 7);
}

#[tokio::test]
async fn test_toggle_like_persists_across_sessions() {
    let storage = MemoryStorage::new();
    let mut session = session_on(&storage);
    session.load_recipe_by_id("pie").await.unwrap();

    let toggle = session.toggle_like().unwrap();
    assert!(toggle.liked);
    assert_eq!(toggle.num_likes, 1);
    assert_eq!(toggle.entry.title, "Apple Pie");
    assert!(session.is_current_recipe_liked());

    let restarted = session_on(&storage);
    assert!(restarted.likes().is_liked("pie"));
    assert_eq!(restarted.likes().likes()[0].author, "Baker");

    let toggle = session.toggle_like().unwrap();
    assert!(!toggle.liked);
    assert_eq!(toggle.num_likes, 0);

    let restarted = session_on(&storage);
    assert_eq!(restarted.likes().num_likes(), 0);
}

#[tokio::test]
async fn test_toggle_like_without_recipe() {
    let mut session = session_on(&MemoryStorage::new());
    assert!(matches!(
        session.toggle_like(),
        Err(ForkifyError::NoActiveRecipe)
    ));
    assert!(session.delete_like("nothing").is_none());
}

#[test]
fn test_stale_responses_are_dropped() {
    let mut session = session_on(&MemoryStorage::new());

    let older = session.begin_request();
    let newer = session.begin_request();

    let pie = fake_source().recipes.remove("pie").unwrap();
    assert!(session.finish_recipe_load(newer, "pie", pie.clone()));

    let mut stale = pie;
    stale.title = "Stale Pie".to_string();
    assert!(!session.finish_recipe_load(older, "old", stale));
    assert_eq!(session.recipe().unwrap().title, "Apple Pie");

    let summaries = fake_source().summaries;
    assert!(!session.finish_search(older, "pizza", summaries));
    assert!(session.search_results().is_none());
}
