use serde::{Deserialize, Serialize};

/// One parsed ingredient line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Parsed quantity, `None` when the line carried no readable quantity
    pub count: Option<f64>,
    /// Canonical unit or empty string
    pub unit: String,
    /// Lower-cased ingredient text without the extracted quantity and unit
    pub ingredient: String,
}

/// Lightweight recipe summary as returned by a search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub image_url: String,
}

/// Raw recipe record as returned by a recipe source, before any parsing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeData {
    pub title: String,
    pub publisher: String,
    pub image_url: String,
    pub ingredients: Vec<String>,
    pub source_url: String,
}

/// A recipe opened for viewing, with parsed and scaled ingredients
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub author: String,
    pub img: String,
    pub source_url: String,
    pub ingredients: Vec<Ingredient>,
    pub servings: u32,
    /// Estimated preparation time in minutes
    pub time: u32,
}

/// Denormalized summary of a recipe the user marked as favorite
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikedRecipe {
    pub id: String,
    pub title: String,
    pub author: String,
    pub img: String,
}

/// Entry of the shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub id: String,
    pub count: f64,
    pub unit: String,
    pub ingredient: String,
}

impl Ingredient {
    /// Text of the entry without its quantity, e.g. `"cup flour"`
    pub fn label(&self) -> String {
        if self.unit.is_empty() {
            self.ingredient.clone()
        } else {
            format!("{} {}", self.unit, self.ingredient)
        }
    }
}

impl Recipe {
    /// Build a viewable recipe from raw source data
    ///
    /// Ingredient lines are parsed once here and the time estimate is derived
    /// from the number of parsed ingredients.
    pub fn from_data(id: impl Into<String>, data: RecipeData, servings: u32) -> Self {
        let ingredients = crate::parser::IngredientParser::new().parse(&data.ingredients);
        let time = crate::scaler::calc_time(ingredients.len());

        Recipe {
            id: id.into(),
            title: data.title,
            author: data.publisher,
            img: data.image_url,
            source_url: data.source_url,
            ingredients,
            servings: servings.max(1),
            time,
        }
    }

    /// Summary stored when the recipe is liked
    pub fn to_liked(&self) -> LikedRecipe {
        LikedRecipe {
            id: self.id.clone(),
            title: self.title.clone(),
            author: self.author.clone(),
            img: self.img.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> RecipeData {
        RecipeData {
            title: "Pizza Dough".to_string(),
            publisher: "Closet Cooking".to_string(),
            image_url: "https://example.com/dough.jpg".to_string(),
            ingredients: vec![
                "2 cups flour".to_string(),
                "1 teaspoon salt".to_string(),
                "".to_string(),
                "water".to_string(),
            ],
            source_url: "https://example.com/dough".to_string(),
        }
    }

    #[test]
    fn test_from_data_parses_ingredients_and_time() {
        let recipe = Recipe::from_data("47746", sample_data(), 4);

        assert_eq!(recipe.id, "47746");
        assert_eq!(recipe.author, "Closet Cooking");
        assert_eq!(recipe.servings, 4);
        // the empty line is skipped
        assert_eq!(recipe.ingredients.len(), 3);
        assert_eq!(recipe.time, 15);
        assert_eq!(recipe.ingredients[1].unit, "tsp");
    }

    #[test]
    fn test_from_data_clamps_servings() {
        let recipe = Recipe::from_data("1", sample_data(), 0);
        assert_eq!(recipe.servings, 1);
    }

    #[test]
    fn test_label() {
        let with_unit = Ingredient {
            count: Some(1.0),
            unit: "cup".to_string(),
            ingredient: "flour".to_string(),
        };
        let without_unit = Ingredient {
            count: None,
            unit: String::new(),
            ingredient: "salt to taste".to_string(),
        };

        assert_eq!(with_unit.label(), "cup flour");
        assert_eq!(without_unit.label(), "salt to taste");
    }

    #[test]
    fn test_to_liked() {
        let recipe = Recipe::from_data("r1", sample_data(), 4);
        let liked = recipe.to_liked();

        assert_eq!(liked.id, "r1");
        assert_eq!(liked.title, "Pizza Dough");
        assert_eq!(liked.author, "Closet Cooking");
        assert_eq!(liked.img, "https://example.com/dough.jpg");
    }
}
