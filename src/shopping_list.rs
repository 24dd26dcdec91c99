use log::debug;
use uuid::Uuid;

use crate::error::{ForkifyError, Result};
use crate::model::{Ingredient, ShoppingListItem};

/// Ordered shopping list
///
/// Entries are never merged: adding the same ingredient twice yields two
/// distinct items, each with its own id.
#[derive(Debug, Default, Clone)]
pub struct ShoppingList {
    items: Vec<ShoppingListItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new item with a freshly generated id
    ///
    /// The count must be a finite, non-negative number.
    pub fn add_item(
        &mut self,
        count: f64,
        unit: impl Into<String>,
        ingredient: impl Into<String>,
    ) -> Result<ShoppingListItem> {
        validate_count(count)?;
        let item = ShoppingListItem {
            id: Uuid::new_v4().to_string(),
            count,
            unit: unit.into(),
            ingredient: ingredient.into(),
        };
        debug!("Adding '{}' to the shopping list", item.ingredient);
        self.items.push(item.clone());
        Ok(item)
    }

    /// Append every ingredient of a recipe; a missing quantity counts as one
    ///
    /// Nothing is added if any ingredient carries an invalid count.
    pub fn add_ingredients(&mut self, ingredients: &[Ingredient]) -> Result<Vec<ShoppingListItem>> {
        for ingredient in ingredients {
            validate_count(ingredient.count.unwrap_or(1.0))?;
        }
        ingredients
            .iter()
            .map(|i| self.add_item(i.count.unwrap_or(1.0), &i.unit, &i.ingredient))
            .collect()
    }

    pub fn delete_item(&mut self, id: &str) -> Result<ShoppingListItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| ForkifyError::NotFound(id.to_string()))?;
        Ok(self.items.remove(index))
    }

    /// Set the count of an item; the count must be a finite, non-negative number
    pub fn update_count(&mut self, id: &str, count: f64) -> Result<()> {
        validate_count(count)?;
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| ForkifyError::NotFound(id.to_string()))?;
        item.count = count;
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&ShoppingListItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[ShoppingListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn validate_count(count: f64) -> Result<()> {
    if !count.is_finite() || count < 0.0 {
        return Err(ForkifyError::InvalidArgument(format!(
            "invalid count {}",
            count
        )));
    }
    Ok(())
}
