//! Serving-count rescaling and the preparation-time estimate.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::error::{ForkifyError, Result};
use crate::model::Recipe;

/// Minutes added per started group of [`INGREDIENTS_PER_PERIOD`] ingredients
pub const MINUTES_PER_PERIOD: u32 = 15;
pub const INGREDIENTS_PER_PERIOD: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Inc,
    Dec,
}

impl FromStr for Direction {
    type Err = ForkifyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "inc" => Ok(Direction::Inc),
            "dec" => Ok(Direction::Dec),
            other => Err(ForkifyError::InvalidArgument(format!(
                "unknown serving direction '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Inc => write!(f, "inc"),
            Direction::Dec => write!(f, "dec"),
        }
    }
}

/// Coarse time estimate: 15 minutes for every started group of 3 ingredients
///
/// This is a fixed formula and does not look at the source data.
pub fn calc_time(num_ingredients: usize) -> u32 {
    let periods = num_ingredients.div_ceil(INGREDIENTS_PER_PERIOD);
    periods as u32 * MINUTES_PER_PERIOD
}

/// Step the serving count by one and rescale every finite quantity
///
/// Decreasing below one serving is rejected and leaves the recipe untouched.
pub fn rescale(recipe: &mut Recipe, direction: Direction) -> Result<()> {
    let target = match direction {
        Direction::Inc => recipe.servings.checked_add(1).ok_or_else(|| {
            ForkifyError::InvalidArgument("servings cannot grow any further".to_string())
        })?,
        Direction::Dec if recipe.servings <= 1 => {
            return Err(ForkifyError::InvalidArgument(
                "servings cannot go below 1".to_string(),
            ))
        }
        Direction::Dec => recipe.servings - 1,
    };
    scale_to(recipe, target)
}

/// Rescale the recipe to an arbitrary serving count of at least one
pub fn scale_to(recipe: &mut Recipe, servings: u32) -> Result<()> {
    if servings == 0 {
        return Err(ForkifyError::InvalidArgument(
            "servings must be at least 1".to_string(),
        ));
    }
    if servings == recipe.servings {
        return Ok(());
    }

    let factor = f64::from(servings) / f64::from(recipe.servings);
    debug!(
        "Scaling recipe {} from {} to {} servings",
        recipe.id, recipe.servings, servings
    );

    for count in recipe
        .ingredients
        .iter_mut()
        .filter_map(|i| i.count.as_mut())
    {
        *count *= factor;
    }
    recipe.servings = servings;
    Ok(())
}
