use tracing::debug;

use crate::models::{Catalog, FoodRecord, Nutrition, SelectedFoodEntry};
use crate::planner::units::resolve_multiplier;

/// Scaled macros for `quantity` of a food.
///
/// Negative quantities are not rejected; every field scales by the same factor.
#[inline]
pub fn macros_for(food: Option<&FoodRecord>, quantity: f64) -> Nutrition {
    match food {
        Some(f) => f.nutrition.scale(resolve_multiplier(food, quantity)),
        None => Nutrition::zero(),
    }
}

/// Macros for one entry, looked up in the catalog snapshot.
pub fn macros_for_entry(entry: &SelectedFoodEntry, catalog: &Catalog) -> Nutrition {
    let food = catalog.get(&entry.food_name);
    if food.is_none() {
        debug!(food = %entry.food_name, "unknown food contributes no macros");
    }
    macros_for(food, entry.quantity)
}

/// Element-wise sum of `macros_for` over entries.
///
/// Entries whose food is missing from the catalog contribute zero.
pub fn macros_for_many<'a>(
    entries: impl IntoIterator<Item = &'a SelectedFoodEntry>,
    catalog: &Catalog,
) -> Nutrition {
    entries
        .into_iter()
        .map(|e| macros_for_entry(e, catalog))
        .sum()
}
