use tracing::{debug, info, warn};

use crate::error::{Result, TrackerError};
use crate::models::{Catalog, Cost, FoodRecord, Measure, NormalizedRecipe, Nutrition, RecipeDraft};
use crate::planner::calculations::macros_for_many;
use crate::planner::constants::{GRAMS_PER_KILOGRAM, RECIPE_NAME_SUFFIX, REFERENCE_GRAMS};
use crate::planner::cost::total_cost_for;

/// Catalog name for the food synthesized from a recipe.
pub fn recipe_food_name(recipe_name: &str) -> String {
    format!("{}{}", recipe_name.trim(), RECIPE_NAME_SUFFIX)
}

/// Turn a recipe draft into a reusable catalog food.
///
/// Only weighed ingredients count toward the weight denominator. Counted
/// ingredients still add macros and cost, so a recipe mixing both reports
/// inflated per-100g figures; there is no gram equivalent for an item.
/// A zero weight yields zero per-100g nutrition and per-kilogram cost.
///
/// Per-serving values come straight from the totals and are independent of
/// the weight normalization.
pub fn normalize(draft: &RecipeDraft, catalog: &Catalog) -> NormalizedRecipe {
    let mut total_weight = 0.0;
    let mut excluded_unit_ingredients = 0;

    for ingredient in &draft.ingredients {
        match catalog.get(&ingredient.food_name).map(|f| f.measure) {
            Some(Measure::Weight) => total_weight += ingredient.quantity,
            Some(Measure::Unit) => excluded_unit_ingredients += 1,
            None => debug!(food = %ingredient.food_name, "unknown ingredient left out of recipe weight"),
        }
    }

    let total_nutrition = macros_for_many(&draft.ingredients, catalog);
    let costs = total_cost_for(&draft.ingredients, catalog);
    let total_cost = costs.total;

    let (nutrition_per_100g, cost_per_kilogram) = if total_weight > 0.0 {
        (
            total_nutrition.scale(REFERENCE_GRAMS / total_weight),
            total_cost / (total_weight / GRAMS_PER_KILOGRAM),
        )
    } else {
        (Nutrition::zero(), 0.0)
    };

    let servings = f64::from(draft.servings.max(1));
    let nutrition_per_serving = total_nutrition.divide(servings);
    let cost_per_serving = total_cost / servings;

    let any_priced = costs.per_entry.values().any(Option::is_some);
    let mut food = FoodRecord::weighed(recipe_food_name(&draft.name), nutrition_per_100g);
    if any_priced {
        food = food.with_cost(Cost::per_kilogram(cost_per_kilogram));
    }
    if draft.is_fixed_serving && total_weight > 0.0 {
        food = food.with_fixed_amounts(vec![total_weight / servings]);
    }
    food.derived_from_recipe_id = Some(draft.id.clone());

    NormalizedRecipe {
        food,
        total_weight,
        excluded_unit_ingredients,
        total_nutrition,
        total_cost,
        has_unpriced_ingredients: !costs.is_fully_priced(),
        nutrition_per_100g,
        cost_per_kilogram,
        nutrition_per_serving,
        cost_per_serving,
    }
}

/// Validate a draft and normalize it, ready to be written to the catalog.
///
/// Every ingredient must resolve in the catalog at save time.
pub fn finalize(draft: &RecipeDraft, catalog: &Catalog) -> Result<NormalizedRecipe> {
    draft
        .validate()
        .inspect_err(|e| warn!(recipe = %draft.name, "rejected recipe: {}", e))?;

    if let Some(missing) = draft
        .ingredients
        .iter()
        .find(|i| !catalog.contains(&i.food_name))
    {
        warn!(recipe = %draft.name, food = %missing.food_name, "recipe references unknown food");
        return Err(TrackerError::FoodNotFound(missing.food_name.clone()));
    }

    let normalized = normalize(draft, catalog);
    if normalized.excluded_unit_ingredients > 0 {
        warn!(
            recipe = %draft.name,
            count = normalized.excluded_unit_ingredients,
            "unit-counted ingredients are not part of the recipe weight"
        );
    }
    if normalized.has_unpriced_ingredients {
        warn!(recipe = %draft.name, "recipe cost leaves out unpriced ingredients");
    }
    info!(
        recipe = %draft.name,
        weight = normalized.total_weight,
        "normalized recipe into {}",
        normalized.food.name
    );
    Ok(normalized)
}
