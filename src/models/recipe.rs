use serde::{Deserialize, Serialize};

use crate::error::RecipeValidationError;
use crate::models::{FoodRecord, Nutrition, SelectedFoodEntry};

/// A recipe being authored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub ingredients: Vec<SelectedFoodEntry>,

    #[serde(default = "default_servings")]
    pub servings: u32,

    /// Selecting the recipe food defaults to one serving's weight.
    #[serde(default)]
    pub is_fixed_serving: bool,
}

fn default_servings() -> u32 {
    1
}

impl RecipeDraft {
    pub fn new(id: impl Into<String>, name: impl Into<String>, servings: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            ingredients: Vec::new(),
            servings,
            is_fixed_serving: false,
        }
    }

    pub fn with_ingredient(mut self, food_name: impl Into<String>, quantity: f64) -> Self {
        self.ingredients
            .push(SelectedFoodEntry::new(food_name, quantity));
        self
    }

    /// Check the draft can be saved.
    pub fn validate(&self) -> std::result::Result<(), RecipeValidationError> {
        if self.name.trim().is_empty() {
            return Err(RecipeValidationError::MissingName);
        }
        if self.ingredients.is_empty() {
            return Err(RecipeValidationError::NoIngredients);
        }
        if self.servings == 0 {
            return Err(RecipeValidationError::NonPositiveServings(self.servings));
        }
        if let Some(bad) = self
            .ingredients
            .iter()
            .find(|i| !(i.quantity.is_finite() && i.quantity > 0.0))
        {
            return Err(RecipeValidationError::NonPositiveQuantity(
                bad.food_name.clone(),
            ));
        }
        Ok(())
    }
}

/// Result of normalizing a recipe draft.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecipe {
    /// Catalog food ready to be written back to the store.
    pub food: FoodRecord,

    /// Grams of weighed ingredients. Counted ingredients are not included.
    pub total_weight: f64,

    /// Number of counted ingredients left out of `total_weight`.
    pub excluded_unit_ingredients: usize,

    pub total_nutrition: Nutrition,
    pub total_cost: f64,

    /// True when at least one ingredient had no price.
    pub has_unpriced_ingredients: bool,

    pub nutrition_per_100g: Nutrition,
    pub cost_per_kilogram: f64,

    pub nutrition_per_serving: Nutrition,
    pub cost_per_serving: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ok() {
        let draft = RecipeDraft::new("r1", "Porridge", 2).with_ingredient("Oats", 80.0);
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects() {
        let unnamed = RecipeDraft::new("r1", "  ", 1).with_ingredient("Oats", 80.0);
        assert_eq!(unnamed.validate(), Err(RecipeValidationError::MissingName));

        let empty = RecipeDraft::new("r1", "Porridge", 1);
        assert_eq!(empty.validate(), Err(RecipeValidationError::NoIngredients));

        let no_servings = RecipeDraft::new("r1", "Porridge", 0).with_ingredient("Oats", 80.0);
        assert_eq!(
            no_servings.validate(),
            Err(RecipeValidationError::NonPositiveServings(0))
        );

        let zero_qty = RecipeDraft::new("r1", "Porridge", 1).with_ingredient("Oats", 0.0);
        assert_eq!(
            zero_qty.validate(),
            Err(RecipeValidationError::NonPositiveQuantity("Oats".to_string()))
        );
    }

    #[test]
    fn test_servings_default_when_missing() {
        let json = r#"{"id": "r1", "name": "Soup", "ingredients": [{"foodName": "Leek", "quantity": 200}]}"#;
        let draft: RecipeDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.servings, 1);
        assert!(!draft.is_fixed_serving);
    }
}
