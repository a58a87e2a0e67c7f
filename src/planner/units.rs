use crate::error::{Result, TrackerError};
use crate::models::{FoodRecord, Measure};
use crate::planner::constants::{DEFAULT_UNIT_QUANTITY, DEFAULT_WEIGHT_QUANTITY, REFERENCE_GRAMS};

/// What a selected quantity counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Grams,
    Units,
}

impl QuantityKind {
    /// Short suffix for display ("g" or "x").
    pub fn suffix(self) -> &'static str {
        match self {
            QuantityKind::Grams => "g",
            QuantityKind::Units => "x",
        }
    }
}

pub fn quantity_kind(food: &FoodRecord) -> QuantityKind {
    match food.measure {
        Measure::Weight => QuantityKind::Grams,
        Measure::Unit => QuantityKind::Units,
    }
}

/// Scalar applied to a food's reference nutrition for `quantity`.
///
/// Counted foods scale by the item count, weighed foods by `quantity / 100`.
/// An unknown food yields 0 so batch totals degrade instead of failing.
#[inline]
pub fn resolve_multiplier(food: Option<&FoodRecord>, quantity: f64) -> f64 {
    match food.map(|f| f.measure) {
        Some(Measure::Unit) => quantity,
        Some(Measure::Weight) => quantity / REFERENCE_GRAMS,
        None => 0.0,
    }
}

/// Preset portion at `index`, if the food uses fixed amounts.
pub fn portion(food: &FoodRecord, index: usize) -> Option<f64> {
    if !food.use_fixed_amount {
        return None;
    }
    food.fixed_amounts.get(index).copied()
}

/// Quantity used when a food is selected without an explicit amount.
///
/// Preset portions never change the per-100g / per-unit basis, only this default.
pub fn default_quantity(food: &FoodRecord) -> f64 {
    portion(food, 0).unwrap_or(match food.measure {
        Measure::Weight => DEFAULT_WEIGHT_QUANTITY,
        Measure::Unit => DEFAULT_UNIT_QUANTITY,
    })
}

/// Accept only finite, strictly positive quantities for new or edited entries.
pub fn check_quantity(quantity: f64) -> Result<f64> {
    if quantity.is_finite() && quantity > 0.0 {
        Ok(quantity)
    } else {
        Err(TrackerError::InvalidInput(format!(
            "Quantity must be positive, got {quantity}"
        )))
    }
}
