use std::iter::Sum;
use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Macro-nutrient values.
///
/// On a catalog food these are per 100 g (weighed foods) or per item (counted
/// foods). Everywhere else they are absolute amounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    #[serde(default)]
    pub protein: f64,

    #[serde(default)]
    pub fats: f64,

    #[serde(default)]
    pub carbs: f64,

    #[serde(default)]
    pub calories: f64,
}

impl Nutrition {
    pub fn new(protein: f64, fats: f64, carbs: f64, calories: f64) -> Self {
        Self {
            protein,
            fats,
            carbs,
            calories,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Multiply every field by the same factor.
    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            protein: self.protein * factor,
            fats: self.fats * factor,
            carbs: self.carbs * factor,
            calories: self.calories * factor,
        }
    }

    /// Divide every field by `divisor`. Yields zeros when `divisor` is zero.
    pub fn divide(&self, divisor: f64) -> Self {
        if divisor == 0.0 {
            return Self::zero();
        }
        Self {
            protein: self.protein / divisor,
            fats: self.fats / divisor,
            carbs: self.carbs / divisor,
            calories: self.calories / divisor,
        }
    }
}

impl Add for Nutrition {
    type Output = Nutrition;

    fn add(self, other: Nutrition) -> Nutrition {
        Nutrition {
            protein: self.protein + other.protein,
            fats: self.fats + other.fats,
            carbs: self.carbs + other.carbs,
            calories: self.calories + other.calories,
        }
    }
}

impl Sub for Nutrition {
    type Output = Nutrition;

    fn sub(self, other: Nutrition) -> Nutrition {
        Nutrition {
            protein: self.protein - other.protein,
            fats: self.fats - other.fats,
            carbs: self.carbs - other.carbs,
            calories: self.calories - other.calories,
        }
    }
}

impl Mul<f64> for Nutrition {
    type Output = Nutrition;

    fn mul(self, factor: f64) -> Nutrition {
        self.scale(factor)
    }
}

impl Sum for Nutrition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrition::zero(), |acc, n| acc + n)
    }
}

/// How a food's nutrition and quantities are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Measure {
    /// Nutrition per 100 g, quantities in grams (or millilitres, 1:1).
    #[default]
    Weight,
    /// Nutrition per item, quantities in whole items.
    Unit,
}

/// Reference quantity a price refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CostUnit {
    PerKilogram,
    PerUnit,
}

/// Price of a food per reference quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cost {
    #[serde(rename = "amountPerReferenceQuantity", alias = "amount")]
    pub amount: f64,

    pub unit: CostUnit,
}

impl Cost {
    pub fn per_kilogram(amount: f64) -> Self {
        Self {
            amount,
            unit: CostUnit::PerKilogram,
        }
    }

    pub fn per_unit(amount: f64) -> Self {
        Self {
            amount,
            unit: CostUnit::PerUnit,
        }
    }
}

/// A catalog entry.
///
/// Read-only to every calculation. Recipes become foods through
/// `derived_from_recipe_id`, which stays `None` for hand-authored entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FoodDocument", into = "FoodDocument")]
pub struct FoodRecord {
    pub name: String,
    pub nutrition: Nutrition,
    pub cost: Option<Cost>,
    pub measure: Measure,
    pub use_fixed_amount: bool,
    pub fixed_amounts: Vec<f64>,
    pub hidden: bool,
    pub derived_from_recipe_id: Option<String>,
}

impl FoodRecord {
    /// A food measured in grams with nutrition per 100 g.
    pub fn weighed(name: impl Into<String>, nutrition: Nutrition) -> Self {
        Self {
            name: name.into(),
            nutrition,
            cost: None,
            measure: Measure::Weight,
            use_fixed_amount: false,
            fixed_amounts: Vec::new(),
            hidden: false,
            derived_from_recipe_id: None,
        }
    }

    /// A food counted in items with nutrition per item.
    pub fn counted(name: impl Into<String>, nutrition: Nutrition) -> Self {
        Self {
            measure: Measure::Unit,
            ..Self::weighed(name, nutrition)
        }
    }

    pub fn with_cost(mut self, cost: Cost) -> Self {
        self.cost = Some(cost);
        self
    }

    pub fn with_fixed_amounts(mut self, amounts: Vec<f64>) -> Self {
        self.use_fixed_amount = !amounts.is_empty();
        self.fixed_amounts = amounts;
        self
    }

    #[inline]
    pub fn is_unit_food(&self) -> bool {
        self.measure == Measure::Unit
    }

    pub fn is_recipe(&self) -> bool {
        self.derived_from_recipe_id.is_some()
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Basic validation: non-negative nutrition and price, positive portions.
    pub fn is_valid(&self) -> bool {
        let n = &self.nutrition;
        !self.name.trim().is_empty()
            && n.protein >= 0.0
            && n.fats >= 0.0
            && n.carbs >= 0.0
            && n.calories >= 0.0
            && self.cost.is_none_or(|c| c.amount >= 0.0)
            && self.fixed_amounts.iter().all(|&a| a > 0.0)
    }

    /// True when the price basis contradicts how the food is measured, e.g. a
    /// per-kilogram price on a counted food. Such a price is applied to the
    /// item count as if it were grams.
    pub fn has_mismatched_cost_unit(&self) -> bool {
        matches!(
            (self.measure, self.cost.map(|c| c.unit)),
            (Measure::Unit, Some(CostUnit::PerKilogram))
                | (Measure::Weight, Some(CostUnit::PerUnit))
        )
    }
}

/// Stored shape of a catalog entry.
///
/// The store keeps the measurement convention as an `isUnitFood` flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FoodDocument {
    name: String,

    #[serde(default)]
    nutrition: Nutrition,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    cost: Option<Cost>,

    #[serde(default)]
    is_unit_food: bool,

    #[serde(default)]
    use_fixed_amount: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    fixed_amounts: Vec<f64>,

    #[serde(default)]
    hidden: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    derived_from_recipe_id: Option<String>,
}

impl From<FoodDocument> for FoodRecord {
    fn from(doc: FoodDocument) -> Self {
        Self {
            name: doc.name,
            nutrition: doc.nutrition,
            cost: doc.cost,
            measure: if doc.is_unit_food {
                Measure::Unit
            } else {
                Measure::Weight
            },
            use_fixed_amount: doc.use_fixed_amount,
            fixed_amounts: doc.fixed_amounts,
            hidden: doc.hidden,
            derived_from_recipe_id: doc.derived_from_recipe_id,
        }
    }
}

impl From<FoodRecord> for FoodDocument {
    fn from(food: FoodRecord) -> Self {
        Self {
            is_unit_food: food.is_unit_food(),
            name: food.name,
            nutrition: food.nutrition,
            cost: food.cost,
            use_fixed_amount: food.use_fixed_amount,
            fixed_amounts: food.fixed_amounts,
            hidden: food.hidden,
            derived_from_recipe_id: food.derived_from_recipe_id,
        }
    }
}
