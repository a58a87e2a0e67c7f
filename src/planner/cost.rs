use std::collections::BTreeMap;

use crate::models::{Catalog, CostUnit, FoodRecord, SelectedFoodEntry};
use crate::planner::constants::GRAMS_PER_KILOGRAM;

/// Cost of `quantity` of a food.
///
/// `None` means the food carries no price at all, which is different from a
/// price of zero. Unit prices multiply the item count; kilogram prices are
/// applied to a quantity in grams.
pub fn cost_for(food: Option<&FoodRecord>, quantity: f64) -> Option<f64> {
    let cost = food?.cost?;
    Some(match cost.unit {
        CostUnit::PerUnit => cost.amount * quantity,
        CostUnit::PerKilogram => cost.amount / GRAMS_PER_KILOGRAM * quantity,
    })
}

/// Costs of a list of entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostSummary {
    /// Cost per food name. `None` marks an unpriced (or unknown) food.
    pub per_entry: BTreeMap<String, Option<f64>>,

    /// Sum of priced entries. Never absent.
    pub total: f64,
}

impl CostSummary {
    /// Names of foods that had no price.
    pub fn unpriced(&self) -> impl Iterator<Item = &str> {
        self.per_entry
            .iter()
            .filter(|(_, cost)| cost.is_none())
            .map(|(name, _)| name.as_str())
    }

    /// True when every entry had a price, so `total` is complete.
    pub fn is_fully_priced(&self) -> bool {
        self.per_entry.values().all(Option::is_some)
    }
}

/// Per-entry and total cost of entries against a catalog snapshot.
///
/// Entries for the same food are merged. Unpriced entries add nothing to the
/// total but stay visible as `None` in `per_entry`.
pub fn total_cost_for<'a>(
    entries: impl IntoIterator<Item = &'a SelectedFoodEntry>,
    catalog: &Catalog,
) -> CostSummary {
    let mut summary = CostSummary::default();

    for entry in entries {
        let food = catalog.get(&entry.food_name);
        let cost = cost_for(food, entry.quantity);
        let name = food.map_or_else(|| entry.food_name.clone(), |f| f.name.clone());

        let slot = summary.per_entry.entry(name).or_insert(None);
        if let Some(value) = cost {
            *slot = Some(slot.unwrap_or(0.0) + value);
            summary.total += value;
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cost, Nutrition};
    use assert_float_eq::assert_float_absolute_eq;

    fn rice() -> FoodRecord {
        FoodRecord::weighed("Rice", Nutrition::new(2.5, 0.3, 28.0, 130.0))
            .with_cost(Cost::per_kilogram(1.20))
    }

    fn eggs() -> FoodRecord {
        FoodRecord::counted("Eggs", Nutrition::new(6.0, 5.0, 0.5, 70.0)).with_cost(Cost::per_unit(0.25))
    }

    #[test]
    fn test_weight_priced() {
        let cost = cost_for(Some(&rice()), 250.0).unwrap();
        assert_float_absolute_eq!(cost, 0.30, 1e-9);
    }

    #[test]
    fn test_unit_priced() {
        assert_eq!(cost_for(Some(&eggs()), 4.0), Some(1.0));
    }

    #[test]
    fn test_unpriced_is_not_free() {
        let water = FoodRecord::weighed("Water", Nutrition::zero());
        let free = FoodRecord::weighed("Tap Water", Nutrition::zero()).with_cost(Cost::per_kilogram(0.0));

        assert_eq!(cost_for(Some(&water), 500.0), None);
        assert_eq!(cost_for(Some(&free), 500.0), Some(0.0));
        assert_ne!(cost_for(Some(&water), 500.0), cost_for(Some(&free), 500.0));
        assert_eq!(cost_for(None, 500.0), None);
    }

    #[test]
    fn test_total_cost_merges_and_flags_unpriced() {
        let water = FoodRecord::weighed("Water", Nutrition::zero());
        let catalog = Catalog::new(vec![rice(), eggs(), water]);
        let entries = vec![
            SelectedFoodEntry::new("Rice", 250.0),
            SelectedFoodEntry::new("eggs", 2.0),
            SelectedFoodEntry::new("Rice", 250.0),
            SelectedFoodEntry::new("Water", 300.0),
        ];

        let summary = total_cost_for(&entries, &catalog);
        assert_float_absolute_eq!(summary.total, 1.10, 1e-9);
        assert_float_absolute_eq!(summary.per_entry["Rice"].unwrap(), 0.60, 1e-9);
        assert_eq!(summary.per_entry["Eggs"], Some(0.5));
        assert_eq!(summary.per_entry["Water"], None);
        assert_eq!(summary.unpriced().collect::<Vec<_>>(), vec!["Water"]);
        assert!(!summary.is_fully_priced());
    }

    #[test]
    fn test_empty_total_is_zero() {
        let entries: Vec<SelectedFoodEntry> = Vec::new();
        let summary = total_cost_for(&entries, &Catalog::default());
        assert_eq!(summary.total, 0.0);
        assert!(summary.is_fully_priced());
    }
}
