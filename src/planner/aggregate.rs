use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::error::{Result, TrackerError};
use crate::models::{Catalog, DayPlan, Favorite, Nutrition, SelectedFoodEntry, TimeslotPlan};
use crate::planner::calculations::macros_for_entry;
use crate::planner::cost::{CostSummary, total_cost_for};
use crate::planner::units::{check_quantity, default_quantity};

/// Macros of `entries` plus hand-logged nutrition.
///
/// External nutrition is already in final units and is added unscaled. The
/// sum starts from it and adds entries in order, so appending one more entry
/// is exactly `previous + macros_for(entry)`.
pub fn aggregate(
    entries: &[SelectedFoodEntry],
    external_nutrition: &Nutrition,
    catalog: &Catalog,
) -> Nutrition {
    entries
        .iter()
        .fold(*external_nutrition, |acc, e| acc + macros_for_entry(e, catalog))
}

pub fn aggregate_slot(slot: &TimeslotPlan, catalog: &Catalog) -> Nutrition {
    aggregate(&slot.selected_foods, &slot.external_nutrition, catalog)
}

/// Element-wise sum of every slot's aggregate.
pub fn aggregate_across_slots<'a>(
    slots: impl IntoIterator<Item = &'a TimeslotPlan>,
    catalog: &Catalog,
) -> Nutrition {
    slots
        .into_iter()
        .map(|slot| aggregate_slot(slot, catalog))
        .sum()
}

/// Totals of each named slot of a day.
pub fn slot_totals(day: &DayPlan, catalog: &Catalog) -> BTreeMap<String, Nutrition> {
    day.slots
        .iter()
        .map(|(name, slot)| (name.clone(), aggregate_slot(slot, catalog)))
        .collect()
}

/// Daily aggregate across every slot. Always recomputed from the plan.
pub fn day_totals(day: &DayPlan, catalog: &Catalog) -> Nutrition {
    aggregate_across_slots(day.slots.values(), catalog)
}

/// Cost of every entry of the day.
pub fn day_cost(day: &DayPlan, catalog: &Catalog) -> CostSummary {
    total_cost_for(day.entries(), catalog)
}

/// Add a catalog food to a slot.
///
/// Hidden foods cannot be newly selected and the quantity must be positive.
/// Without a quantity the food's default portion is used.
pub fn select_food(
    day: &mut DayPlan,
    slot: &str,
    food_name: &str,
    quantity: Option<f64>,
    catalog: &Catalog,
) -> Result<SelectedFoodEntry> {
    let food = catalog
        .get(food_name)
        .ok_or_else(|| TrackerError::FoodNotFound(food_name.to_string()))?;
    if food.hidden {
        warn!(food = %food.name, "refusing to select hidden food");
        return Err(TrackerError::HiddenFood(food.name.clone()));
    }

    let quantity = check_quantity(quantity.unwrap_or_else(|| default_quantity(food)))?;

    let entry = SelectedFoodEntry::new(food.name.clone(), quantity);
    day.add_entry(slot, entry.clone())?;
    info!(slot, food = %entry.food_name, quantity, "added food to slot");
    Ok(entry)
}

/// Insert a favorite into a slot.
pub fn quick_add(
    day: &mut DayPlan,
    slot: &str,
    favorite: &Favorite,
    catalog: &Catalog,
) -> Result<SelectedFoodEntry> {
    select_food(day, slot, &favorite.food, favorite.quantity, catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodRecord;
    use chrono::NaiveDate;

    fn catalog() -> Catalog {
        let mut hidden = FoodRecord::weighed("Old Bread", Nutrition::new(9.0, 3.0, 49.0, 265.0));
        hidden.hidden = true;
        Catalog::new(vec![
            FoodRecord::counted("Eggs", Nutrition::new(6.0, 5.0, 0.5, 70.0)),
            FoodRecord::weighed("Rice", Nutrition::new(2.5, 0.3, 28.0, 130.0)),
            FoodRecord::weighed("Bar", Nutrition::new(20.0, 10.0, 40.0, 350.0))
                .with_fixed_amounts(vec![50.0]),
            hidden,
        ])
    }

    fn day() -> DayPlan {
        DayPlan::new(NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(), &["afternoon", "evening"])
    }

    #[test]
    fn test_aggregate_adds_external_unscaled() {
        let entries = vec![SelectedFoodEntry::new("Eggs", 2.0)];
        let external = Nutrition::new(1.0, 1.0, 1.0, 100.0);
        let total = aggregate(&entries, &external, &catalog());
        assert_eq!(total, Nutrition::new(13.0, 11.0, 2.0, 240.0));
    }

    #[test]
    fn test_day_totals_include_every_slot() {
        let catalog = catalog();
        let mut day = day();
        day.add_entry("afternoon", SelectedFoodEntry::new("Eggs", 1.0)).unwrap();
        day.add_entry("evening", SelectedFoodEntry::new("Eggs", 1.0)).unwrap();
        day.slot_mut("evening").unwrap().external_nutrition.calories = 60.0;

        let per_slot = slot_totals(&day, &catalog);
        assert_eq!(per_slot["afternoon"].calories, 70.0);
        assert_eq!(per_slot["evening"].calories, 130.0);
        assert_eq!(day_totals(&day, &catalog).calories, 200.0);
    }

    #[test]
    fn test_select_food_uses_default_portion() {
        let catalog = catalog();
        let mut day = day();
        let bar = select_food(&mut day, "afternoon", "bar", None, &catalog).unwrap();
        let rice = select_food(&mut day, "afternoon", "Rice", None, &catalog).unwrap();

        assert_eq!(bar, SelectedFoodEntry::new("Bar", 50.0));
        assert_eq!(rice.quantity, 100.0);
    }

    #[test]
    fn test_quick_add_rejects_hidden_and_unknown() {
        let catalog = catalog();
        let mut day = day();
        let hidden = Favorite {
            food: "Old Bread".to_string(),
            quantity: Some(50.0),
        };
        let unknown = Favorite {
            food: "Unicorn".to_string(),
            quantity: None,
        };

        assert!(matches!(
            quick_add(&mut day, "afternoon", &hidden, &catalog),
            Err(TrackerError::HiddenFood(_))
        ));
        assert!(matches!(
            quick_add(&mut day, "afternoon", &unknown, &catalog),
            Err(TrackerError::FoodNotFound(_))
        ));
        assert_eq!(day.entries().count(), 0);
    }

    #[test]
    fn test_hidden_food_in_history_still_counts() {
        let catalog = catalog();
        let mut day = day();
        day.add_entry("evening", SelectedFoodEntry::new("Old Bread", 100.0)).unwrap();
        assert_eq!(day_totals(&day, &catalog).calories, 265.0);
    }

    #[test]
    fn test_quick_add_with_quantity() {
        let catalog = catalog();
        let mut day = day();
        let favorite = Favorite {
            food: "eggs".to_string(),
            quantity: Some(3.0),
        };
        quick_add(&mut day, "evening", &favorite, &catalog).unwrap();
        assert_eq!(
            day.slot("evening").unwrap().selected_foods,
            vec![SelectedFoodEntry::new("Eggs", 3.0)]
        );
    }

    #[test]
    fn test_select_food_rejects_non_positive_quantity() {
        let catalog = catalog();
        let mut day = day();
        for bad in [-5.0, 0.0] {
            assert!(matches!(
                select_food(&mut day, "afternoon", "Rice", Some(bad), &catalog),
                Err(TrackerError::InvalidInput(_))
            ));
        }
        assert_eq!(day.entries().count(), 0);
        assert_eq!(day_totals(&day, &catalog), Nutrition::zero());
    }
}
