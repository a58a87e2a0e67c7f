use std::collections::BTreeMap;

use tracing::info;

use crate::models::{Catalog, DayPlan, FoodRecord, Goal, Nutrition};
use crate::planner::{CostSummary, GoalProgress, day_cost, day_totals, slot_totals};

/// Holds the current catalog snapshot.
///
/// Every replacement or write-back bumps `revision`; totals derived from an
/// older revision must be recomputed before they are shown again.
pub struct CatalogManager {
    catalog: Catalog,
    revision: u64,
}

impl CatalogManager {
    /// Create a new manager from a list of foods.
    pub fn new(foods: Vec<FoodRecord>) -> Self {
        Self {
            catalog: Catalog::new(foods),
            revision: 0,
        }
    }

    /// Swap in a whole new snapshot.
    pub fn replace_snapshot(&mut self, foods: Vec<FoodRecord>) {
        self.catalog = Catalog::new(foods);
        self.revision += 1;
        info!(
            revision = self.revision,
            foods = self.catalog.len(),
            "catalog snapshot replaced"
        );
    }

    /// Insert or replace one food, e.g. a normalized recipe.
    pub fn upsert(&mut self, food: FoodRecord) -> Option<FoodRecord> {
        self.revision += 1;
        self.catalog.insert(food)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Get a food by name (case-insensitive). Hidden foods resolve too.
    pub fn get_food(&self, name: &str) -> Option<&FoodRecord> {
        self.catalog.get(name)
    }

    /// Foods offered for selection, sorted by name.
    pub fn selectable(&self) -> Vec<&FoodRecord> {
        let mut foods: Vec<&FoodRecord> = self.catalog.foods().filter(|f| !f.hidden).collect();
        foods.sort_by_key(|f| f.key());
        foods
    }

    /// Foods synthesized from recipes.
    pub fn recipes(&self) -> Vec<&FoodRecord> {
        let mut foods: Vec<&FoodRecord> = self.catalog.foods().filter(|f| f.is_recipe()).collect();
        foods.sort_by_key(|f| f.key());
        foods
    }

    /// Convert state to a list of foods for serialization.
    pub fn to_foods(&self) -> Vec<FoodRecord> {
        self.catalog.foods().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Recompute every derived total of a day from the current snapshot.
    pub fn day_report(&self, day: &DayPlan, goal: &Goal) -> DayReport {
        let totals = day_totals(day, &self.catalog);
        DayReport {
            revision: self.revision,
            slot_totals: slot_totals(day, &self.catalog),
            totals,
            cost: day_cost(day, &self.catalog),
            progress: GoalProgress::from_totals(&totals, goal),
        }
    }
}

/// Derived totals of a day, tagged with the catalog revision they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct DayReport {
    pub revision: u64,
    pub slot_totals: BTreeMap<String, Nutrition>,
    pub totals: Nutrition,
    pub cost: CostSummary,
    pub progress: GoalProgress,
}

impl DayReport {
    /// False once the catalog has changed since this report was computed.
    pub fn is_current(&self, manager: &CatalogManager) -> bool {
        self.revision == manager.revision()
    }
}
