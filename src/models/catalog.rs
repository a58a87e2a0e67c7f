use std::collections::HashMap;

use crate::models::FoodRecord;

/// Snapshot of the food catalog keyed by lowercase name.
///
/// Calculations always receive a whole snapshot; a newer catalog replaces
/// this value instead of patching it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    foods: HashMap<String, FoodRecord>,
}

impl Catalog {
    /// Build a snapshot. Later duplicates (case-insensitive) win.
    pub fn new(foods: impl IntoIterator<Item = FoodRecord>) -> Self {
        let mut map = HashMap::new();
        for food in foods {
            map.insert(food.key(), food);
        }
        Self { foods: map }
    }

    /// Resolve a food by name (case-insensitive). Hidden foods resolve too.
    pub fn get(&self, name: &str) -> Option<&FoodRecord> {
        self.foods.get(&name.to_lowercase())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Insert or replace a food, returning the previous entry.
    pub fn insert(&mut self, food: FoodRecord) -> Option<FoodRecord> {
        self.foods.insert(food.key(), food)
    }

    pub fn foods(&self) -> impl Iterator<Item = &FoodRecord> {
        self.foods.values()
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}
