use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};
use crate::models::Nutrition;
use crate::planner::constants::{
    DEFAULT_GOAL_CALORIES, DEFAULT_GOAL_CARBS, DEFAULT_GOAL_FATS, DEFAULT_GOAL_PROTEIN,
};

/// A food placed into a timeslot or recipe.
///
/// The quantity is grams or items depending on the referenced food.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedFoodEntry {
    pub food_name: String,
    pub quantity: f64,
}

impl SelectedFoodEntry {
    pub fn new(food_name: impl Into<String>, quantity: f64) -> Self {
        Self {
            food_name: food_name.into(),
            quantity,
        }
    }
}

/// One meal window of a day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeslotPlan {
    #[serde(default)]
    pub selected_foods: Vec<SelectedFoodEntry>,

    /// Nutrition logged by hand, already in final units.
    #[serde(default)]
    pub external_nutrition: Nutrition,
}

/// All timeslots of one calendar day. Stored as one document per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub date: NaiveDate,

    #[serde(default)]
    pub slots: BTreeMap<String, TimeslotPlan>,
}

impl DayPlan {
    /// Create an empty plan with the given slot names.
    pub fn new<S: AsRef<str>>(date: NaiveDate, slot_names: &[S]) -> Self {
        let slots = slot_names
            .iter()
            .map(|s| (s.as_ref().to_string(), TimeslotPlan::default()))
            .collect();
        Self { date, slots }
    }

    pub fn slot(&self, name: &str) -> Result<&TimeslotPlan> {
        self.slots
            .get(name)
            .ok_or_else(|| TrackerError::SlotNotFound(name.to_string()))
    }

    pub fn slot_mut(&mut self, name: &str) -> Result<&mut TimeslotPlan> {
        self.slots
            .get_mut(name)
            .ok_or_else(|| TrackerError::SlotNotFound(name.to_string()))
    }

    /// Append an entry to a slot.
    pub fn add_entry(&mut self, slot: &str, entry: SelectedFoodEntry) -> Result<()> {
        self.slot_mut(slot)?.selected_foods.push(entry);
        Ok(())
    }

    /// Change the quantity of an existing entry in place.
    pub fn set_quantity(&mut self, slot: &str, index: usize, quantity: f64) -> Result<()> {
        let entry = self
            .slot_mut(slot)?
            .selected_foods
            .get_mut(index)
            .ok_or_else(|| TrackerError::EntryOutOfRange {
                slot: slot.to_string(),
                index,
            })?;
        entry.quantity = quantity;
        Ok(())
    }

    pub fn remove_entry(&mut self, slot: &str, index: usize) -> Result<SelectedFoodEntry> {
        let foods = &mut self.slot_mut(slot)?.selected_foods;
        if index >= foods.len() {
            return Err(TrackerError::EntryOutOfRange {
                slot: slot.to_string(),
                index,
            });
        }
        Ok(foods.remove(index))
    }

    /// Move an entry to another slot, keeping its quantity.
    ///
    /// Both slots are checked before anything is removed, so a bad target
    /// leaves the plan untouched.
    pub fn move_entry(&mut self, from: &str, index: usize, to: &str) -> Result<()> {
        self.slot(to)?;
        let entry = self.remove_entry(from, index)?;
        self.add_entry(to, entry)
    }

    /// Exchange the full contents of two slots.
    pub fn swap_slots(&mut self, a: &str, b: &str) -> Result<()> {
        self.slot(a)?;
        self.slot(b)?;
        if a == b {
            return Ok(());
        }
        let first = std::mem::take(self.slot_mut(a)?);
        let second = std::mem::replace(self.slot_mut(b)?, first);
        *self.slot_mut(a)? = second;
        Ok(())
    }

    /// Slots in the configured order, followed by any other stored slots by name.
    pub fn ordered_slots<S: AsRef<str>>(&self, order: &[S]) -> Vec<(&str, &TimeslotPlan)> {
        let configured = order
            .iter()
            .filter_map(|name| self.slots.get_key_value(name.as_ref()));

        let mut ordered: Vec<(&str, &TimeslotPlan)> = Vec::with_capacity(self.slots.len());
        for (name, slot) in configured.chain(self.slots.iter()) {
            if !ordered.iter().any(|(seen, _)| *seen == name.as_str()) {
                ordered.push((name.as_str(), slot));
            }
        }
        ordered
    }

    /// All entries across every slot.
    pub fn entries(&self) -> impl Iterator<Item = &SelectedFoodEntry> {
        self.slots.values().flat_map(|s| s.selected_foods.iter())
    }
}

/// Daily macro targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Goal {
    pub protein: f64,
    pub fats: f64,
    pub carbs: f64,
    pub calories: f64,
}

impl Default for Goal {
    fn default() -> Self {
        Self {
            protein: DEFAULT_GOAL_PROTEIN,
            fats: DEFAULT_GOAL_FATS,
            carbs: DEFAULT_GOAL_CARBS,
            calories: DEFAULT_GOAL_CALORIES,
        }
    }
}

/// A quick-add preset. Without a quantity the food's default portion is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    pub food: String,

    #[serde(default)]
    pub quantity: Option<f64>,
}
