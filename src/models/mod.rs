mod catalog;
mod food;
mod plan;
mod recipe;

pub use catalog::Catalog;
pub use food::{Cost, CostUnit, FoodRecord, Measure, Nutrition};
pub use plan::{DayPlan, Favorite, Goal, SelectedFoodEntry, TimeslotPlan};
pub use recipe::{NormalizedRecipe, RecipeDraft};
