pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{RecipeValidationError, Result, TrackerError};
pub use models::{Catalog, FoodRecord, Nutrition, SelectedFoodEntry};
