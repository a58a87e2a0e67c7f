mod manager;
mod persistence;

pub use manager::{CatalogManager, DayReport};
pub use persistence::{
    day_plan_path, load_catalog, load_day_plan, load_recipe_draft, save_catalog, save_day_plan,
};
