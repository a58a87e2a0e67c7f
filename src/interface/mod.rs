pub mod prompts;
pub mod render;

pub use prompts::{fuzzy_candidates, prompt_quantity, prompt_yes_no, resolve_food};
pub use render::{display_day, display_food_list, display_preview, display_recipe, format_cost};
