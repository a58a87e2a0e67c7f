pub mod aggregate;
pub mod calculations;
pub mod constants;
pub mod cost;
pub mod preview;
pub mod progress;
pub mod recipe;
pub mod units;

pub use aggregate::{
    aggregate, aggregate_across_slots, aggregate_slot, day_cost, day_totals, quick_add,
    select_food, slot_totals,
};
pub use calculations::{macros_for, macros_for_entry, macros_for_many};
pub use cost::{CostSummary, cost_for, total_cost_for};
pub use preview::{
    CostPreview, DayPreview, GoalPreview, Preview, preview, preview_cost, preview_day,
    preview_with_goal,
};
pub use progress::{GoalProgress, percentage};
pub use recipe::{finalize, normalize, recipe_food_name};
pub use units::{
    QuantityKind, check_quantity, default_quantity, portion, quantity_kind, resolve_multiplier,
};
