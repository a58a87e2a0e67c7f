/// Reference weight that per-weight nutrition is expressed against.
pub const REFERENCE_GRAMS: f64 = 100.0;

/// Grams in a kilogram, for per-kilogram pricing.
pub const GRAMS_PER_KILOGRAM: f64 = 1000.0;

/// Default quantity for a counted food with no preset portion.
pub const DEFAULT_UNIT_QUANTITY: f64 = 1.0;

/// Default quantity in grams for a weighed food with no preset portion.
pub const DEFAULT_WEIGHT_QUANTITY: f64 = REFERENCE_GRAMS;

/// Upper bound of every progress percentage.
pub const PERCENT_MAX: f64 = 100.0;

/// Smallest goal value a percentage is computed against.
pub const MIN_GOAL_DIVISOR: f64 = 1.0;

/// Appended to a recipe's name when it becomes a catalog food.
pub const RECIPE_NAME_SUFFIX: &str = " (recipe)";

// ─────────────────────────────────────────────────────────────────────────────
// Static defaults used when no config file provides them
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_GOAL_PROTEIN: f64 = 150.0;
pub const DEFAULT_GOAL_FATS: f64 = 70.0;
pub const DEFAULT_GOAL_CARBS: f64 = 250.0;
pub const DEFAULT_GOAL_CALORIES: f64 = 2500.0;

/// Timeslots created for a day with no stored plan.
pub const DEFAULT_TIMESLOTS: [&str; 2] = ["afternoon", "evening"];

pub const DEFAULT_CURRENCY: &str = "€";

/// Minimum Jaro-Winkler score for a fuzzy food-name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Maximum fuzzy candidates offered in a selection prompt.
pub const FUZZY_MATCH_LIMIT: usize = 5;
