use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("Food is hidden from selection: {0}")]
    HiddenFood(String),

    #[error("Timeslot not found: {0}")]
    SlotNotFound(String),

    #[error("No entry {index} in timeslot {slot}")]
    EntryOutOfRange { slot: String, index: usize },

    #[error("Invalid recipe: {0}")]
    Validation(#[from] RecipeValidationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Reasons a recipe draft cannot be turned into a catalog food.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecipeValidationError {
    #[error("recipe needs a name")]
    MissingName,

    #[error("recipe needs at least one ingredient")]
    NoIngredients,

    #[error("servings must be at least 1 (got {0})")]
    NonPositiveServings(u32),

    #[error("ingredient '{0}' needs a positive quantity")]
    NonPositiveQuantity(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
