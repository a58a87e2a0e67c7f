//! Application configuration loaded from `config.toml`.
//!
//! Every key is optional. A missing file means all defaults: the static goal,
//! the default timeslots and no favorites.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{Result, TrackerError};
use crate::models::{Favorite, Goal};
use crate::planner::constants::{DEFAULT_CURRENCY, DEFAULT_TIMESLOTS};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Symbol printed before costs.
    pub currency: String,

    /// Slots created for a day with no stored plan.
    pub timeslots: Vec<String>,

    pub goal: Goal,

    /// Quick-add presets.
    pub favorites: Vec<Favorite>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            timeslots: DEFAULT_TIMESLOTS.iter().map(|s| s.to_string()).collect(),
            goal: Goal::default(),
            favorites: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Find a favorite by food name (case-insensitive).
    pub fn favorite(&self, food: &str) -> Option<&Favorite> {
        self.favorites
            .iter()
            .find(|f| f.food.eq_ignore_ascii_case(food))
    }
}

/// Load configuration, falling back to defaults when the file does not exist.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed, or if it
/// declares no timeslots.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(AppConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| TrackerError::Config(format!("Failed to read config file: {e}")))?;
    let config = parse_config(&contents)?;
    info!(path = %path.display(), "loaded configuration");
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents)
        .map_err(|e| TrackerError::Config(format!("Invalid config file: {e}")))?;
    if config.timeslots.is_empty() {
        return Err(TrackerError::Config(
            "at least one timeslot is required".to_string(),
        ));
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            currency = "$"
            timeslots = ["morning", "afternoon", "evening"]

            [goal]
            protein = 120.0
            fats = 60.0
            carbs = 200.0
            calories = 2100.0

            [[favorites]]
            food = "Eggs"
            quantity = 2.0

            [[favorites]]
            food = "Protein Bar"
        "#;

        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.currency, "$");
        assert_eq!(config.timeslots.len(), 3);
        assert_eq!(config.goal.calories, 2100.0);
        assert_eq!(config.favorites.len(), 2);
        assert_eq!(config.favorite("eggs").unwrap().quantity, Some(2.0));
        assert_eq!(config.favorite("Protein Bar").unwrap().quantity, None);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.timeslots, vec!["afternoon", "evening"]);
    }

    #[test]
    fn test_rejects_no_timeslots() {
        assert!(matches!(
            parse_config("timeslots = []"),
            Err(TrackerError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        assert!(matches!(
            parse_config("goal = "),
            Err(TrackerError::Config(_))
        ));
        assert!(matches!(
            parse_config("timeslots = \"evening\""),
            Err(TrackerError::Config(_))
        ));
    }

    #[test]
    fn test_unparsable_file_is_config_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[goal\nprotein = 1").unwrap();
        assert!(matches!(load_config(&path), Err(TrackerError::Config(_))));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = load_config("/nonexistent/config.toml").unwrap();
        assert_eq!(config.goal, Goal::default());
    }
}
