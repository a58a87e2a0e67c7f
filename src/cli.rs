use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// MealTracker: macro and cost totals for foods, recipes, and daily meal plans.
#[derive(Parser, Debug)]
#[command(name = "meal_tracker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog (JSON, or CSV by extension).
    #[arg(short, long, default_value = "foods.json")]
    pub catalog: String,

    /// Directory holding one plan document per day.
    #[arg(short, long, default_value = "plans")]
    pub plans_dir: String,

    /// Path to the TOML configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,

    /// Day to work on (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    pub date: Option<NaiveDate>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show every timeslot of the day with totals, cost and goal progress.
    Day,

    /// List foods available for selection.
    Catalog {
        /// Include hidden foods.
        #[arg(long)]
        all: bool,

        /// Only list foods made from recipes.
        #[arg(long, conflicts_with = "all")]
        recipes: bool,
    },

    /// Preview and add a food to a timeslot.
    Add {
        /// Timeslot to add to.
        slot: String,

        /// Food name (fuzzy matched).
        food: String,

        /// Grams or item count. Prompted when omitted.
        quantity: Option<f64>,

        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },

    /// Add a configured favorite to a timeslot.
    QuickAdd {
        slot: String,

        /// Food name of the favorite.
        favorite: String,
    },

    /// Change the quantity of an entry.
    Set {
        slot: String,
        index: usize,
        quantity: f64,
    },

    /// Remove an entry from a timeslot.
    Remove { slot: String, index: usize },

    /// Move an entry to another timeslot, keeping its quantity.
    Move {
        from: String,
        index: usize,
        to: String,
    },

    /// Exchange the contents of two timeslots.
    Swap { first: String, second: String },

    /// Normalize a recipe draft into a catalog food.
    Recipe {
        /// Path to the recipe draft JSON.
        draft: String,

        /// Write the resulting food back to the catalog.
        #[arg(long)]
        save: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Day
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_filters() {
        let cli = Cli::try_parse_from(["meal_tracker", "catalog", "--recipes"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Catalog {
                all: false,
                recipes: true
            })
        ));
        assert!(Cli::try_parse_from(["meal_tracker", "catalog", "--all", "--recipes"]).is_err());
    }
}
