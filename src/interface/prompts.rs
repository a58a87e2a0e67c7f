use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{Result, TrackerError};
use crate::models::FoodRecord;
use crate::planner::constants::{FUZZY_MATCH_LIMIT, FUZZY_MATCH_THRESHOLD};
use crate::planner::{check_quantity, default_quantity, quantity_kind};

/// Foods whose name is close to `input`, best match first.
pub fn fuzzy_candidates<'a>(foods: &[&'a FoodRecord], input: &str) -> Vec<(&'a FoodRecord, f64)> {
    let needle = input.trim().to_lowercase();
    let mut candidates: Vec<(&FoodRecord, f64)> = foods
        .iter()
        .map(|f| (*f, jaro_winkler(&f.key(), &needle)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.truncate(FUZZY_MATCH_LIMIT);
    candidates
}

/// Resolve typed text to a selectable food, asking when the match is fuzzy.
///
/// Returns `None` when nothing matched or the user declined every suggestion.
pub fn resolve_food<'a>(foods: &[&'a FoodRecord], input: &str) -> Result<Option<&'a FoodRecord>> {
    let input = input.trim();

    // Exact match first (case-insensitive)
    if let Some(food) = foods.iter().find(|f| f.name.eq_ignore_ascii_case(input)) {
        return Ok(Some(*food));
    }

    let candidates = fuzzy_candidates(foods, input);
    match candidates.as_slice() {
        [] => {
            println!("No matching food found for '{}'", input);
            Ok(None)
        }
        [(food, _)] => {
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", food.name))
                .default(true)
                .interact()?;
            Ok(confirm.then_some(*food))
        }
        _ => {
            let mut options: Vec<String> = candidates.iter().map(|(f, _)| f.name.clone()).collect();
            options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&options)
                .default(0)
                .interact()?;

            Ok(candidates.get(selection).map(|(f, _)| *f))
        }
    }
}

/// Prompt for a quantity, offering the food's default portion.
pub fn prompt_quantity(food: &FoodRecord) -> Result<f64> {
    let kind = quantity_kind(food);
    let input: String = Input::new()
        .with_prompt(format!("Quantity of {} ({})", food.name, kind.suffix()))
        .default(default_quantity(food).to_string())
        .interact_text()?;

    let quantity: f64 = input
        .trim()
        .parse()
        .map_err(|_| TrackerError::InvalidInput("Invalid number".to_string()))?;

    check_quantity(quantity)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
