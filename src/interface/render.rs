use crate::models::{Catalog, DayPlan, FoodRecord, NormalizedRecipe, Nutrition};
use crate::planner::{
    CostPreview, GoalPreview, GoalProgress, QuantityKind, cost_for, macros_for_entry, quantity_kind,
};
use crate::state::DayReport;

/// Format a cost, showing "n/a" for unpriced values rather than zero.
pub fn format_cost(cost: Option<f64>, currency: &str) -> String {
    match cost {
        Some(value) => format!("{}{:.2}", currency, value),
        None => "n/a".to_string(),
    }
}

fn format_macros(n: &Nutrition) -> String {
    format!(
        "P:{:.1} F:{:.1} C:{:.1} | {:.0} kcal",
        n.protein, n.fats, n.carbs, n.calories
    )
}

fn format_quantity(food: Option<&FoodRecord>, quantity: f64) -> String {
    match food.map(quantity_kind) {
        Some(QuantityKind::Units) => format!("{}x", quantity),
        Some(QuantityKind::Grams) => format!("{}g", quantity),
        None => format!("{} (?)", quantity),
    }
}

/// Text progress bar for a 0..=100 percentage.
fn progress_bar(pct: f64) -> String {
    let filled = (pct / 10.0).round() as usize;
    format!("[{}{}] {:>3.0}%", "#".repeat(filled), ".".repeat(10 - filled.min(10)), pct)
}

fn display_progress(progress: &GoalProgress) {
    println!("  Protein  {}", progress_bar(progress.protein));
    println!("  Fats     {}", progress_bar(progress.fats));
    println!("  Carbs    {}", progress_bar(progress.carbs));
    println!("  Calories {}", progress_bar(progress.calories));
}

/// Display a day's slots, totals, cost and goal progress.
pub fn display_day(
    day: &DayPlan,
    report: &DayReport,
    catalog: &Catalog,
    slot_order: &[String],
    currency: &str,
) {
    println!();
    println!("=== {} ===", day.date.format("%A %Y-%m-%d"));

    for (name, slot) in day.ordered_slots(slot_order) {
        println!();
        println!("--- {} ---", name);

        if slot.selected_foods.is_empty() {
            println!("  (no foods)");
        }

        let max_name_len = slot
            .selected_foods
            .iter()
            .map(|e| e.food_name.len())
            .max()
            .unwrap_or(10);

        for (i, entry) in slot.selected_foods.iter().enumerate() {
            let food = catalog.get(&entry.food_name);
            let macros = macros_for_entry(entry, catalog);
            let cost = cost_for(food, entry.quantity);
            let missing = if food.is_none() { "  [not in catalog]" } else { "" };

            println!(
                "{:>3}. {:<width$} {:>8} - {} | {}{}",
                i,
                entry.food_name,
                format_quantity(food, entry.quantity),
                format_macros(&macros),
                format_cost(cost, currency),
                missing,
                width = max_name_len
            );
        }

        if slot.external_nutrition != Nutrition::zero() {
            println!("     External: {}", format_macros(&slot.external_nutrition));
        }
        if let Some(totals) = report.slot_totals.get(name) {
            println!("     Subtotal: {}", format_macros(totals));
        }
    }

    println!();
    println!("--- Day Total ---");
    println!("  {}", format_macros(&report.totals));

    let unpriced: Vec<&str> = report.cost.unpriced().collect();
    if unpriced.is_empty() {
        println!("  Cost: {}", format_cost(Some(report.cost.total), currency));
    } else {
        println!(
            "  Cost: {} (unpriced: {})",
            format_cost(Some(report.cost.total), currency),
            unpriced.join(", ")
        );
    }

    println!();
    println!("--- Goal Progress ---");
    display_progress(&report.progress);
    println!();
}

/// Display the before/after of a candidate addition.
pub fn display_preview(food_name: &str, totals: &GoalPreview, cost: &CostPreview, currency: &str) {
    let before = &totals.totals.before;
    let after = &totals.totals.after;

    println!();
    println!("=== Preview: {} ===", food_name);
    println!(
        "  Protein  {:>7.1} -> {:>7.1}  ({:>3.0}% -> {:>3.0}%)",
        before.protein, after.protein, totals.progress.before.protein, totals.progress.after.protein
    );
    println!(
        "  Fats     {:>7.1} -> {:>7.1}  ({:>3.0}% -> {:>3.0}%)",
        before.fats, after.fats, totals.progress.before.fats, totals.progress.after.fats
    );
    println!(
        "  Carbs    {:>7.1} -> {:>7.1}  ({:>3.0}% -> {:>3.0}%)",
        before.carbs, after.carbs, totals.progress.before.carbs, totals.progress.after.carbs
    );
    println!(
        "  Calories {:>7.0} -> {:>7.0}  ({:>3.0}% -> {:>3.0}%)",
        before.calories,
        after.calories,
        totals.progress.before.calories,
        totals.progress.after.calories
    );
    println!(
        "  Cost     {} -> {}  (item: {})",
        format_cost(Some(cost.before), currency),
        format_cost(Some(cost.after), currency),
        format_cost(cost.candidate, currency)
    );
    println!();
}

/// Display a normalized recipe.
pub fn display_recipe(recipe: &NormalizedRecipe, servings: u32, currency: &str) {
    let priced = recipe.food.cost.is_some();

    println!();
    println!("=== {} ===", recipe.food.name);
    println!("  Total weight: {:.0}g", recipe.total_weight);
    if recipe.excluded_unit_ingredients > 0 {
        println!(
            "  Note: {} counted ingredient(s) not included in weight",
            recipe.excluded_unit_ingredients
        );
    }
    println!("  Total:       {}", format_macros(&recipe.total_nutrition));
    println!("  Per 100g:    {}", format_macros(&recipe.nutrition_per_100g));
    println!(
        "  Per serving: {}  ({} servings)",
        format_macros(&recipe.nutrition_per_serving),
        servings
    );
    println!(
        "  Cost: {} total, {}/kg, {}/serving",
        format_cost(priced.then_some(recipe.total_cost), currency),
        format_cost(priced.then_some(recipe.cost_per_kilogram), currency),
        format_cost(priced.then_some(recipe.cost_per_serving), currency)
    );
    if priced && recipe.has_unpriced_ingredients {
        println!("  Some ingredients have no price; cost is incomplete.");
    }
    println!();
}

/// Display a simple list of foods with their details.
pub fn display_food_list(foods: &[&FoodRecord], title: &str, currency: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for food in foods {
        let basis = match quantity_kind(food) {
            QuantityKind::Grams => "per 100g",
            QuantityKind::Units => "per item",
        };
        let tag = if food.is_recipe() { " [recipe]" } else { "" };
        println!(
            "  {}{} - {} {} | {}",
            food.name,
            tag,
            format_macros(&food.nutrition),
            basis,
            format_cost(food.cost.map(|c| c.amount), currency)
        );
    }

    println!();
}
