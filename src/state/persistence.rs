use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::{Result, TrackerError};
use crate::models::{Cost, CostUnit, DayPlan, FoodRecord, Nutrition, RecipeDraft};

/// Load the food catalog from JSON, or CSV when the extension is `.csv`.
///
/// Deduplicates by lowercase name (last occurrence wins). Entries with
/// negative nutrition or price, a blank name or a non-positive portion are
/// skipped.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<FoodRecord>> {
    let path = path.as_ref();
    let foods = if is_csv(path) {
        load_catalog_csv(path)?
    } else {
        let content = fs::read_to_string(path)?;
        serde_json::from_str::<Vec<FoodRecord>>(&content)?
    };

    let mut seen: HashMap<String, FoodRecord> = HashMap::new();
    for food in foods {
        if !food.is_valid() {
            warn!(food = %food.name, "skipping invalid catalog entry");
            continue;
        }
        if food.has_mismatched_cost_unit() {
            warn!(
                food = %food.name,
                measure = ?food.measure,
                "cost unit does not match how the food is measured"
            );
        }
        seen.insert(food.key(), food);
    }
    info!(path = %path.display(), foods = seen.len(), "loaded catalog");

    Ok(seen.into_values().collect())
}

/// Save the catalog as JSON, sorted by name. CSV catalogs are import-only.
pub fn save_catalog<P: AsRef<Path>>(path: P, foods: &[FoodRecord]) -> Result<()> {
    if is_csv(path.as_ref()) {
        return Err(TrackerError::InvalidInput(
            "CSV catalogs are read-only; use a JSON catalog to save".to_string(),
        ));
    }

    let mut seen: HashMap<String, &FoodRecord> = HashMap::new();
    for food in foods {
        seen.insert(food.key(), food);
    }

    let mut deduped: Vec<&FoodRecord> = seen.into_values().collect();
    deduped.sort_by_key(|f| f.key());
    let json = serde_json::to_string_pretty(&deduped)?;
    fs::write(path, json)?;
    Ok(())
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}

/// One row of a flat CSV catalog export.
#[derive(Debug, Deserialize)]
struct CatalogRow {
    name: String,
    protein: f64,
    fats: f64,
    carbs: f64,
    calories: f64,
    #[serde(default)]
    is_unit_food: bool,
    #[serde(default)]
    cost: Option<f64>,
    #[serde(default)]
    cost_unit: Option<CostUnit>,
    #[serde(default)]
    fixed_amount: Option<f64>,
    #[serde(default)]
    hidden: bool,
}

impl From<CatalogRow> for FoodRecord {
    fn from(row: CatalogRow) -> Self {
        let nutrition = Nutrition::new(row.protein, row.fats, row.carbs, row.calories);
        let mut food = if row.is_unit_food {
            FoodRecord::counted(row.name, nutrition)
        } else {
            FoodRecord::weighed(row.name, nutrition)
        };

        if let Some(amount) = row.cost {
            let unit = row.cost_unit.unwrap_or(if row.is_unit_food {
                CostUnit::PerUnit
            } else {
                CostUnit::PerKilogram
            });
            food = food.with_cost(Cost { amount, unit });
        }
        if let Some(amount) = row.fixed_amount {
            food = food.with_fixed_amounts(vec![amount]);
        }
        food.hidden = row.hidden;
        food
    }
}

fn load_catalog_csv(path: &Path) -> Result<Vec<FoodRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut foods = Vec::new();
    for row in reader.deserialize::<CatalogRow>() {
        foods.push(row?.into());
    }
    Ok(foods)
}

/// Path of the plan document for `date`.
pub fn day_plan_path<P: AsRef<Path>>(dir: P, date: NaiveDate) -> PathBuf {
    dir.as_ref().join(format!("{}.json", date.format("%Y-%m-%d")))
}

/// Load the plan for `date`, or an empty plan with `slot_names`.
///
/// Slots named in `slot_names` but absent from the stored plan are added empty.
pub fn load_day_plan<P: AsRef<Path>, S: AsRef<str>>(
    dir: P,
    date: NaiveDate,
    slot_names: &[S],
) -> Result<DayPlan> {
    let path = day_plan_path(dir, date);
    if !path.exists() {
        debug!(path = %path.display(), "no stored plan, starting empty");
        return Ok(DayPlan::new(date, slot_names));
    }

    let content = fs::read_to_string(&path)?;
    let mut plan: DayPlan = serde_json::from_str(&content)?;
    for name in slot_names {
        plan.slots.entry(name.as_ref().to_string()).or_default();
    }
    Ok(plan)
}

/// Write the whole plan document for its day.
pub fn save_day_plan<P: AsRef<Path>>(dir: P, plan: &DayPlan) -> Result<()> {
    fs::create_dir_all(dir.as_ref())?;
    let path = day_plan_path(dir, plan.date);
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(&path, json)?;
    info!(path = %path.display(), "saved day plan");
    Ok(())
}

pub fn load_recipe_draft<P: AsRef<Path>>(path: P) -> Result<RecipeDraft> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
