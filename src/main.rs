use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use meal_tracker_rs::cli::{Cli, Command};
use meal_tracker_rs::config::{AppConfig, load_config};
use meal_tracker_rs::error::{Result, TrackerError};
use meal_tracker_rs::interface::{
    display_day, display_food_list, display_preview, display_recipe, prompt_quantity,
    prompt_yes_no, resolve_food,
};
use meal_tracker_rs::models::{DayPlan, SelectedFoodEntry};
use meal_tracker_rs::planner::{check_quantity, finalize, preview_day, quick_add, select_food};
use meal_tracker_rs::state::{
    CatalogManager, load_catalog, load_day_plan, load_recipe_draft, save_catalog, save_day_plan,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Everything a command needs: config, catalog snapshot and the day's plan.
struct Session {
    config: AppConfig,
    manager: CatalogManager,
    day: DayPlan,
    plans_dir: String,
}

impl Session {
    fn open(cli: &Cli) -> Result<Self> {
        let config = load_config(&cli.config)?;

        let catalog_path = Path::new(&cli.catalog);
        let foods = if catalog_path.exists() {
            load_catalog(catalog_path)?
        } else {
            eprintln!("Catalog file not found: {} (starting empty)", cli.catalog);
            Vec::new()
        };
        let manager = CatalogManager::new(foods);

        let date = cli
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        let day = load_day_plan(&cli.plans_dir, date, config.timeslots.as_slice())?;

        Ok(Self {
            config,
            manager,
            day,
            plans_dir: cli.plans_dir.clone(),
        })
    }

    fn save_day(&self) -> Result<()> {
        save_day_plan(&self.plans_dir, &self.day)
    }

    fn show_day(&self) {
        let report = self.manager.day_report(&self.day, &self.config.goal);
        display_day(
            &self.day,
            &report,
            self.manager.catalog(),
            &self.config.timeslots,
            &self.config.currency,
        );
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut session = Session::open(&cli)?;

    match cli.command.unwrap_or_default() {
        Command::Day => {
            session.show_day();
            Ok(())
        }
        Command::Catalog { all, recipes } => cmd_catalog(&session, all, recipes),
        Command::Add {
            slot,
            food,
            quantity,
            yes,
        } => cmd_add(&mut session, &slot, &food, quantity, yes),
        Command::QuickAdd { slot, favorite } => cmd_quick_add(&mut session, &slot, &favorite),
        Command::Set {
            slot,
            index,
            quantity,
        } => {
            session
                .day
                .set_quantity(&slot, index, check_quantity(quantity)?)?;
            commit(&session)
        }
        Command::Remove { slot, index } => {
            let removed = session.day.remove_entry(&slot, index)?;
            println!("Removed {} from {}.", removed.food_name, slot);
            commit(&session)
        }
        Command::Move { from, index, to } => {
            session.day.move_entry(&from, index, &to)?;
            commit(&session)
        }
        Command::Swap { first, second } => {
            session.day.swap_slots(&first, &second)?;
            commit(&session)
        }
        Command::Recipe { draft, save } => cmd_recipe(&mut session, &cli.catalog, &draft, save),
    }
}

/// Save the day and show the recomputed totals.
fn commit(session: &Session) -> Result<()> {
    session.save_day()?;
    session.show_day();
    Ok(())
}

/// List catalog foods.
fn cmd_catalog(session: &Session, all: bool, recipes: bool) -> Result<()> {
    let foods = if recipes {
        session.manager.recipes()
    } else if all {
        let mut foods: Vec<_> = session.manager.catalog().foods().collect();
        foods.sort_by_key(|f| f.key());
        foods
    } else {
        session.manager.selectable()
    };
    display_food_list(&foods, "Catalog", &session.config.currency);
    Ok(())
}

/// Preview a food against the day's totals, then add it on confirmation.
fn cmd_add(
    session: &mut Session,
    slot: &str,
    input: &str,
    quantity: Option<f64>,
    yes: bool,
) -> Result<()> {
    session.day.slot(slot)?;

    let selectable = session.manager.selectable();
    let Some(food) = resolve_food(&selectable, input)? else {
        return Ok(());
    };
    let quantity = match quantity {
        Some(q) => check_quantity(q)?,
        None => prompt_quantity(food)?,
    };
    let food_name = food.name.clone();

    let candidate = SelectedFoodEntry::new(food_name.clone(), quantity);
    let preview = preview_day(
        &session.day,
        slot,
        &candidate,
        session.manager.catalog(),
        &session.config.goal,
    )?;
    display_preview(
        &food_name,
        &preview.totals,
        &preview.cost,
        &session.config.currency,
    );

    if !yes && !prompt_yes_no(&format!("Add to {}?", slot), true)? {
        return Ok(());
    }

    select_food(
        &mut session.day,
        slot,
        &food_name,
        Some(quantity),
        session.manager.catalog(),
    )?;
    commit(session)
}

/// Insert a configured favorite.
fn cmd_quick_add(session: &mut Session, slot: &str, name: &str) -> Result<()> {
    let favorite = session
        .config
        .favorite(name)
        .cloned()
        .ok_or_else(|| TrackerError::InvalidInput(format!("No favorite named '{}'", name)))?;

    let entry = quick_add(&mut session.day, slot, &favorite, session.manager.catalog())?;
    println!("Added {} x {} to {}.", entry.food_name, entry.quantity, slot);
    commit(session)
}

/// Normalize a recipe draft and optionally write it back to the catalog.
fn cmd_recipe(session: &mut Session, catalog_path: &str, draft_path: &str, save: bool) -> Result<()> {
    let draft = load_recipe_draft(draft_path)?;
    let normalized = finalize(&draft, session.manager.catalog())?;
    display_recipe(&normalized, draft.servings, &session.config.currency);

    if !save {
        return Ok(());
    }

    let name = normalized.food.name.clone();
    if session.manager.upsert(normalized.food).is_some() {
        println!("Replaced existing catalog entry {}.", name);
    }
    save_catalog(catalog_path, &session.manager.to_foods())?;
    println!("Saved {} to {}.", name, catalog_path);
    Ok(())
}
