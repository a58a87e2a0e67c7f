use crate::error::Result;
use crate::models::{Catalog, DayPlan, Goal, Nutrition, SelectedFoodEntry};
use crate::planner::aggregate::{day_cost, day_totals};
use crate::planner::calculations::macros_for_entry;
use crate::planner::cost::cost_for;
use crate::planner::progress::GoalProgress;

/// Value before and after adding a candidate that is not committed yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preview<T> {
    pub before: T,
    pub after: T,
}

impl Preview<Nutrition> {
    /// Change contributed by the candidate.
    pub fn delta(&self) -> Nutrition {
        self.after - self.before
    }
}

/// Totals and goal percentages before and after a candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalPreview {
    pub totals: Preview<Nutrition>,
    pub progress: Preview<GoalProgress>,
}

/// Cost before and after a candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostPreview {
    pub before: f64,
    pub after: f64,

    /// The candidate's own cost; `None` when it has no price.
    pub candidate: Option<f64>,
}

/// Preview adding `candidate` to already committed totals.
///
/// Uses the same per-entry calculation as `aggregate`, so committing the
/// candidate at the end of the committed entries gives exactly `after`.
pub fn preview(
    committed: &Nutrition,
    candidate: &SelectedFoodEntry,
    catalog: &Catalog,
) -> Preview<Nutrition> {
    Preview {
        before: *committed,
        after: *committed + macros_for_entry(candidate, catalog),
    }
}

pub fn preview_with_goal(
    committed: &Nutrition,
    candidate: &SelectedFoodEntry,
    catalog: &Catalog,
    goal: &Goal,
) -> GoalPreview {
    let totals = preview(committed, candidate, catalog);
    GoalPreview {
        totals,
        progress: Preview {
            before: GoalProgress::from_totals(&totals.before, goal),
            after: GoalProgress::from_totals(&totals.after, goal),
        },
    }
}

/// Preview the cost of adding `candidate`. An unpriced candidate adds 0.
pub fn preview_cost(
    committed_cost: f64,
    candidate: &SelectedFoodEntry,
    catalog: &Catalog,
) -> CostPreview {
    let cost = cost_for(catalog.get(&candidate.food_name), candidate.quantity);
    CostPreview {
        before: committed_cost,
        after: committed_cost + cost.unwrap_or(0.0),
        candidate: cost,
    }
}

/// Day-level totals and cost before and after adding a candidate to a slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayPreview {
    pub totals: GoalPreview,
    pub cost: CostPreview,
}

/// Preview adding `candidate` to `slot` of a whole day.
///
/// The candidate is appended to a copy of the plan and the day is summed the
/// same way a committed plan is, so `after` equals the recomputed day totals
/// and cost once the entry is committed to that slot.
///
/// # Errors
/// Returns `SlotNotFound` if the day has no such slot.
pub fn preview_day(
    day: &DayPlan,
    slot: &str,
    candidate: &SelectedFoodEntry,
    catalog: &Catalog,
    goal: &Goal,
) -> Result<DayPreview> {
    let mut after_day = day.clone();
    after_day.add_entry(slot, candidate.clone())?;

    let totals = Preview {
        before: day_totals(day, catalog),
        after: day_totals(&after_day, catalog),
    };
    Ok(DayPreview {
        totals: GoalPreview {
            totals,
            progress: Preview {
                before: GoalProgress::from_totals(&totals.before, goal),
                after: GoalProgress::from_totals(&totals.after, goal),
            },
        },
        cost: CostPreview {
            before: day_cost(day, catalog).total,
            after: day_cost(&after_day, catalog).total,
            candidate: cost_for(catalog.get(&candidate.food_name), candidate.quantity),
        },
    })
}
