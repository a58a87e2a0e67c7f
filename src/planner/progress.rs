use crate::models::{Goal, Nutrition};
use crate::planner::constants::{MIN_GOAL_DIVISOR, PERCENT_MAX};

/// Share of `goal` reached by `value`, clamped to 0..=100.
///
/// Goals below 1 (including a misconfigured 0) are treated as 1.
pub fn percentage(value: f64, goal: f64) -> f64 {
    let pct = value / goal.max(MIN_GOAL_DIVISOR) * PERCENT_MAX;
    if pct.is_nan() {
        return 0.0;
    }
    pct.clamp(0.0, PERCENT_MAX)
}

/// Goal percentages for each macro.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GoalProgress {
    pub protein: f64,
    pub fats: f64,
    pub carbs: f64,
    pub calories: f64,
}

impl GoalProgress {
    pub fn from_totals(totals: &Nutrition, goal: &Goal) -> Self {
        Self {
            protein: percentage(totals.protein, goal.protein),
            fats: percentage(totals.fats, goal.fats),
            carbs: percentage(totals.carbs, goal.carbs),
            calories: percentage(totals.calories, goal.calories),
        }
    }
}
