use assert_float_eq::assert_float_absolute_eq;

use meal_tracker_rs::models::{Catalog, Cost, FoodRecord, Nutrition, RecipeDraft, SelectedFoodEntry};
use meal_tracker_rs::planner::{
    cost_for, finalize, macros_for, macros_for_many, normalize, percentage, total_cost_for,
};

const EPS: f64 = 1e-9;

fn eggs() -> FoodRecord {
    FoodRecord::counted("Eggs", Nutrition::new(6.0, 5.0, 0.5, 70.0))
}

fn rice() -> FoodRecord {
    FoodRecord::weighed("Rice", Nutrition::new(2.5, 0.3, 28.0, 130.0))
        .with_cost(Cost::per_kilogram(1.20))
}

fn chicken() -> FoodRecord {
    FoodRecord::weighed("Chicken Breast", Nutrition::new(31.0, 3.6, 0.0, 165.0))
        .with_cost(Cost::per_kilogram(9.50))
}

fn assert_nutrition_eq(a: Nutrition, b: Nutrition) {
    assert_float_absolute_eq!(a.protein, b.protein, EPS);
    assert_float_absolute_eq!(a.fats, b.fats, EPS);
    assert_float_absolute_eq!(a.carbs, b.carbs, EPS);
    assert_float_absolute_eq!(a.calories, b.calories, EPS);
}

#[test]
fn test_eggs_by_count() {
    let catalog = Catalog::new(vec![eggs()]);
    let totals = macros_for_many(&[SelectedFoodEntry::new("Eggs", 2.0)], &catalog);
    assert_eq!(totals, Nutrition::new(12.0, 10.0, 1.0, 140.0));
}

#[test]
fn test_rice_by_weight_with_cost() {
    let rice = rice();
    let macros = macros_for(Some(&rice), 250.0);
    assert_nutrition_eq(macros, rice.nutrition * 2.5);

    let cost = cost_for(Some(&rice), 250.0).unwrap();
    assert_float_absolute_eq!(cost, 0.30, EPS);
}

#[test]
fn test_reference_quantities_are_identity() {
    for food in [rice(), chicken()] {
        assert_eq!(macros_for(Some(&food), 100.0), food.nutrition);
    }
    assert_eq!(macros_for(Some(&eggs()), 1.0), eggs().nutrition);
}

#[test]
fn test_macros_for_many_is_order_independent() {
    let catalog = Catalog::new(vec![eggs(), rice(), chicken()]);
    let entries = vec![
        SelectedFoodEntry::new("Rice", 173.0),
        SelectedFoodEntry::new("Eggs", 3.0),
        SelectedFoodEntry::new("Chicken Breast", 142.5),
        SelectedFoodEntry::new("Rice", 61.0),
    ];
    let forward = macros_for_many(&entries, &catalog);

    let mut reversed = entries.clone();
    reversed.reverse();
    assert_nutrition_eq(forward, macros_for_many(&reversed, &catalog));

    let mut rotated = entries.clone();
    rotated.rotate_left(2);
    assert_nutrition_eq(forward, macros_for_many(&rotated, &catalog));
}

#[test]
fn test_unpriced_versus_free() {
    let unpriced = FoodRecord::weighed("Herbs", Nutrition::zero());
    let free = FoodRecord::weighed("Garden Herbs", Nutrition::zero()).with_cost(Cost::per_kilogram(0.0));

    let a = cost_for(Some(&unpriced), 10.0);
    let b = cost_for(Some(&free), 10.0);
    assert_eq!(a, None);
    assert_eq!(b, Some(0.0));
    assert_ne!(a, b);

    let catalog = Catalog::new(vec![unpriced, free]);
    let summary = total_cost_for(
        &[
            SelectedFoodEntry::new("Herbs", 10.0),
            SelectedFoodEntry::new("Garden Herbs", 10.0),
        ],
        &catalog,
    );
    assert_eq!(summary.total, 0.0);
    assert_eq!(summary.per_entry["Herbs"], None);
    assert_eq!(summary.per_entry["Garden Herbs"], Some(0.0));
}

#[test]
fn test_recipe_round_trip_to_per_100g() {
    let catalog = Catalog::new(vec![FoodRecord::weighed(
        "Lentils",
        Nutrition::new(20.0, 1.0, 40.0, 300.0),
    )]);
    let draft = RecipeDraft::new("r1", "Dal", 2).with_ingredient("Lentils", 200.0);
    let out = normalize(&draft, &catalog);

    assert_eq!(out.total_nutrition.protein, 40.0);
    assert_eq!(out.nutrition_per_100g.protein, 20.0);
}

#[test]
fn test_two_ingredient_recipe_per_serving_and_per_100g() {
    let catalog = Catalog::new(vec![rice(), chicken()]);
    let draft = RecipeDraft::new("bowl-1", "Chicken Rice", 5)
        .with_ingredient("Rice", 300.0)
        .with_ingredient("Chicken Breast", 200.0);

    let out = finalize(&draft, &catalog).unwrap();

    let rice_part = macros_for(catalog.get("Rice"), 300.0);
    let chicken_part = macros_for(catalog.get("Chicken Breast"), 200.0);
    let total = rice_part + chicken_part;

    assert_eq!(out.total_weight, 500.0);
    assert_nutrition_eq(out.nutrition_per_serving, total.divide(5.0));
    assert_nutrition_eq(out.nutrition_per_100g, total.scale(100.0 / 500.0));

    let total_cost = 1.20 * 0.3 + 9.50 * 0.2;
    assert_float_absolute_eq!(out.total_cost, total_cost, EPS);
    assert_float_absolute_eq!(out.cost_per_kilogram, total_cost / 0.5, EPS);
    assert_float_absolute_eq!(out.cost_per_serving, total_cost / 5.0, EPS);
    assert_eq!(out.food.derived_from_recipe_id.as_deref(), Some("bowl-1"));
    assert_eq!(out.food.name, "Chicken Rice (recipe)");
}

#[test]
fn test_normalized_recipe_is_usable_as_food() {
    let catalog = Catalog::new(vec![rice(), chicken()]);
    let draft = RecipeDraft::new("bowl-1", "Chicken Rice", 5)
        .with_ingredient("Rice", 300.0)
        .with_ingredient("Chicken Breast", 200.0);
    let out = normalize(&draft, &catalog);

    // Eating the whole pot through the synthesized food gives the recipe totals.
    let whole = macros_for(Some(&out.food), out.total_weight);
    assert_nutrition_eq(whole, out.total_nutrition);

    let whole_cost = cost_for(Some(&out.food), out.total_weight).unwrap();
    assert_float_absolute_eq!(whole_cost, out.total_cost, EPS);
}

#[test]
fn test_mixed_recipe_keeps_weight_only_denominator() {
    // Counted ingredients add macros but no weight; locked in as current behavior.
    let catalog = Catalog::new(vec![rice(), eggs()]);
    let draft = RecipeDraft::new("r2", "Egg Fried Rice", 2)
        .with_ingredient("Rice", 200.0)
        .with_ingredient("Eggs", 2.0);
    let out = normalize(&draft, &catalog);

    assert_eq!(out.total_weight, 200.0);
    assert_eq!(out.excluded_unit_ingredients, 1);
    assert_nutrition_eq(
        out.nutrition_per_100g,
        (rice().nutrition * 2.0 + eggs().nutrition * 2.0).scale(0.5),
    );
}

#[test]
fn test_percentage_bounds() {
    for value in [0.0, 1.0, 99.9, 100.0, 250.0, 1e12] {
        for goal in [0.0, 0.25, 1.0, 100.0, 2500.0] {
            let pct = percentage(value, goal);
            assert!((0.0..=100.0).contains(&pct), "{value}/{goal} -> {pct}");
        }
    }
    assert_eq!(percentage(1250.0, 2500.0), 50.0);
}
