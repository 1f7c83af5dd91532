//! # Plan Walkthrough
//!
//! Builds a small catalog by hand, plans two recipes and prints the
//! consolidated shopping list and the synergy recommendations.

use meal_planner::plan::PlanSet;
use meal_planner::plan_report::PlanOutcome;
use meal_planner::quantity::Quantity;
use meal_planner::recipe_model::{Ingredient, Recipe, RecipeIngredientLine};
use meal_planner::sections::default_section_order;
use meal_planner::shopping_list::CheckedItems;

fn main() {
    println!("🧑‍🍳 Meal Plan Walkthrough\n");

    let spinach = Ingredient::new("spinach")
        .with_id("i-spinach")
        .with_default_unit("g")
        .with_section("Fruit & Vegtables")
        .core();
    let feta = Ingredient::new("feta")
        .with_id("i-feta")
        .with_default_unit("g")
        .with_section("Fridge")
        .core();
    let pastry = Ingredient::new("filo pastry")
        .with_id("i-filo")
        .with_default_unit("sheets")
        .with_section("Fridge");
    let nutmeg = Ingredient::new("nutmeg").with_id("i-nutmeg").with_section("Cupboard");

    let catalog = vec![
        Recipe::new("spanakopita", "Spanakopita")
            .with_line(RecipeIngredientLine::new(spinach.clone()).with_quantity(Quantity::number(500.0)))
            .with_line(RecipeIngredientLine::new(feta.clone()).with_quantity(Quantity::number(200.0)))
            .with_line(RecipeIngredientLine::new(pastry).with_quantity(Quantity::number(8.0)))
            .with_line(RecipeIngredientLine::new(nutmeg.clone()).with_quantity(Quantity::text("a grating"))),
        Recipe::new("saag", "Saag paneer")
            .with_line(
                RecipeIngredientLine::new(spinach.clone())
                    .with_quantity(Quantity::number(250.0))
                    .with_notes("washed"),
            )
            .with_line(RecipeIngredientLine::new(nutmeg).with_quantity(Quantity::text("a pinch"))),
        Recipe::new("salad", "Feta salad")
            .with_line(RecipeIngredientLine::new(feta).with_quantity(Quantity::number(100.0))),
        Recipe::new("soup", "Spinach soup")
            .with_line(RecipeIngredientLine::new(spinach).with_quantity(Quantity::number(300.0))),
    ];

    let mut plan = PlanSet::from_ids(["spanakopita", "saag"]);
    let outcome = PlanOutcome::compute(&plan, &catalog, &default_section_order());

    println!("📝 Shopping list");
    for group in outcome.shopping_list.grouped() {
        println!("  {}", group.section);
        for item in &group.items {
            println!("    • {}", item);
        }
    }
    println!();

    println!("🥬 Synergy recipes");
    for recommendation in &outcome.recommendations {
        println!(
            "  • {} (shares {})",
            recommendation.recipe.title,
            recommendation.matched_ingredient_names.join(", ")
        );
    }
    println!();

    println!("📋 Copyable list");
    println!(
        "{}",
        outcome
            .shopping_list
            .export_unchecked(&outcome.recipe_titles(), &CheckedItems::new())
    );
    println!();

    plan.add("soup");
    let outcome = PlanOutcome::compute(&plan, &catalog, &default_section_order());
    println!("➕ After adding Spinach soup:");
    for recommendation in &outcome.recommendations {
        println!("  • {}", recommendation.recipe.title);
    }
}
