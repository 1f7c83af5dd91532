//! # Synergy Matcher
//!
//! Recommends recipes that reuse the perishable ("core") ingredients already
//! being bought for the plan, so half-used produce does not go to waste.
//!
//! A catalog recipe is recommended when it is not planned and at least one of
//! its core ingredients is also a core ingredient of a planned recipe.
//! Coreness belongs to the catalog ingredient, not to the recipe line.

use crate::recipe_model::{IngredientKey, Recipe};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A non-planned recipe sharing core ingredients with the plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynergyRecommendation {
    /// The recommended recipe
    pub recipe: Recipe,
    /// Shared core ingredient names, deduplicated in recipe line order
    pub matched_ingredient_names: Vec<String>,
}

/// Core ingredient identities used by the planned recipes
pub fn core_ingredient_keys(planned: &[Recipe]) -> HashSet<IngredientKey<'_>> {
    planned
        .iter()
        .flat_map(|recipe| recipe.ingredients.iter())
        .filter(|line| line.is_core())
        .map(|line| line.ingredient.key())
        .collect()
}

/// Find catalog recipes that share core ingredients with the plan
///
/// Recommendations keep catalog order and carry no ranking. The catalog may
/// include the planned recipes; they are never recommended.
///
/// # Examples
///
/// ```rust
/// use meal_planner::recipe_model::{Ingredient, Recipe, RecipeIngredientLine};
/// use meal_planner::synergy::find_synergy_recipes;
///
/// let tomato = Ingredient::new("tomato").with_id("i-tomato").core();
/// let salad = Recipe::new("a", "Salad").with_line(RecipeIngredientLine::new(tomato.clone()));
/// let sauce = Recipe::new("b", "Sauce").with_line(RecipeIngredientLine::new(tomato));
///
/// let planned = vec![salad.clone()];
/// let recs = find_synergy_recipes(&planned, &[salad, sauce]);
///
/// assert_eq!(recs.len(), 1);
/// assert_eq!(recs[0].recipe.id, "b");
/// assert_eq!(recs[0].matched_ingredient_names, vec!["tomato"]);
/// ```
pub fn find_synergy_recipes(planned: &[Recipe], catalog: &[Recipe]) -> Vec<SynergyRecommendation> {
    let planned_ids: HashSet<&str> = planned.iter().map(|r| r.id.as_str()).collect();
    let core_keys = core_ingredient_keys(planned);

    if core_keys.is_empty() {
        debug!("Plan has no core ingredients, no synergy recipes");
        return Vec::new();
    }

    let recommendations: Vec<SynergyRecommendation> = catalog
        .iter()
        .filter(|recipe| !planned_ids.contains(recipe.id.as_str()))
        .filter_map(|recipe| {
            let matches = shared_core_names(recipe, &core_keys);
            (!matches.is_empty()).then(|| SynergyRecommendation {
                recipe: recipe.clone(),
                matched_ingredient_names: matches,
            })
        })
        .collect();

    debug!(
        "Found {} synergy recipes from {} core ingredients across {} planned recipes",
        recommendations.len(),
        core_keys.len(),
        planned.len()
    );

    recommendations
}

fn shared_core_names(recipe: &Recipe, core_keys: &HashSet<IngredientKey<'_>>) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    recipe
        .ingredients
        .iter()
        .filter(|line| line.is_core() && core_keys.contains(&line.ingredient.key()))
        .filter(|line| seen.insert(line.name()))
        .map(|line| line.name().to_string())
        .collect()
}

impl SynergyRecommendation {
    /// Number of shared core ingredients
    pub fn match_count(&self) -> usize {
        self.matched_ingredient_names.len()
    }
}
