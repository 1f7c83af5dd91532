//! # Plan Report
//!
//! Runs both engines over a catalog and renders the result as localized text.

use crate::catalog::Catalog;
use crate::consolidator::consolidate;
use crate::localization::LocalizationManager;
use crate::plan::PlanSet;
use crate::recipe_model::Recipe;
use crate::shopping_list::ShoppingList;
use crate::synergy::{find_synergy_recipes, SynergyRecommendation};
use log::info;

/// Engine output for one plan
#[derive(Debug, Clone, PartialEq)]
pub struct PlanOutcome {
    /// Planned recipes in plan order
    pub planned: Vec<Recipe>,
    /// Consolidated shopping list
    pub shopping_list: ShoppingList,
    /// Synergy recommendations in catalog order
    pub recommendations: Vec<SynergyRecommendation>,
}

impl PlanOutcome {
    /// Recompute everything for a plan over a set of recipes
    pub fn compute(plan: &PlanSet, recipes: &[Recipe], section_order: &[String]) -> Self {
        let planned = plan.planned_recipes(recipes);
        let items = consolidate(&planned);
        let recommendations = find_synergy_recipes(&planned, recipes);

        info!(
            "Plan of {} recipes needs {} items, {} synergy recipes",
            planned.len(),
            items.len(),
            recommendations.len()
        );

        Self {
            planned,
            shopping_list: ShoppingList::new(items, section_order.to_vec()),
            recommendations,
        }
    }

    /// Recompute for a hydrated catalog and its own plan
    pub fn for_catalog(catalog: &Catalog, section_order: &[String]) -> Self {
        Self::compute(&catalog.plan, &catalog.recipes, section_order)
    }

    /// Planned recipe titles sorted alphabetically
    pub fn recipe_titles(&self) -> Vec<String> {
        let mut titles: Vec<String> = self.planned.iter().map(|r| r.title.clone()).collect();
        titles.sort_by_key(|t| t.to_lowercase());
        titles
    }
}

/// Render a plan outcome as text in the given language
pub fn render_plan_report(outcome: &PlanOutcome, localization: &LocalizationManager, language: &str) -> String {
    let mut out = String::new();
    let title = localization.t("report-title", language);
    out.push_str(&format!("{}\n{}\n\n", title, "=".repeat(title.chars().count())));

    if outcome.planned.is_empty() {
        out.push_str(&localization.t("report-no-planned", language));
        out.push('\n');
        return out;
    }

    let count = outcome.planned.len().to_string();
    out.push_str(&localization.get_message_with_args(
        "report-planned-recipes",
        language,
        &[("count", count.as_str())],
    ));
    out.push('\n');
    for title in outcome.recipe_titles() {
        out.push_str(&format!("  • {title}\n"));
    }
    out.push('\n');

    out.push_str(&localization.t("report-shopping-list", language));
    out.push('\n');
    if outcome.shopping_list.is_empty() {
        out.push_str(&format!("  {}\n", localization.t("report-no-items", language)));
    }
    for group in outcome.shopping_list.grouped() {
        out.push_str(&format!("[{}]\n", group.section));
        for item in &group.items {
            out.push_str(&format!("  - {item}\n"));
        }
    }
    out.push('\n');

    out.push_str(&localization.t("report-synergy", language));
    out.push('\n');
    if outcome.recommendations.is_empty() {
        out.push_str(&format!("  {}\n", localization.t("report-no-synergy", language)));
    }
    for recommendation in &outcome.recommendations {
        let shared = recommendation.matched_ingredient_names.join(", ");
        let shares = localization.get_message_with_args(
            "report-synergy-shares",
            language,
            &[("ingredients", shared.as_str())],
        );
        out.push_str(&format!("  • {}: {}\n", recommendation.recipe.title, shares));
    }

    out
}
