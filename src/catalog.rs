//! # Catalog Hydration
//!
//! Turns recipe store rows into typed [`Recipe`] values and validates them.
//!
//! The rows mirror what the recipe store returns for a recipe query with its
//! nested `recipe_ingredients` and `ingredients` relations. Every line must
//! carry its ingredient relation: a line without one would silently lose its
//! name, section and core flag, so hydration rejects it instead.

use crate::plan::PlanSet;
use crate::plan_errors::PlanError;
use crate::quantity::Quantity;
use crate::recipe_model::{Ingredient, Recipe, RecipeIngredientLine};
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Catalog ingredient row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngredientRow {
    pub id: Option<String>,
    pub name: Option<String>,
    pub default_unit: Option<String>,
    pub is_synergy_core: Option<bool>,
    pub supermarket_section: Option<String>,
}

/// Recipe ingredient row with its nested ingredient relation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredientRow {
    pub ingredient_id: Option<String>,
    pub quantity: Option<Quantity>,
    pub unit: Option<String>,
    pub notes: Option<String>,
    pub ingredients: Option<IngredientRow>,
}

/// Recipe row with its nested ingredient rows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeRow {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub pre_minutes: Option<u32>,
    pub cook_minutes: Option<u32>,
    pub servings: Option<u32>,
    pub heat: Option<u8>,
    #[serde(default)]
    pub recipe_ingredients: Vec<RecipeIngredientRow>,
}

/// Recipe store rows plus the household plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub recipes: Vec<RecipeRow>,
    #[serde(default)]
    pub plan: Vec<String>,
}

/// Hydrated recipes and the plan over them
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub recipes: Vec<Recipe>,
    pub plan: PlanSet,
}

/// Hydrate one recipe row
///
/// Lines are sorted by ingredient name, case-insensitively.
pub fn hydrate_recipe(row: &RecipeRow) -> Result<Recipe, PlanError> {
    let mut recipe = Recipe::new(&row.id, row.title.as_deref().unwrap_or(""));
    recipe.description = row.description.clone().filter(|d| !d.trim().is_empty());
    recipe.prep_minutes = row.pre_minutes;
    recipe.cook_minutes = row.cook_minutes;
    recipe.servings = row.servings;
    recipe.heat = row.heat.map(|h| h.min(3));

    for (line_index, line_row) in row.recipe_ingredients.iter().enumerate() {
        let ingredient_row =
            line_row
                .ingredients
                .as_ref()
                .ok_or_else(|| PlanError::MissingIngredient {
                    recipe_id: row.id.clone(),
                    line_index,
                })?;
        recipe.ingredients.push(hydrate_line(line_row, ingredient_row));
    }

    recipe.ingredients.sort_by(|a, b| {
        a.name()
            .to_lowercase()
            .cmp(&b.name().to_lowercase())
            .then_with(|| a.name().cmp(b.name()))
    });

    Ok(recipe)
}

fn hydrate_line(line_row: &RecipeIngredientRow, ingredient_row: &IngredientRow) -> RecipeIngredientLine {
    let mut ingredient = Ingredient::new(ingredient_row.name.as_deref().unwrap_or(""))
        .with_core(ingredient_row.is_synergy_core.unwrap_or(false));
    if let Some(id) = ingredient_row.id.as_deref().or(line_row.ingredient_id.as_deref()) {
        ingredient = ingredient.with_id(id);
    }
    if let Some(unit) = ingredient_row.default_unit.as_deref() {
        ingredient = ingredient.with_default_unit(unit);
    }
    if let Some(section) = ingredient_row.supermarket_section.as_deref() {
        ingredient = ingredient.with_section(section);
    }

    let mut line = RecipeIngredientLine::new(ingredient).with_unit(line_row.unit.as_deref().unwrap_or(""));
    if let Some(quantity) = line_row.quantity.clone().filter(|q| !q.is_empty()) {
        line = line.with_quantity(quantity);
    }
    if let Some(notes) = line_row.notes.as_deref() {
        line = line.with_notes(notes);
    }
    line
}

/// Hydrate every row, rejecting duplicate recipe ids
pub fn hydrate_catalog(rows: &[RecipeRow]) -> Result<Vec<Recipe>, PlanError> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut recipes = Vec::with_capacity(rows.len());
    for row in rows {
        if !seen.insert(row.id.as_str()) {
            return Err(PlanError::DuplicateRecipe(row.id.clone()));
        }
        recipes.push(hydrate_recipe(row)?);
    }
    debug!("Hydrated {} recipes", recipes.len());
    Ok(recipes)
}

/// Parse snapshot JSON
pub fn parse_snapshot(json: &str) -> Result<Snapshot, PlanError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a snapshot file
pub async fn load_snapshot(path: &Path) -> Result<Snapshot> {
    info!("Loading snapshot from {}", path.display());
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    parse_snapshot(&json).with_context(|| format!("Failed to parse snapshot {}", path.display()))
}

impl Catalog {
    /// Hydrate a snapshot and check the plan against it
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, PlanError> {
        let recipes = hydrate_catalog(&snapshot.recipes)?;
        let known: HashSet<&str> = recipes.iter().map(|r| r.id.as_str()).collect();
        if let Some(unknown) = snapshot.plan.iter().find(|id| !known.contains(id.as_str())) {
            return Err(PlanError::UnknownPlannedRecipe(unknown.clone()));
        }
        let plan = PlanSet::from_ids(snapshot.plan.iter().cloned());
        info!(
            "Catalog ready: {} recipes, {} planned",
            recipes.len(),
            plan.len()
        );
        Ok(Self { recipes, plan })
    }

    /// Planned recipes in plan order
    pub fn planned_recipes(&self) -> Vec<Recipe> {
        self.plan.planned_recipes(&self.recipes)
    }

    /// Look up a recipe by id
    pub fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient_row(id: &str, name: &str) -> IngredientRow {
        IngredientRow {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_hydrate_resolves_fallbacks() {
        let row = RecipeRow {
            id: "r1".to_string(),
            title: None,
            recipe_ingredients: vec![RecipeIngredientRow {
                ingredient_id: Some("fallback-id".to_string()),
                quantity: Some(Quantity::text("")),
                ingredients: Some(IngredientRow {
                    default_unit: Some("g".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }],
            ..Default::default()
        };

        let recipe = hydrate_recipe(&row).unwrap();
        assert_eq!(recipe.title, "Untitled recipe");
        let line = &recipe.ingredients[0];
        assert_eq!(line.name(), "Unnamed ingredient");
        assert_eq!(line.ingredient.id.as_deref(), Some("fallback-id"));
        assert_eq!(line.resolved_unit, "g");
        assert_eq!(line.quantity, None);
        assert!(!line.is_core());
    }

    #[test]
    fn test_hydrate_sorts_lines_by_name() {
        let row = RecipeRow {
            id: "r1".to_string(),
            recipe_ingredients: ["onion", "Basil", "carrot"]
                .iter()
                .map(|name| RecipeIngredientRow {
                    ingredients: Some(ingredient_row(name, name)),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        };

        let recipe = hydrate_recipe(&row).unwrap();
        let names: Vec<&str> = recipe.ingredients.iter().map(|l| l.name()).collect();
        assert_eq!(names, vec!["Basil", "carrot", "onion"]);
    }

    #[test]
    fn test_missing_ingredient_relation_fails() {
        let row = RecipeRow {
            id: "r1".to_string(),
            recipe_ingredients: vec![RecipeIngredientRow::default()],
            ..Default::default()
        };

        assert_eq!(
            hydrate_recipe(&row),
            Err(PlanError::MissingIngredient {
                recipe_id: "r1".to_string(),
                line_index: 0
            })
        );
    }

    #[test]
    fn test_duplicate_recipes_rejected() {
        let row = RecipeRow {
            id: "r1".to_string(),
            ..Default::default()
        };
        assert_eq!(
            hydrate_catalog(&[row.clone(), row]),
            Err(PlanError::DuplicateRecipe("r1".to_string()))
        );
    }

    #[test]
    fn test_unknown_planned_recipe_rejected() {
        let snapshot = Snapshot {
            recipes: vec![RecipeRow {
                id: "r1".to_string(),
                ..Default::default()
            }],
            plan: vec!["r1".to_string(), "r2".to_string()],
        };
        assert_eq!(
            Catalog::from_snapshot(&snapshot),
            Err(PlanError::UnknownPlannedRecipe("r2".to_string()))
        );
    }

    #[test]
    fn test_parse_snapshot_json() {
        let json = r#"{
            "recipes": [{
                "id": "r1",
                "title": "Soup",
                "recipe_ingredients": [
                    {"quantity": 2, "unit": null, "notes": "peeled",
                     "ingredients": {"id": "i1", "name": "carrot", "is_synergy_core": true,
                                     "supermarket_section": "Fruit & Vegtables"}},
                    {"quantity": "a pinch", "ingredients": {"id": "i2", "name": "salt"}}
                ]
            }],
            "plan": ["r1"]
        }"#;

        let catalog = Catalog::from_snapshot(&parse_snapshot(json).unwrap()).unwrap();
        let soup = catalog.recipe("r1").unwrap();
        assert_eq!(soup.ingredients.len(), 2);
        assert!(soup.ingredients[0].is_core());
        assert_eq!(soup.ingredients[0].section(), Some("Fruit & Vegtables"));
        assert_eq!(soup.ingredients[1].quantity, Some(Quantity::text("a pinch")));
        assert_eq!(catalog.planned_recipes().len(), 1);
    }

    #[test]
    fn test_parse_snapshot_rejects_bad_json() {
        assert!(matches!(parse_snapshot("[1, 2"), Err(PlanError::Snapshot(_))));
    }
}
