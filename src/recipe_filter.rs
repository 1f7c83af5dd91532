//! # Recipe Filter
//!
//! Filtering and sorting of the recipes a household could add to its plan.

use crate::plan::PlanSet;
use crate::plan_errors::PlanError;
use crate::recipe_model::Recipe;
use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Sort key for candidate recipes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortBy {
    #[default]
    Alphabetical,
    CookTime,
    HeatLevel,
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Filter and sort options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeQuery {
    /// Keep recipes using at least one of these ingredient names (all if empty)
    pub ingredient_names: Vec<String>,
    /// Keep recipes with exactly this many servings
    pub servings: Option<u32>,
    pub sort_by: SortBy,
    pub direction: SortDirection,
}

impl FromStr for SortBy {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "alphabetical" => Ok(SortBy::Alphabetical),
            "cook-time" => Ok(SortBy::CookTime),
            "heat-level" => Ok(SortBy::HeatLevel),
            other => Err(PlanError::Config(format!("unknown sort key '{other}'"))),
        }
    }
}

impl FromStr for SortDirection {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Ascending),
            "desc" => Ok(SortDirection::Descending),
            other => Err(PlanError::Config(format!("unknown sort direction '{other}'"))),
        }
    }
}

/// Catalog recipes not in the plan, in catalog order
pub fn addable_recipes<'a>(plan: &PlanSet, catalog: &'a [Recipe]) -> Vec<&'a Recipe> {
    catalog.iter().filter(|r| !plan.contains(&r.id)).collect()
}

fn compare_missing_last(a: Option<u32>, b: Option<u32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl RecipeQuery {
    /// Apply the filters, then sort
    ///
    /// Cook time and heat sort missing values last; ties fall back to the
    /// title. A descending query reverses the whole ascending order.
    pub fn apply<'a>(&self, recipes: &[&'a Recipe]) -> Vec<&'a Recipe> {
        let mut selected: Vec<&'a Recipe> = recipes
            .iter()
            .copied()
            .filter(|recipe| {
                self.ingredient_names.is_empty()
                    || self
                        .ingredient_names
                        .iter()
                        .any(|name| recipe.uses_ingredient_named(name))
            })
            .filter(|recipe| self.servings.map_or(true, |s| recipe.servings == Some(s)))
            .collect();

        selected.sort_by(|a, b| {
            let primary = match self.sort_by {
                SortBy::Alphabetical => Ordering::Equal,
                SortBy::CookTime => compare_missing_last(a.cook_minutes, b.cook_minutes),
                SortBy::HeatLevel => {
                    compare_missing_last(a.heat.map(u32::from), b.heat.map(u32::from))
                }
            };
            primary.then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        });

        if self.direction == SortDirection::Descending {
            selected.reverse();
        }

        debug!(
            "Recipe query kept {} of {} recipes",
            selected.len(),
            recipes.len()
        );
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe_model::{Ingredient, RecipeIngredientLine};

    fn catalog() -> Vec<Recipe> {
        vec![
            Recipe::new("c", "Chilli")
                .with_cook_minutes(60)
                .with_heat(3)
                .with_servings(4)
                .with_line(RecipeIngredientLine::new(Ingredient::new("beans"))),
            Recipe::new("a", "Omelette")
                .with_cook_minutes(10)
                .with_servings(1)
                .with_line(RecipeIngredientLine::new(Ingredient::new("eggs"))),
            Recipe::new("b", "Bean salad")
                .with_heat(1)
                .with_servings(4)
                .with_line(RecipeIngredientLine::new(Ingredient::new("beans"))),
        ]
    }

    fn titles(recipes: &[&Recipe]) -> Vec<String> {
        recipes.iter().map(|r| r.title.clone()).collect()
    }

    #[test]
    fn test_addable_excludes_plan() {
        let catalog = catalog();
        let plan = PlanSet::from_ids(["a"]);
        assert_eq!(titles(&addable_recipes(&plan, &catalog)), vec!["Chilli", "Bean salad"]);
    }

    #[test]
    fn test_alphabetical_default() {
        let catalog = catalog();
        let all: Vec<&Recipe> = catalog.iter().collect();
        assert_eq!(
            titles(&RecipeQuery::default().apply(&all)),
            vec!["Bean salad", "Chilli", "Omelette"]
        );
    }

    #[test]
    fn test_cook_time_missing_last_and_descending() {
        let catalog = catalog();
        let all: Vec<&Recipe> = catalog.iter().collect();
        let mut query = RecipeQuery {
            sort_by: SortBy::CookTime,
            ..Default::default()
        };
        assert_eq!(titles(&query.apply(&all)), vec!["Omelette", "Chilli", "Bean salad"]);

        query.direction = SortDirection::Descending;
        assert_eq!(titles(&query.apply(&all)), vec!["Bean salad", "Chilli", "Omelette"]);
    }

    #[test]
    fn test_heat_level_sort() {
        let catalog = catalog();
        let all: Vec<&Recipe> = catalog.iter().collect();
        let query = RecipeQuery {
            sort_by: SortBy::HeatLevel,
            ..Default::default()
        };
        assert_eq!(titles(&query.apply(&all)), vec!["Bean salad", "Chilli", "Omelette"]);
    }

    #[test]
    fn test_ingredient_and_servings_filters() {
        let catalog = catalog();
        let all: Vec<&Recipe> = catalog.iter().collect();
        let query = RecipeQuery {
            ingredient_names: vec!["beans".to_string()],
            servings: Some(4),
            ..Default::default()
        };
        assert_eq!(titles(&query.apply(&all)), vec!["Bean salad", "Chilli"]);

        let query = RecipeQuery {
            servings: Some(2),
            ..Default::default()
        };
        assert!(query.apply(&all).is_empty());
    }

    #[test]
    fn test_parse_sort_options() {
        assert_eq!("cook-time".parse::<SortBy>().unwrap(), SortBy::CookTime);
        assert_eq!("DESC".parse::<SortDirection>().unwrap(), SortDirection::Descending);
        assert!("spiciest".parse::<SortBy>().is_err());
    }
}
