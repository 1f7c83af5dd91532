//! # Recipe and Ingredient Data Model
//!
//! This module defines the hydrated shapes the planning engines work on:
//! catalog ingredients, the per-recipe ingredient lines that use them, and
//! recipes.
//!
//! ## Core Concepts
//!
//! - **Ingredient**: a catalog entry with a default unit, a supermarket
//!   section and a "core" flag marking short shelf-life produce
//! - **Ingredient line**: one use of an ingredient inside a recipe, with an
//!   optional quantity, unit override and notes
//! - **Recipe**: a titled list of ingredient lines plus optional metadata
//!
//! Display names and units are resolved when a line is built, so consumers
//! never re-derive fallbacks.
//!
//! ## Usage
//!
//! ```rust
//! use meal_planner::recipe_model::{Ingredient, Recipe, RecipeIngredientLine};
//! use meal_planner::quantity::Quantity;
//!
//! let tomato = Ingredient::new("tomato").with_id("ing-1").core();
//! let salad = Recipe::new("r-1", "Tomato salad").with_line(
//!     RecipeIngredientLine::new(tomato)
//!         .with_quantity(Quantity::number(3.0))
//!         .with_unit("count"),
//! );
//!
//! assert_eq!(salad.ingredients[0].resolved_unit, "count");
//! ```

use crate::quantity::Quantity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display name used when an ingredient has no name
pub const UNNAMED_INGREDIENT: &str = "Unnamed ingredient";

/// Title used when a recipe has no title
pub const UNTITLED_RECIPE: &str = "Untitled recipe";

/// A catalog ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Stable catalog identifier, when the store provided one
    pub id: Option<String>,

    /// Display name (never empty)
    pub name: String,

    /// Unit used by lines that do not specify one
    pub default_unit: Option<String>,

    /// Perishable ingredient that drives synergy recommendations
    pub is_core: bool,

    /// Supermarket aisle or section (e.g. "Fridge", "Bakery")
    pub supermarket_section: Option<String>,
}

/// Identity of an ingredient for set membership
///
/// Falls back to the display name when the ingredient has no id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IngredientKey<'a> {
    /// Catalog identifier
    Id(&'a str),
    /// Display name, for ingredients without an id
    Name(&'a str),
}

/// One use of an ingredient in a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredientLine {
    /// Hydrated ingredient reference
    pub ingredient: Ingredient,

    /// Quantity as authored
    pub quantity: Option<Quantity>,

    /// Unit as authored on the line
    pub unit: Option<String>,

    /// Free-form notes (e.g. "finely chopped")
    pub notes: Option<String>,

    /// Line unit, falling back to the ingredient default, or empty
    pub resolved_unit: String,
}

/// A hydrated recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Stable recipe identifier
    pub id: String,

    /// Display title (never empty)
    pub title: String,

    /// Optional description
    pub description: Option<String>,

    /// Preparation time in minutes
    pub prep_minutes: Option<u32>,

    /// Cooking time in minutes
    pub cook_minutes: Option<u32>,

    /// Number of servings
    pub servings: Option<u32>,

    /// Chilli heat from 0 to 3
    pub heat: Option<u8>,

    /// Ingredient lines
    pub ingredients: Vec<RecipeIngredientLine>,
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.to_string())
}

impl Ingredient {
    /// Create a non-core ingredient; a blank name becomes "Unnamed ingredient"
    pub fn new(name: &str) -> Self {
        let name = if name.trim().is_empty() {
            UNNAMED_INGREDIENT.to_string()
        } else {
            name.to_string()
        };
        Self {
            id: None,
            name,
            default_unit: None,
            is_core: false,
            supermarket_section: None,
        }
    }

    /// Set the catalog identifier
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Set the default unit
    pub fn with_default_unit(mut self, unit: &str) -> Self {
        self.default_unit = non_blank(Some(unit));
        self
    }

    /// Set the supermarket section
    pub fn with_section(mut self, section: &str) -> Self {
        self.supermarket_section = non_blank(Some(section));
        self
    }

    /// Set the core flag
    pub fn with_core(mut self, is_core: bool) -> Self {
        self.is_core = is_core;
        self
    }

    /// Mark as a core ingredient
    pub fn core(self) -> Self {
        self.with_core(true)
    }

    /// Identity used for synergy matching
    pub fn key(&self) -> IngredientKey<'_> {
        match self.id.as_deref() {
            Some(id) => IngredientKey::Id(id),
            None => IngredientKey::Name(&self.name),
        }
    }
}

impl RecipeIngredientLine {
    /// Create a line with no quantity, using the ingredient's default unit
    pub fn new(ingredient: Ingredient) -> Self {
        let resolved_unit = ingredient.default_unit.clone().unwrap_or_default();
        Self {
            ingredient,
            quantity: None,
            unit: None,
            notes: None,
            resolved_unit,
        }
    }

    /// Set the quantity
    pub fn with_quantity(mut self, quantity: Quantity) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Override the unit; a blank unit keeps the ingredient default
    pub fn with_unit(mut self, unit: &str) -> Self {
        self.unit = non_blank(Some(unit));
        self.resolved_unit = self
            .unit
            .clone()
            .or_else(|| self.ingredient.default_unit.clone())
            .unwrap_or_default();
        self
    }

    /// Set the notes
    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = non_blank(Some(notes));
        self
    }

    /// Display name of the ingredient
    pub fn name(&self) -> &str {
        &self.ingredient.name
    }

    /// Whether the underlying ingredient is core
    pub fn is_core(&self) -> bool {
        self.ingredient.is_core
    }

    /// Supermarket section of the underlying ingredient
    pub fn section(&self) -> Option<&str> {
        self.ingredient.supermarket_section.as_deref()
    }
}

impl Recipe {
    /// Create a recipe with no ingredients; a blank title becomes "Untitled recipe"
    pub fn new(id: &str, title: &str) -> Self {
        let title = if title.trim().is_empty() {
            UNTITLED_RECIPE.to_string()
        } else {
            title.to_string()
        };
        Self {
            id: id.to_string(),
            title,
            description: None,
            prep_minutes: None,
            cook_minutes: None,
            servings: None,
            heat: None,
            ingredients: Vec::new(),
        }
    }

    /// Append an ingredient line
    pub fn with_line(mut self, line: RecipeIngredientLine) -> Self {
        self.ingredients.push(line);
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = non_blank(Some(description));
        self
    }

    /// Set the cooking time
    pub fn with_cook_minutes(mut self, minutes: u32) -> Self {
        self.cook_minutes = Some(minutes);
        self
    }

    /// Set the number of servings
    pub fn with_servings(mut self, servings: u32) -> Self {
        self.servings = Some(servings);
        self
    }

    /// Set the heat level, clamped to 0..=3
    pub fn with_heat(mut self, heat: u8) -> Self {
        self.heat = Some(heat.min(3));
        self
    }

    /// Whether any line uses an ingredient with the given display name
    pub fn uses_ingredient_named(&self, name: &str) -> bool {
        self.ingredients.iter().any(|line| line.name() == name)
    }
}

impl fmt::Display for RecipeIngredientLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show_unit =
            !self.resolved_unit.is_empty() && !self.resolved_unit.eq_ignore_ascii_case("count");
        match self.quantity.as_ref().filter(|q| !q.is_empty()) {
            Some(quantity) if show_unit => {
                write!(f, "{} {} {}", quantity, self.resolved_unit, self.name())?
            }
            Some(quantity) => write!(f, "{} {}", quantity, self.name())?,
            None => write!(f, "{}", self.name())?,
        }

        if let Some(notes) = &self.notes {
            write!(f, " ({notes})")?;
        }

        Ok(())
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({} ingredients):", self.title, self.ingredients.len())?;
        for line in &self.ingredients {
            writeln!(f, "  • {line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_resolution() {
        let flour = Ingredient::new("flour").with_default_unit("g");

        let default_line = RecipeIngredientLine::new(flour.clone());
        assert_eq!(default_line.resolved_unit, "g");

        let override_line = RecipeIngredientLine::new(flour.clone()).with_unit("cups");
        assert_eq!(override_line.resolved_unit, "cups");

        let blank_override = RecipeIngredientLine::new(flour).with_unit("");
        assert_eq!(blank_override.resolved_unit, "g");

        let bare = RecipeIngredientLine::new(Ingredient::new("salt"));
        assert_eq!(bare.resolved_unit, "");
    }

    #[test]
    fn test_name_and_title_fallbacks() {
        assert_eq!(Ingredient::new("  ").name, UNNAMED_INGREDIENT);
        assert_eq!(Recipe::new("r1", "").title, UNTITLED_RECIPE);
    }

    #[test]
    fn test_ingredient_key_falls_back_to_name() {
        assert_eq!(Ingredient::new("basil").with_id("i1").key(), IngredientKey::Id("i1"));
        assert_eq!(Ingredient::new("basil").key(), IngredientKey::Name("basil"));
    }

    #[test]
    fn test_heat_is_clamped() {
        assert_eq!(Recipe::new("r1", "Curry").with_heat(7).heat, Some(3));
    }

    #[test]
    fn test_line_display() {
        let line = RecipeIngredientLine::new(Ingredient::new("tomato"))
            .with_quantity(Quantity::number(3.0))
            .with_unit("Count")
            .with_notes("ripe");
        assert_eq!(line.to_string(), "3 tomato (ripe)");

        let line = RecipeIngredientLine::new(Ingredient::new("flour"))
            .with_quantity(Quantity::text("200"))
            .with_unit("g");
        assert_eq!(line.to_string(), "200 g flour");
    }
}
