//! # Consolidator
//!
//! Merges the ingredient lines of every planned recipe into one shopping list.
//!
//! Lines merge when they share the same display name and resolved unit. Names
//! are compared exactly as authored: "Tomato" and "tomato" stay separate
//! items, as do "flour" in grams and "flour" in cups. No unit conversion is
//! attempted.
//!
//! ## Usage
//!
//! ```rust
//! use meal_planner::consolidator::consolidate;
//! use meal_planner::quantity::Quantity;
//! use meal_planner::recipe_model::{Ingredient, Recipe, RecipeIngredientLine};
//!
//! let flour = Ingredient::new("flour").with_default_unit("g");
//! let bread = Recipe::new("r1", "Bread")
//!     .with_line(RecipeIngredientLine::new(flour.clone()).with_quantity(Quantity::number(200.0)));
//! let pizza = Recipe::new("r2", "Pizza")
//!     .with_line(RecipeIngredientLine::new(flour).with_quantity(Quantity::number(300.0)));
//!
//! let items = consolidate(&[bread, pizza]);
//! assert_eq!(items.len(), 1);
//! assert_eq!(items[0].display_text, "500 g flour");
//! ```

use crate::quantity::{format_number, QuantityValue};
use crate::recipe_model::Recipe;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Section assigned to items whose ingredients have none
pub const UNCLASSIFIED_SECTION: &str = "Unclassified";

/// Unit that is never displayed next to a quantity (compared case-insensitively)
pub const COUNT_UNIT: &str = "count";

/// Separator between the numeric total and free-text quantities
pub const QUANTITY_SEPARATOR: &str = " + ";

/// Separator used when rendering an item's notes on one line
pub const NOTES_SEPARATOR: &str = "; ";

/// One merged shopping list line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsolidatedItem {
    /// Ingredient display name
    pub name: String,

    /// Resolved unit shared by every merged line (may be empty)
    pub unit: String,

    /// Sum of all numeric quantities, 0 if none were numeric
    pub numeric_total: f64,

    /// Whether any merged line had a numeric quantity
    pub has_numeric: bool,

    /// Free-text quantities in encounter order (e.g. "a pinch")
    pub non_numeric_quantity_notes: Vec<String>,

    /// Distinct line notes in first-seen order
    pub freeform_notes: Vec<String>,

    /// Supermarket section, or "Unclassified"
    pub section: String,

    /// Rendered line, e.g. "500 g flour"
    pub display_text: String,
}

/// Running state for one merge key
struct Accumulator {
    name: String,
    unit: String,
    numeric_total: f64,
    has_numeric: bool,
    quantity_notes: Vec<String>,
    notes: Vec<String>,
    seen_notes: HashSet<String>,
    section: Option<String>,
}

impl Accumulator {
    fn new(name: &str, unit: &str) -> Self {
        Self {
            name: name.to_string(),
            unit: unit.to_string(),
            numeric_total: 0.0,
            has_numeric: false,
            quantity_notes: Vec::new(),
            notes: Vec::new(),
            seen_notes: HashSet::new(),
            section: None,
        }
    }

    fn finish(self) -> ConsolidatedItem {
        let display_text = compose_display_text(
            &self.name,
            &self.unit,
            self.has_numeric.then_some(self.numeric_total),
            &self.quantity_notes,
        );
        ConsolidatedItem {
            name: self.name,
            unit: self.unit,
            numeric_total: self.numeric_total,
            has_numeric: self.has_numeric,
            non_numeric_quantity_notes: self.quantity_notes,
            freeform_notes: self.notes,
            section: self
                .section
                .unwrap_or_else(|| UNCLASSIFIED_SECTION.to_string()),
            display_text,
        }
    }
}

/// Merge the ingredient lines of the given recipes into shopping list items
///
/// Exactly one item is produced per distinct (name, resolved unit) pair.
/// Items come back in the order their key was first seen; callers that need
/// a display order should group them with [`crate::sections::group_by_section`].
///
/// Recipes are not deduplicated: passing the same recipe twice counts its
/// quantities twice.
pub fn consolidate(recipes: &[Recipe]) -> Vec<ConsolidatedItem> {
    let mut accumulators: Vec<Accumulator> = Vec::new();
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();
    let mut line_count = 0usize;

    for recipe in recipes {
        for line in &recipe.ingredients {
            line_count += 1;
            let key = (line.name(), line.resolved_unit.as_str());
            let slot = *index.entry(key).or_insert_with(|| {
                accumulators.push(Accumulator::new(key.0, key.1));
                accumulators.len() - 1
            });
            let acc = &mut accumulators[slot];

            match line.quantity.as_ref().map(|q| q.value()) {
                Some(QuantityValue::Numeric(value)) => {
                    acc.numeric_total += value;
                    acc.has_numeric = true;
                }
                Some(QuantityValue::Text(text)) => acc.quantity_notes.push(text.to_string()),
                Some(QuantityValue::Empty) | None => {}
            }

            if let Some(notes) = line.notes.as_deref().filter(|n| !n.is_empty()) {
                if acc.seen_notes.insert(notes.to_string()) {
                    acc.notes.push(notes.to_string());
                }
            }

            if acc.section.is_none() {
                if let Some(section) = line.section().filter(|s| !s.is_empty()) {
                    acc.section = Some(section.to_string());
                }
            }

            trace!(
                "Merged '{}' [{}] from recipe {}",
                line.name(),
                line.resolved_unit,
                recipe.id
            );
        }
    }

    debug!(
        "Consolidated {} lines from {} recipes into {} items",
        line_count,
        recipes.len(),
        accumulators.len()
    );

    accumulators.into_iter().map(Accumulator::finish).collect()
}

/// Render an item line from its parts
///
/// The quantity phrase joins the formatted total and every free-text quantity
/// with " + ". The unit follows the phrase unless the phrase is empty or the
/// unit is "count".
pub fn compose_display_text(
    name: &str,
    unit: &str,
    numeric_total: Option<f64>,
    quantity_notes: &[String],
) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(quantity_notes.len() + 1);
    if let Some(total) = numeric_total {
        parts.push(format_number(total));
    }
    parts.extend(quantity_notes.iter().cloned());

    if parts.is_empty() {
        return name.to_string();
    }

    let mut phrase = parts.join(QUANTITY_SEPARATOR);
    if !unit.is_empty() && !unit.eq_ignore_ascii_case(COUNT_UNIT) {
        phrase.push(' ');
        phrase.push_str(unit);
    }
    format!("{phrase} {name}")
}

impl ConsolidatedItem {
    /// Notes joined into one string, empty when there are none
    pub fn notes_text(&self) -> String {
        self.freeform_notes.join(NOTES_SEPARATOR)
    }
}

impl fmt::Display for ConsolidatedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_text)?;
        if !self.freeform_notes.is_empty() {
            write!(f, " ({})", self.notes_text())?;
        }
        Ok(())
    }
}
