//! # Shopping List View
//!
//! Checked-item tracking and the plain text export of a consolidated list.
//! Checked state is local view state: it is keyed by item identity and never
//! feeds back into consolidation.

use crate::consolidator::ConsolidatedItem;
use crate::sections::{group_by_section, SectionGroup};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Separator between name and unit in an item key
pub const ITEM_KEY_SEPARATOR: &str = "|||";

/// Stable identity of a consolidated item
pub fn item_key(item: &ConsolidatedItem) -> String {
    format!("{}{}{}", item.name, ITEM_KEY_SEPARATOR, item.unit)
}

/// Set of checked item keys
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckedItems {
    keys: HashSet<String>,
}

impl CheckedItems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip an item's checked state; returns the new state
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.keys.remove(key) {
            false
        } else {
            self.keys.insert(key.to_string());
            true
        }
    }

    pub fn is_checked(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// A consolidated list with its section order
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingList {
    pub items: Vec<ConsolidatedItem>,
    pub section_order: Vec<String>,
}

impl ShoppingList {
    pub fn new(items: Vec<ConsolidatedItem>, section_order: Vec<String>) -> Self {
        Self {
            items,
            section_order,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Split items into (unchecked, checked), preserving order
    pub fn partition(&self, checked: &CheckedItems) -> (Vec<ConsolidatedItem>, Vec<ConsolidatedItem>) {
        let (done, todo): (Vec<_>, Vec<_>) = self
            .items
            .iter()
            .cloned()
            .partition(|item| checked.is_checked(&item_key(item)));
        debug!("{} items to buy, {} already in the kitchen", todo.len(), done.len());
        (todo, done)
    }

    /// All items grouped by section
    pub fn grouped(&self) -> Vec<SectionGroup> {
        group_by_section(&self.items, &self.section_order)
    }

    /// Unchecked items grouped by section
    pub fn grouped_unchecked(&self, checked: &CheckedItems) -> Vec<SectionGroup> {
        let (todo, _) = self.partition(checked);
        group_by_section(&todo, &self.section_order)
    }

    /// Text export of the items still to buy
    pub fn export_unchecked(&self, recipe_titles: &[String], checked: &CheckedItems) -> String {
        let (todo, _) = self.partition(checked);
        export_text(recipe_titles, &todo)
    }
}

/// Render items as a copyable list
///
/// A "Recipes:" header lists the non-blank titles alphabetically, followed by
/// a blank line. Each item becomes "- {display}" with its notes in brackets.
/// Nothing is exported when there are no items.
///
/// # Examples
///
/// ```rust
/// use meal_planner::consolidator::consolidate;
/// use meal_planner::quantity::Quantity;
/// use meal_planner::recipe_model::{Ingredient, Recipe, RecipeIngredientLine};
/// use meal_planner::shopping_list::export_text;
///
/// let recipe = Recipe::new("r1", "Stew").with_line(
///     RecipeIngredientLine::new(Ingredient::new("carrot"))
///         .with_quantity(Quantity::number(2.0))
///         .with_notes("peeled"),
/// );
/// let items = consolidate(&[recipe]);
///
/// assert_eq!(
///     export_text(&["Stew".to_string()], &items),
///     "Recipes: Stew\n\n- 2 carrot (peeled)"
/// );
/// ```
pub fn export_text(recipe_titles: &[String], items: &[ConsolidatedItem]) -> String {
    if items.is_empty() {
        return String::new();
    }

    let mut titles: Vec<&str> = recipe_titles
        .iter()
        .map(|t| t.as_str())
        .filter(|t| !t.trim().is_empty())
        .collect();
    titles.sort_by_key(|t| t.to_lowercase());

    let mut lines: Vec<String> = Vec::new();
    if !titles.is_empty() {
        lines.push(format!("Recipes: {}", titles.join(", ")));
        lines.push(String::new());
    }
    lines.extend(items.iter().map(|item| format!("- {item}")));
    lines.join("\n")
}
