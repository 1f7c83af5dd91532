//! # Supermarket Sections
//!
//! Groups consolidated items by supermarket section for display. Known
//! sections come first in the caller's canonical order, then any other
//! section names alphabetically, and "Unclassified" last. Items inside a
//! section are sorted by name.

use crate::consolidator::{ConsolidatedItem, UNCLASSIFIED_SECTION};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Canonical walk order through the shop, produce first
pub const DEFAULT_SECTION_ORDER: [&str; 7] = [
    "Fruit & Vegtables",
    "Fridge",
    "Bakery",
    "Cupboard",
    "Snacks and Sweets",
    "Alcohol",
    "Freezer",
];

/// Items sharing a section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionGroup {
    /// Section name
    pub section: String,
    /// Items sorted by name
    pub items: Vec<ConsolidatedItem>,
}

/// Default section order as owned strings
pub fn default_section_order() -> Vec<String> {
    DEFAULT_SECTION_ORDER.iter().map(|s| s.to_string()).collect()
}

/// Alphabetical order ignoring case, with the raw text as tie-break
fn compare_alphabetically(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Group items by section in display order
///
/// Blank section names are treated as "Unclassified". Empty sections are
/// omitted.
pub fn group_by_section(items: &[ConsolidatedItem], section_order: &[String]) -> Vec<SectionGroup> {
    let mut grouped: HashMap<String, Vec<ConsolidatedItem>> = HashMap::new();
    for item in items {
        let section = match item.section.trim() {
            "" => UNCLASSIFIED_SECTION.to_string(),
            trimmed => trimmed.to_string(),
        };
        grouped.entry(section).or_default().push(item.clone());
    }

    let known: Vec<String> = section_order
        .iter()
        .filter(|s| s.as_str() != UNCLASSIFIED_SECTION && grouped.contains_key(s.as_str()))
        .cloned()
        .collect();

    let mut unknown: Vec<String> = grouped
        .keys()
        .filter(|s| s.as_str() != UNCLASSIFIED_SECTION && !section_order.contains(s))
        .cloned()
        .collect();
    unknown.sort_by(|a, b| compare_alphabetically(a, b));

    let mut ordered = known;
    ordered.extend(unknown);
    if grouped.contains_key(UNCLASSIFIED_SECTION) {
        ordered.push(UNCLASSIFIED_SECTION.to_string());
    }

    ordered
        .into_iter()
        .filter_map(|section| {
            let mut items = grouped.remove(&section)?;
            items.sort_by(|a, b| compare_alphabetically(&a.name, &b.name));
            Some(SectionGroup { section, items })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, section: &str) -> ConsolidatedItem {
        ConsolidatedItem {
            name: name.to_string(),
            unit: String::new(),
            numeric_total: 0.0,
            has_numeric: false,
            non_numeric_quantity_notes: Vec::new(),
            freeform_notes: Vec::new(),
            section: section.to_string(),
            display_text: name.to_string(),
        }
    }

    fn sections(groups: &[SectionGroup]) -> Vec<&str> {
        groups.iter().map(|g| g.section.as_str()).collect()
    }

    #[test]
    fn test_known_then_unknown_then_unclassified() {
        let items = vec![
            item("salt", UNCLASSIFIED_SECTION),
            item("wine", "Alcohol"),
            item("tofu", "World Foods"),
            item("apple", "Fruit & Vegtables"),
            item("soap", "Household"),
        ];

        let groups = group_by_section(&items, &default_section_order());
        assert_eq!(
            sections(&groups),
            vec!["Fruit & Vegtables", "Alcohol", "Household", "World Foods", "Unclassified"]
        );
    }

    #[test]
    fn test_items_sorted_by_name() {
        let items = vec![item("milk", "Fridge"), item("butter", "Fridge"), item("eggs", "Fridge")];

        let groups = group_by_section(&items, &default_section_order());
        let names: Vec<&str> = groups[0].items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["butter", "eggs", "milk"]);
    }

    #[test]
    fn test_mixed_case_sorts_alphabetically() {
        let items = vec![
            item("Bananas", "Fridge"),
            item("apples", "Fridge"),
            item("olives", "deli"),
            item("tofu", "World Foods"),
        ];

        let groups = group_by_section(&items, &default_section_order());
        assert_eq!(sections(&groups), vec!["Fridge", "deli", "World Foods"]);
        let names: Vec<&str> = groups[0].items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["apples", "Bananas"]);
    }

    #[test]
    fn test_custom_order() {
        let items = vec![item("bread", "Bakery"), item("milk", "Fridge")];
        let order = vec!["Bakery".to_string(), "Fridge".to_string()];

        assert_eq!(sections(&group_by_section(&items, &order)), vec!["Bakery", "Fridge"]);
    }

    #[test]
    fn test_blank_section_is_unclassified() {
        let groups = group_by_section(&[item("mystery", "  ")], &default_section_order());
        assert_eq!(sections(&groups), vec![UNCLASSIFIED_SECTION]);
    }
}
