//! # Meal Planner
//!
//! Turns a household's planned recipes into one consolidated, section-grouped
//! shopping list, and recommends unplanned recipes that reuse the perishable
//! ingredients already being bought.
//!
//! Both engines ([`consolidator::consolidate`] and
//! [`synergy::find_synergy_recipes`]) are pure functions over hydrated
//! recipes. Hydration and validation of recipe store rows happen in
//! [`catalog`].

pub mod catalog;
pub mod consolidator;
pub mod localization;
pub mod plan;
pub mod plan_config;
pub mod plan_errors;
pub mod plan_report;
pub mod quantity;
pub mod recipe_filter;
pub mod recipe_model;
pub mod sections;
pub mod shopping_list;
pub mod synergy;
