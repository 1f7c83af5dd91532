//! # Planner Configuration Module
//!
//! Configuration for the planner binary: where the snapshot lives, which
//! language reports use and the walk order through the supermarket.

use crate::localization::DEFAULT_LANGUAGE;
use crate::plan_errors::PlanError;
use crate::sections::default_section_order;
use log::debug;
use std::env;
use std::path::PathBuf;

/// Snapshot file path (required)
pub const SNAPSHOT_ENV: &str = "MEAL_PLAN_SNAPSHOT";
/// Report language (optional)
pub const LANGUAGE_ENV: &str = "MEAL_PLAN_LANGUAGE";
/// Comma separated section order (optional)
pub const SECTION_ORDER_ENV: &str = "MEAL_PLAN_SECTION_ORDER";

/// Configuration structure for the planner
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Known sections in display order
    pub section_order: Vec<String>,
    /// Report language code (e.g. "en", "fr")
    pub language: String,
    /// Path of the recipe store snapshot
    pub snapshot_path: Option<PathBuf>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            section_order: default_section_order(),
            language: DEFAULT_LANGUAGE.to_string(),
            snapshot_path: None,
        }
    }
}

/// Split a comma separated section list, dropping blanks
pub fn parse_section_order(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl PlannerConfig {
    /// Build a configuration from a variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PlanError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let snapshot = lookup(SNAPSHOT_ENV)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| PlanError::Config(format!("{SNAPSHOT_ENV} must be set")))?;
        config.snapshot_path = Some(PathBuf::from(snapshot.trim()));

        if let Some(language) = lookup(LANGUAGE_ENV).filter(|v| !v.trim().is_empty()) {
            config.language = language.trim().to_lowercase();
        }

        if let Some(raw) = lookup(SECTION_ORDER_ENV) {
            let order = parse_section_order(&raw);
            if order.is_empty() {
                return Err(PlanError::Config(format!("{SECTION_ORDER_ENV} lists no sections")));
            }
            config.section_order = order;
        }

        debug!("Loaded planner config: {:?}", config);
        Ok(config)
    }

    /// Build a configuration from process environment variables
    pub fn from_env() -> Result<Self, PlanError> {
        Self::from_lookup(|key| env::var(key).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::from_lookup(lookup(&[(SNAPSHOT_ENV, "plan.json")])).unwrap();
        assert_eq!(config.snapshot_path, Some(PathBuf::from("plan.json")));
        assert_eq!(config.language, "en");
        assert_eq!(config.section_order[0], "Fruit & Vegtables");
        assert_eq!(config.section_order.len(), 7);
    }

    #[test]
    fn test_missing_snapshot_is_an_error() {
        assert!(matches!(
            PlannerConfig::from_lookup(lookup(&[])),
            Err(PlanError::Config(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let config = PlannerConfig::from_lookup(lookup(&[
            (SNAPSHOT_ENV, "plan.json"),
            (LANGUAGE_ENV, " FR "),
            (SECTION_ORDER_ENV, "Bakery, Fridge,,"),
        ]))
        .unwrap();
        assert_eq!(config.language, "fr");
        assert_eq!(config.section_order, vec!["Bakery", "Fridge"]);
    }

    #[test]
    fn test_empty_section_order_rejected() {
        let result = PlannerConfig::from_lookup(lookup(&[(SNAPSHOT_ENV, "p.json"), (SECTION_ORDER_ENV, " , ")]));
        assert!(result.is_err());
    }
}
