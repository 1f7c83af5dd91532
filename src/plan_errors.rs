//! # Plan Error Types Module
//!
//! This module defines the error type raised at the hydration boundary, where
//! recipe store rows are turned into typed recipes. The consolidation and
//! synergy engines themselves never fail.

/// Custom error types for snapshot loading and hydration
#[derive(Debug, Clone, PartialEq)]
pub enum PlanError {
    /// Snapshot could not be read or parsed
    Snapshot(String),
    /// A recipe line without a hydrated ingredient reference
    MissingIngredient {
        /// Recipe the line belongs to
        recipe_id: String,
        /// Position of the line in the recipe row
        line_index: usize,
    },
    /// The same recipe id appears more than once in the catalog
    DuplicateRecipe(String),
    /// The plan references a recipe the catalog does not contain
    UnknownPlannedRecipe(String),
    /// Invalid configuration value
    Config(String),
}

impl std::fmt::Display for PlanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanError::Snapshot(msg) => write!(f, "Snapshot error: {msg}"),
            PlanError::MissingIngredient {
                recipe_id,
                line_index,
            } => write!(
                f,
                "Hydration error: recipe {recipe_id} line {line_index} has no ingredient reference"
            ),
            PlanError::DuplicateRecipe(id) => write!(f, "Catalog error: duplicate recipe {id}"),
            PlanError::UnknownPlannedRecipe(id) => {
                write!(f, "Plan error: recipe {id} is not in the catalog")
            }
            PlanError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for PlanError {}

impl From<serde_json::Error> for PlanError {
    fn from(err: serde_json::Error) -> Self {
        PlanError::Snapshot(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = PlanError::MissingIngredient {
            recipe_id: "r1".to_string(),
            line_index: 2,
        };
        assert_eq!(
            err.to_string(),
            "Hydration error: recipe r1 line 2 has no ingredient reference"
        );
        assert_eq!(
            PlanError::UnknownPlannedRecipe("r9".to_string()).to_string(),
            "Plan error: recipe r9 is not in the catalog"
        );
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let plan_err: PlanError = err.into();
        assert!(matches!(plan_err, PlanError::Snapshot(_)));
    }
}
