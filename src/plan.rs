//! # Plan Set
//!
//! The ordered set of recipe ids a household has planned. Order only affects
//! how planned recipes are listed; the engines treat the plan as a set.

use crate::recipe_model::Recipe;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ordered, duplicate-free recipe ids
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct PlanSet {
    ids: Vec<String>,
}

impl PlanSet {
    /// Create an empty plan
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a plan from ids, keeping the first occurrence of each
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut plan = Self::new();
        for id in ids {
            plan.add(id);
        }
        plan
    }

    /// Add a recipe id; returns false if it was already planned
    pub fn add(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        debug!("Adding recipe {} to plan", id);
        self.ids.push(id);
        true
    }

    /// Remove a recipe id; returns false if it was not planned
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|planned| planned != id);
        let removed = self.ids.len() != before;
        if removed {
            debug!("Removed recipe {} from plan", id);
        }
        removed
    }

    /// Whether a recipe id is planned
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|planned| planned == id)
    }

    /// Number of planned recipes
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is planned
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Planned ids in insertion order
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Catalog recipes for the planned ids, in plan order
    ///
    /// Ids missing from the catalog are skipped.
    pub fn planned_recipes(&self, catalog: &[Recipe]) -> Vec<Recipe> {
        let by_id: HashMap<&str, &Recipe> = catalog.iter().map(|r| (r.id.as_str(), r)).collect();
        self.ids
            .iter()
            .filter_map(|id| {
                let recipe = by_id.get(id.as_str()).copied();
                if recipe.is_none() {
                    warn!("Planned recipe {} not found in catalog", id);
                }
                recipe.cloned()
            })
            .collect()
    }
}

impl From<Vec<String>> for PlanSet {
    fn from(ids: Vec<String>) -> Self {
        Self::from_ids(ids)
    }
}

impl From<PlanSet> for Vec<String> {
    fn from(plan: PlanSet) -> Self {
        plan.ids
    }
}
