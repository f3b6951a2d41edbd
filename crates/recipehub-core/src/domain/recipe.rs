// ============================================================================
// RecipeHub Core - Recipe Entity
// File: crates/recipehub-core/src/domain/recipe.rs
// Description: Recipe, ingredient and step records
// ============================================================================

use recipehub_shared::constants::DEFAULT_UNIT;
use recipehub_shared::utils::pluralize;
use recipehub_shared::{new_id, EntityId};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Ingredient {
    pub id: EntityId,
    pub name: String,

    #[validate(range(min = 0.0, message = "Ingredient amount cannot be negative"))]
    pub amount: f64,

    /// Free text; the editor suggests `UNIT_SUGGESTIONS` but does not enforce them.
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            amount,
            unit: unit.into(),
        }
    }

    pub fn blank() -> Self {
        Self::new("", 0.0, DEFAULT_UNIT)
    }
}

/// Instruction step, optionally timed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub id: EntityId,
    pub instruction: String,

    #[validate(range(min = 1, message = "Step timer must be at least one minute"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timer_minutes: Option<u32>,
}

impl Step {
    pub fn new(instruction: impl Into<String>, timer_minutes: Option<u32>) -> Self {
        Self {
            id: new_id(),
            instruction: instruction.into(),
            timer_minutes,
        }
    }

    pub fn blank() -> Self {
        Self::new("", None)
    }
}

/// Recipe entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: EntityId,
    pub title: String,
    pub description: String,

    #[validate(range(min = 1, message = "A recipe serves at least one person"))]
    pub servings: u32,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    #[validate(nested)]
    pub ingredients: Vec<Ingredient>,

    #[serde(default)]
    #[validate(nested)]
    pub steps: Vec<Step>,

    pub author: String,

    /// Email-like identifiers
    #[serde(default)]
    pub collaborators: Vec<String>,

    pub last_modified: String,

    /// Total cook time in minutes
    pub cook_time: u32,

    #[validate(range(min = 0.0, max = 5.0, message = "Rating must be between 0 and 5"))]
    pub rating: f32,

    pub is_public: bool,
}

impl Recipe {
    pub fn step(&self, step_id: EntityId) -> Option<&Step> {
        self.steps.iter().find(|s| s.id == step_id)
    }

    pub fn step_index(&self, step_id: EntityId) -> Option<usize> {
        self.steps.iter().position(|s| s.id == step_id)
    }

    /// Case-insensitive substring match on title, description or any tag.
    /// `needle` must already be lowercase.
    pub fn matches_query(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }

    /// `"45m"` under an hour, `"12h 0m"` otherwise.
    pub fn cook_time_label(&self) -> String {
        if self.cook_time < 60 {
            format!("{}m", self.cook_time)
        } else {
            format!("{}h {}m", self.cook_time / 60, self.cook_time % 60)
        }
    }

    pub fn collaborator_summary(&self) -> Option<String> {
        if self.collaborators.is_empty() {
            None
        } else {
            Some(pluralize(self.collaborators.len(), "collaborator"))
        }
    }
}
