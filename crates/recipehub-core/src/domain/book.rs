//! In-memory recipe book
//!
//! Ordered, lives as long as the controller. Nothing is written anywhere.

use recipehub_shared::EntityId;
use tracing::debug;

use super::catalog::mock_recipes;
use super::recipe::Recipe;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Inserted,
    Updated,
}

#[derive(Debug, Clone, Default)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
}

impl RecipeBook {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn seeded() -> Self {
        Self::new(mock_recipes())
    }

    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: EntityId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Replace in place when the id is known, append otherwise.
    pub fn upsert(&mut self, recipe: Recipe) -> Upsert {
        match self.recipes.iter_mut().find(|r| r.id == recipe.id) {
            Some(existing) => {
                debug!(recipe_id = %recipe.id, "Replacing recipe in book");
                *existing = recipe;
                Upsert::Updated
            }
            None => {
                debug!(recipe_id = %recipe.id, "Adding recipe to book");
                self.recipes.push(recipe);
                Upsert::Inserted
            }
        }
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
