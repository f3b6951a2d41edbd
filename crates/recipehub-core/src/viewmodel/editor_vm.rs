//! Recipe Editor ViewModel
//!
//! Form state for creating or editing a recipe. The ingredient and step lists
//! never drop below one entry; blank entries are filtered out on save.

use recipehub_shared::constants::{DEFAULT_SERVINGS, JUST_NOW, MIN_SERVINGS};
use recipehub_shared::{new_id, EntityId};
use tracing::debug;
use validator::Validate;

use crate::domain::{Ingredient, Recipe, Step};
use crate::error::DomainError;

#[derive(Debug, Clone, PartialEq)]
pub enum IngredientField {
    Name(String),
    Amount(f64),
    Unit(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepField {
    Instruction(String),
    TimerMinutes(Option<u32>),
}

#[derive(Debug, Clone)]
pub struct RecipeEditorViewModel {
    initial: Option<Recipe>,
    pub title: String,
    pub description: String,
    servings: u32,
    tags: Vec<String>,
    pub tag_input: String,
    ingredients: Vec<Ingredient>,
    steps: Vec<Step>,
}

impl RecipeEditorViewModel {
    pub fn new(initial: Option<&Recipe>) -> Self {
        match initial {
            Some(recipe) => Self {
                initial: Some(recipe.clone()),
                title: recipe.title.clone(),
                description: recipe.description.clone(),
                servings: recipe.servings.max(MIN_SERVINGS),
                tags: recipe.tags.clone(),
                tag_input: String::new(),
                ingredients: non_empty_or(recipe.ingredients.clone(), Ingredient::blank),
                steps: non_empty_or(recipe.steps.clone(), Step::blank),
            },
            None => Self {
                initial: None,
                title: String::new(),
                description: String::new(),
                servings: DEFAULT_SERVINGS,
                tags: Vec::new(),
                tag_input: String::new(),
                ingredients: vec![Ingredient::blank()],
                steps: vec![Step::blank()],
            },
        }
    }

    pub fn is_editing(&self) -> bool {
        self.initial.is_some()
    }

    pub fn heading(&self) -> &'static str {
        if self.is_editing() {
            "Edit Recipe"
        } else {
            "Create New Recipe"
        }
    }

    // ------------------------------------------------------------------
    // Servings
    // ------------------------------------------------------------------

    pub fn servings(&self) -> u32 {
        self.servings
    }

    pub fn increase_servings(&mut self) {
        self.servings = self.servings.saturating_add(1);
    }

    pub fn decrease_servings(&mut self) {
        self.servings = self.servings.saturating_sub(1).max(MIN_SERVINGS);
    }

    // ------------------------------------------------------------------
    // Ingredients
    // ------------------------------------------------------------------

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn can_remove_ingredient(&self) -> bool {
        self.ingredients.len() > 1
    }

    pub fn add_ingredient(&mut self) -> EntityId {
        let ingredient = Ingredient::blank();
        let id = ingredient.id;
        self.ingredients.push(ingredient);
        id
    }

    pub fn remove_ingredient(&mut self, id: EntityId) -> bool {
        if !self.can_remove_ingredient() {
            return false;
        }
        let before = self.ingredients.len();
        self.ingredients.retain(|i| i.id != id);
        self.ingredients.len() != before
    }

    pub fn update_ingredient(&mut self, id: EntityId, field: IngredientField) -> bool {
        let Some(ingredient) = self.ingredients.iter_mut().find(|i| i.id == id) else {
            return false;
        };
        match field {
            IngredientField::Name(name) => ingredient.name = name,
            IngredientField::Amount(amount) => ingredient.amount = amount.max(0.0),
            IngredientField::Unit(unit) => ingredient.unit = unit,
        }
        true
    }

    // ------------------------------------------------------------------
    // Steps
    // ------------------------------------------------------------------

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn can_remove_step(&self) -> bool {
        self.steps.len() > 1
    }

    pub fn add_step(&mut self) -> EntityId {
        let step = Step::blank();
        let id = step.id;
        self.steps.push(step);
        id
    }

    pub fn remove_step(&mut self, id: EntityId) -> bool {
        if !self.can_remove_step() {
            return false;
        }
        let before = self.steps.len();
        self.steps.retain(|s| s.id != id);
        self.steps.len() != before
    }

    pub fn update_step(&mut self, id: EntityId, field: StepField) -> bool {
        let Some(step) = self.steps.iter_mut().find(|s| s.id == id) else {
            return false;
        };
        match field {
            StepField::Instruction(text) => step.instruction = text,
            StepField::TimerMinutes(minutes) => step.timer_minutes = minutes.filter(|m| *m > 0),
        }
        true
    }

    // ------------------------------------------------------------------
    // Tags
    // ------------------------------------------------------------------

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Trimmed, non-empty and not already present.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Add whatever is in `tag_input`, clearing it on success.
    pub fn commit_tag_input(&mut self) -> bool {
        let input = std::mem::take(&mut self.tag_input);
        if self.add_tag(&input) {
            true
        } else {
            self.tag_input = input;
            false
        }
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    // ------------------------------------------------------------------
    // Save
    // ------------------------------------------------------------------

    /// Build the finished record. `author` is the session's display name and
    /// is only used for new recipes; edits keep the original author.
    pub fn save(&self, author: &str) -> Result<Recipe, DomainError> {
        let ingredients: Vec<Ingredient> = self
            .ingredients
            .iter()
            .filter(|i| !i.name.trim().is_empty())
            .cloned()
            .collect();
        let steps: Vec<Step> = self
            .steps
            .iter()
            .filter(|s| !s.instruction.trim().is_empty())
            .cloned()
            .collect();

        let recipe = match &self.initial {
            Some(existing) => Recipe {
                id: existing.id,
                title: self.title.clone(),
                description: self.description.clone(),
                servings: self.servings,
                tags: self.tags.clone(),
                ingredients,
                steps,
                author: existing.author.clone(),
                collaborators: existing.collaborators.clone(),
                last_modified: JUST_NOW.to_string(),
                cook_time: existing.cook_time,
                rating: existing.rating,
                is_public: existing.is_public,
            },
            None => Recipe {
                id: new_id(),
                title: self.title.clone(),
                description: self.description.clone(),
                servings: self.servings,
                tags: self.tags.clone(),
                ingredients,
                steps,
                author: author.to_string(),
                collaborators: Vec::new(),
                last_modified: JUST_NOW.to_string(),
                cook_time: 0,
                rating: 0.0,
                is_public: false,
            },
        };

        recipe.validate()?;
        debug!(
            recipe_id = %recipe.id,
            ingredients = recipe.ingredients.len(),
            steps = recipe.steps.len(),
            "Editor produced recipe"
        );
        Ok(recipe)
    }
}

fn non_empty_or<T>(items: Vec<T>, blank: fn() -> T) -> Vec<T> {
    if items.is_empty() {
        vec![blank()]
    } else {
        items
    }
}

/// Lenient amount input: anything unparsable is 0, negatives clamp to 0.
pub fn parse_amount(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.max(0.0))
        .unwrap_or(0.0)
}

/// Timer input: blank, unparsable or zero means no timer.
pub fn parse_timer_minutes(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok().filter(|m| *m > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::mock_recipes;

    #[test]
    fn test_new_editor_defaults() {
        let vm = RecipeEditorViewModel::new(None);
        assert!(!vm.is_editing());
        assert_eq!(vm.heading(), "Create New Recipe");
        assert_eq!(vm.servings(), 4);
        assert_eq!(vm.ingredients().len(), 1);
        assert_eq!(vm.ingredients()[0].unit, "cups");
        assert_eq!(vm.steps().len(), 1);
    }

    #[test]
    fn test_add_ingredient_gets_unique_id() {
        let mut vm = RecipeEditorViewModel::new(None);
        let id = vm.add_ingredient();
        assert_eq!(vm.ingredients().len(), 2);
        assert_ne!(vm.ingredients()[0].id, id);
        assert_eq!(vm.ingredients()[1].id, id);
    }

    #[test]
    fn test_last_ingredient_cannot_be_removed() {
        let mut vm = RecipeEditorViewModel::new(None);
        let only = vm.ingredients()[0].id;
        assert!(!vm.can_remove_ingredient());
        assert!(!vm.remove_ingredient(only));
        assert_eq!(vm.ingredients().len(), 1);

        let second = vm.add_ingredient();
        assert!(vm.remove_ingredient(only));
        assert_eq!(vm.ingredients()[0].id, second);
    }

    #[test]
    fn test_last_step_cannot_be_removed() {
        let mut vm = RecipeEditorViewModel::new(None);
        let only = vm.steps()[0].id;
        assert!(!vm.remove_step(only));
        let added = vm.add_step();
        assert!(vm.remove_step(added));
        assert_eq!(vm.steps().len(), 1);
    }

    #[test]
    fn test_update_touches_one_field_of_one_entry() {
        let mut vm = RecipeEditorViewModel::new(None);
        let first = vm.ingredients()[0].id;
        let second = vm.add_ingredient();

        assert!(vm.update_ingredient(second, IngredientField::Name("flour".into())));
        assert!(vm.update_ingredient(second, IngredientField::Amount(2.5)));

        let untouched = &vm.ingredients()[0];
        assert_eq!(untouched.id, first);
        assert_eq!(untouched.name, "");
        assert_eq!(untouched.amount, 0.0);

        let updated = &vm.ingredients()[1];
        assert_eq!(updated.name, "flour");
        assert_eq!(updated.amount, 2.5);
        assert_eq!(updated.unit, "cups");

        assert!(!vm.update_ingredient(new_id(), IngredientField::Unit("g".into())));
    }

    #[test]
    fn test_step_timer_zero_means_none() {
        let mut vm = RecipeEditorViewModel::new(None);
        let id = vm.steps()[0].id;
        vm.update_step(id, StepField::TimerMinutes(Some(0)));
        assert_eq!(vm.steps()[0].timer_minutes, None);
        vm.update_step(id, StepField::TimerMinutes(Some(12)));
        assert_eq!(vm.steps()[0].timer_minutes, Some(12));
    }

    #[test]
    fn test_tag_add_is_idempotent() {
        let mut vm = RecipeEditorViewModel::new(None);
        assert!(vm.add_tag("Thai"));
        assert!(!vm.add_tag("Thai"));
        assert!(!vm.add_tag("  Thai "));
        assert!(!vm.add_tag("   "));
        assert_eq!(vm.tags(), ["Thai".to_string()]);

        assert!(!vm.remove_tag("thai"));
        assert!(vm.remove_tag("Thai"));
        assert!(vm.tags().is_empty());
    }

    #[test]
    fn test_commit_tag_input() {
        let mut vm = RecipeEditorViewModel::new(None);
        vm.tag_input = " Vegan ".into();
        assert!(vm.commit_tag_input());
        assert!(vm.tag_input.is_empty());

        vm.tag_input = "Vegan".into();
        assert!(!vm.commit_tag_input());
        assert_eq!(vm.tag_input, "Vegan");
    }

    #[test]
    fn test_save_filters_blank_entries() {
        let mut vm = RecipeEditorViewModel::new(None);
        vm.title = "Pancakes".into();
        let blank = vm.ingredients()[0].id;
        let milk = vm.add_ingredient();
        vm.update_ingredient(milk, IngredientField::Name("milk".into()));
        vm.update_ingredient(blank, IngredientField::Name("   ".into()));
        let whisk = vm.steps()[0].id;
        vm.update_step(whisk, StepField::Instruction("Whisk".into()));
        vm.add_step();

        let recipe = vm.save("Alice Johnson").unwrap();
        assert_eq!(recipe.ingredients.len(), 1);
        assert_eq!(recipe.ingredients[0].name, "milk");
        assert_eq!(recipe.steps.len(), 1);
        assert_eq!(recipe.author, "Alice Johnson");
        assert_eq!(recipe.last_modified, "Just now");
        assert!(!recipe.is_public);
    }

    #[test]
    fn test_editing_keeps_identity_and_metadata() {
        let original = mock_recipes().remove(0);
        let mut vm = RecipeEditorViewModel::new(Some(&original));
        assert!(vm.is_editing());
        assert_eq!(vm.heading(), "Edit Recipe");
        vm.title = "Grandma's Cookies".into();
        vm.decrease_servings();

        let saved = vm.save("Somebody Else").unwrap();
        assert_eq!(saved.id, original.id);
        assert_eq!(saved.author, original.author);
        assert_eq!(saved.collaborators, original.collaborators);
        assert_eq!(saved.is_public, original.is_public);
        assert_eq!(saved.servings, 23);
        assert_eq!(saved.title, "Grandma's Cookies");
        assert_eq!(saved.ingredients, original.ingredients);
    }

    #[test]
    fn test_two_new_saves_get_distinct_ids() {
        let vm = RecipeEditorViewModel::new(None);
        let a = vm.save("Alice").unwrap();
        let b = vm.save("Alice").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_parse_inputs() {
        assert_eq!(parse_amount("2.5"), 2.5);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("-3"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_timer_minutes("15"), Some(15));
        assert_eq!(parse_timer_minutes("0"), None);
        assert_eq!(parse_timer_minutes("soon"), None);
        assert_eq!(parse_timer_minutes(""), None);
    }
}
