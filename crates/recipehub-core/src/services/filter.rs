//! Dashboard recipe filter

use std::fmt;
use std::str::FromStr;

use crate::domain::Recipe;
use crate::error::DomainError;

/// Category selector shown next to the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecipeFilter {
    #[default]
    All,
    MyRecipes,
    Collaborations,
    Public,
}

impl RecipeFilter {
    pub fn all() -> [RecipeFilter; 4] {
        [
            RecipeFilter::All,
            RecipeFilter::MyRecipes,
            RecipeFilter::Collaborations,
            RecipeFilter::Public,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecipeFilter::All => "All Recipes",
            RecipeFilter::MyRecipes => "My Recipes",
            RecipeFilter::Collaborations => "Collaborations",
            RecipeFilter::Public => "Public",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeFilter::All => "all",
            RecipeFilter::MyRecipes => "my-recipes",
            RecipeFilter::Collaborations => "collaborations",
            RecipeFilter::Public => "public",
        }
    }

    /// Wraps around after `Public`.
    pub fn next(&self) -> RecipeFilter {
        match self {
            RecipeFilter::All => RecipeFilter::MyRecipes,
            RecipeFilter::MyRecipes => RecipeFilter::Collaborations,
            RecipeFilter::Collaborations => RecipeFilter::Public,
            RecipeFilter::Public => RecipeFilter::All,
        }
    }

    fn admits(&self, recipe: &Recipe, current_user: Option<&str>) -> bool {
        match self {
            RecipeFilter::All => true,
            RecipeFilter::MyRecipes => current_user.is_some_and(|name| recipe.author == name),
            RecipeFilter::Collaborations => !recipe.collaborators.is_empty(),
            RecipeFilter::Public => recipe.is_public,
        }
    }
}

impl fmt::Display for RecipeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecipeFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecipeFilter::all()
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| DomainError::UnknownFilter(s.to_string()))
    }
}

/// Order-preserving subsequence of `recipes` matching `query` and `filter`.
/// `current_user` is the session's display name, used by `MyRecipes`.
pub fn filter_recipes<'a>(
    recipes: &'a [Recipe],
    query: &str,
    filter: RecipeFilter,
    current_user: Option<&str>,
) -> Vec<&'a Recipe> {
    let needle = query.to_lowercase();
    recipes
        .iter()
        .filter(|r| r.matches_query(&needle) && filter.admits(r, current_user))
        .collect()
}
