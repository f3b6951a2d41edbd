//! # RecipeHub Core - Domain Module
//!
//! Records and the in-memory recipe book.

pub mod book;
pub mod catalog;
pub mod recipe;
pub mod user;

pub use book::{RecipeBook, Upsert};
pub use recipe::{Ingredient, Recipe, Step};
pub use user::{Session, User};
