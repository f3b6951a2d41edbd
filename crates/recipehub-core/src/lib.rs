//! # RecipeHub Core
//!
//! Domain model, view models and the top-level controller for RecipeHub.
//! Nothing here knows about the terminal; the TUI crate only maps keys to
//! the intents exposed by these types and renders their state.

pub mod controller;
pub mod domain;
pub mod error;
pub mod events;
pub mod services;
pub mod viewmodel;

pub use controller::{AppController, View};
pub use domain::*;
pub use error::{DomainError, LoginError};
pub use events::AppEvent;
