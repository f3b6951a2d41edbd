//! # RecipeHub Shared
//!
//! Configuration, telemetry, ids and small helpers shared by the RecipeHub crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod telemetry;
pub mod types;
pub mod utils;

pub use config::AppConfig;
pub use error::AppError;
pub use types::*;
