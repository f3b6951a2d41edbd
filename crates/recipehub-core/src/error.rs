//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown recipe filter: {0}")]
    UnknownFilter(String),

    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("No recipe editor is open")]
    EditorNotOpen,
}

#[derive(Error, Debug)]
pub enum LoginError {
    #[error("Email is required")]
    EmailRequired,

    #[error("Password is required")]
    PasswordRequired,

    #[error("Full name is required to sign up")]
    NameRequired,

    #[error("Invalid login details: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}
