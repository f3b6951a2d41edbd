//! User and session entities

use chrono::{DateTime, Utc};
use recipehub_shared::utils::initial;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Signed-in user as collected by the login form. No credentials are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct User {
    #[validate(length(min = 1, message = "Display name cannot be empty"))]
    pub name: String,

    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn initial(&self) -> char {
        initial(&self.name)
    }
}

/// Lives for as long as the controller keeps the user signed in.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn start(user: User) -> Self {
        Self {
            user,
            started_at: Utc::now(),
        }
    }

    pub fn duration(&self) -> chrono::Duration {
        Utc::now() - self.started_at
    }
}
