//! Login ViewModel
//!
//! Sign-in / sign-up form. There is no credential check: a form that passes
//! validation yields a `User` straight away.

use recipehub_shared::utils::email_local_part;
use tracing::info;
use validator::Validate;

use crate::domain::User;
use crate::error::LoginError;

#[derive(Debug, Default, Clone)]
pub struct LoginViewModel {
    pub name: String,
    pub email: String,
    pub password: String,
    pub is_sign_up: bool,
    pub error: Option<String>,
}

impl LoginViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_mode(&mut self) {
        self.is_sign_up = !self.is_sign_up;
        self.error = None;
    }

    pub fn title(&self) -> &'static str {
        if self.is_sign_up {
            "Join RecipeHub"
        } else {
            "Welcome Back"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_sign_up {
            "Create Account"
        } else {
            "Sign In"
        }
    }

    pub fn submit(&mut self) -> Result<User, LoginError> {
        match self.build_user() {
            Ok(user) => {
                info!(email = %user.email, sign_up = self.is_sign_up, "User signed in");
                self.clear();
                Ok(user)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    fn build_user(&self) -> Result<User, LoginError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(LoginError::EmailRequired);
        }
        if self.password.is_empty() {
            return Err(LoginError::PasswordRequired);
        }

        let name = self.name.trim();
        if self.is_sign_up && name.is_empty() {
            return Err(LoginError::NameRequired);
        }

        let name = if name.is_empty() {
            email_local_part(email)
        } else {
            name
        };

        let user = User::new(name, email);
        user.validate()?;
        Ok(user)
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.password.clear();
        self.error = None;
    }
}
