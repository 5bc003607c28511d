//! Form state for the login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Held in an `RwSignal` by `LoginPage`; the controller mutates it through the
//! methods below so validation stays identical between the page and tests.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::types::Credentials;

pub const MISSING_PASSWORD_MESSAGE: &str = "please fill in password";
pub const BAD_CREDENTIALS_MESSAGE: &str = "username or password incorrect";

/// Input values plus validation flags for the login form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    /// Persist the session in durable storage instead of the tab session.
    pub remember: bool,
    pub error_username: bool,
    pub error_pwd: bool,
    /// Text shown under the password input when `error_pwd` is set.
    pub error_pwd_message: String,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            remember: false,
            error_username: false,
            error_pwd: false,
            error_pwd_message: MISSING_PASSWORD_MESSAGE.to_owned(),
        }
    }
}

impl LoginForm {
    pub fn validate_username(&mut self) {
        self.error_username = self.username.is_empty();
    }

    /// Flag an empty password. A non-empty password clears the flag but keeps
    /// whatever message was last shown.
    pub fn validate_password(&mut self) {
        if self.password.is_empty() {
            self.error_pwd_message = MISSING_PASSWORD_MESSAGE.to_owned();
            self.error_pwd = true;
        } else {
            self.error_pwd = false;
        }
    }

    /// Run both validators and return the credentials to submit if both pass.
    pub fn validate(&mut self) -> Option<Credentials> {
        self.validate_username();
        self.validate_password();
        if self.error_username || self.error_pwd {
            return None;
        }
        Some(Credentials { username: self.username.clone(), password: self.password.clone() })
    }

    /// Mark the last submit as rejected by the backend.
    pub fn reject_credentials(&mut self) {
        self.error_pwd_message = BAD_CREDENTIALS_MESSAGE.to_owned();
        self.error_pwd = true;
    }
}
