//! Login/registration form state

use dioxus::prelude::*;

/// Minimum password length accepted by registration
pub const MIN_PASSWORD_LEN: usize = 6;

/// Which form is being shown
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// State shared by the login and registration forms
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AuthFormState {
    pub username: String,
    /// Registration only
    pub email: String,
    pub password: String,
    /// Request outstanding
    pub submitting: bool,
    pub error: Option<String>,
}

impl AuthFormState {
    /// Client-side checks before any request is made.
    pub fn validate(&self, mode: AuthMode) -> Result<(), String> {
        if self.username.trim().is_empty() {
            return Err("Enter a username".to_string());
        }
        if mode == AuthMode::Register && self.email.trim().is_empty() {
            return Err("Enter an email".to_string());
        }
        if self.password.is_empty() {
            return Err("Enter a password".to_string());
        }
        if mode == AuthMode::Register && self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> AuthFormState {
        AuthFormState {
            username: "ivan".to_string(),
            email: "ivan@example.com".to_string(),
            password: "secret1".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_forms() {
        assert_eq!(filled().validate(AuthMode::Login), Ok(()));
        assert_eq!(filled().validate(AuthMode::Register), Ok(()));
    }

    #[test]
    fn test_blank_username() {
        let state = AuthFormState {
            username: "  ".to_string(),
            ..filled()
        };
        assert!(state.validate(AuthMode::Login).is_err());
    }

    #[test]
    fn test_short_password_only_matters_for_register() {
        let state = AuthFormState {
            password: "abc".to_string(),
            ..filled()
        };
        assert_eq!(state.validate(AuthMode::Login), Ok(()));
        assert!(state.validate(AuthMode::Register).is_err());
    }

    #[test]
    fn test_email_required_for_register() {
        let state = AuthFormState {
            email: String::new(),
            ..filled()
        };
        assert_eq!(state.validate(AuthMode::Login), Ok(()));
        assert_eq!(
            state.validate(AuthMode::Register),
            Err("Enter an email".to_string())
        );
    }
}
