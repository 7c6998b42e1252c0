//! Login form and its public echo.

use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_USERNAME_LENGTH;
use crate::validation::{FieldConstraint, Resource, Schema};

static LOGIN_FORM_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(
        "LoginForm",
        vec![
            FieldConstraint::string("username").max_length(MAX_USERNAME_LENGTH),
            FieldConstraint::string("password"),
        ],
    )
});

/// Credentials submitted as form fields
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LoginForm {
    #[cfg_attr(feature = "openapi", schema(example = "zebek95", max_length = 20))]
    pub username: String,
    pub password: String,
}

// Don't expose the password in debug output
impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Resource for LoginForm {
    fn schema() -> &'static Schema {
        &LOGIN_FORM_SCHEMA
    }
}

/// Login result; has no password field at all
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LoginResponse {
    #[cfg_attr(feature = "openapi", schema(example = "zebek95", max_length = 20))]
    pub username: String,
}

impl From<LoginForm> for LoginResponse {
    fn from(form: LoginForm) -> Self {
        Self {
            username: form.username,
        }
    }
}

/// Accept credentials and echo the username.
pub fn login(form: LoginForm) -> LoginResponse {
    LoginResponse::from(form)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::error::{DomainError, ValidationError};

    fn form(username: &str, password: &str) -> HashMap<String, String> {
        HashMap::from([
            ("username".to_string(), username.to_string()),
            ("password".to_string(), password.to_string()),
        ])
    }

    #[test]
    fn test_login_echoes_username_only() {
        let login_form = LoginForm::from_text(&form("zebek95", "anything8+")).unwrap();
        let response = login(login_form);

        assert_eq!(response.username, "zebek95");
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({ "username": "zebek95" })
        );
    }

    #[test]
    fn test_login_rejects_long_username() {
        let err = LoginForm::from_text(&form("a_username_that_is_far_too_long", "secret")).unwrap_err();

        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::LengthViolation { .. })
        ));
    }

    #[test]
    fn test_login_requires_password() {
        let raw = HashMap::from([("username".to_string(), "zebek95".to_string())]);
        let err = LoginForm::from_text(&raw).unwrap_err();

        assert_eq!(err, DomainError::Validation(ValidationError::missing("password")));
    }
}
