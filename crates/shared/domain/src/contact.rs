//! Contact form.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_CONTACT_NAME_LENGTH, MIN_CONTACT_NAME_LENGTH, MIN_MESSAGE_LENGTH};
use crate::validation::{FieldConstraint, Resource, Schema};

static CONTACT_FORM_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(
        "ContactForm",
        vec![
            FieldConstraint::string("first_name")
                .min_length(MIN_CONTACT_NAME_LENGTH)
                .max_length(MAX_CONTACT_NAME_LENGTH),
            FieldConstraint::string("last_name")
                .min_length(MIN_CONTACT_NAME_LENGTH)
                .max_length(MAX_CONTACT_NAME_LENGTH),
            FieldConstraint::email("email"),
            FieldConstraint::string("message").min_length(MIN_MESSAGE_LENGTH),
        ],
    )
});

/// Contact message submitted as form fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ContactForm {
    #[cfg_attr(feature = "openapi", schema(min_length = 1, max_length = 20))]
    pub first_name: String,
    #[cfg_attr(feature = "openapi", schema(min_length = 1, max_length = 20))]
    pub last_name: String,
    #[cfg_attr(feature = "openapi", schema(example = "facundo@platzi.com"))]
    pub email: String,
    #[cfg_attr(feature = "openapi", schema(min_length = 10))]
    pub message: String,
}

impl Resource for ContactForm {
    fn schema() -> &'static Schema {
        &CONTACT_FORM_SCHEMA
    }
}

/// Accept a contact message; returns the client's user agent.
pub fn contact(_form: ContactForm, user_agent: Option<String>, _ads: Option<String>) -> Option<String> {
    user_agent
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::error::{DomainError, ValidationError};

    fn raw_form(email: &str, message: &str) -> HashMap<String, String> {
        HashMap::from([
            ("first_name".to_string(), "Facundo".to_string()),
            ("last_name".to_string(), "García".to_string()),
            ("email".to_string(), email.to_string()),
            ("message".to_string(), message.to_string()),
        ])
    }

    #[test]
    fn test_contact_returns_user_agent() {
        let form = ContactForm::from_text(&raw_form("facundo@platzi.com", "Hello from Bogotá!")).unwrap();
        let result = contact(form, Some("curl/8.0".to_string()), Some("campaign".to_string()));

        assert_eq!(result.as_deref(), Some("curl/8.0"));
    }

    #[test]
    fn test_contact_without_user_agent() {
        let form = ContactForm::from_text(&raw_form("facundo@platzi.com", "Hello from Bogotá!")).unwrap();
        assert_eq!(contact(form, None, None), None);
    }

    #[test]
    fn test_contact_rejects_malformed_email() {
        let err = ContactForm::from_text(&raw_form("facundo-at-platzi", "Hello from Bogotá!")).unwrap_err();

        match err {
            DomainError::Validation(e @ ValidationError::InvalidFormat { .. }) => {
                assert_eq!(e.field(), "email")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_contact_rejects_short_message() {
        let err = ContactForm::from_text(&raw_form("facundo@platzi.com", "Hi")).unwrap_err();

        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::LengthViolation { .. })
        ));
    }
}
