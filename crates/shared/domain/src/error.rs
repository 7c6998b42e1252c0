//! Domain-level errors.
//!
//! `ValidationError` is raised by field and schema validation before any
//! operation runs. `DomainError` is what operations themselves return.
//! Neither knows anything about HTTP.

use thiserror::Error;

/// A single field-level validation failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was absent (or null)
    #[error("{field}: field required")]
    MissingRequiredField { field: String },

    /// A numeric bound was violated
    #[error("{field}: ensure this value is {bound}")]
    RangeViolation { field: String, bound: String },

    /// A string length bound was violated
    #[error("{field}: ensure this value has {bound}")]
    LengthViolation { field: String, bound: String },

    /// A value outside a closed set of variants
    #[error("{field}: '{value}' is not one of the permitted values")]
    InvalidEnumValue { field: String, value: String },

    /// The value has the wrong type or shape
    #[error("{field}: value is not a valid {expected}")]
    InvalidFormat { field: String, expected: String },
}

impl ValidationError {
    /// Name (or dotted path) of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::MissingRequiredField { field }
            | ValidationError::RangeViolation { field, .. }
            | ValidationError::LengthViolation { field, .. }
            | ValidationError::InvalidEnumValue { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }

    /// Taxonomy name of the violation.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::MissingRequiredField { .. } => "missing_required_field",
            ValidationError::RangeViolation { .. } => "range_violation",
            ValidationError::LengthViolation { .. } => "length_violation",
            ValidationError::InvalidEnumValue { .. } => "invalid_enum_value",
            ValidationError::InvalidFormat { .. } => "invalid_format",
        }
    }

    /// Prefix the field with the name of the enclosing object.
    pub(crate) fn nested_in(self, parent: &str) -> Self {
        let prefix = |field: String| format!("{}.{}", parent, field);
        match self {
            ValidationError::MissingRequiredField { field } => {
                ValidationError::MissingRequiredField { field: prefix(field) }
            }
            ValidationError::RangeViolation { field, bound } => ValidationError::RangeViolation {
                field: prefix(field),
                bound,
            },
            ValidationError::LengthViolation { field, bound } => ValidationError::LengthViolation {
                field: prefix(field),
                bound,
            },
            ValidationError::InvalidEnumValue { field, value } => {
                ValidationError::InvalidEnumValue {
                    field: prefix(field),
                    value,
                }
            }
            ValidationError::InvalidFormat { field, expected } => ValidationError::InvalidFormat {
                field: prefix(field),
                expected,
            },
        }
    }

    /// Create a missing field error
    pub fn missing(field: impl Into<String>) -> Self {
        ValidationError::MissingRequiredField {
            field: field.into(),
        }
    }

    /// Create an invalid format error
    pub fn invalid_format(field: impl Into<String>, expected: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            expected: expected.into(),
        }
    }
}

/// Errors returned by domain operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input failed schema validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Entity not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal domain error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        DomainError::NotFound(message.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        DomainError::Internal(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
