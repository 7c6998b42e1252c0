//! Per-field constraint declarations.

use std::fmt;

use serde_json::Value;
use validator::ValidateEmail;

use super::schema::Schema;
use crate::error::ValidationError;

/// Semantic type of a field.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    String,
    Integer,
    Boolean,
    /// Closed set of string variants
    Enum(&'static [&'static str]),
    /// String in e-mail address format
    Email,
    /// Nested record validated by its own schema
    Object(fn() -> &'static Schema),
}

impl FieldKind {
    fn expected(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
            FieldKind::Enum(_) => "enumeration member",
            FieldKind::Email => "email address",
            FieldKind::Object(_) => "object",
        }
    }

    /// Type-check a decoded JSON value.
    fn check_json(&self, field: &str, value: &Value) -> Result<Value, ValidationError> {
        match (self, value) {
            (FieldKind::String, Value::String(_)) => Ok(value.clone()),
            (FieldKind::Integer, Value::Number(n)) => n
                .as_i64()
                .map(Value::from)
                .ok_or_else(|| ValidationError::invalid_format(field, self.expected())),
            (FieldKind::Boolean, Value::Bool(_)) => Ok(value.clone()),
            (FieldKind::Enum(variants), Value::String(s)) => check_enum(field, variants, s),
            (FieldKind::Enum(_), other) => Err(ValidationError::InvalidEnumValue {
                field: field.to_string(),
                value: other.to_string(),
            }),
            (FieldKind::Email, Value::String(s)) => check_email(field, s.clone()),
            (FieldKind::Object(schema), Value::Object(map)) => schema()
                .validate_json(map)
                .map(Value::Object)
                .map_err(|e| e.nested_in(field)),
            _ => Err(ValidationError::invalid_format(field, self.expected())),
        }
    }

    /// Parse and type-check a textual value (query, path, form, header, cookie).
    fn check_text(&self, field: &str, text: &str) -> Result<Value, ValidationError> {
        match self {
            FieldKind::String => Ok(Value::String(text.to_string())),
            FieldKind::Integer => text
                .trim()
                .parse::<i64>()
                .map(Value::from)
                .map_err(|_| ValidationError::invalid_format(field, self.expected())),
            FieldKind::Boolean => parse_bool(text)
                .map(Value::Bool)
                .ok_or_else(|| ValidationError::invalid_format(field, self.expected())),
            FieldKind::Enum(variants) => check_enum(field, variants, text),
            FieldKind::Email => check_email(field, text.to_string()),
            FieldKind::Object(_) => Err(ValidationError::invalid_format(field, self.expected())),
        }
    }
}

fn check_enum(field: &str, variants: &[&str], value: &str) -> Result<Value, ValidationError> {
    if variants.contains(&value) {
        Ok(Value::String(value.to_string()))
    } else {
        Err(ValidationError::InvalidEnumValue {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}

fn check_email(field: &str, value: String) -> Result<Value, ValidationError> {
    if value.validate_email() {
        Ok(Value::String(value))
    } else {
        Err(ValidationError::invalid_format(field, "email address"))
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// A single bound check attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    MinLength(usize),
    MaxLength(usize),
    Gt(i64),
    Ge(i64),
    Lt(i64),
    Le(i64),
}

impl Bound {
    fn check(&self, field: &str, value: &Value) -> Result<(), ValidationError> {
        let holds = match (*self, value) {
            (Bound::MinLength(min), Value::String(s)) => s.chars().count() >= min,
            (Bound::MaxLength(max), Value::String(s)) => s.chars().count() <= max,
            (Bound::Gt(limit), Value::Number(n)) => n.as_i64().map_or(true, |n| n > limit),
            (Bound::Ge(limit), Value::Number(n)) => n.as_i64().map_or(true, |n| n >= limit),
            (Bound::Lt(limit), Value::Number(n)) => n.as_i64().map_or(true, |n| n < limit),
            (Bound::Le(limit), Value::Number(n)) => n.as_i64().map_or(true, |n| n <= limit),
            // Length bounds only apply to strings, range bounds only to numbers
            _ => true,
        };

        if holds {
            return Ok(());
        }

        let field = field.to_string();
        let bound = self.to_string();
        Err(match self {
            Bound::MinLength(_) | Bound::MaxLength(_) => {
                ValidationError::LengthViolation { field, bound }
            }
            _ => ValidationError::RangeViolation { field, bound },
        })
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::MinLength(n) => write!(f, "at least {} characters", n),
            Bound::MaxLength(n) => write!(f, "at most {} characters", n),
            Bound::Gt(n) => write!(f, "greater than {}", n),
            Bound::Ge(n) => write!(f, "greater than or equal to {}", n),
            Bound::Lt(n) => write!(f, "less than {}", n),
            Bound::Le(n) => write!(f, "less than or equal to {}", n),
        }
    }
}

/// Validation rules for one schema field.
///
/// Fields are required unless marked `optional()` or given a default.
///
/// ```
/// use domain::validation::FieldConstraint;
///
/// let age = FieldConstraint::integer("age").gt(0).lt(100);
/// assert!(age.is_required());
/// ```
#[derive(Debug, Clone)]
pub struct FieldConstraint {
    name: &'static str,
    kind: FieldKind,
    required: bool,
    default: Option<Value>,
    bounds: Vec<Bound>,
}

impl FieldConstraint {
    pub fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            default: None,
            bounds: Vec::new(),
        }
    }

    pub fn string(name: &'static str) -> Self {
        Self::new(name, FieldKind::String)
    }

    pub fn integer(name: &'static str) -> Self {
        Self::new(name, FieldKind::Integer)
    }

    pub fn boolean(name: &'static str) -> Self {
        Self::new(name, FieldKind::Boolean)
    }

    pub fn enumeration(name: &'static str, variants: &'static [&'static str]) -> Self {
        Self::new(name, FieldKind::Enum(variants))
    }

    pub fn email(name: &'static str) -> Self {
        Self::new(name, FieldKind::Email)
    }

    pub fn object(name: &'static str, schema: fn() -> &'static Schema) -> Self {
        Self::new(name, FieldKind::Object(schema))
    }

    /// Mark the field optional; absent values stay absent.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Mark the field optional, filling absent values with `value`.
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.required = false;
        self.default = Some(value.into());
        self
    }

    pub fn min_length(self, n: usize) -> Self {
        self.bound(Bound::MinLength(n))
    }

    pub fn max_length(self, n: usize) -> Self {
        self.bound(Bound::MaxLength(n))
    }

    pub fn gt(self, n: i64) -> Self {
        self.bound(Bound::Gt(n))
    }

    pub fn ge(self, n: i64) -> Self {
        self.bound(Bound::Ge(n))
    }

    pub fn lt(self, n: i64) -> Self {
        self.bound(Bound::Lt(n))
    }

    pub fn le(self, n: i64) -> Self {
        self.bound(Bound::Le(n))
    }

    fn bound(mut self, bound: Bound) -> Self {
        self.bounds.push(bound);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a JSON value. `None` and `null` are treated as absent.
    ///
    /// Returns the normalized value, or `None` when an optional field
    /// without a default is absent.
    pub fn validate_json(&self, raw: Option<&Value>) -> Result<Option<Value>, ValidationError> {
        match raw {
            None | Some(Value::Null) => self.absent(),
            Some(value) => {
                let value = self.kind.check_json(self.name, value)?;
                self.check_bounds(value).map(Some)
            }
        }
    }

    /// Validate a textual value.
    pub fn validate_text(&self, raw: Option<&str>) -> Result<Option<Value>, ValidationError> {
        match raw {
            None => self.absent(),
            Some(text) => {
                let value = self.kind.check_text(self.name, text)?;
                self.check_bounds(value).map(Some)
            }
        }
    }

    fn absent(&self) -> Result<Option<Value>, ValidationError> {
        if self.required {
            Err(ValidationError::missing(self.name))
        } else {
            Ok(self.default.clone())
        }
    }

    fn check_bounds(&self, value: Value) -> Result<Value, ValidationError> {
        for bound in &self.bounds {
            bound.check(self.name, &value)?;
        }
        Ok(value)
    }
}
