//! Named, ordered sets of field constraints.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::field::FieldConstraint;
use crate::error::{DomainError, DomainResult, ValidationError};

/// A named composite of fields with constraints.
#[derive(Debug, Clone)]
pub struct Schema {
    name: &'static str,
    fields: Vec<FieldConstraint>,
}

impl Schema {
    pub fn new(name: &'static str, fields: Vec<FieldConstraint>) -> Self {
        Self { name, fields }
    }

    /// Composition by extension: every field of `self`, then `extra`.
    pub fn extend(&self, name: &'static str, extra: Vec<FieldConstraint>) -> Self {
        let mut fields = self.fields.clone();
        fields.extend(extra);
        Self { name, fields }
    }

    /// Projection: every field of `self` except those named in `excluded`.
    pub fn without(&self, name: &'static str, excluded: &[&str]) -> Self {
        let fields = self
            .fields
            .iter()
            .filter(|f| !excluded.contains(&f.name()))
            .cloned()
            .collect();
        Self { name, fields }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &[FieldConstraint] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldConstraint> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name())
    }

    /// Validate a JSON object, producing a normalized copy.
    ///
    /// Unknown keys are dropped. The first violation in field order is
    /// returned and nothing else is produced.
    pub fn validate_json(&self, raw: &Map<String, Value>) -> Result<Map<String, Value>, ValidationError> {
        let mut normalized = Map::new();
        for field in &self.fields {
            if let Some(value) = field.validate_json(raw.get(field.name()))? {
                normalized.insert(field.name().to_string(), value);
            }
        }
        Ok(normalized)
    }

    /// Validate textual key/value input (query string, form, path).
    pub fn validate_text(&self, raw: &HashMap<String, String>) -> Result<Map<String, Value>, ValidationError> {
        let mut normalized = Map::new();
        for field in &self.fields {
            let text = raw.get(field.name()).map(String::as_str);
            if let Some(value) = field.validate_text(text)? {
                normalized.insert(field.name().to_string(), value);
            }
        }
        Ok(normalized)
    }
}

/// A type whose instances are built only from input that passed its schema.
pub trait Resource: DeserializeOwned {
    /// The schema every instance satisfies.
    fn schema() -> &'static Schema;

    /// Build from a JSON object.
    fn from_json(raw: &Map<String, Value>) -> DomainResult<Self> {
        let normalized = Self::schema().validate_json(raw)?;
        Self::decode(normalized)
    }

    /// Build from any JSON value; non-objects are rejected.
    fn from_json_value(raw: &Value) -> DomainResult<Self> {
        match raw {
            Value::Object(map) => Self::from_json(map),
            _ => Err(ValidationError::invalid_format(Self::schema().name(), "object").into()),
        }
    }

    /// Build from textual key/value input.
    fn from_text(raw: &HashMap<String, String>) -> DomainResult<Self> {
        let normalized = Self::schema().validate_text(raw)?;
        Self::decode(normalized)
    }

    #[doc(hidden)]
    fn decode(normalized: Map<String, Value>) -> DomainResult<Self> {
        serde_json::from_value(Value::Object(normalized)).map_err(|e| {
            DomainError::internal(format!("{} decode failed: {}", Self::schema().name(), e))
        })
    }
}
