//! Person resource: schemas, projections and operations.

use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{
    MAX_NAME_LENGTH, MAX_QUERY_AGE_EXCLUSIVE, MIN_AGE_EXCLUSIVE, MIN_NAME_LENGTH,
    MIN_PASSWORD_LENGTH, MIN_PERSON_ID_EXCLUSIVE, PERSON_NOT_FOUND_MESSAGE,
};
use crate::directory::PersonDirectory;
use crate::error::{DomainError, DomainResult};
use crate::validation::{FieldConstraint, Resource, Schema};

/// Hair colors accepted for a person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum HairColor {
    White,
    Brown,
    Black,
    Blonde,
    Red,
}

impl HairColor {
    /// Wire names of every variant, in declaration order
    pub const VARIANTS: &'static [&'static str] = &["white", "brown", "black", "blonde", "red"];
}

static PERSON_BASE_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(
        "PersonBase",
        vec![
            FieldConstraint::string("first_name")
                .min_length(MIN_NAME_LENGTH)
                .max_length(MAX_NAME_LENGTH),
            FieldConstraint::string("last_name")
                .min_length(MIN_NAME_LENGTH)
                .max_length(MAX_NAME_LENGTH),
            FieldConstraint::integer("age").gt(MIN_AGE_EXCLUSIVE),
            FieldConstraint::enumeration("hair_color", HairColor::VARIANTS).optional(),
            FieldConstraint::boolean("is_married").optional(),
        ],
    )
});

static PERSON_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    PERSON_BASE_SCHEMA.extend(
        "Person",
        vec![FieldConstraint::string("password").min_length(MIN_PASSWORD_LENGTH)],
    )
});

static PERSON_RESPONSE_SCHEMA: Lazy<Schema> =
    Lazy::new(|| PERSON_SCHEMA.without("PersonResponse", &["password"]));

static ADDRESS_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(
        "Address",
        vec![
            FieldConstraint::string("city"),
            FieldConstraint::string("state"),
            FieldConstraint::string("country"),
        ],
    )
});

static PERSON_QUERY_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(
        "PersonQuery",
        vec![
            FieldConstraint::string("name")
                .optional()
                .min_length(MIN_NAME_LENGTH)
                .max_length(MAX_NAME_LENGTH),
            FieldConstraint::integer("age")
                .gt(MIN_AGE_EXCLUSIVE)
                .lt(MAX_QUERY_AGE_EXCLUSIVE),
        ],
    )
});

static PERSON_ID_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(
        "PersonIdPath",
        vec![FieldConstraint::integer("person_id").gt(MIN_PERSON_ID_EXCLUSIVE)],
    )
});

static UPDATE_PERSON_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(
        "UpdatePersonBody",
        vec![
            FieldConstraint::object("person", Person::schema),
            FieldConstraint::object("address", Address::schema),
        ],
    )
});

/// Public fields shared by every person variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PersonBase {
    #[cfg_attr(feature = "openapi", schema(example = "Facundo", min_length = 3, max_length = 20))]
    pub first_name: String,
    #[cfg_attr(feature = "openapi", schema(example = "García Martoni", min_length = 3, max_length = 20))]
    pub last_name: String,
    #[cfg_attr(feature = "openapi", schema(example = 25))]
    pub age: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hair_color: Option<HairColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_married: Option<bool>,
}

impl Resource for PersonBase {
    fn schema() -> &'static Schema {
        &PERSON_BASE_SCHEMA
    }
}

/// A person as submitted by a client, including the secret
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Person {
    #[serde(flatten)]
    pub base: PersonBase,
    #[cfg_attr(feature = "openapi", schema(example = "HolaSoyFacundo", min_length = 8))]
    pub password: String,
}

// Don't expose the password in debug output
impl fmt::Debug for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Person")
            .field("base", &self.base)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Resource for Person {
    fn schema() -> &'static Schema {
        &PERSON_SCHEMA
    }
}

/// Person as returned to clients (never carries the password)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PersonResponse {
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hair_color: Option<HairColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_married: Option<bool>,
}

impl Resource for PersonResponse {
    fn schema() -> &'static Schema {
        &PERSON_RESPONSE_SCHEMA
    }
}

impl From<PersonBase> for PersonResponse {
    fn from(base: PersonBase) -> Self {
        Self {
            first_name: base.first_name,
            last_name: base.last_name,
            age: base.age,
            hair_color: base.hair_color,
            is_married: base.is_married,
        }
    }
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        Self::from(person.base)
    }
}

/// Postal address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Address {
    #[cfg_attr(feature = "openapi", schema(example = "Bogotá"))]
    pub city: String,
    #[cfg_attr(feature = "openapi", schema(example = "Cundinamarca"))]
    pub state: String,
    #[cfg_attr(feature = "openapi", schema(example = "Colombia"))]
    pub country: String,
}

impl Resource for Address {
    fn schema() -> &'static Schema {
        &ADDRESS_SCHEMA
    }
}

/// Query parameters of the person detail lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonQuery {
    #[serde(default)]
    pub name: Option<String>,
    pub age: i64,
}

impl Resource for PersonQuery {
    fn schema() -> &'static Schema {
        &PERSON_QUERY_SCHEMA
    }
}

/// Echo of the person detail query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PersonQueryResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub age: i64,
}

/// Path parameter identifying a person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonIdPath {
    pub person_id: i64,
}

impl Resource for PersonIdPath {
    fn schema() -> &'static Schema {
        &PERSON_ID_SCHEMA
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PersonIdResponse {
    pub person_id: i64,
}

/// Body of a person update: both records embedded under their names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdatePersonBody {
    pub person: Person,
    pub address: Address,
}

impl Resource for UpdatePersonBody {
    fn schema() -> &'static Schema {
        &UPDATE_PERSON_SCHEMA
    }
}

/// Create a person, returning its public projection.
pub fn create_person(person: Person) -> PersonResponse {
    PersonResponse::from(person)
}

/// Echo the detail query.
pub fn show_person_by_query(query: PersonQuery) -> PersonQueryResponse {
    PersonQueryResponse {
        name: query.name,
        age: query.age,
    }
}

/// Look a person up by ID in `directory`.
pub fn show_person_by_id(
    directory: &dyn PersonDirectory,
    path: PersonIdPath,
) -> DomainResult<PersonIdResponse> {
    if !directory.contains(path.person_id) {
        return Err(DomainError::not_found(PERSON_NOT_FOUND_MESSAGE));
    }

    Ok(PersonIdResponse {
        person_id: path.person_id,
    })
}

/// Merge person and address fields into one record.
///
/// Address keys win on overlap. The ID is not checked against any
/// directory, unlike [`show_person_by_id`].
pub fn update_person(
    _path: PersonIdPath,
    person: Person,
    address: Address,
) -> DomainResult<Map<String, Value>> {
    let mut merged = to_map(&person)?;
    merged.extend(to_map(&address)?);
    Ok(merged)
}

fn to_map<T: Serialize>(value: &T) -> DomainResult<Map<String, Value>> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(DomainError::internal("record did not serialize to an object")),
        Err(e) => Err(DomainError::internal(format!("record serialization failed: {}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{KnownPersonIds, MockPersonDirectory};
    use crate::error::ValidationError;
    use mockall::predicate::eq;
    use serde_json::json;

    fn raw_person() -> Value {
        json!({
            "first_name": "Facundo",
            "last_name": "García",
            "age": 25,
            "hair_color": "black",
            "is_married": false,
            "password": "HolaSoyFacundo",
        })
    }

    fn person() -> Person {
        Person::from_json_value(&raw_person()).unwrap()
    }

    fn address() -> Address {
        Address::from_json_value(&json!({
            "city": "Bogotá",
            "state": "Cundinamarca",
            "country": "Colombia",
        }))
        .unwrap()
    }

    #[test]
    fn test_hair_color_variants_match_wire_names() {
        let colors = [
            HairColor::White,
            HairColor::Brown,
            HairColor::Black,
            HairColor::Blonde,
            HairColor::Red,
        ];
        let names: Vec<_> = colors
            .iter()
            .map(|c| serde_json::to_value(c).unwrap())
            .collect();

        assert_eq!(names, HairColor::VARIANTS.iter().map(|n| json!(n)).collect::<Vec<_>>());
    }

    #[test]
    fn test_person_schema_extends_base() {
        let base: Vec<_> = PersonBase::schema().field_names().collect();
        let person: Vec<_> = Person::schema().field_names().collect();

        assert_eq!(&person[..base.len()], &base[..]);
        assert_eq!(person.last(), Some(&"password"));
    }

    #[test]
    fn test_response_schema_mirrors_base() {
        let base: Vec<_> = PersonBase::schema().field_names().collect();
        let response: Vec<_> = PersonResponse::schema().field_names().collect();

        assert_eq!(base, response);
    }

    #[test]
    fn test_person_from_valid_input() {
        let person = person();
        assert_eq!(person.base.first_name, "Facundo");
        assert_eq!(person.base.hair_color, Some(HairColor::Black));
        assert_eq!(person.base.is_married, Some(false));
        assert_eq!(person.password, "HolaSoyFacundo");
    }

    #[test]
    fn test_person_optional_fields_default_to_none() {
        let person = Person::from_json_value(&json!({
            "first_name": "Facundo",
            "last_name": "García",
            "age": 25,
            "password": "HolaSoyFacundo",
        }))
        .unwrap();

        assert_eq!(person.base.hair_color, None);
        assert_eq!(person.base.is_married, None);
    }

    #[test]
    fn test_person_rejects_unknown_hair_color() {
        let mut raw = raw_person();
        raw["hair_color"] = json!("purple");

        let err = Person::from_json_value(&raw).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::InvalidEnumValue { .. })
        ));
    }

    #[test]
    fn test_person_rejects_short_password() {
        let mut raw = raw_person();
        raw["password"] = json!("short");

        let err = Person::from_json_value(&raw).unwrap_err();
        match err {
            DomainError::Validation(e @ ValidationError::LengthViolation { .. }) => {
                assert_eq!(e.field(), "password")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_person_rejects_non_positive_age() {
        let mut raw = raw_person();
        raw["age"] = json!(0);

        let err = Person::from_json_value(&raw).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::RangeViolation { .. })
        ));
    }

    #[test]
    fn test_person_debug_redacts_password() {
        let output = format!("{:?}", person());
        assert!(!output.contains("HolaSoyFacundo"));
        assert!(output.contains("[REDACTED]"));
    }

    #[test]
    fn test_create_person_drops_password() {
        let person = person();
        let response = create_person(person.clone());

        assert_eq!(response.first_name, person.base.first_name);
        assert_eq!(response.last_name, person.base.last_name);
        assert_eq!(response.age, person.base.age);
        assert_eq!(response.hair_color, person.base.hair_color);
        assert_eq!(response.is_married, person.base.is_married);

        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("password").is_none());
    }

    #[test]
    fn test_projection_round_trip_drops_only_password() {
        let mut raw = raw_person();
        let response = create_person(Person::from_json_value(&raw).unwrap());

        raw.as_object_mut().unwrap().remove("password");
        assert_eq!(serde_json::to_value(&response).unwrap(), raw);
    }

    #[test]
    fn test_projection_round_trip_without_optional_fields() {
        let mut raw = json!({
            "first_name": "Ana",
            "last_name": "Pérez",
            "age": 40,
            "password": "12345678",
        });
        let response = create_person(Person::from_json_value(&raw).unwrap());

        raw.as_object_mut().unwrap().remove("password");
        assert_eq!(serde_json::to_value(&response).unwrap(), raw);
    }

    #[test]
    fn test_query_requires_age() {
        let raw = std::collections::HashMap::from([("name".to_string(), "Facundo".to_string())]);
        let err = PersonQuery::from_text(&raw).unwrap_err();

        assert_eq!(
            err,
            DomainError::Validation(ValidationError::missing("age"))
        );
    }

    #[test]
    fn test_query_rejects_age_out_of_range() {
        let raw = std::collections::HashMap::from([("age".to_string(), "150".to_string())]);
        let err = PersonQuery::from_text(&raw).unwrap_err();

        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::RangeViolation { .. })
        ));
    }

    #[test]
    fn test_query_rejects_short_name() {
        let raw = std::collections::HashMap::from([
            ("name".to_string(), "Fa".to_string()),
            ("age".to_string(), "30".to_string()),
        ]);
        let err = PersonQuery::from_text(&raw).unwrap_err();

        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::LengthViolation { .. })
        ));
    }

    #[test]
    fn test_show_person_by_query_echoes_input() {
        let query = PersonQuery {
            name: Some("Facundo".to_string()),
            age: 30,
        };
        let response = show_person_by_query(query);

        assert_eq!(response.name.as_deref(), Some("Facundo"));
        assert_eq!(response.age, 30);
    }

    #[test]
    fn test_show_person_by_id_known_ids() {
        let directory = KnownPersonIds::default();
        for id in 1..=9 {
            let response = show_person_by_id(&directory, PersonIdPath { person_id: id }).unwrap();
            assert_eq!(response.person_id, id);
        }
    }

    #[test]
    fn test_show_person_by_id_unknown_id() {
        let directory = KnownPersonIds::default();
        let err = show_person_by_id(&directory, PersonIdPath { person_id: 10 }).unwrap_err();

        assert_eq!(err, DomainError::not_found(PERSON_NOT_FOUND_MESSAGE));
    }

    #[test]
    fn test_show_person_by_id_consults_directory() {
        let mut directory = MockPersonDirectory::new();
        directory
            .expect_contains()
            .with(eq(42))
            .times(1)
            .return_const(true);

        let response = show_person_by_id(&directory, PersonIdPath { person_id: 42 }).unwrap();
        assert_eq!(response.person_id, 42);
    }

    #[test]
    fn test_person_id_rejects_non_positive() {
        for text in ["0", "-1"] {
            let raw = std::collections::HashMap::from([("person_id".to_string(), text.to_string())]);
            let err = PersonIdPath::from_text(&raw).unwrap_err();
            assert!(matches!(
                err,
                DomainError::Validation(ValidationError::RangeViolation { .. })
            ));
        }
    }

    #[test]
    fn test_update_person_merges_records() {
        let merged = update_person(PersonIdPath { person_id: 5 }, person(), address()).unwrap();

        let mut keys: Vec<_> = merged.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "age",
                "city",
                "country",
                "first_name",
                "hair_color",
                "is_married",
                "last_name",
                "password",
                "state",
            ]
        );
        assert!(!merged.contains_key("person_id"));
        assert_eq!(merged["city"], json!("Bogotá"));
        assert_eq!(merged["first_name"], json!("Facundo"));
    }

    #[test]
    fn test_update_body_reports_nested_field() {
        let raw = json!({
            "person": {
                "first_name": "Facundo",
                "last_name": "García",
                "password": "HolaSoyFacundo",
            },
            "address": { "city": "Bogotá", "state": "Cundinamarca", "country": "Colombia" },
        });
        let err = UpdatePersonBody::from_json_value(&raw).unwrap_err();

        assert_eq!(
            err,
            DomainError::Validation(ValidationError::missing("person.age"))
        );
    }

    #[test]
    fn test_update_body_requires_address() {
        let raw = json!({ "person": raw_person() });
        let err = UpdatePersonBody::from_json_value(&raw).unwrap_err();

        assert_eq!(
            err,
            DomainError::Validation(ValidationError::missing("address"))
        );
    }
}
