//! Person handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde_json::{Map, Value};

use common::AppResult;
use domain::person;
use domain::{
    Person, PersonIdPath, PersonIdResponse, PersonQuery, PersonQueryResponse, PersonResponse,
    UpdatePersonBody,
};

use crate::extractors::{ValidatedJson, ValidatedPath, ValidatedQuery};
use crate::state::AppState;

/// Create person routes
pub fn person_routes() -> Router<AppState> {
    Router::new()
        .route("/new", post(create_person))
        .route("/detail", get(show_person_by_query))
        .route("/detail/:person_id", get(show_person_by_id))
        .route("/:person_id", put(update_person))
}

/// Create a person
#[utoipa::path(
    post,
    path = "/person/new",
    tag = "Persons",
    request_body = Person,
    responses(
        (status = 201, description = "Person created", body = PersonResponse),
        (status = 400, description = "Malformed JSON"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_person(
    ValidatedJson(payload): ValidatedJson<Person>,
) -> AppResult<(StatusCode, Json<PersonResponse>)> {
    tracing::debug!(first_name = %payload.base.first_name, "Creating person");

    Ok((StatusCode::CREATED, Json(person::create_person(payload))))
}

/// Show a person from query parameters
#[utoipa::path(
    get,
    path = "/person/detail",
    tag = "Persons",
    params(
        ("name" = Option<String>, Query, description = "Person name, 3 to 20 characters"),
        ("age" = i64, Query, description = "Person age, between 1 and 99")
    ),
    responses(
        (status = 200, description = "Query echo", body = PersonQueryResponse),
        (status = 422, description = "Validation error")
    )
)]
pub async fn show_person_by_query(
    ValidatedQuery(query): ValidatedQuery<PersonQuery>,
) -> AppResult<Json<PersonQueryResponse>> {
    Ok(Json(person::show_person_by_query(query)))
}

/// Show a person by ID
#[utoipa::path(
    get,
    path = "/person/detail/{person_id}",
    tag = "Persons",
    params(
        ("person_id" = i64, Path, description = "Person ID, greater than 0")
    ),
    responses(
        (status = 200, description = "Person exists", body = PersonIdResponse),
        (status = 404, description = "Person not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn show_person_by_id(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<PersonIdPath>,
) -> AppResult<Json<PersonIdResponse>> {
    let response = person::show_person_by_id(state.directory.as_ref(), path).map_err(|e| {
        tracing::debug!(person_id = path.person_id, "Person lookup missed");
        e
    })?;

    Ok(Json(response))
}

/// Update a person, merging person and address fields
#[utoipa::path(
    put,
    path = "/person/{person_id}",
    tag = "Persons",
    params(
        ("person_id" = i64, Path, description = "Person ID, greater than 0")
    ),
    request_body = UpdatePersonBody,
    responses(
        (status = 200, description = "Merged person and address fields"),
        (status = 400, description = "Malformed JSON"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_person(
    ValidatedPath(path): ValidatedPath<PersonIdPath>,
    ValidatedJson(body): ValidatedJson<UpdatePersonBody>,
) -> AppResult<Json<Map<String, Value>>> {
    tracing::debug!(person_id = path.person_id, "Updating person");

    let merged = person::update_person(path, body.person, body.address)?;

    Ok(Json(merged))
}
