//! Authentication handlers.

use axum::{response::Json, routing::post, Router};

use common::AppResult;
use domain::{auth, LoginForm, LoginResponse};

use crate::extractors::ValidatedForm;
use crate::state::AppState;

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Login with form credentials
#[utoipa::path(
    post,
    path = "/login",
    tag = "Authentication",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Login accepted", body = LoginResponse),
        (status = 422, description = "Validation error")
    )
)]
pub async fn login(ValidatedForm(form): ValidatedForm<LoginForm>) -> AppResult<Json<LoginResponse>> {
    tracing::debug!(username = %form.username, "Login");

    Ok(Json(auth::login(form)))
}
