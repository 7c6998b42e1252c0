//! Root handler.

use axum::{response::Json, routing::get, Router};

use domain::home::{home as greeting, Greeting};

use crate::state::AppState;

/// Create home routes
pub fn home_routes() -> Router<AppState> {
    Router::new().route("/", get(home))
}

/// Fixed greeting
#[utoipa::path(
    get,
    path = "/",
    tag = "Home",
    responses(
        (status = 200, description = "Greeting", body = Greeting)
    )
)]
pub async fn home() -> Json<Greeting> {
    Json(greeting())
}
