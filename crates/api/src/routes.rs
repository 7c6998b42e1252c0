//! Route configuration.

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{
    auth_routes, contact_routes, health_routes, home_routes, person_routes, photo_routes,
};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .merge(home_routes())
        // Health check
        .nest("/health", health_routes())
        // Person resource
        .nest("/person", person_routes())
        // Form and upload endpoints
        .merge(auth_routes())
        .merge(contact_routes())
        .merge(photo_routes());

    // Swagger UI
    if state.config.docs_enabled {
        router = router.merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()));
    }

    if state.config.cors_permissive {
        router = router.layer(CorsLayer::permissive());
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}
