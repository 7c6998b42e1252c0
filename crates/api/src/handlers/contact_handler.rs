//! Contact handlers.

use axum::{
    http::{header, HeaderMap, HeaderValue},
    response::Json,
    routing::post,
    Router,
};
use axum_extra::extract::CookieJar;

use common::AppResult;
use domain::ContactForm;

use crate::extractors::ValidatedForm;
use crate::state::AppState;

/// Name of the advertising cookie read by the contact form
const ADS_COOKIE: &str = "ads";

/// Create contact routes
pub fn contact_routes() -> Router<AppState> {
    Router::new().route("/contact", post(contact))
}

/// Submit a contact message; echoes the client's user agent
#[utoipa::path(
    post,
    path = "/contact",
    tag = "Contact",
    request_body(content = ContactForm, content_type = "application/x-www-form-urlencoded"),
    params(
        ("User-Agent" = Option<String>, Header, description = "Client user agent"),
        ("ads" = Option<String>, Cookie, description = "Advertising cookie")
    ),
    responses(
        (status = 200, description = "User agent of the request", body = String),
        (status = 422, description = "Validation error")
    )
)]
pub async fn contact(
    headers: HeaderMap,
    jar: CookieJar,
    ValidatedForm(form): ValidatedForm<ContactForm>,
) -> AppResult<Json<Option<String>>> {
    let user_agent = headers.get(header::USER_AGENT).map(header_text);
    let ads = jar.get(ADS_COOKIE).map(|cookie| cookie.value().to_string());

    tracing::debug!(email = %form.email, has_ads = ads.is_some(), "Contact message received");

    Ok(Json(domain::contact::contact(form, user_agent, ads)))
}

/// Header bytes as text, one char per byte (ISO-8859-1).
fn header_text(value: &HeaderValue) -> String {
    value.as_bytes().iter().map(|&b| char::from(b)).collect()
}
