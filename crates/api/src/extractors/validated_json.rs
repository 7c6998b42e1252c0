//! Validated JSON extractor.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde_json::Value;

use common::AppError;
use domain::Resource;

/// JSON extractor that validates the payload against the target's schema.
///
/// Malformed JSON is a `400`; a well-formed body that breaks the schema is
/// a validation error.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: Resource + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        let resource = T::from_json_value(&value)?;

        Ok(ValidatedJson(resource))
    }
}
