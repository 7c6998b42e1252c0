//! Photo upload handlers.

use axum::{
    extract::{DefaultBodyLimit, Multipart},
    response::Json,
    routing::post,
    Router,
};

use common::{AppError, AppResult, OptionExt};
use domain::{photo, PhotoUpload, PhotoUploadResponse, ValidationError};

use crate::state::AppState;

/// Multipart field carrying the photo
const IMAGE_FIELD: &str = "image";

/// Content type assumed when the part does not declare one
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Create photo routes. The upload route has no body size limit.
pub fn photo_routes() -> Router<AppState> {
    Router::new().route(
        "/upload-photo",
        post(upload_photo).layer(DefaultBodyLimit::disable()),
    )
}

/// Upload a photo and report its metadata
#[utoipa::path(
    post,
    path = "/upload-photo",
    tag = "Photos",
    responses(
        (status = 200, description = "Uploaded file metadata", body = PhotoUploadResponse),
        (status = 400, description = "Malformed multipart body"),
        (status = 422, description = "Missing or non-file image field")
    )
)]
pub async fn upload_photo(mut multipart: Multipart) -> AppResult<Json<PhotoUploadResponse>> {
    let mut image: Option<PhotoUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(e.body_text()))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        // A part without a filename is a plain form value, not a file
        let file_name = field
            .file_name()
            .ok_or_else(|| ValidationError::invalid_format(IMAGE_FIELD, "file"))?
            .to_string();
        let content_type = field
            .content_type()
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        image = Some(PhotoUpload {
            file_name,
            content_type,
            data: data.to_vec(),
        });
        break;
    }

    let image = image.ok_or_missing(IMAGE_FIELD)?;
    tracing::debug!(?image, "Photo uploaded");

    Ok(Json(photo::upload_photo(image)))
}
