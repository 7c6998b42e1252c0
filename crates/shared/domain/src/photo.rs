//! Uploaded photo metadata.

use serde::{Deserialize, Serialize};

/// A fully materialized uploaded file
#[derive(Clone, PartialEq, Eq)]
pub struct PhotoUpload {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl std::fmt::Debug for PhotoUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhotoUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("size", &self.data.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PhotoUploadResponse {
    #[cfg_attr(feature = "openapi", schema(example = "avatar.png"))]
    pub file_name: String,
    #[cfg_attr(feature = "openapi", schema(example = "image/png"))]
    pub format: String,
    /// Payload length in bytes
    pub size: usize,
}

/// Describe an uploaded photo. Consumes the payload.
pub fn upload_photo(image: PhotoUpload) -> PhotoUploadResponse {
    PhotoUploadResponse {
        size: image.data.len(),
        file_name: image.file_name,
        format: image.content_type,
    }
}
