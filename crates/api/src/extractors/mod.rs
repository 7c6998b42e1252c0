//! Request extractors that run schema validation before a handler sees the input.

mod validated_json;
mod validated_params;

pub use validated_json::ValidatedJson;
pub use validated_params::{ValidatedForm, ValidatedPath, ValidatedQuery};
