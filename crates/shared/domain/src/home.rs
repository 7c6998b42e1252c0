//! Root greeting.

use serde::{Deserialize, Serialize};

use crate::constants::GREETING_BODY;

/// Fixed greeting record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Greeting {
    #[cfg_attr(feature = "openapi", schema(example = "Hello World"))]
    pub body: String,
}

pub fn home() -> Greeting {
    Greeting {
        body: GREETING_BODY.to_string(),
    }
}
