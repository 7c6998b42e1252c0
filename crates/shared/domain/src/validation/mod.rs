//! Field constraint sets and resource schemas.
//!
//! Every schema field carries an explicit [`FieldConstraint`]. Building a
//! [`Resource`] from raw input validates against its [`Schema`] first and
//! decodes second, so no partially-valid instance can exist.

mod field;
mod schema;

pub use field::{Bound, FieldConstraint, FieldKind};
pub use schema::{Resource, Schema};
