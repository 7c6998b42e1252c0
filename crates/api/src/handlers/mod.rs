//! HTTP request handlers.

pub mod auth_handler;
pub mod contact_handler;
pub mod health_handler;
pub mod home_handler;
pub mod person_handler;
pub mod photo_handler;

pub use auth_handler::auth_routes;
pub use contact_handler::contact_routes;
pub use health_handler::health_routes;
pub use home_handler::home_routes;
pub use person_handler::person_routes;
pub use photo_handler::photo_routes;
