//! Domain layer - Resource schemas, validation rules and request operations.
//!
//! This crate contains pure domain logic with no transport dependencies.
//! Every operation takes already-validated inputs and returns plain records;
//! the HTTP boundary lives in the `api` crate.

pub mod auth;
pub mod constants;
pub mod contact;
pub mod directory;
pub mod error;
pub mod home;
pub mod person;
pub mod photo;
pub mod validation;

pub use auth::{login, LoginForm, LoginResponse};
pub use constants::*;
pub use contact::{contact, ContactForm};
pub use directory::{KnownPersonIds, PersonDirectory};
pub use error::{DomainError, DomainResult, ValidationError};
pub use home::{home, Greeting};
pub use person::{
    create_person, show_person_by_id, show_person_by_query, update_person, Address, HairColor,
    Person, PersonBase, PersonIdPath, PersonIdResponse, PersonQuery, PersonQueryResponse,
    PersonResponse, UpdatePersonBody,
};
pub use photo::{upload_photo, PhotoUpload, PhotoUploadResponse};
pub use validation::{Resource, Schema};

#[cfg(any(test, feature = "test-utils"))]
pub use directory::MockPersonDirectory;
