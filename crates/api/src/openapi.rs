//! OpenAPI documentation.

use utoipa::OpenApi;

use domain::{
    Address, ContactForm, Greeting, HairColor, LoginForm, LoginResponse, Person, PersonBase,
    PersonIdResponse, PersonQueryResponse, PersonResponse, PhotoUploadResponse, UpdatePersonBody,
};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::home_handler::home,
        crate::handlers::person_handler::create_person,
        crate::handlers::person_handler::show_person_by_query,
        crate::handlers::person_handler::show_person_by_id,
        crate::handlers::person_handler::update_person,
        crate::handlers::auth_handler::login,
        crate::handlers::contact_handler::contact,
        crate::handlers::photo_handler::upload_photo,
    ),
    components(
        schemas(
            Greeting,
            HairColor,
            PersonBase,
            Person,
            PersonResponse,
            Address,
            UpdatePersonBody,
            PersonQueryResponse,
            PersonIdResponse,
            LoginForm,
            LoginResponse,
            ContactForm,
            PhotoUploadResponse,
        )
    ),
    tags(
        (name = "Home", description = "Greeting endpoint"),
        (name = "Persons", description = "Person resource endpoints"),
        (name = "Authentication", description = "Login endpoint"),
        (name = "Contact", description = "Contact form endpoint"),
        (name = "Photos", description = "Photo upload endpoint"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/",
            "/person/new",
            "/person/detail",
            "/person/detail/{person_id}",
            "/person/{person_id}",
            "/login",
            "/contact",
            "/upload-photo",
        ] {
            assert!(paths.contains(&expected), "missing {}", expected);
        }
    }
}
