//! Domain-level constants.
//!
//! These constants define the field bounds of every resource schema.

// =============================================================================
// Person
// =============================================================================

/// Minimum length of a person's first or last name
pub const MIN_NAME_LENGTH: usize = 3;

/// Maximum length of a person's first or last name
pub const MAX_NAME_LENGTH: usize = 20;

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Age must be strictly greater than this value
pub const MIN_AGE_EXCLUSIVE: i64 = 0;

/// Age in a detail query must be strictly less than this value
pub const MAX_QUERY_AGE_EXCLUSIVE: i64 = 100;

/// Person IDs must be strictly greater than this value
pub const MIN_PERSON_ID_EXCLUSIVE: i64 = 0;

/// Identifiers considered to exist (inclusive range)
pub const KNOWN_PERSON_IDS: std::ops::RangeInclusive<i64> = 0..=9;

/// Message returned when a person lookup misses
pub const PERSON_NOT_FOUND_MESSAGE: &str = "This person doesn't exist!";

// =============================================================================
// Authentication
// =============================================================================

/// Maximum username length
pub const MAX_USERNAME_LENGTH: usize = 20;

// =============================================================================
// Contact
// =============================================================================

/// Minimum length of a contact name
pub const MIN_CONTACT_NAME_LENGTH: usize = 1;

/// Maximum length of a contact name
pub const MAX_CONTACT_NAME_LENGTH: usize = 20;

/// Minimum length of a contact message
pub const MIN_MESSAGE_LENGTH: usize = 10;

// =============================================================================
// Home
// =============================================================================

/// Greeting returned by the root endpoint
pub const GREETING_BODY: &str = "Hello World";
