//! Domain-level constants.
//!
//! These constants define the resource layout and identifier format.

// =============================================================================
// Resource paths
// =============================================================================

/// Collection path for the user resource
pub const USERS_PATH: &str = "/users";

// =============================================================================
// Identifiers
// =============================================================================

/// Length of the hex form of a user identifier (128 bits, no separators)
pub const USER_ID_HEX_LEN: usize = 32;

/// Build the resource path for a single user.
pub fn user_path(id: impl std::fmt::Display) -> String {
    format!("{}/{}", USERS_PATH, id)
}
