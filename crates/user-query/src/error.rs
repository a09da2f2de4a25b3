//! Error types for the user-query crate.
//!
//! Queries themselves never fail; these errors cover constructing users and
//! parsing privileges, following the project's `thiserror` conventions.

use thiserror::Error;

/// Validation errors returned by [`crate::User::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserValidationError {
    /// The first name was empty or whitespace-only.
    #[error("first name must not be blank")]
    BlankFirstName,

    /// The last name was empty or whitespace-only.
    #[error("last name must not be blank")]
    BlankLastName,
}

/// Error returned when parsing a [`crate::Privilege`] from a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown privilege '{value}'")]
pub struct ParsePrivilegeError {
    /// The string that did not name a privilege.
    pub value: String,
}
