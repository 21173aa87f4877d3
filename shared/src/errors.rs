//! Error types shared with the presentation layer

use thiserror::Error;

/// Identity provider error types
///
/// Surfaced to the UI as-is; the record core never retries a sign-in.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Identity provider unavailable: {0}")]
    Unavailable(String),
}
