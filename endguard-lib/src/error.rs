//! Error types

use uuid::Uuid;

/// Errors surfaced by store operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A mutation referenced a record the backend doesn't have.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: Uuid },

    /// The backend could not be reached or answered abnormally.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Authentication failure.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl Error {
    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        Self::NotFound { entity, id }
    }
}

/// Errors from the authentication flow.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("registration rejected: {0}")]
    Registration(String),
}
