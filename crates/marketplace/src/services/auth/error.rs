//! Authentication error types.

use thiserror::Error;

use crate::catalog::CatalogError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] aquarelle_core::EmailError),

    /// Invalid credentials (unknown email or password too short).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// An account with this email already exists.
    #[error("email already registered")]
    EmailTaken,

    /// Catalog store error.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}
