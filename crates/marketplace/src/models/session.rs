//! Session-related constants.
//!
//! The session holds at most one authenticated user, stored as the full
//! serialized `User` record under a single fixed key.

/// Session keys for authentication data.
pub mod keys {
    /// Key for the current logged-in user (the durable session slot).
    pub const USER: &str = "user";
}
