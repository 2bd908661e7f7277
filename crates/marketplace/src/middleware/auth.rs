//! Authentication middleware and extractors.
//!
//! The session holds at most one authenticated user under a single fixed
//! key (the durable slot). These helpers mediate every read and write of
//! that slot so the in-memory view and the stored value never diverge:
//! a slot write failure surfaces as an error before any state is assumed
//! committed, and unreadable slot data is cleared and treated as a
//! logged-out session.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::{User, session_keys};

/// Read the current user from the session slot.
///
/// Absent, corrupt, or unparsable slot data yields `None`; corrupt data is
/// removed so the next read starts clean.
pub async fn current_user(session: &Session) -> Option<User> {
    match session.get::<User>(session_keys::USER).await {
        Ok(user) => user,
        Err(err) => {
            tracing::warn!(error = %err, "Unreadable session slot, clearing");
            let _ = session
                .remove::<serde_json::Value>(session_keys::USER)
                .await;
            None
        }
    }
}

/// Write the authenticated user to the session slot.
///
/// # Errors
///
/// Returns an error if the session cannot be modified; callers must treat
/// the login/registration as not committed in that case.
pub async fn set_current_user(
    session: &Session,
    user: &User,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::USER, user).await
}

/// Remove the user from the session slot (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_user(
    session: &Session,
) -> Result<(), tower_sessions::session::Error> {
    session.remove::<serde_json::Value>(session_keys::USER).await?;
    Ok(())
}

/// Extractor that requires an authenticated user.
///
/// If nobody is logged in, HTML requests are redirected to the login page
/// and API requests get a 401.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAuth(user): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", user.name)
/// }
/// ```
pub struct RequireAuth(pub User);

/// Error returned when authentication is required but nobody is logged in.
pub enum AuthRejection {
    /// Redirect to login page (for HTML requests).
    RedirectToLogin,
    /// Unauthorized response (for API requests).
    Unauthorized,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/auth/login").into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(AuthRejection::Unauthorized)?
            .clone();

        let user = current_user(&session).await.ok_or_else(|| {
            let is_api = parts.uri.path().starts_with("/api/");
            if is_api {
                AuthRejection::Unauthorized
            } else {
                AuthRejection::RedirectToLogin
            }
        })?;

        Ok(Self(user))
    }
}

/// Extractor that optionally gets the current user.
///
/// Unlike `RequireAuth`, this does not reject the request when nobody is
/// logged in.
pub struct OptionalAuth(pub Option<User>);

impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = match parts.extensions.get::<Session>() {
            Some(session) => {
                let session = session.clone();
                current_user(&session).await
            }
            None => None,
        };

        Ok(Self(user))
    }
}
