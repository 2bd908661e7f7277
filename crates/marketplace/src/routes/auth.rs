//! Authentication route handlers.
//!
//! Handles login, registration, and logout. Successful transitions write
//! the resolved user to the session slot before redirecting; a failed slot
//! write aborts the transition and sends the visitor back with an error.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use aquarelle_core::Role;

use crate::error;
use crate::filters;
use crate::middleware::{clear_current_user, current_user, set_current_user};
use crate::models::User;
use crate::services::auth::{AuthError, AuthService, RegisterData};
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub name: String,
    pub role: Role,
}

/// Query parameters for error/success display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
    pub success: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub user: Option<User>,
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Register page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub user: Option<User>,
    pub error: Option<String>,
}

/// Map a login error code from the URL to a display message.
fn login_error_message(code: &str) -> String {
    match code {
        "credentials" => "Invalid email or password.",
        "session" => "Could not start your session. Please try again.",
        _ => "Something went wrong. Please try again.",
    }
    .to_owned()
}

/// Map a registration error code from the URL to a display message.
fn register_error_message(code: &str) -> String {
    match code {
        "password_mismatch" => "Passwords do not match.",
        "email_taken" => "An account with this email already exists.",
        "email" => "Please enter a valid email address.",
        "session" => "Could not start your session. Please try again.",
        _ => "Something went wrong. Please try again.",
    }
    .to_owned()
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
pub async fn login_page(session: Session, Query(query): Query<MessageQuery>) -> Response {
    if current_user(&session).await.is_some() {
        return Redirect::to("/account").into_response();
    }

    LoginTemplate {
        user: None,
        error: query.error.as_deref().map(login_error_message),
        success: query.success,
    }
    .into_response()
}

/// Handle login form submission.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    let auth = AuthService::new(state.catalog());

    match auth.login(&form.email, &form.password).await {
        Ok(user) => {
            if let Err(e) = set_current_user(&session, &user).await {
                tracing::error!("Failed to set session: {e}");
                return Redirect::to("/auth/login?error=session").into_response();
            }
            error::set_sentry_user(&user.id, Some(user.email.as_str()));
            Redirect::to("/account").into_response()
        }
        Err(AuthError::InvalidCredentials) => {
            tracing::warn!("Login rejected");
            Redirect::to("/auth/login?error=credentials").into_response()
        }
        Err(e) => {
            tracing::error!("Login failed: {e}");
            Redirect::to("/auth/login?error=failed").into_response()
        }
    }
}

// =============================================================================
// Registration Routes
// =============================================================================

/// Display the registration page.
pub async fn register_page(session: Session, Query(query): Query<MessageQuery>) -> Response {
    if current_user(&session).await.is_some() {
        return Redirect::to("/account").into_response();
    }

    RegisterTemplate {
        user: None,
        error: query.error.as_deref().map(register_error_message),
    }
    .into_response()
}

/// Handle registration form submission.
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RegisterForm>,
) -> Response {
    // Validate passwords match
    if form.password != form.password_confirm {
        return Redirect::to("/auth/register?error=password_mismatch").into_response();
    }

    let auth = AuthService::new(state.catalog());
    let data = RegisterData {
        email: form.email,
        password: form.password,
        name: form.name,
        role: form.role,
    };

    match auth.register(data).await {
        Ok(user) => {
            if let Err(e) = set_current_user(&session, &user).await {
                tracing::error!("Failed to set session: {e}");
                return Redirect::to("/auth/register?error=session").into_response();
            }
            error::set_sentry_user(&user.id, Some(user.email.as_str()));
            Redirect::to("/account").into_response()
        }
        Err(AuthError::EmailTaken) => {
            Redirect::to("/auth/register?error=email_taken").into_response()
        }
        Err(AuthError::InvalidEmail(_)) => {
            Redirect::to("/auth/register?error=email").into_response()
        }
        Err(e) => {
            tracing::error!("Registration failed: {e}");
            Redirect::to("/auth/register?error=failed").into_response()
        }
    }
}

// =============================================================================
// Logout
// =============================================================================

/// Handle logout: clear the session slot unconditionally.
pub async fn logout(session: Session) -> error::Result<Redirect> {
    clear_current_user(&session).await?;
    error::clear_sentry_user();
    Ok(Redirect::to("/"))
}
