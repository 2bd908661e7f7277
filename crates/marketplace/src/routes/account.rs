//! Account route handlers (require authentication).

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::catalog::CatalogStore;
use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::{Artwork, User};
use crate::state::AppState;

/// Account overview template.
#[derive(Template, WebTemplate)]
#[template(path = "account/index.html")]
pub struct AccountTemplate {
    pub user: Option<User>,
    pub name: String,
    pub email: String,
    pub role: &'static str,
    pub member_since: String,
    pub is_artist: bool,
    /// The artist's own listings; empty for customers.
    pub artworks: Vec<Artwork>,
}

/// Display the account overview.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<AccountTemplate> {
    let artworks = if user.is_artist() {
        state.catalog().list_artworks_by_artist(&user.id).await?
    } else {
        Vec::new()
    };

    Ok(AccountTemplate {
        name: user.name.clone(),
        email: user.email.to_string(),
        role: user.role().as_str(),
        member_since: user.created_at.format("%B %Y").to_string(),
        is_artist: user.is_artist(),
        artworks,
        user: Some(user),
    })
}
