//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::catalog::CatalogStore;
use crate::error::Result;
use crate::filters;
use crate::middleware::OptionalAuth;
use crate::models::{Artwork, User};
use crate::routes::artists::ArtistCard;
use crate::state::AppState;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Current user for the nav.
    pub user: Option<User>,
    /// Featured artworks for the hero grid.
    pub featured: Vec<Artwork>,
    /// Artists for the "meet the artists" strip.
    pub artists: Vec<ArtistCard>,
}

/// Display the home page.
#[instrument(skip_all)]
pub async fn home(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
) -> Result<HomeTemplate> {
    let featured = state.catalog().list_featured_artworks().await?;
    let artists = state
        .catalog()
        .list_artists()
        .await?
        .iter()
        .map(ArtistCard::from)
        .collect();

    Ok(HomeTemplate {
        user,
        featured,
        artists,
    })
}
