//! Artwork detail route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use tracing::instrument;

use aquarelle_core::ArtworkId;

use crate::catalog::CatalogStore;
use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::OptionalAuth;
use crate::models::{Artwork, User};
use crate::state::AppState;

/// Artwork detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "artworks/show.html")]
pub struct ArtworkShowTemplate {
    pub user: Option<User>,
    pub artwork: Artwork,
    /// Other pieces by the same artist.
    pub more_from_artist: Vec<Artwork>,
}

/// Display an artwork detail page.
#[instrument(skip_all, fields(artwork_id = %id))]
pub async fn show(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    Path(id): Path<String>,
) -> Result<ArtworkShowTemplate> {
    let id = ArtworkId::new(id);
    let artwork = state
        .catalog()
        .get_artwork_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("artwork {id}")))?;

    let more_from_artist = state
        .catalog()
        .list_artworks_by_artist(&artwork.artist_id)
        .await?
        .into_iter()
        .filter(|other| other.id != artwork.id)
        .collect();

    Ok(ArtworkShowTemplate {
        user,
        artwork,
        more_from_artist,
    })
}
