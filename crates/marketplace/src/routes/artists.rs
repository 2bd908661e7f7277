//! Artist directory route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::instrument;

use crate::catalog::CatalogStore;
use crate::error::Result;
use crate::filters;
use crate::middleware::OptionalAuth;
use crate::models::User;
use crate::search::search_artists;
use crate::state::AppState;

/// Artist search query parameters.
#[derive(Debug, Deserialize)]
pub struct ArtistSearchParams {
    #[serde(default)]
    pub q: String,
}

/// Artist display data for templates.
#[derive(Clone)]
pub struct ArtistCard {
    pub id: String,
    pub name: String,
    /// First letter of the name, shown when there is no avatar.
    pub initial: String,
    pub avatar: Option<String>,
    pub bio: String,
    pub specialties: Vec<String>,
    pub location: String,
    pub experience: String,
    pub accepting_commissions: bool,
}

impl From<&User> for ArtistCard {
    fn from(user: &User) -> Self {
        let initial = user
            .name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default();

        let (bio, specialties, location, experience, accepting_commissions) =
            user.artist_profile().map_or_else(
                || (String::new(), Vec::new(), String::new(), String::new(), false),
                |profile| {
                    (
                        profile.bio.clone(),
                        profile.specialties.clone(),
                        profile.location.clone(),
                        profile.experience.clone(),
                        profile.commission_settings.is_accepting,
                    )
                },
            );

        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            initial,
            avatar: user.avatar.clone(),
            bio,
            specialties,
            location,
            experience,
            accepting_commissions,
        }
    }
}

/// Artists page template.
#[derive(Template, WebTemplate)]
#[template(path = "artists/index.html")]
pub struct ArtistsTemplate {
    pub user: Option<User>,
    pub q: String,
    pub artists: Vec<ArtistCard>,
    /// Size of the unfiltered artist collection.
    pub total: usize,
}

/// Display the artist directory with optional free-text search.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    Query(params): Query<ArtistSearchParams>,
) -> Result<ArtistsTemplate> {
    let all = state.catalog().list_artists().await?;
    let matched = search_artists(&all, &params.q);

    Ok(ArtistsTemplate {
        user,
        q: params.q,
        artists: matched.iter().map(ArtistCard::from).collect(),
        total: all.len(),
    })
}
