//! JSON API route handlers.
//!
//! Mirrors the page routes for programmatic consumers. Bodies are
//! camelCase; failures carry an `{"error": ...}` body with the matching
//! status code.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use aquarelle_core::{
    ArtworkCategory, ArtworkId, Availability, Dimensions, Price, UserId,
};

use crate::catalog::CatalogStore;
use crate::error::Result;
use crate::models::NewArtwork;
use crate::state::AppState;

/// Query parameters for the artwork listing endpoint.
///
/// `featured=true` takes precedence over `artistId` when both are given.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkListParams {
    pub featured: Option<bool>,
    pub artist_id: Option<String>,
}

/// `GET /api/artworks`
#[instrument(skip(state))]
pub async fn list_artworks(
    State(state): State<AppState>,
    Query(params): Query<ArtworkListParams>,
) -> Result<Response> {
    let artworks = if params.featured == Some(true) {
        state.catalog().list_featured_artworks().await?
    } else if let Some(artist_id) = params.artist_id {
        state
            .catalog()
            .list_artworks_by_artist(&UserId::new(artist_id))
            .await?
    } else {
        state.catalog().list_artworks().await?
    };

    Ok(Json(json!({ "artworks": artworks })).into_response())
}

/// `GET /api/artworks/{id}`
#[instrument(skip(state))]
pub async fn get_artwork(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    match state
        .catalog()
        .get_artwork_by_id(&ArtworkId::new(id))
        .await?
    {
        Some(artwork) => Ok(Json(json!({ "artwork": artwork })).into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Artwork not found" })),
        )
            .into_response()),
    }
}

/// `GET /api/artists`
#[instrument(skip(state))]
pub async fn list_artists(State(state): State<AppState>) -> Result<Response> {
    let artists = state.catalog().list_artists().await?;
    Ok(Json(json!({ "artists": artists })).into_response())
}

/// Creation payload for `POST /api/artworks`.
///
/// `title`, `price`, and `artistId` are required; everything else defaults.
/// The artist's display name is resolved server-side from the artist record,
/// never taken from the payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArtworkRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: Option<Price>,
    pub artist_id: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub category: ArtworkCategory,
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub dimensions: Dimensions,
    #[serde(default)]
    pub availability: Availability,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

fn validation_error() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": "Missing required fields" })),
    )
        .into_response()
}

/// `POST /api/artworks`
#[instrument(skip(state, payload))]
pub async fn create_artwork(
    State(state): State<AppState>,
    Json(payload): Json<CreateArtworkRequest>,
) -> Result<Response> {
    // Basic validation: title, price, and artistId present and non-empty/non-zero
    let (Some(price), Some(artist_id)) = (payload.price, payload.artist_id) else {
        return Ok(validation_error());
    };
    if payload.title.trim().is_empty()
        || artist_id.trim().is_empty()
        || price.is_zero()
        || price < Price::ZERO
    {
        return Ok(validation_error());
    }

    let artist_id = UserId::new(artist_id);
    let Some(artist) = state.catalog().find_user_by_id(&artist_id).await? else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Unknown artist" })),
        )
            .into_response());
    };

    let artwork = state
        .catalog()
        .create_artwork(NewArtwork {
            artist_id,
            artist_name: artist.name,
            title: payload.title,
            description: payload.description,
            price,
            images: payload.images,
            category: payload.category,
            style: payload.style,
            medium: payload.medium,
            dimensions: payload.dimensions,
            availability: payload.availability,
            tags: payload.tags,
            featured: payload.featured,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(json!({ "artwork": artwork }))).into_response())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::catalog::MemoryCatalog;
    use crate::config::MarketplaceConfig;

    fn seeded_state() -> AppState {
        AppState::new(
            MarketplaceConfig::default(),
            Arc::new(MemoryCatalog::with_sample_data()),
        )
    }

    fn create_payload(title: &str, price: Option<Price>, artist_id: Option<&str>) -> CreateArtworkRequest {
        CreateArtworkRequest {
            title: title.to_owned(),
            description: String::new(),
            price,
            artist_id: artist_id.map(ToOwned::to_owned),
            images: Vec::new(),
            category: ArtworkCategory::Landscape,
            style: String::new(),
            medium: String::new(),
            dimensions: Dimensions::default(),
            availability: Availability::Available,
            tags: Vec::new(),
            featured: false,
        }
    }

    #[tokio::test]
    async fn test_get_artwork_absent_is_404() {
        let state = seeded_state();
        let response = get_artwork(State(state), Path("missing".to_owned()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_artwork_present_is_200() {
        let state = seeded_state();
        let response = get_artwork(State(state), Path("artwork1".to_owned()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_artwork_missing_fields_is_400() {
        let state = seeded_state();

        for payload in [
            create_payload("", Some(Price::from_dollars(100)), Some("artist1")),
            create_payload("Title", None, Some("artist1")),
            create_payload("Title", Some(Price::ZERO), Some("artist1")),
            create_payload("Title", Some(Price::from_dollars(100)), None),
            create_payload("Title", Some(Price::from_dollars(100)), Some("  ")),
        ] {
            let response = create_artwork(State(state.clone()), Json(payload))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn test_create_artwork_unknown_artist_is_400() {
        let state = seeded_state();
        let payload = create_payload("Title", Some(Price::from_dollars(100)), Some("artist999"));
        let response = create_artwork(State(state), Json(payload)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_artwork_stamps_artist_name_and_returns_201() {
        let state = seeded_state();
        let payload = create_payload("New Piece", Some(Price::from_dollars(300)), Some("artist1"));
        let response = create_artwork(State(state.clone()), Json(payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let created = state
            .catalog()
            .list_artworks()
            .await
            .unwrap()
            .into_iter()
            .find(|artwork| artwork.title == "New Piece")
            .unwrap();
        assert_eq!(created.artist_name, "Emma Waters");
        assert!(created.id.as_str().starts_with("artwork_"));
    }

    #[tokio::test]
    async fn test_list_artworks_featured_takes_precedence() {
        let state = seeded_state();
        let response = list_artworks(
            State(state),
            Query(ArtworkListParams {
                featured: Some(true),
                artist_id: Some("artist2".to_owned()),
            }),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
