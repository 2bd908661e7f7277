//! HTTP route handlers for the marketplace.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (featured artworks and artists)
//! GET  /health                 - Health check
//!
//! # Catalog
//! GET  /marketplace            - Artwork listing with filters and sorting
//! GET  /artists                - Artist grid with search
//! GET  /artwork/{id}           - Artwork detail
//!
//! # Auth
//! GET  /auth/login             - Login page
//! POST /auth/login             - Login action
//! GET  /auth/register          - Register page
//! POST /auth/register          - Register action
//! POST /auth/logout            - Logout action
//!
//! # Account (requires auth)
//! GET  /account                - Account overview
//!
//! # JSON API
//! GET  /api/artworks           - Artwork collection (?featured=, ?artistId=)
//! POST /api/artworks           - Create a listing
//! GET  /api/artworks/{id}      - Single artwork
//! GET  /api/artists            - Artist collection
//! ```

pub mod account;
pub mod api;
pub mod artists;
pub mod artworks;
pub mod auth;
pub mod home;
pub mod marketplace;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/logout", post(auth::logout))
}

/// Create the JSON API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/artworks",
            get(api::list_artworks).post(api::create_artwork),
        )
        .route("/artworks/{id}", get(api::get_artwork))
        .route("/artists", get(api::list_artists))
}

/// Create all routes for the marketplace.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Catalog pages
        .route("/marketplace", get(marketplace::index))
        .route("/artists", get(artists::index))
        .route("/artwork/{id}", get(artworks::show))
        // Account
        .route("/account", get(account::index))
        // Auth routes
        .nest("/auth", auth_routes())
        // JSON API
        .nest("/api", api_routes())
}
