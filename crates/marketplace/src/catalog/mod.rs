//! Catalog store: the data-access seam for users and artworks.
//!
//! The rest of the application only ever talks to [`CatalogStore`], never to
//! a concrete store, so the in-memory implementation can be swapped for a
//! real backing store without changing any caller. The store is constructed
//! once by the composition root and passed by reference - there is no
//! process-wide singleton.

mod memory;

pub use memory::MemoryCatalog;

use async_trait::async_trait;

use aquarelle_core::{ArtworkId, Email, UserId};

use crate::models::{Artwork, NewArtwork, NewUser, User};

/// Errors a catalog backing store can produce.
///
/// The in-memory store never fails; these variants exist for real backing
/// stores substituted behind the same trait.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The backing store could not be reached or the operation failed.
    #[error("backend error: {0}")]
    Backend(String),

    /// Stored data could not be decoded into a domain type.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Data access for the artwork and user collections.
///
/// All operations are async so a remote backing store can be substituted
/// later without changing the calling contract. Lookups that find nothing
/// return `Ok(None)` or an empty sequence - absence is never an error.
/// Mutating operations are atomic with respect to their own read-append
/// sequence.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// All artworks, in insertion order.
    async fn list_artworks(&self) -> Result<Vec<Artwork>, CatalogError>;

    /// Artworks by the given artist, in insertion order.
    async fn list_artworks_by_artist(
        &self,
        artist_id: &UserId,
    ) -> Result<Vec<Artwork>, CatalogError>;

    /// Artworks flagged as featured, in insertion order.
    async fn list_featured_artworks(&self) -> Result<Vec<Artwork>, CatalogError>;

    /// Look up a single artwork by id.
    async fn get_artwork_by_id(&self, id: &ArtworkId)
    -> Result<Option<Artwork>, CatalogError>;

    /// Create an artwork with a fresh unique id and the current timestamp.
    ///
    /// The record is appended to the collection; existing records are never
    /// overwritten.
    async fn create_artwork(&self, new: NewArtwork) -> Result<Artwork, CatalogError>;

    /// All users with the artist role, in insertion order.
    async fn list_artists(&self) -> Result<Vec<User>, CatalogError>;

    /// Look up a user by email address.
    async fn find_user_by_email(&self, email: &Email) -> Result<Option<User>, CatalogError>;

    /// Look up a user by id.
    async fn find_user_by_id(&self, id: &UserId) -> Result<Option<User>, CatalogError>;

    /// Create a user with a fresh unique id and the current timestamp.
    ///
    /// Email uniqueness is NOT enforced here; the registration flow checks
    /// for duplicates before calling this.
    async fn create_user(&self, new: NewUser) -> Result<User, CatalogError>;
}
