//! Artwork domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use aquarelle_core::{ArtworkCategory, ArtworkId, Availability, Dimensions, Price, UserId};

/// A catalog item: one original watercolor painting.
///
/// `artist_name` is a denormalized copy of the referenced artist's display
/// name, stamped when the record is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    /// Unique artwork ID.
    pub id: ArtworkId,
    /// The artist who created the piece.
    pub artist_id: UserId,
    /// The artist's display name at creation time.
    pub artist_name: String,
    pub title: String,
    pub description: String,
    /// Asking price, always non-negative.
    pub price: Price,
    /// Image URLs, primary first.
    pub images: Vec<String>,
    pub category: ArtworkCategory,
    pub style: String,
    pub medium: String,
    pub dimensions: Dimensions,
    pub availability: Availability,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    /// Whether the piece is highlighted on the home page.
    pub featured: bool,
}

impl Artwork {
    /// The primary image URL, if any.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Payload for creating an artwork (id and timestamp assigned by the store).
#[derive(Debug, Clone)]
pub struct NewArtwork {
    pub artist_id: UserId,
    pub artist_name: String,
    pub title: String,
    pub description: String,
    pub price: Price,
    pub images: Vec<String>,
    pub category: ArtworkCategory,
    pub style: String,
    pub medium: String,
    pub dimensions: Dimensions,
    pub availability: Availability,
    pub tags: Vec<String>,
    pub featured: bool,
}

impl NewArtwork {
    /// Materialize the full record with a store-assigned id and timestamp.
    #[must_use]
    pub fn into_artwork(self, id: ArtworkId, created_at: DateTime<Utc>) -> Artwork {
        Artwork {
            id,
            artist_id: self.artist_id,
            artist_name: self.artist_name,
            title: self.title,
            description: self.description,
            price: self.price,
            images: self.images,
            category: self.category,
            style: self.style,
            medium: self.medium,
            dimensions: self.dimensions,
            availability: self.availability,
            tags: self.tags,
            created_at,
            featured: self.featured,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use aquarelle_core::Unit;

    use super::*;

    fn sample_artwork() -> Artwork {
        Artwork {
            id: ArtworkId::new("artwork1"),
            artist_id: UserId::new("artist1"),
            artist_name: "Emma Waters".to_owned(),
            title: "Misty Mountain Dawn".to_owned(),
            description: "Mountains in morning mist".to_owned(),
            price: Price::from_dollars(350),
            images: vec!["/static/images/artworks/misty-mountain-dawn.png".to_owned()],
            category: ArtworkCategory::Landscape,
            style: "Realistic".to_owned(),
            medium: "Watercolor on paper".to_owned(),
            dimensions: Dimensions::new(40.0, 30.0, Unit::Cm),
            availability: Availability::Available,
            tags: vec!["mountain".to_owned(), "mist".to_owned()],
            created_at: Utc::now(),
            featured: true,
        }
    }

    #[test]
    fn test_wire_shape_uses_camel_case() {
        let value = serde_json::to_value(sample_artwork()).unwrap();
        assert_eq!(value["artistId"], "artist1");
        assert_eq!(value["artistName"], "Emma Waters");
        assert_eq!(value["category"], "landscape");
        assert_eq!(value["availability"], "available");
        assert!(value["createdAt"].is_string());
    }

    #[test]
    fn test_serde_roundtrip() {
        let artwork = sample_artwork();
        let json = serde_json::to_string(&artwork).unwrap();
        let parsed: Artwork = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, artwork.id);
        assert_eq!(parsed.price, artwork.price);
        assert_eq!(parsed.category, artwork.category);
    }

    #[test]
    fn test_primary_image() {
        let artwork = sample_artwork();
        assert_eq!(
            artwork.primary_image(),
            Some("/static/images/artworks/misty-mountain-dawn.png")
        );

        let mut bare = artwork;
        bare.images.clear();
        assert!(bare.primary_image().is_none());
    }
}
