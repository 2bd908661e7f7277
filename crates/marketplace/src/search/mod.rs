//! Catalog search: filtering and ordering of listing views.
//!
//! Everything in this module is a pure function of its inputs - no state,
//! no clock, no randomness. Given the same collection and criteria, the
//! output is identical across invocations, and criteria that select nothing
//! produce an empty sequence rather than an error.
//!
//! Filtering runs as successive stages, each shrinking or preserving the
//! candidate set: free-text match, category membership, price bracket, then
//! a stable sort by the selected key. A second entry point applies the same
//! text rule to the artist collection.

use aquarelle_core::{ArtworkCategory, Price};

use crate::models::{Artwork, Profile, User};

/// Active criteria for a listing view.
#[derive(Debug, Clone, Default)]
pub struct ArtworkQuery {
    /// Free-text query; empty or whitespace-only is a no-op.
    pub text: String,
    /// Selected categories; empty set is a no-op.
    pub categories: Vec<ArtworkCategory>,
    /// Selected price bracket; `None` is a no-op.
    pub price_range: Option<PriceRange>,
    /// Ordering of the result.
    pub sort: SortKey,
}

/// Inclusive price bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Price,
    pub max: Price,
}

impl PriceRange {
    /// A bracket spanning `min..=max`.
    #[must_use]
    pub const fn new(min: Price, max: Price) -> Self {
        Self { min, max }
    }

    /// An open-ended bracket from `min` upward.
    #[must_use]
    pub const fn at_least(min: Price) -> Self {
        Self {
            min,
            max: Price::MAX,
        }
    }

    /// Whether a price falls inside the bracket, bounds included.
    #[must_use]
    pub fn contains(&self, price: Price) -> bool {
        self.min <= price && price <= self.max
    }
}

/// Ordering key for listing views.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Most recently created first.
    #[default]
    Newest,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
    /// Title A-Z.
    Title,
    /// Artist name A-Z.
    Artist,
}

impl SortKey {
    /// Parse from a URL parameter value. Unknown values fall back to
    /// [`SortKey::Newest`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "price-asc" => Self::PriceAsc,
            "price-desc" => Self::PriceDesc,
            "title" => Self::Title,
            "artist" => Self::Artist,
            _ => Self::Newest,
        }
    }

    /// Convert to a URL parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::Title => "title",
            Self::Artist => "artist",
        }
    }

    /// Human-readable label for the sort select.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest",
            Self::PriceAsc => "Price: Low to High",
            Self::PriceDesc => "Price: High to Low",
            Self::Title => "Title A-Z",
            Self::Artist => "Artist A-Z",
        }
    }

    /// Every sort key, in display order.
    pub const ALL: [Self; 5] = [
        Self::Newest,
        Self::PriceAsc,
        Self::PriceDesc,
        Self::Title,
        Self::Artist,
    ];
}

/// Filter and order an artwork collection per the given criteria.
///
/// An empty input collection yields an empty output; criteria matching
/// nothing yield an empty output.
#[must_use]
pub fn filter_artworks(artworks: &[Artwork], query: &ArtworkQuery) -> Vec<Artwork> {
    let needle = query.text.trim().to_lowercase();

    let mut matched: Vec<Artwork> = artworks
        .iter()
        .filter(|artwork| needle.is_empty() || matches_text(artwork, &needle))
        .filter(|artwork| {
            query.categories.is_empty() || query.categories.contains(&artwork.category)
        })
        .filter(|artwork| {
            query
                .price_range
                .is_none_or(|range| range.contains(artwork.price))
        })
        .cloned()
        .collect();

    sort_artworks(&mut matched, query.sort);
    matched
}

/// Case-insensitive substring match against title, description, artist
/// name, and tags. `needle` must already be lowercased.
fn matches_text(artwork: &Artwork, needle: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);

    contains(&artwork.title)
        || contains(&artwork.description)
        || contains(&artwork.artist_name)
        || artwork.tags.iter().any(|tag| contains(tag))
}

/// Stable sort by the selected key.
fn sort_artworks(artworks: &mut [Artwork], sort: SortKey) {
    match sort {
        SortKey::Newest => artworks.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::PriceAsc => artworks.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => {
            // Reversing the ascending order keeps the two price orders exact
            // mirrors of each other, ties included.
            artworks.sort_by(|a, b| a.price.cmp(&b.price));
            artworks.reverse();
        }
        SortKey::Title => {
            artworks.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        }
        SortKey::Artist => {
            artworks.sort_by(|a, b| {
                a.artist_name
                    .to_lowercase()
                    .cmp(&b.artist_name.to_lowercase())
            });
        }
    }
}

/// Filter the artist collection by a free-text query.
///
/// Matches name, bio, any specialty, and location with the same
/// case-insensitive substring rule, combined with OR. An empty or
/// whitespace-only query returns the collection unchanged.
#[must_use]
pub fn search_artists(artists: &[User], text: &str) -> Vec<User> {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return artists.to_vec();
    }

    artists
        .iter()
        .filter(|artist| artist_matches(artist, &needle))
        .cloned()
        .collect()
}

fn artist_matches(artist: &User, needle: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);

    if contains(&artist.name) {
        return true;
    }

    match &artist.profile {
        Profile::Artist(profile) => {
            contains(&profile.bio)
                || profile.specialties.iter().any(|s| contains(s))
                || contains(&profile.location)
        }
        Profile::Customer(_) => false,
    }
}
