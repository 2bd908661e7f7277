//! In-memory catalog store.
//!
//! Holds both collections in plain `Vec`s behind a single `RwLock`, which
//! preserves insertion order and makes each mutating operation atomic with
//! respect to its own read-append sequence.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;

use aquarelle_core::{
    ArtworkCategory, ArtworkId, Availability, Dimensions, Email, Price, Unit, UserId,
};

use super::{CatalogError, CatalogStore};
use crate::models::{
    ArtistProfile, Artwork, CommissionRange, CommissionSettings, CustomerProfile, NewArtwork,
    NewUser, Profile, SocialMedia, User,
};

#[derive(Default)]
struct Collections {
    users: Vec<User>,
    artworks: Vec<Artwork>,
}

/// In-memory [`CatalogStore`] implementation.
///
/// Never fails; every operation completes against process-local state.
#[derive(Default)]
pub struct MemoryCatalog {
    inner: RwLock<Collections>,
}

impl MemoryCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog seeded with the demo artists, customer, and artworks.
    #[must_use]
    pub fn with_sample_data() -> Self {
        let catalog = Self::new();
        {
            let mut inner = catalog
                .inner
                .try_write()
                .expect("freshly constructed catalog lock is uncontended");
            seed(&mut inner);
        }
        catalog
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalog {
    async fn list_artworks(&self) -> Result<Vec<Artwork>, CatalogError> {
        Ok(self.inner.read().await.artworks.clone())
    }

    async fn list_artworks_by_artist(
        &self,
        artist_id: &UserId,
    ) -> Result<Vec<Artwork>, CatalogError> {
        Ok(self
            .inner
            .read()
            .await
            .artworks
            .iter()
            .filter(|artwork| &artwork.artist_id == artist_id)
            .cloned()
            .collect())
    }

    async fn list_featured_artworks(&self) -> Result<Vec<Artwork>, CatalogError> {
        Ok(self
            .inner
            .read()
            .await
            .artworks
            .iter()
            .filter(|artwork| artwork.featured)
            .cloned()
            .collect())
    }

    async fn get_artwork_by_id(
        &self,
        id: &ArtworkId,
    ) -> Result<Option<Artwork>, CatalogError> {
        Ok(self
            .inner
            .read()
            .await
            .artworks
            .iter()
            .find(|artwork| &artwork.id == id)
            .cloned())
    }

    async fn create_artwork(&self, new: NewArtwork) -> Result<Artwork, CatalogError> {
        let mut inner = self.inner.write().await;
        let artwork = new.into_artwork(ArtworkId::generate(), Utc::now());
        inner.artworks.push(artwork.clone());
        Ok(artwork)
    }

    async fn list_artists(&self) -> Result<Vec<User>, CatalogError> {
        Ok(self
            .inner
            .read()
            .await
            .users
            .iter()
            .filter(|user| user.is_artist())
            .cloned()
            .collect())
    }

    async fn find_user_by_email(&self, email: &Email) -> Result<Option<User>, CatalogError> {
        Ok(self
            .inner
            .read()
            .await
            .users
            .iter()
            .find(|user| &user.email == email)
            .cloned())
    }

    async fn find_user_by_id(&self, id: &UserId) -> Result<Option<User>, CatalogError> {
        Ok(self
            .inner
            .read()
            .await
            .users
            .iter()
            .find(|user| &user.id == id)
            .cloned())
    }

    async fn create_user(&self, new: NewUser) -> Result<User, CatalogError> {
        let mut inner = self.inner.write().await;
        let user = User {
            id: UserId::generate(),
            email: new.email,
            name: new.name,
            avatar: new.avatar,
            created_at: Utc::now(),
            profile: new.profile,
        };
        inner.users.push(user.clone());
        Ok(user)
    }
}

/// Seed the demo data: two artists, one customer, four artworks.
#[allow(clippy::too_many_lines)]
fn seed(inner: &mut Collections) {
    let now = Utc::now();

    inner.users.push(User {
        id: UserId::new("artist1"),
        email: Email::parse("emma.waters@example.com")
            .expect("seed email is valid"),
        name: "Emma Waters".to_owned(),
        avatar: Some("/static/images/artists/emma-waters.png".to_owned()),
        created_at: now - Duration::days(400),
        profile: Profile::Artist(ArtistProfile {
            bio: "Passionate watercolor artist specializing in landscapes and botanical \
                  illustrations. I find inspiration in nature's ever-changing moods and colors."
                .to_owned(),
            specialties: vec![
                "Landscape".to_owned(),
                "Botanical".to_owned(),
                "Seascape".to_owned(),
            ],
            experience: "8 years".to_owned(),
            location: "Portland, Oregon".to_owned(),
            website: Some("www.emmawaters.art".to_owned()),
            social_media: SocialMedia {
                instagram: Some("@emmawaters_art".to_owned()),
                facebook: Some("Emma Waters Art".to_owned()),
                twitter: None,
            },
            commission_settings: CommissionSettings {
                is_accepting: true,
                price_range: CommissionRange {
                    min: Price::from_dollars(150),
                    max: Price::from_dollars(800),
                },
                turnaround_time: "2-3 weeks".to_owned(),
                styles: vec![
                    "Realistic".to_owned(),
                    "Impressionistic".to_owned(),
                    "Contemporary".to_owned(),
                ],
            },
            portfolio: Vec::new(),
        }),
    });

    inner.users.push(User {
        id: UserId::new("artist2"),
        email: Email::parse("david.brush@example.com")
            .expect("seed email is valid"),
        name: "David Brushworth".to_owned(),
        avatar: Some("/static/images/artists/david-brushworth.png".to_owned()),
        created_at: now - Duration::days(300),
        profile: Profile::Artist(ArtistProfile {
            bio: "Abstract watercolor painter exploring emotions through fluid forms and \
                  vibrant color combinations. Each piece tells a unique story."
                .to_owned(),
            specialties: vec![
                "Abstract".to_owned(),
                "Contemporary".to_owned(),
                "Experimental".to_owned(),
            ],
            experience: "12 years".to_owned(),
            location: "San Francisco, California".to_owned(),
            website: None,
            social_media: SocialMedia {
                instagram: Some("@davidbrush_art".to_owned()),
                facebook: None,
                twitter: Some("@brushworth".to_owned()),
            },
            commission_settings: CommissionSettings {
                is_accepting: true,
                price_range: CommissionRange {
                    min: Price::from_dollars(200),
                    max: Price::from_dollars(1200),
                },
                turnaround_time: "3-4 weeks".to_owned(),
                styles: vec![
                    "Abstract".to_owned(),
                    "Contemporary".to_owned(),
                    "Expressive".to_owned(),
                ],
            },
            portfolio: Vec::new(),
        }),
    });

    inner.users.push(User {
        id: UserId::new("customer1"),
        email: Email::parse("sarah.collector@example.com")
            .expect("seed email is valid"),
        name: "Sarah Collector".to_owned(),
        avatar: None,
        created_at: now - Duration::days(200),
        profile: Profile::Customer(CustomerProfile {
            favorite_styles: vec!["Landscape".to_owned(), "Abstract".to_owned()],
            purchase_history: Vec::new(),
            wishlist: Vec::new(),
            shipping_address: None,
            billing_address: None,
        }),
    });

    inner.artworks.push(Artwork {
        id: ArtworkId::new("artwork1"),
        artist_id: UserId::new("artist1"),
        artist_name: "Emma Waters".to_owned(),
        title: "Misty Mountain Dawn".to_owned(),
        description: "A serene watercolor capturing the ethereal beauty of mountains shrouded \
                      in morning mist. Painted with transparent washes and delicate brushwork."
            .to_owned(),
        price: Price::from_dollars(350),
        images: vec!["/static/images/artworks/misty-mountain-dawn.png".to_owned()],
        category: ArtworkCategory::Landscape,
        style: "Realistic".to_owned(),
        medium: "Watercolor on paper".to_owned(),
        dimensions: Dimensions::new(40.0, 30.0, Unit::Cm),
        availability: Availability::Available,
        tags: vec![
            "mountain".to_owned(),
            "mist".to_owned(),
            "dawn".to_owned(),
            "nature".to_owned(),
            "peaceful".to_owned(),
        ],
        created_at: now - Duration::days(12),
        featured: true,
    });

    inner.artworks.push(Artwork {
        id: ArtworkId::new("artwork2"),
        artist_id: UserId::new("artist1"),
        artist_name: "Emma Waters".to_owned(),
        title: "Wild Rose Garden".to_owned(),
        description: "Delicate botanical study featuring wild roses in full bloom. Each petal \
                      is carefully rendered with attention to light and shadow."
            .to_owned(),
        price: Price::from_dollars(280),
        images: vec!["/static/images/artworks/wild-rose-garden.png".to_owned()],
        category: ArtworkCategory::Floral,
        style: "Realistic".to_owned(),
        medium: "Watercolor on paper".to_owned(),
        dimensions: Dimensions::new(35.0, 25.0, Unit::Cm),
        availability: Availability::Available,
        tags: vec![
            "roses".to_owned(),
            "flowers".to_owned(),
            "botanical".to_owned(),
            "garden".to_owned(),
            "romantic".to_owned(),
        ],
        created_at: now - Duration::days(9),
        featured: false,
    });

    inner.artworks.push(Artwork {
        id: ArtworkId::new("artwork3"),
        artist_id: UserId::new("artist2"),
        artist_name: "David Brushworth".to_owned(),
        title: "Emotional Storm".to_owned(),
        description: "An abstract expression of turbulent emotions using bold color washes and \
                      dynamic brushstrokes. The interplay of warm and cool tones creates depth."
            .to_owned(),
        price: Price::from_dollars(450),
        images: vec!["/static/images/artworks/emotional-storm.png".to_owned()],
        category: ArtworkCategory::Abstract,
        style: "Abstract".to_owned(),
        medium: "Watercolor on paper".to_owned(),
        dimensions: Dimensions::new(50.0, 35.0, Unit::Cm),
        availability: Availability::Available,
        tags: vec![
            "abstract".to_owned(),
            "emotions".to_owned(),
            "storm".to_owned(),
            "dynamic".to_owned(),
            "expressive".to_owned(),
        ],
        created_at: now - Duration::days(6),
        featured: true,
    });

    inner.artworks.push(Artwork {
        id: ArtworkId::new("artwork4"),
        artist_id: UserId::new("artist2"),
        artist_name: "David Brushworth".to_owned(),
        title: "Ocean Depths".to_owned(),
        description: "Flowing watercolor interpretation of deep ocean currents. The painting \
                      captures the mysterious beauty of underwater landscapes."
            .to_owned(),
        price: Price::from_dollars(520),
        images: vec!["/static/images/artworks/ocean-depths.png".to_owned()],
        category: ArtworkCategory::Seascape,
        style: "Abstract".to_owned(),
        medium: "Watercolor on paper".to_owned(),
        dimensions: Dimensions::new(45.0, 32.0, Unit::Cm),
        availability: Availability::Available,
        tags: vec![
            "ocean".to_owned(),
            "water".to_owned(),
            "depths".to_owned(),
            "blue".to_owned(),
            "flowing".to_owned(),
        ],
        created_at: now - Duration::days(3),
        featured: false,
    });
}
