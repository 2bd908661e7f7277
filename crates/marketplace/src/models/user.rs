//! User domain types.
//!
//! A user's profile is a sum type keyed by role, so an artist can never
//! carry customer profile data and vice versa. The serde representation
//! flattens the tag into the user record as `role` with the variant payload
//! under `profile`, matching the public wire shape:
//!
//! ```json
//! {"id": "...", "email": "...", "name": "...", "createdAt": "...",
//!  "role": "artist", "profile": {"bio": "...", ...}}
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use aquarelle_core::{Email, Price, Role, UserId};

/// A marketplace account holder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
    /// Display name.
    pub name: String,
    /// Optional avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// Role-tagged profile data.
    #[serde(flatten)]
    pub profile: Profile,
}

impl User {
    /// The account role, derived from the profile variant.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.profile.role()
    }

    /// Whether this user is an artist.
    #[must_use]
    pub const fn is_artist(&self) -> bool {
        matches!(self.profile, Profile::Artist(_))
    }

    /// The artist profile, if this user is an artist.
    #[must_use]
    pub const fn artist_profile(&self) -> Option<&ArtistProfile> {
        match &self.profile {
            Profile::Artist(profile) => Some(profile),
            Profile::Customer(_) => None,
        }
    }

    /// The customer profile, if this user is a customer.
    #[must_use]
    pub const fn customer_profile(&self) -> Option<&CustomerProfile> {
        match &self.profile {
            Profile::Customer(profile) => Some(profile),
            Profile::Artist(_) => None,
        }
    }
}

/// Role-tagged profile payload.
///
/// The tag doubles as the user's `role` field on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "role", content = "profile", rename_all = "lowercase")]
pub enum Profile {
    Artist(ArtistProfile),
    Customer(CustomerProfile),
}

impl Profile {
    /// The role this profile variant belongs to.
    #[must_use]
    pub const fn role(&self) -> Role {
        match self {
            Self::Artist(_) => Role::Artist,
            Self::Customer(_) => Role::Customer,
        }
    }

    /// The default (empty) profile for a freshly registered account.
    #[must_use]
    pub fn default_for(role: Role) -> Self {
        match role {
            Role::Artist => Self::Artist(ArtistProfile::default()),
            Role::Customer => Self::Customer(CustomerProfile::default()),
        }
    }
}

/// Public profile of an artist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistProfile {
    pub bio: String,
    pub specialties: Vec<String>,
    pub experience: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default)]
    pub social_media: SocialMedia,
    pub commission_settings: CommissionSettings,
    #[serde(default)]
    pub portfolio: Vec<String>,
}

impl Default for ArtistProfile {
    fn default() -> Self {
        Self {
            bio: String::new(),
            specialties: Vec::new(),
            experience: String::new(),
            location: String::new(),
            website: None,
            social_media: SocialMedia::default(),
            commission_settings: CommissionSettings::default(),
            portfolio: Vec::new(),
        }
    }
}

/// Social media handles of an artist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMedia {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

/// Commission intake settings of an artist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionSettings {
    pub is_accepting: bool,
    pub price_range: CommissionRange,
    pub turnaround_time: String,
    pub styles: Vec<String>,
}

impl Default for CommissionSettings {
    fn default() -> Self {
        Self {
            is_accepting: false,
            price_range: CommissionRange {
                min: Price::from_dollars(100),
                max: Price::from_dollars(500),
            },
            turnaround_time: "2-3 weeks".to_owned(),
            styles: Vec::new(),
        }
    }
}

/// Inclusive commission budget range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CommissionRange {
    pub min: Price,
    pub max: Price,
}

/// Private profile of a customer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProfile {
    #[serde(default)]
    pub favorite_styles: Vec<String>,
    #[serde(default)]
    pub purchase_history: Vec<String>,
    #[serde(default)]
    pub wishlist: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
}

/// A postal address.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// Payload for creating a user (id and timestamp assigned by the store).
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub name: String,
    pub avatar: Option<String>,
    pub profile: Profile,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_artist() -> User {
        User {
            id: UserId::new("artist1"),
            email: Email::parse("emma.waters@example.com").unwrap(),
            name: "Emma Waters".to_owned(),
            avatar: None,
            created_at: Utc::now(),
            profile: Profile::Artist(ArtistProfile {
                bio: "Watercolor landscapes".to_owned(),
                specialties: vec!["Landscape".to_owned()],
                location: "Portland, Oregon".to_owned(),
                ..ArtistProfile::default()
            }),
        }
    }

    #[test]
    fn test_role_is_derived_from_profile() {
        let artist = sample_artist();
        assert_eq!(artist.role(), Role::Artist);
        assert!(artist.is_artist());
        assert!(artist.artist_profile().is_some());
        assert!(artist.customer_profile().is_none());
    }

    #[test]
    fn test_wire_shape_has_role_and_profile_keys() {
        let artist = sample_artist();
        let value = serde_json::to_value(&artist).unwrap();
        assert_eq!(value["role"], "artist");
        assert_eq!(value["profile"]["bio"], "Watercolor landscapes");
        assert!(value["createdAt"].is_string());
        assert!(value.get("avatar").is_none());
    }

    #[test]
    fn test_serde_roundtrip_preserves_variant() {
        let artist = sample_artist();
        let json = serde_json::to_string(&artist).unwrap();
        let parsed: User = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.role(), Role::Artist);
        assert_eq!(parsed.name, artist.name);
    }

    #[test]
    fn test_default_artist_profile_is_not_accepting() {
        let profile = ArtistProfile::default();
        assert!(profile.bio.is_empty());
        assert!(profile.specialties.is_empty());
        assert!(!profile.commission_settings.is_accepting);
        assert_eq!(
            profile.commission_settings.price_range.min,
            Price::from_dollars(100)
        );
        assert_eq!(
            profile.commission_settings.price_range.max,
            Price::from_dollars(500)
        );
        assert_eq!(profile.commission_settings.turnaround_time, "2-3 weeks");
        assert!(profile.portfolio.is_empty());
    }

    #[test]
    fn test_default_customer_profile_is_empty() {
        let Profile::Customer(profile) = Profile::default_for(Role::Customer) else {
            panic!("expected customer profile");
        };
        assert!(profile.favorite_styles.is_empty());
        assert!(profile.purchase_history.is_empty());
        assert!(profile.wishlist.is_empty());
        assert!(profile.shipping_address.is_none());
    }
}
