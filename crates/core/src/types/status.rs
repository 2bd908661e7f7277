//! Status and role enums for marketplace entities.

use serde::{Deserialize, Serialize};

/// Sale availability of an artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    #[default]
    Available,
    Sold,
    Reserved,
}

impl Availability {
    /// The wire/display form of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Sold => "sold",
            Self::Reserved => "reserved",
        }
    }

    /// Whether the artwork can currently be purchased.
    #[must_use]
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Account role. Determines which profile variant a user carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Sells artworks and accepts commissions.
    Artist,
    /// Browses and purchases artworks.
    Customer,
}

impl Role {
    /// The wire/display form of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Artist => "artist",
            Self::Customer => "customer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "artist" => Ok(Self::Artist),
            "customer" => Ok(Self::Customer),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_serde_is_lowercase() {
        let json = serde_json::to_string(&Availability::Reserved).unwrap();
        assert_eq!(json, "\"reserved\"");
        let parsed: Availability = serde_json::from_str("\"sold\"").unwrap();
        assert_eq!(parsed, Availability::Sold);
    }

    #[test]
    fn test_availability_default_is_available() {
        assert_eq!(Availability::default(), Availability::Available);
        assert!(Availability::default().is_available());
    }

    #[test]
    fn test_role_roundtrip() {
        let role: Role = "artist".parse().unwrap();
        assert_eq!(role, Role::Artist);
        assert_eq!(role.to_string(), "artist");
        assert!("admin".parse::<Role>().is_err());
    }
}
