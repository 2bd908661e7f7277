//! Artwork categories and physical dimensions.

use serde::{Deserialize, Serialize};

/// Subject category of an artwork.
///
/// The catalog recognizes exactly these nine categories; anything outside
/// them is listed under [`ArtworkCategory::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ArtworkCategory {
    Landscape,
    Portrait,
    Abstract,
    StillLife,
    Floral,
    Animal,
    Seascape,
    Cityscape,
    #[default]
    Other,
}

impl ArtworkCategory {
    /// Every category, in display order.
    pub const ALL: [Self; 9] = [
        Self::Landscape,
        Self::Portrait,
        Self::Abstract,
        Self::StillLife,
        Self::Floral,
        Self::Animal,
        Self::Seascape,
        Self::Cityscape,
        Self::Other,
    ];

    /// The wire form of the category (kebab-case slug).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
            Self::Abstract => "abstract",
            Self::StillLife => "still-life",
            Self::Floral => "floral",
            Self::Animal => "animal",
            Self::Seascape => "seascape",
            Self::Cityscape => "cityscape",
            Self::Other => "other",
        }
    }

    /// Human-readable label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Landscape => "Landscape",
            Self::Portrait => "Portrait",
            Self::Abstract => "Abstract",
            Self::StillLife => "Still Life",
            Self::Floral => "Floral",
            Self::Animal => "Animal",
            Self::Seascape => "Seascape",
            Self::Cityscape => "Cityscape",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for ArtworkCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ArtworkCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("invalid artwork category: {s}"))
    }
}

/// Unit of measure for artwork dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Cm,
    Inches,
}

impl Unit {
    /// The wire/display form of the unit.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cm => "cm",
            Self::Inches => "inches",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Physical size of an artwork.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub unit: Unit,
}

impl Dimensions {
    /// Create dimensions from width and height in the given unit.
    #[must_use]
    pub const fn new(width: f64, height: f64, unit: Unit) -> Self {
        Self {
            width,
            height,
            unit,
        }
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {} {}", self.width, self.height, self.unit)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serde_is_kebab_case() {
        let json = serde_json::to_string(&ArtworkCategory::StillLife).unwrap();
        assert_eq!(json, "\"still-life\"");
        let parsed: ArtworkCategory = serde_json::from_str("\"seascape\"").unwrap();
        assert_eq!(parsed, ArtworkCategory::Seascape);
    }

    #[test]
    fn test_category_from_str_covers_all() {
        for category in ArtworkCategory::ALL {
            let parsed: ArtworkCategory = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
        assert!("sculpture".parse::<ArtworkCategory>().is_err());
    }

    #[test]
    fn test_unit_serde() {
        let json = serde_json::to_string(&Unit::Inches).unwrap();
        assert_eq!(json, "\"inches\"");
    }

    #[test]
    fn test_dimensions_display() {
        let dims = Dimensions::new(40.0, 30.0, Unit::Cm);
        assert_eq!(dims.to_string(), "40 x 30 cm");
    }
}
