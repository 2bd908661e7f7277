//! Marketplace listing route: the filter/sort surface of the catalog.
//!
//! Criteria travel in the URL so every filter state is a plain link:
//! `q` (free text), `category` (comma-separated slugs), `price` (bracket
//! key), and `sort`. The handler translates them into an [`ArtworkQuery`]
//! and precomputes toggle links for the sidebar.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::instrument;

use aquarelle_core::{ArtworkCategory, Price};

use crate::catalog::CatalogStore;
use crate::error::Result;
use crate::filters;
use crate::middleware::OptionalAuth;
use crate::models::{Artwork, User};
use crate::search::{ArtworkQuery, PriceRange, SortKey, filter_artworks};
use crate::state::AppState;

/// URL query parameters for the marketplace listing.
#[derive(Debug, Deserialize)]
pub struct MarketplaceParams {
    #[serde(default)]
    pub q: String,
    /// Comma-separated category slugs.
    #[serde(default)]
    pub category: String,
    /// Price bracket key (see [`PRICE_BRACKETS`]).
    pub price: Option<String>,
    #[serde(default)]
    pub sort: String,
}

/// A preset price bracket offered in the filter sidebar.
pub struct PriceBracket {
    pub key: &'static str,
    pub label: &'static str,
}

/// The brackets offered in the filter sidebar.
pub const PRICE_BRACKETS: [PriceBracket; 4] = [
    PriceBracket {
        key: "under-200",
        label: "Under $200",
    },
    PriceBracket {
        key: "200-500",
        label: "$200 - $500",
    },
    PriceBracket {
        key: "500-1000",
        label: "$500 - $1000",
    },
    PriceBracket {
        key: "over-1000",
        label: "Over $1000",
    },
];

/// Resolve a bracket key to its inclusive price range.
fn bracket_range(key: &str) -> Option<PriceRange> {
    match key {
        "under-200" => Some(PriceRange::new(Price::ZERO, Price::from_dollars(200))),
        "200-500" => Some(PriceRange::new(
            Price::from_dollars(200),
            Price::from_dollars(500),
        )),
        "500-1000" => Some(PriceRange::new(
            Price::from_dollars(500),
            Price::from_dollars(1000),
        )),
        "over-1000" => Some(PriceRange::at_least(Price::from_dollars(1000))),
        _ => None,
    }
}

/// Parse the comma-separated category parameter, dropping unknown slugs.
fn parse_categories(param: &str) -> Vec<ArtworkCategory> {
    param
        .split(',')
        .filter_map(|slug| slug.trim().parse().ok())
        .collect()
}

/// Build a listing URL for the given criteria, omitting defaults.
fn listing_href(
    q: &str,
    categories: &[ArtworkCategory],
    price: Option<&str>,
    sort: SortKey,
) -> String {
    let mut params: Vec<String> = Vec::new();

    if !q.trim().is_empty() {
        params.push(format!("q={}", urlencoding::encode(q)));
    }
    if !categories.is_empty() {
        let slugs: Vec<&str> = categories.iter().map(|c| c.as_str()).collect();
        params.push(format!("category={}", slugs.join(",")));
    }
    if let Some(price) = price {
        params.push(format!("price={price}"));
    }
    if sort != SortKey::Newest {
        params.push(format!("sort={}", sort.as_str()));
    }

    if params.is_empty() {
        "/marketplace".to_owned()
    } else {
        format!("/marketplace?{}", params.join("&"))
    }
}

/// A sidebar filter rendered as a toggle link.
pub struct FilterLink {
    pub label: String,
    pub href: String,
    pub active: bool,
}

/// An entry in the sort select.
pub struct SortOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Marketplace listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "marketplace/index.html")]
pub struct MarketplaceTemplate {
    pub user: Option<User>,
    /// Artworks matching the active criteria, in sorted order.
    pub artworks: Vec<Artwork>,
    /// Size of the unfiltered collection.
    pub total: usize,
    pub q: String,
    /// Current parameter values, echoed as hidden form inputs.
    pub category_param: String,
    pub price_param: String,
    pub sort_param: String,
    pub category_links: Vec<FilterLink>,
    pub bracket_links: Vec<FilterLink>,
    pub sort_options: Vec<SortOption>,
    /// Whether any filter is active (shows the clear-filters link).
    pub has_filters: bool,
}

/// Display the marketplace listing.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    Query(params): Query<MarketplaceParams>,
) -> Result<MarketplaceTemplate> {
    let all = state.catalog().list_artworks().await?;

    let selected_categories = parse_categories(&params.category);
    let selected_bracket = params
        .price
        .as_deref()
        .filter(|key| bracket_range(key).is_some());
    let sort = SortKey::parse(&params.sort);

    let criteria = ArtworkQuery {
        text: params.q.clone(),
        categories: selected_categories.clone(),
        price_range: selected_bracket.and_then(bracket_range),
        sort,
    };
    let artworks = filter_artworks(&all, &criteria);

    let category_links = ArtworkCategory::ALL
        .iter()
        .map(|category| {
            let active = selected_categories.contains(category);
            let toggled: Vec<ArtworkCategory> = if active {
                selected_categories
                    .iter()
                    .copied()
                    .filter(|c| c != category)
                    .collect()
            } else {
                let mut set = selected_categories.clone();
                set.push(*category);
                set
            };
            FilterLink {
                label: category.label().to_owned(),
                href: listing_href(&params.q, &toggled, selected_bracket, sort),
                active,
            }
        })
        .collect();

    let bracket_links = PRICE_BRACKETS
        .iter()
        .map(|bracket| {
            let active = selected_bracket == Some(bracket.key);
            let next = if active { None } else { Some(bracket.key) };
            FilterLink {
                label: bracket.label.to_owned(),
                href: listing_href(&params.q, &selected_categories, next, sort),
                active,
            }
        })
        .collect();

    let sort_options = SortKey::ALL
        .iter()
        .map(|key| SortOption {
            value: key.as_str(),
            label: key.label(),
            selected: *key == sort,
        })
        .collect();

    let has_filters =
        !params.q.trim().is_empty() || !selected_categories.is_empty() || selected_bracket.is_some();

    Ok(MarketplaceTemplate {
        user,
        artworks,
        total: all.len(),
        category_param: selected_categories
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(","),
        price_param: selected_bracket.unwrap_or_default().to_owned(),
        sort_param: sort.as_str().to_owned(),
        q: params.q,
        category_links,
        bracket_links,
        sort_options,
        has_filters,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_range_bounds() {
        let under = bracket_range("under-200").unwrap();
        assert!(under.contains(Price::ZERO));
        assert!(under.contains(Price::from_dollars(200)));
        assert!(!under.contains(Price::from_dollars(201)));

        let over = bracket_range("over-1000").unwrap();
        assert!(!over.contains(Price::from_dollars(999)));
        assert!(over.contains(Price::from_dollars(250_000)));

        assert!(bracket_range("bogus").is_none());
    }

    #[test]
    fn test_parse_categories_drops_unknown_slugs() {
        let parsed = parse_categories("landscape,abstract,bogus,still-life");
        assert_eq!(
            parsed,
            vec![
                ArtworkCategory::Landscape,
                ArtworkCategory::Abstract,
                ArtworkCategory::StillLife,
            ]
        );
        assert!(parse_categories("").is_empty());
    }

    #[test]
    fn test_listing_href_omits_defaults() {
        assert_eq!(listing_href("", &[], None, SortKey::Newest), "/marketplace");
        assert_eq!(
            listing_href("rose", &[], None, SortKey::Newest),
            "/marketplace?q=rose"
        );
        assert_eq!(
            listing_href(
                "",
                &[ArtworkCategory::Landscape, ArtworkCategory::Floral],
                Some("200-500"),
                SortKey::PriceAsc
            ),
            "/marketplace?category=landscape,floral&price=200-500&sort=price-asc"
        );
    }

    #[test]
    fn test_listing_href_encodes_query_text() {
        assert_eq!(
            listing_href("wild rose", &[], None, SortKey::Newest),
            "/marketplace?q=wild%20rose"
        );
    }
}
