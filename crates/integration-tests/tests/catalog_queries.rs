//! Cross-component scenarios: catalog store output flowing through the
//! search engine, the way the listing routes consume it.

use aquarelle_core::{ArtworkCategory, Price, Role, UserId};
use aquarelle_marketplace::catalog::{CatalogStore, MemoryCatalog};
use aquarelle_marketplace::models::{Artwork, NewArtwork};
use aquarelle_marketplace::search::{ArtworkQuery, PriceRange, SortKey, filter_artworks};
use aquarelle_marketplace::services::auth::{AuthService, RegisterData};

fn ids(artworks: &[Artwork]) -> Vec<&str> {
    artworks.iter().map(|a| a.id.as_str()).collect()
}

#[tokio::test]
async fn newest_sort_orders_seeded_artworks_by_recency() {
    let catalog = MemoryCatalog::with_sample_data();
    let all = catalog.list_artworks().await.expect("catalog never fails");

    // The seed staggers creation times so artwork4 is the most recent
    let sorted = filter_artworks(
        &all,
        &ArtworkQuery {
            sort: SortKey::Newest,
            ..ArtworkQuery::default()
        },
    );
    assert_eq!(ids(&sorted), ["artwork4", "artwork3", "artwork2", "artwork1"]);
}

#[tokio::test]
async fn newest_sort_puts_later_artwork_first() {
    let catalog = MemoryCatalog::with_sample_data();
    let all = catalog.list_artworks().await.expect("catalog never fails");

    // artwork1: price 350, landscape, older; artwork3: price 450, abstract, newer
    let pair: Vec<Artwork> = all
        .into_iter()
        .filter(|a| a.id.as_str() == "artwork1" || a.id.as_str() == "artwork3")
        .collect();

    let sorted = filter_artworks(
        &pair,
        &ArtworkQuery {
            sort: SortKey::Newest,
            ..ArtworkQuery::default()
        },
    );
    assert_eq!(ids(&sorted), ["artwork3", "artwork1"]);

    let bracketed = filter_artworks(
        &pair,
        &ArtworkQuery {
            price_range: Some(PriceRange::new(Price::ZERO, Price::from_dollars(400))),
            ..ArtworkQuery::default()
        },
    );
    assert_eq!(ids(&bracketed), ["artwork1"]);
}

#[tokio::test]
async fn text_and_category_filters_compose() {
    let catalog = MemoryCatalog::with_sample_data();
    let all = catalog.list_artworks().await.expect("catalog never fails");

    // "emma" matches the artist name on both of Emma's pieces; the category
    // filter then narrows to the floral one.
    let filtered = filter_artworks(
        &all,
        &ArtworkQuery {
            text: "EMMA".to_owned(),
            categories: vec![ArtworkCategory::Floral],
            ..ArtworkQuery::default()
        },
    );
    assert_eq!(ids(&filtered), ["artwork2"]);
}

#[tokio::test]
async fn featured_listing_is_a_subset_of_the_catalog() {
    let catalog = MemoryCatalog::with_sample_data();
    let all = catalog.list_artworks().await.expect("catalog never fails");
    let featured = catalog
        .list_featured_artworks()
        .await
        .expect("catalog never fails");

    assert!(featured.len() < all.len());
    for artwork in &featured {
        assert!(artwork.featured);
        assert!(all.iter().any(|a| a.id == artwork.id));
    }
}

#[tokio::test]
async fn newly_registered_artist_listing_shows_up_in_search() {
    let catalog = MemoryCatalog::with_sample_data();
    let auth = AuthService::new(&catalog);

    let artist = auth
        .register(RegisterData {
            email: "iris.blue@example.com".to_owned(),
            password: "abcdef".to_owned(),
            name: "Iris Blue".to_owned(),
            role: Role::Artist,
        })
        .await
        .expect("registration succeeds");

    catalog
        .create_artwork(NewArtwork {
            artist_id: artist.id.clone(),
            artist_name: artist.name.clone(),
            title: "Indigo Tide".to_owned(),
            description: "Layered washes of deep blue".to_owned(),
            price: Price::from_dollars(310),
            images: Vec::new(),
            category: ArtworkCategory::Seascape,
            style: "Abstract".to_owned(),
            medium: "Watercolor on paper".to_owned(),
            dimensions: aquarelle_core::Dimensions::default(),
            availability: aquarelle_core::Availability::Available,
            tags: vec!["indigo".to_owned()],
            featured: false,
        })
        .await
        .expect("creation succeeds");

    let all = catalog.list_artworks().await.expect("catalog never fails");
    let found = filter_artworks(
        &all,
        &ArtworkQuery {
            text: "iris blue".to_owned(),
            ..ArtworkQuery::default()
        },
    );
    assert_eq!(found.len(), 1);
    assert_eq!(found.first().map(|a| a.title.as_str()), Some("Indigo Tide"));

    let by_artist = catalog
        .list_artworks_by_artist(&artist.id)
        .await
        .expect("catalog never fails");
    assert_eq!(by_artist.len(), 1);
}

#[tokio::test]
async fn unknown_artist_listing_is_empty_not_an_error() {
    let catalog = MemoryCatalog::with_sample_data();
    let artworks = catalog
        .list_artworks_by_artist(&UserId::new("artist999"))
        .await
        .expect("absence is not an error");
    assert!(artworks.is_empty());
}
