//! Seed catalog for the shop demo.
//!
//! Fourteen products, enough to exercise every category, both badge kinds,
//! and a second catalog page at the 12-per-page size. Shared by the streamed
//! demo workload and the site's reactive shop page, so both render the same
//! storefront.

use crate::catalog::{Catalog, Category, Product};

struct Seed {
    id: u32,
    name: &'static str,
    price: i64,
    original_price: Option<i64>,
    rating: f32,
    reviews: u32,
    category: Category,
    description: &'static str,
    features: &'static [&'static str],
    in_stock: u32,
    is_new: bool,
    is_bestseller: bool,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: 1,
        name: "Aurora ANC Headphones",
        price: 7999,
        original_price: Some(11999),
        rating: 4.6,
        reviews: 2841,
        category: Category::Electronics,
        description: "Over-ear wireless headphones with hybrid noise cancellation.",
        features: &["40h battery", "Hybrid ANC", "USB-C fast charge"],
        in_stock: 34,
        is_new: false,
        is_bestseller: true,
    },
    Seed {
        id: 2,
        name: "Pulse Fitness Band",
        price: 2499,
        original_price: None,
        rating: 4.2,
        reviews: 1203,
        category: Category::Electronics,
        description: "Slim fitness band with SpO2 and sleep tracking.",
        features: &["14-day battery", "5 ATM water resistance"],
        in_stock: 112,
        is_new: true,
        is_bestseller: false,
    },
    Seed {
        id: 3,
        name: "Handloom Cotton Kurta",
        price: 1299,
        original_price: Some(1799),
        rating: 4.4,
        reviews: 689,
        category: Category::Fashion,
        description: "Breathable handloom cotton kurta in indigo.",
        features: &["Pure cotton", "Natural dye"],
        in_stock: 58,
        is_new: false,
        is_bestseller: false,
    },
    Seed {
        id: 4,
        name: "Trailblazer Running Shoes",
        price: 3499,
        original_price: None,
        rating: 4.1,
        reviews: 954,
        category: Category::Sports,
        description: "Lightweight trail runners with a grippy outsole.",
        features: &["220g per shoe", "Reflective accents"],
        in_stock: 41,
        is_new: true,
        is_bestseller: false,
    },
    Seed {
        id: 5,
        name: "Masala Chai Gift Set",
        price: 899,
        original_price: None,
        rating: 4.8,
        reviews: 3310,
        category: Category::HomeKitchen,
        description: "Assam chai with whole spices and a brass strainer.",
        features: &["250g loose leaf", "Hand-ground spice mix"],
        in_stock: 203,
        is_new: false,
        is_bestseller: true,
    },
    Seed {
        id: 6,
        name: "Cast Iron Tawa",
        price: 1599,
        original_price: Some(1999),
        rating: 4.5,
        reviews: 1877,
        category: Category::HomeKitchen,
        description: "Pre-seasoned 28cm cast iron tawa.",
        features: &["Pre-seasoned", "Induction friendly"],
        in_stock: 77,
        is_new: false,
        is_bestseller: false,
    },
    Seed {
        id: 7,
        name: "The Midnight Library of Code",
        price: 499,
        original_price: None,
        rating: 4.3,
        reviews: 412,
        category: Category::Books,
        description: "Essays on software craft and the people behind it.",
        features: &["Paperback, 320 pages"],
        in_stock: 26,
        is_new: false,
        is_bestseller: false,
    },
    Seed {
        id: 8,
        name: "Systems Thinking Field Guide",
        price: 699,
        original_price: Some(999),
        rating: 4.7,
        reviews: 1530,
        category: Category::Books,
        description: "A practical tour of feedback loops and failure modes.",
        features: &["Hardcover", "Illustrated"],
        in_stock: 19,
        is_new: true,
        is_bestseller: true,
    },
    Seed {
        id: 9,
        name: "Canvas Messenger Bag",
        price: 1899,
        original_price: None,
        rating: 4.0,
        reviews: 536,
        category: Category::Accessories,
        description: "Water-repellent canvas bag with a padded 15\" sleeve.",
        features: &["Laptop sleeve", "Brass hardware"],
        in_stock: 63,
        is_new: false,
        is_bestseller: false,
    },
    Seed {
        id: 10,
        name: "Minimal Analog Watch",
        price: 4299,
        original_price: Some(5499),
        rating: 4.4,
        reviews: 821,
        category: Category::Accessories,
        description: "36mm case, sapphire glass, vegan leather strap.",
        features: &["Sapphire glass", "5 ATM"],
        in_stock: 22,
        is_new: false,
        is_bestseller: false,
    },
    Seed {
        id: 11,
        name: "Yoga Mat Pro",
        price: 1799,
        original_price: None,
        rating: 4.6,
        reviews: 2104,
        category: Category::Sports,
        description: "6mm natural rubber mat with alignment guides.",
        features: &["Natural rubber", "Carry strap included"],
        in_stock: 88,
        is_new: false,
        is_bestseller: true,
    },
    Seed {
        id: 12,
        name: "Linen Summer Shirt",
        price: 1599,
        original_price: None,
        rating: 3.9,
        reviews: 347,
        category: Category::Fashion,
        description: "Relaxed-fit linen shirt in sand.",
        features: &["100% linen"],
        in_stock: 49,
        is_new: true,
        is_bestseller: false,
    },
    Seed {
        id: 13,
        name: "Mechanical Keyboard 75%",
        price: 6499,
        original_price: Some(7999),
        rating: 4.5,
        reviews: 1684,
        category: Category::Electronics,
        description: "Hot-swappable 75% board with tactile switches.",
        features: &["Hot-swap sockets", "PBT keycaps", "Triple-mode wireless"],
        in_stock: 15,
        is_new: true,
        is_bestseller: false,
    },
    Seed {
        id: 14,
        name: "Steel Water Bottle 1L",
        price: 749,
        original_price: None,
        rating: 4.2,
        reviews: 978,
        category: Category::Sports,
        description: "Double-wall insulated bottle, 24h cold.",
        features: &["Leak-proof cap", "24h insulation"],
        in_stock: 134,
        is_new: false,
        is_bestseller: false,
    },
];

/// Build the in-memory catalog. Products are immutable for the session.
pub fn seed_catalog() -> Catalog {
    let products = SEEDS
        .iter()
        .map(|s| Product {
            id: s.id,
            name: s.name.to_string(),
            price: s.price,
            original_price: s.original_price,
            rating: s.rating,
            reviews: s.reviews,
            category: s.category,
            description: s.description.to_string(),
            features: s.features.iter().map(|f| f.to_string()).collect(),
            in_stock: s.in_stock,
            is_new: s.is_new,
            is_bestseller: s.is_bestseller,
        })
        .collect();
    Catalog::new(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogView, FilterState};

    #[test]
    fn test_seed_spans_two_pages() {
        let catalog = seed_catalog();
        assert_eq!(catalog.len(), 14);

        let view = CatalogView::derive(catalog.all(), &FilterState::default());
        assert_eq!(view.pagination.total_pages, 2);
    }

    #[test]
    fn test_seed_ids_unique() {
        let catalog = seed_catalog();
        let mut ids: Vec<u32> = catalog.all().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_every_category_represented() {
        let catalog = seed_catalog();
        for cat in Category::ALL {
            assert!(
                catalog.all().iter().any(|p| p.category == cat),
                "no product in {:?}",
                cat
            );
        }
    }
}
