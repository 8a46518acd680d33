//! Domain types and logic for the Folio e-commerce demo page.
//!
//! This crate holds everything the shop demo needs that is not rendering:
//!
//! - **Catalog**: products, categories, filtering, stable sorting
//! - **Cart**: quantity-aggregated lines, GST pricing
//! - **Paging**: fixed-size pages over the derived catalog view
//! - **Currency**: display-currency conversion and formatting
//!
//! Prices are whole INR units; display currencies are derived via static
//! demo rates at render time only. Cart totals are always computed in base
//! units, so switching the display currency never changes them.
//!
//! # Example
//!
//! ```rust,ignore
//! use folio_shop::prelude::*;
//!
//! let catalog = seed_catalog();
//! let mut state = FilterState::default();
//! state.set_category(CategoryFilter::Only(Category::Electronics));
//!
//! let view = CatalogView::derive(catalog.all(), &state);
//! let mut cart = Cart::new();
//! cart.add(view.items.first().unwrap());
//!
//! let pricing = cart.pricing();
//! println!("{}", state.currency.display(pricing.grand_total));
//! ```

pub mod error;
pub mod currency;
pub mod paging;

pub mod catalog;
pub mod cart;

pub use error::ShopError;
pub use currency::Currency;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::ShopError;
    pub use crate::currency::Currency;

    // Catalog
    pub use crate::catalog::{
        seed_catalog, Catalog, Category, CategoryFilter, CatalogView, FilterState, Product,
        SortKey,
    };

    // Cart
    pub use crate::cart::{Cart, CartLine, CartPricing, GST_RATE};

    // Paging
    pub use crate::paging::{Pagination, PAGE_SIZE};
}
