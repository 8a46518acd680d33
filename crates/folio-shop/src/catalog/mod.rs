//! Product catalog module.
//!
//! Contains the product/category types and the filter + sort + page
//! derivation that feeds the catalog grid.

mod product;
mod seed;
mod view;

pub use product::{Catalog, Category, Product};
pub use seed::seed_catalog;
pub use view::{CatalogView, CategoryFilter, FilterState, SortKey};
