//! Catalog view derivation: filter, sort, page.
//!
//! The view is recomputed from the full product list on every filter change;
//! nothing is cached between derivations.

use crate::catalog::{Category, Product};
use crate::currency::Currency;
use crate::error::ShopError;
use crate::paging::{Pagination, PAGE_SIZE};
use serde::{Deserialize, Serialize};

/// Category selection for the catalog grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// Keep every product.
    #[default]
    All,
    /// Keep only products in one category.
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(cat) => product.category == *cat,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(cat) => cat.as_str(),
        }
    }

    pub fn from_str(s: &str) -> Result<Self, ShopError> {
        if s.eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            Category::from_str(s).map(CategoryFilter::Only)
        }
    }
}

/// Sort keys for the catalog grid.
///
/// Every key is a stable comparator sort: products with equal keys keep
/// their catalog order, and sorting never drops items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Bestsellers first, catalog order otherwise.
    #[default]
    Featured,
    /// Price, low to high.
    PriceLow,
    /// Price, high to low.
    PriceHigh,
    /// Rating, high to low.
    Rating,
    /// Newly added first.
    Newest,
}

impl SortKey {
    /// All sort keys, in selector order.
    pub const ALL: [SortKey; 5] = [
        SortKey::Featured,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Rating,
        SortKey::Newest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Rating => "rating",
            SortKey::Newest => "newest",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Rating => "Highest Rated",
            SortKey::Newest => "Newest",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, ShopError> {
        match s.to_lowercase().as_str() {
            "featured" => Ok(SortKey::Featured),
            "price-low" => Ok(SortKey::PriceLow),
            "price-high" => Ok(SortKey::PriceHigh),
            "rating" => Ok(SortKey::Rating),
            "newest" => Ok(SortKey::Newest),
            _ => Err(ShopError::UnknownSortKey(s.to_string())),
        }
    }

    /// Apply this sort to a view, in place. `Vec::sort_by` is stable, which
    /// is what keeps equal-key products in catalog order.
    pub fn apply(&self, view: &mut Vec<Product>) {
        match self {
            SortKey::Featured => view.sort_by_key(|p| !p.is_bestseller),
            SortKey::PriceLow => view.sort_by_key(|p| p.price),
            SortKey::PriceHigh => view.sort_by(|a, b| b.price.cmp(&a.price)),
            SortKey::Rating => view.sort_by(|a, b| {
                b.rating
                    .partial_cmp(&a.rating)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            SortKey::Newest => view.sort_by_key(|p| !p.is_new),
        }
    }
}

/// The grid's filter state: category, sort, page, display currency.
///
/// Reset to defaults on mount. Changing the category or sort key resets the
/// page to 1 so a shrunken result set can't strand the user on a page that
/// no longer exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub sort: SortKey,
    /// Current page, 1-indexed.
    pub page: i64,
    pub currency: Currency,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            sort: SortKey::Featured,
            page: 1,
            currency: Currency::Inr,
        }
    }
}

impl FilterState {
    /// Select a category and return to the first page.
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
        self.page = 1;
    }

    /// Select a sort key and return to the first page.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.page = 1;
    }

    /// Request a page. Values below 1 are clamped here; the upper bound is
    /// clamped against the derived view's page count.
    pub fn set_page(&mut self, page: i64) {
        self.page = page.max(1);
    }

    /// Switch the display currency. Affects formatting only.
    pub fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
    }
}

/// One derived, ready-to-render page of the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogView {
    /// Products on the current page, filtered and sorted.
    pub items: Vec<Product>,
    /// Pagination over the whole filtered set.
    pub pagination: Pagination,
}

impl CatalogView {
    /// Derive the view for a filter state: filter, stable-sort, page.
    pub fn derive(products: &[Product], state: &FilterState) -> Self {
        let mut matched: Vec<Product> = products
            .iter()
            .filter(|p| state.category.matches(p))
            .cloned()
            .collect();

        state.sort.apply(&mut matched);

        let pagination = Pagination::new(state.page, PAGE_SIZE, matched.len() as i64);
        let start = pagination.offset() as usize;
        let end = (start + pagination.per_page as usize).min(matched.len());
        let items = matched[start..end].to_vec();

        Self { items, pagination }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, category: Category, price: i64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            price,
            original_price: None,
            rating: 4.0,
            reviews: 10,
            category,
            description: String::new(),
            features: vec![],
            in_stock: 5,
            is_new: false,
            is_bestseller: false,
        }
    }

    fn mixed_catalog() -> Vec<Product> {
        vec![
            product(1, Category::Electronics, 500),
            product(2, Category::Fashion, 300),
            product(3, Category::Electronics, 100),
            product(4, Category::Books, 400),
            product(5, Category::Electronics, 200),
        ]
    }

    #[test]
    fn test_filter_by_category() {
        let products = mixed_catalog();
        let state = FilterState {
            category: CategoryFilter::Only(Category::Electronics),
            ..Default::default()
        };
        let view = CatalogView::derive(&products, &state);

        assert_eq!(view.len(), 3);
        assert!(view.items.iter().all(|p| p.category == Category::Electronics));
    }

    #[test]
    fn test_filter_all_keeps_everything() {
        let products = mixed_catalog();
        let view = CatalogView::derive(&products, &FilterState::default());
        assert_eq!(view.len(), products.len());
    }

    #[test]
    fn test_sort_never_drops_items() {
        let products = mixed_catalog();
        for sort in SortKey::ALL {
            let mut view = products.clone();
            sort.apply(&mut view);
            assert_eq!(view.len(), products.len());
        }
    }

    #[test]
    fn test_price_sorts() {
        let mut view = mixed_catalog();
        SortKey::PriceLow.apply(&mut view);
        let prices: Vec<i64> = view.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![100, 200, 300, 400, 500]);

        SortKey::PriceHigh.apply(&mut view);
        let prices: Vec<i64> = view.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![500, 400, 300, 200, 100]);
    }

    #[test]
    fn test_featured_is_stable() {
        let mut products = mixed_catalog();
        products[3].is_bestseller = true; // id 4

        let mut view = products.clone();
        SortKey::Featured.apply(&mut view);

        assert_eq!(view[0].id, 4);
        // The rest keep catalog order.
        let rest: Vec<u32> = view[1..].iter().map(|p| p.id).collect();
        assert_eq!(rest, vec![1, 2, 3, 5]);
    }

    #[test]
    fn test_newest_first() {
        let mut products = mixed_catalog();
        products[1].is_new = true; // id 2
        products[4].is_new = true; // id 5

        let mut view = products.clone();
        SortKey::Newest.apply(&mut view);

        let front: Vec<u32> = view[..2].iter().map(|p| p.id).collect();
        assert_eq!(front, vec![2, 5]);
    }

    #[test]
    fn test_rating_descending_stable() {
        let mut products = mixed_catalog();
        products[0].rating = 3.0; // id 1
        products[2].rating = 4.8; // id 3

        let mut view = products.clone();
        SortKey::Rating.apply(&mut view);

        assert_eq!(view[0].id, 3);
        assert_eq!(view.last().unwrap().id, 1);
        // Equal 4.0 ratings keep catalog order.
        let middle: Vec<u32> = view[1..4].iter().map(|p| p.id).collect();
        assert_eq!(middle, vec![2, 4, 5]);
    }

    #[test]
    fn test_fourteen_products_page_two() {
        let products: Vec<Product> = (1..=14)
            .map(|id| product(id, Category::Electronics, id as i64 * 10))
            .collect();

        let state = FilterState {
            page: 2,
            ..Default::default()
        };
        let view = CatalogView::derive(&products, &state);

        assert_eq!(view.pagination.total_pages, 2);
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn test_out_of_range_page_clamped() {
        let products = mixed_catalog();
        let state = FilterState {
            page: 40,
            ..Default::default()
        };
        let view = CatalogView::derive(&products, &state);

        assert_eq!(view.pagination.page, 1);
        assert_eq!(view.len(), 5);
    }

    #[test]
    fn test_category_change_resets_page() {
        let mut state = FilterState {
            page: 3,
            ..Default::default()
        };
        state.set_category(CategoryFilter::Only(Category::Books));
        assert_eq!(state.page, 1);

        state.set_page(2);
        state.set_sort(SortKey::Rating);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_currency_change_keeps_page() {
        let mut state = FilterState {
            page: 2,
            ..Default::default()
        };
        state.set_currency(Currency::Usd);
        assert_eq!(state.page, 2);
    }
}
