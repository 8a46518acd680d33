//! Product and category types.

use crate::error::ShopError;
use serde::{Deserialize, Serialize};

/// Product category. A closed label set; the demo catalog has no category
/// hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Fashion,
    HomeKitchen,
    Sports,
    Books,
    Accessories,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 6] = [
        Category::Electronics,
        Category::Fashion,
        Category::HomeKitchen,
        Category::Sports,
        Category::Books,
        Category::Accessories,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Fashion => "fashion",
            Category::HomeKitchen => "home-kitchen",
            Category::Sports => "sports",
            Category::Books => "books",
            Category::Accessories => "accessories",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Fashion => "Fashion",
            Category::HomeKitchen => "Home & Kitchen",
            Category::Sports => "Sports",
            Category::Books => "Books",
            Category::Accessories => "Accessories",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, ShopError> {
        match s.to_lowercase().as_str() {
            "electronics" => Ok(Category::Electronics),
            "fashion" => Ok(Category::Fashion),
            "home-kitchen" => Ok(Category::HomeKitchen),
            "sports" => Ok(Category::Sports),
            "books" => Ok(Category::Books),
            "accessories" => Ok(Category::Accessories),
            _ => Err(ShopError::UnknownCategory(s.to_string())),
        }
    }
}

/// A product in the demo catalog.
///
/// Immutable for the session: products are constructed once at load and
/// never mutated afterwards. Prices are whole INR units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: u32,
    /// Product name.
    pub name: String,
    /// Price in whole base-currency units.
    pub price: i64,
    /// Pre-discount price, when the product is on sale.
    pub original_price: Option<i64>,
    /// Average rating, 0.0 to 5.0.
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub reviews: u32,
    /// Category label.
    pub category: Category,
    /// Short description for the card.
    pub description: String,
    /// Ordered feature bullet points.
    pub features: Vec<String>,
    /// Units in stock.
    pub in_stock: u32,
    /// Newly added to the catalog.
    pub is_new: bool,
    /// Featured as a bestseller.
    pub is_bestseller: bool,
}

impl Product {
    /// Check if the product is on sale (has a higher original price).
    pub fn is_on_sale(&self) -> bool {
        self.original_price.map(|op| op > self.price).unwrap_or(false)
    }

    /// Discount percentage when on sale.
    pub fn discount_percentage(&self) -> Option<f64> {
        self.original_price.and_then(|op| {
            if op > self.price {
                Some(((op - self.price) as f64 / op as f64) * 100.0)
            } else {
                None
            }
        })
    }

    /// Check if the product can be added to a cart.
    pub fn is_available(&self) -> bool {
        self.in_stock > 0
    }
}

/// The full product list for the session.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from a product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All products, in load order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn find(&self, id: u32) -> Result<&Product, ShopError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(ShopError::ProductNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            price: 1000,
            original_price: None,
            rating: 4.0,
            reviews: 10,
            category: Category::Electronics,
            description: String::new(),
            features: vec![],
            in_stock: 5,
            is_new: false,
            is_bestseller: false,
        }
    }

    #[test]
    fn test_on_sale() {
        let mut p = product(1);
        assert!(!p.is_on_sale());

        p.original_price = Some(1500);
        assert!(p.is_on_sale());
        let discount = p.discount_percentage().unwrap();
        assert!((discount - 33.33).abs() < 0.1);

        // Equal original price is not a sale.
        p.original_price = Some(1000);
        assert!(!p.is_on_sale());
        assert!(p.discount_percentage().is_none());
    }

    #[test]
    fn test_catalog_find() {
        let catalog = Catalog::new(vec![product(1), product(2)]);
        assert_eq!(catalog.find(2).unwrap().id, 2);
        assert!(catalog.find(99).is_err());
    }

    #[test]
    fn test_category_round_trip() {
        for cat in Category::ALL {
            assert_eq!(Category::from_str(cat.as_str()).unwrap(), cat);
        }
        assert!(Category::from_str("toys").is_err());
    }
}
