//! Cart and cart line types.

use crate::cart::CartPricing;
use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// One entry in the cart, uniquely keyed by product id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Snapshot of the product at the time it was added.
    pub product: Product,
    /// Quantity, always >= 1 while the line exists.
    pub quantity: u32,
}

impl CartLine {
    /// Line total in base-currency units.
    pub fn line_total(&self) -> i64 {
        self.product.price * self.quantity as i64
    }
}

/// The shopping cart.
///
/// Invariant: at most one line per product id. In-memory only, tied to the
/// owning component's lifetime; reloading the page loses it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product. If the product is already in the cart the
    /// line's quantity is incremented; otherwise a new line is appended.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine {
                product: product.clone(),
                quantity: 1,
            });
        }
    }

    /// Replace a line's quantity. Zero removes the line. Returns whether the
    /// cart changed.
    pub fn set_quantity(&mut self, product_id: u32, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove(product_id);
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = quantity;
            true
        } else {
            false
        }
    }

    /// Remove a line entirely. Returns whether a line was removed.
    pub fn remove(&mut self, product_id: u32) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| l.product.id != product_id);
        self.lines.len() < len_before
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// All lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a product, if present.
    pub fn get(&self, product_id: u32) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    /// Sum of `price * quantity` over all lines, in base-currency units.
    /// Independent of the selected display currency.
    pub fn subtotal(&self) -> i64 {
        self.lines.iter().map(|l| l.line_total()).sum()
    }

    /// Total item count (sum of quantities, not line count).
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Number of distinct products.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Full pricing breakdown (subtotal, GST, shipping, grand total).
    pub fn pricing(&self) -> CartPricing {
        CartPricing::for_subtotal(self.subtotal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn product(id: u32, price: i64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            price,
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
    fn test_add_twice_aggregates() {
        let mut cart = Cart::new();
        let p = product(1, 100);

        cart.add(&p);
        cart.add(&p);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.get(1).unwrap().quantity, 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_distinct_products_get_distinct_lines() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100));
        cart.add(&product(2, 50));

        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_set_quantity_replaces() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100));

        assert!(cart.set_quantity(1, 5));
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100));

        assert!(cart.set_quantity(1, 0));
        assert!(cart.get(1).is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_unknown_product() {
        let mut cart = Cart::new();
        assert!(!cart.set_quantity(7, 3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_subtotal() {
        let mut cart = Cart::new();
        let a = product(1, 100);
        cart.add(&a);
        cart.add(&a);
        cart.add(&product(2, 50));

        // A(100) x 2 + B(50) x 1
        assert_eq!(cart.subtotal(), 250);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), 0);
    }
}
