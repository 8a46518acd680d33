//! Shopping cart module.
//!
//! Contains the cart, its lines, and the GST pricing breakdown.

mod cart;
mod pricing;

pub use cart::{Cart, CartLine};
pub use pricing::{CartPricing, GST_RATE};
