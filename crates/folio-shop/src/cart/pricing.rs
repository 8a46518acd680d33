//! Cart pricing breakdown.

use crate::currency::Currency;
use serde::{Deserialize, Serialize};

/// Fixed GST surcharge applied to the cart subtotal. Not configurable.
pub const GST_RATE: f64 = 0.18;

/// Pricing breakdown for a cart, in base-currency units.
///
/// GST is computed once on the subtotal, so `grand_total` always equals
/// `subtotal + gst` exactly. Shipping is always free in the demo.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartPricing {
    /// Sum of line totals before the surcharge.
    pub subtotal: i64,
    /// `round(subtotal * 0.18)`.
    pub gst: i64,
    /// Always zero.
    pub shipping: i64,
    /// `subtotal + gst`.
    pub grand_total: i64,
}

impl CartPricing {
    /// Build the breakdown for a subtotal.
    pub fn for_subtotal(subtotal: i64) -> Self {
        let gst = (subtotal as f64 * GST_RATE).round() as i64;
        Self {
            subtotal,
            gst,
            shipping: 0,
            grand_total: subtotal + gst,
        }
    }

    /// Format one row of the breakdown in a display currency.
    pub fn display_row(&self, amount: i64, currency: Currency) -> String {
        currency.display(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gst_scenario() {
        // Subtotal 250 -> 18% GST -> displayed total 295.
        let pricing = CartPricing::for_subtotal(250);
        assert_eq!(pricing.gst, 45);
        assert_eq!(pricing.shipping, 0);
        assert_eq!(pricing.grand_total, 295);
    }

    #[test]
    fn test_gst_rounds_half_up() {
        // 18% of 30 is 5.4 -> 5; 18% of 25 is 4.5 -> rounds away from zero.
        assert_eq!(CartPricing::for_subtotal(30).gst, 5);
        assert_eq!(CartPricing::for_subtotal(25).gst, 5);
    }

    #[test]
    fn test_empty_cart_totals() {
        let pricing = CartPricing::for_subtotal(0);
        assert_eq!(pricing.grand_total, 0);
    }

    #[test]
    fn test_display_currency_does_not_change_base_total() {
        let pricing = CartPricing::for_subtotal(250);
        // Formatting in another currency converts for display only.
        assert_eq!(pricing.display_row(pricing.grand_total, Currency::Inr), "\u{20b9}295");
        assert_eq!(pricing.display_row(pricing.grand_total, Currency::Usd), "$4");
        // The base-currency breakdown is untouched.
        assert_eq!(pricing.grand_total, 295);
    }
}
