//! Cart panel section.

use folio_shop::prelude::*;

use super::{html_escape, shop_href};
use crate::data::format_cart_param;

/// Render the cart panel: lines with quantity steppers, then the pricing
/// breakdown. All amounts are converted to the display currency at render
/// time only.
pub fn render_cart(cart: &Cart, state: &FilterState) -> String {
    if cart.is_empty() {
        return r#"<aside class="shop-cart shop-cart--empty" data-section="cart">
    <h2>Cart</h2>
    <p>Your cart is empty.</p>
</aside>"#
            .to_string();
    }

    let currency = state.currency;
    let lines: String = cart
        .lines()
        .iter()
        .map(|line| render_line(line, cart, state))
        .collect();

    let pricing = cart.pricing();

    format!(
        r#"<aside class="shop-cart" data-section="cart">
    <h2>Cart <span class="cart-count">({count} items)</span></h2>
    <div class="cart-lines">
{lines}    </div>
    <dl class="cart-totals">
        <dt>Subtotal</dt><dd>{subtotal}</dd>
        <dt>GST (18%)</dt><dd>{gst}</dd>
        <dt>Shipping</dt><dd class="free">Free</dd>
        <dt class="grand">Total</dt><dd class="grand">{total}</dd>
    </dl>
</aside>"#,
        count = cart.item_count(),
        lines = lines,
        subtotal = currency.display(pricing.subtotal),
        gst = currency.display(pricing.gst),
        total = currency.display(pricing.grand_total),
    )
}

fn render_line(line: &CartLine, cart: &Cart, state: &FilterState) -> String {
    let id = line.product.id;
    let currency = state.currency;

    // Each stepper control is a link to this page with the line's quantity
    // replaced; zero removes the line.
    let mut dec = cart.clone();
    dec.set_quantity(id, line.quantity - 1);
    let dec_href = shop_href(state, &format_cart_param(&dec));

    let mut inc = cart.clone();
    inc.set_quantity(id, line.quantity + 1);
    let inc_href = shop_href(state, &format_cart_param(&inc));

    let mut removed = cart.clone();
    removed.remove(id);
    let remove_href = shop_href(state, &format_cart_param(&removed));

    format!(
        r#"        <div class="cart-line">
            <span class="line-name">{name}</span>
            <span class="line-qty">
                <a class="qty-btn" href="{dec_href}">&minus;</a>
                {qty}
                <a class="qty-btn" href="{inc_href}">+</a>
            </span>
            <span class="line-total">{total}</span>
            <a class="line-remove" href="{remove_href}">Remove</a>
        </div>
"#,
        name = html_escape(&line.product.name),
        dec_href = dec_href,
        qty = line.quantity,
        inc_href = inc_href,
        total = currency.display(line.line_total()),
        remove_href = remove_href,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed_catalog;

    #[test]
    fn test_empty_cart_panel() {
        let html = render_cart(&Cart::new(), &FilterState::default());
        assert!(html.contains("Your cart is empty"));
    }

    #[test]
    fn test_totals_rows() {
        let catalog = seed_catalog();
        let mut cart = Cart::new();
        // 7999 x 2 + 899 = 16897; GST 3041; total 19938.
        let p1 = catalog.find(1).unwrap();
        cart.add(p1);
        cart.add(p1);
        cart.add(catalog.find(5).unwrap());

        let html = render_cart(&cart, &FilterState::default());
        assert!(html.contains("(3 items)"));
        assert!(html.contains("\u{20b9}16,897"));
        assert!(html.contains("\u{20b9}3,041"));
        assert!(html.contains("\u{20b9}19,938"));
        assert!(html.contains("Free"));
    }

    #[test]
    fn test_decrement_to_zero_removes_line() {
        let catalog = seed_catalog();
        let mut cart = Cart::new();
        cart.add(catalog.find(5).unwrap());

        let html = render_cart(&cart, &FilterState::default());
        // Quantity 1 decremented: the minus link carries no cart parameter.
        assert!(html.contains(r#"qty-btn" href="/demos/shop">&minus;"#));
        // Increment goes to 2.
        assert!(html.contains("cart=5:2"));
    }
}
