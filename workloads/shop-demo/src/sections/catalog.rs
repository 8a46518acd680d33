//! Catalog grid section.

use folio_shop::prelude::*;

use super::{html_escape, render_stars, shop_href};
use crate::data::format_cart_param;

/// Render the product grid for the current page of the derived view.
pub fn render_catalog(
    view: &CatalogView,
    state: &FilterState,
    cart: &Cart,
) -> String {
    if view.is_empty() {
        return r#"<section class="shop-catalog shop-catalog--empty" data-section="catalog">
    <p>No products match this filter.</p>
</section>"#
            .to_string();
    }

    let cards: String = view
        .items
        .iter()
        .map(|p| render_card(p, state, cart))
        .collect();

    let range = format!(
        "Showing {}-{} of {}",
        view.pagination.start_item(),
        view.pagination.end_item(),
        view.pagination.total
    );

    format!(
        r#"<section class="shop-catalog" data-section="catalog">
    <p class="catalog-range">{range}</p>
    <div class="catalog-grid">
{cards}    </div>
</section>"#
    )
}

fn render_card(product: &Product, state: &FilterState, cart: &Cart) -> String {
    let currency = state.currency;
    let price = currency.display(product.price);

    let original = match product.original_price {
        Some(op) if product.is_on_sale() => format!(
            r#"<span class="price-original">{}</span>"#,
            currency.display(op)
        ),
        _ => String::new(),
    };

    let mut badges = String::new();
    if product.is_new {
        badges.push_str(r#"<span class="badge badge-new">NEW</span>"#);
    }
    if product.is_bestseller {
        badges.push_str(r#"<span class="badge badge-bestseller">BESTSELLER</span>"#);
    }

    let features: String = product
        .features
        .iter()
        .map(|f| format!("<li>{}</li>", html_escape(f)))
        .collect();

    // Adding to the cart is a link to the same page with the cart parameter
    // grown by one unit of this product.
    let mut next_cart = cart.clone();
    next_cart.add(product);
    let add_href = shop_href(state, &format_cart_param(&next_cart));

    let stock = if product.is_available() {
        format!(r#"<span class="stock">{} in stock</span>"#, product.in_stock)
    } else {
        r#"<span class="stock stock-out">Out of stock</span>"#.to_string()
    };

    format!(
        r#"        <article class="product-card">
            <div class="card-badges">{badges}</div>
            <h3>{name}</h3>
            <p class="card-description">{description}</p>
            <ul class="card-features">{features}</ul>
            <p class="card-rating">{stars} <span class="review-count">({reviews})</span></p>
            <p class="card-price">{price} {original}</p>
            {stock}
            <a class="btn-add" href="{add_href}">Add to Cart</a>
        </article>
"#,
        badges = badges,
        name = html_escape(&product.name),
        description = html_escape(&product.description),
        features = features,
        stars = render_stars(product.rating),
        reviews = product.reviews,
        price = price,
        original = original,
        stock = stock,
        add_href = add_href,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed_catalog;

    #[test]
    fn test_grid_renders_page_items() {
        let catalog = seed_catalog();
        let state = FilterState::default();
        let view = CatalogView::derive(catalog.all(), &state);

        let html = render_catalog(&view, &state, &Cart::new());
        assert!(html.contains("Showing 1-12 of 14"));
        assert!(html.contains("Aurora ANC Headphones"));
        assert!(html.contains("BESTSELLER"));
    }

    #[test]
    fn test_add_link_grows_cart() {
        let catalog = seed_catalog();
        let state = FilterState::default();
        let view = CatalogView::derive(catalog.all(), &state);

        let mut cart = Cart::new();
        cart.add(catalog.find(1).unwrap());

        let html = render_catalog(&view, &state, &cart);
        assert!(html.contains("cart=1:2"));
    }

    #[test]
    fn test_prices_render_in_selected_currency() {
        let catalog = seed_catalog();
        let mut state = FilterState::default();
        state.set_currency(Currency::Usd);
        let view = CatalogView::derive(catalog.all(), &state);

        let html = render_catalog(&view, &state, &Cart::new());
        // 7999 INR at the demo rate.
        assert!(html.contains("$96"));
    }

    #[test]
    fn test_empty_filter_result() {
        let state = FilterState::default();
        let view = CatalogView::derive(&[], &state);
        let html = render_catalog(&view, &state, &Cart::new());
        assert!(html.contains("No products match"));
    }
}
