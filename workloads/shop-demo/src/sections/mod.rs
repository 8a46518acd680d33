//! Section renderers for the shop demo.

mod cart;
mod catalog;
mod filters;
mod pager;

pub use cart::*;
pub use catalog::*;
pub use filters::*;
pub use pager::*;

use folio_shop::prelude::*;

/// Build a shop URL carrying the full filter state and cart.
///
/// Defaults are omitted so the landing URL stays clean.
pub fn shop_href(state: &FilterState, cart_param: &str) -> String {
    let mut params: Vec<String> = Vec::new();

    if state.category != CategoryFilter::All {
        params.push(format!("category={}", state.category.as_str()));
    }
    if state.sort != SortKey::Featured {
        params.push(format!("sort={}", state.sort.as_str()));
    }
    if state.page > 1 {
        params.push(format!("page={}", state.page));
    }
    if state.currency != Currency::Inr {
        params.push(format!("currency={}", state.currency.code().to_lowercase()));
    }
    if !cart_param.is_empty() {
        params.push(format!("cart={}", cart_param));
    }

    if params.is_empty() {
        "/demos/shop".to_string()
    } else {
        format!("/demos/shop?{}", params.join("&"))
    }
}

/// Escape text destined for HTML content.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render a 0-5 rating as star glyphs.
pub fn render_stars(rating: f32) -> String {
    let full = rating.floor() as usize;
    let half = (rating - rating.floor()) >= 0.5;
    let empty = 5 - full - usize::from(half);

    let mut out = String::new();
    out.push_str(&"\u{2605}".repeat(full));
    if half {
        out.push('\u{2bea}');
    }
    out.push_str(&"\u{2606}".repeat(empty));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_clean_url() {
        assert_eq!(shop_href(&FilterState::default(), ""), "/demos/shop");
    }

    #[test]
    fn test_href_carries_state() {
        let mut state = FilterState::default();
        state.set_category(CategoryFilter::Only(Category::Books));
        state.set_page(2);
        state.set_currency(Currency::Usd);

        let href = shop_href(&state, "1:2");
        assert!(href.contains("category=books"));
        assert!(href.contains("page=2"));
        assert!(href.contains("currency=usd"));
        assert!(href.contains("cart=1:2"));
    }

    #[test]
    fn test_stars() {
        assert_eq!(render_stars(5.0), "\u{2605}\u{2605}\u{2605}\u{2605}\u{2605}");
        assert_eq!(render_stars(0.0), "\u{2606}\u{2606}\u{2606}\u{2606}\u{2606}");
        assert_eq!(render_stars(4.6).chars().count(), 5);
    }
}
