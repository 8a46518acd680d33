//! Filters section - category chips, sort and currency selectors.

use folio_shop::prelude::*;

use super::{html_escape, shop_href};

/// Render the filter bar.
///
/// Every control is a link that re-derives the whole page; a category or
/// sort change also drops back to page 1 via `FilterState`.
pub fn render_filters(state: &FilterState, cart_param: &str) -> String {
    let mut chips = String::new();

    let mut all_state = *state;
    all_state.set_category(CategoryFilter::All);
    chips.push_str(&render_chip(
        "All",
        &shop_href(&all_state, cart_param),
        state.category == CategoryFilter::All,
    ));

    for cat in Category::ALL {
        let mut next = *state;
        next.set_category(CategoryFilter::Only(cat));
        chips.push_str(&render_chip(
            cat.display_name(),
            &shop_href(&next, cart_param),
            state.category == CategoryFilter::Only(cat),
        ));
    }

    let sort_options: String = SortKey::ALL
        .iter()
        .map(|sort| {
            let mut next = *state;
            next.set_sort(*sort);
            let selected = if state.sort == *sort { " class=\"active\"" } else { "" };
            format!(
                r#"<a href="{}"{}>{}</a>"#,
                shop_href(&next, cart_param),
                selected,
                sort.display_name()
            )
        })
        .collect::<Vec<_>>()
        .join("\n            ");

    let currency_options: String = Currency::ALL
        .iter()
        .map(|currency| {
            let mut next = *state;
            next.set_currency(*currency);
            let selected = if state.currency == *currency { " class=\"active\"" } else { "" };
            format!(
                r#"<a href="{}"{}>{}</a>"#,
                shop_href(&next, cart_param),
                selected,
                currency.code()
            )
        })
        .collect::<Vec<_>>()
        .join("\n            ");

    format!(
        r#"<section class="shop-filters" data-section="filters">
    <div class="filter-categories">{chips}</div>
    <div class="filter-row">
        <div class="filter-sort">
            <span class="filter-label">Sort</span>
            {sort_options}
        </div>
        <div class="filter-currency">
            <span class="filter-label">Currency</span>
            {currency_options}
        </div>
    </div>
</section>"#
    )
}

fn render_chip(label: &str, href: &str, active: bool) -> String {
    let class = if active { "chip chip-active" } else { "chip" };
    format!(
        r#"<a class="{}" href="{}">{}</a>
    "#,
        class,
        href,
        html_escape(label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_category_marked() {
        let mut state = FilterState::default();
        state.set_category(CategoryFilter::Only(Category::Books));

        let html = render_filters(&state, "");
        assert!(html.contains(r#"chip chip-active" href="/demos/shop?category=books">Books"#));
        // The "All" chip links back to the unfiltered view.
        assert!(html.contains(r#"chip" href="/demos/shop">All"#));
    }

    #[test]
    fn test_sort_links_reset_page() {
        let mut state = FilterState::default();
        state.set_page(2);

        let html = render_filters(&state, "");
        // Sort links must not carry page=2.
        for chunk in html.split("href=\"").skip(1) {
            let href = chunk.split('"').next().unwrap_or_default();
            if href.contains("sort=") {
                assert!(!href.contains("page="), "sort link kept stale page: {}", href);
            }
        }
    }
}
