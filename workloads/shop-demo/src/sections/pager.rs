//! Pager section.

use folio_shop::prelude::*;

use super::shop_href;

/// Render the pager under the catalog grid.
///
/// Previous/next hrefs are pre-clamped by `Pagination`, so the first page's
/// "previous" and the last page's "next" point at the current page.
pub fn render_pager(pagination: &Pagination, state: &FilterState, cart_param: &str) -> String {
    if pagination.total_pages <= 1 {
        return r#"<nav class="shop-pager" data-section="pager"></nav>"#.to_string();
    }

    let mut prev_state = *state;
    prev_state.set_page(pagination.prev_page());
    let prev_class = if pagination.is_first() { "pager-link disabled" } else { "pager-link" };

    let mut next_state = *state;
    next_state.set_page(pagination.next_page());
    let next_class = if pagination.is_last() { "pager-link disabled" } else { "pager-link" };

    let numbers: String = pagination
        .page_numbers(5)
        .into_iter()
        .map(|n| {
            let mut page_state = *state;
            page_state.set_page(n);
            let class = if n == pagination.page { "pager-num current" } else { "pager-num" };
            format!(
                r#"<a class="{}" href="{}">{}</a>"#,
                class,
                shop_href(&page_state, cart_param),
                n
            )
        })
        .collect::<Vec<_>>()
        .join("\n    ");

    format!(
        r#"<nav class="shop-pager" data-section="pager">
    <a class="{prev_class}" href="{prev_href}">&larr; Previous</a>
    {numbers}
    <a class="{next_class}" href="{next_href}">Next &rarr;</a>
</nav>"#,
        prev_class = prev_class,
        prev_href = shop_href(&prev_state, cart_param),
        numbers = numbers,
        next_class = next_class,
        next_href = shop_href(&next_state, cart_param),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_page_renders_empty_pager() {
        let state = FilterState::default();
        let html = render_pager(&Pagination::new(1, PAGE_SIZE, 5), &state, "");
        assert!(!html.contains("Next"));
    }

    #[test]
    fn test_first_page_previous_is_clamped() {
        let state = FilterState::default();
        let html = render_pager(&Pagination::new(1, PAGE_SIZE, 30), &state, "");

        assert!(html.contains("disabled"));
        // Previous from page 1 still targets page 1 (no page param).
        assert!(html.contains(r#"href="/demos/shop">&larr; Previous"#));
        assert!(html.contains("page=2"));
    }

    #[test]
    fn test_current_page_highlighted() {
        let mut state = FilterState::default();
        state.set_page(2);
        let html = render_pager(&Pagination::new(2, PAGE_SIZE, 30), &state, "1:1");

        assert!(html.contains("pager-num current"));
        assert!(html.contains("cart=1:1"));
    }
}
