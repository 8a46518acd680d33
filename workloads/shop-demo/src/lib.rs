//! E-commerce catalog + cart demo page.
//!
//! The only demo with real state transitions: a category/sort/currency/page
//! filter state and a quantity-aggregated cart, both carried entirely in the
//! URL. Every request re-derives the catalog view from the full product
//! list; nothing is cached or stored server-side.

mod data;
mod sections;

use spin_sdk::http::{Fields, IncomingRequest, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;

use folio_sdk::folio_core::{Method, RequestContext, RouteConfig, WorkloadManifest};
use folio_sdk::folio_observability::{LogFormat, LogLevel, MetricsCollector, StructuredLogger};
use folio_sdk::folio_streaming::{HeadContent, Shell};
use folio_sdk::folio_streaming::StreamingSink;
use folio_shop::prelude::*;

use data::{format_cart_param, parse_cart_param, seed_catalog};
use sections::*;

/// This page's manifest.
fn manifest() -> WorkloadManifest {
    WorkloadManifest::new("shop-demo", env!("CARGO_PKG_VERSION"))
        .with_route(RouteConfig::new("/demos/shop", "handle"))
}

/// Main HTTP handler for the shop demo.
#[http_component]
async fn handle(req: IncomingRequest, response_out: ResponseOutparam) {
    let path = req.path_with_query().unwrap_or_default();
    let ctx = RequestContext::new(Method::Get, path);
    let request_id = ctx.request_id.clone();
    let manifest = manifest();

    let logger = StructuredLogger::new(request_id.clone())
        .with_workload(manifest.name.as_str())
        .with_route(&ctx.path)
        .with_min_level(LogLevel::Debug)
        .with_format(LogFormat::Human);

    let mut metrics = MetricsCollector::new(request_id.clone());
    metrics.set_workload(manifest.name.as_str());
    metrics.set_route(&ctx.path);

    // Filter state comes entirely from the query string; anything
    // unparseable falls back to the default and is logged.
    let state = filter_state_from_query(&ctx, &logger);

    let catalog = seed_catalog();
    let (cart, cart_errors) = parse_cart_param(
        &catalog,
        ctx.query_param("cart").unwrap_or_default(),
    );
    for err in &cart_errors {
        logger.warn_builder("Ignored cart entry")
            .field("error", err.to_string())
            .emit();
    }

    let view = CatalogView::derive(catalog.all(), &state);
    let cart_param = format_cart_param(&cart);

    logger.info_builder("Shop demo request")
        .field("category", state.category.as_str())
        .field("sort", state.sort.as_str())
        .field_i64("page", view.pagination.page)
        .field_i64("cart_items", cart.item_count() as i64)
        .emit();

    let headers = Fields::from_list(&[
        ("content-type".to_owned(), b"text/html; charset=utf-8".to_vec()),
        ("x-request-id".to_owned(), request_id.to_string().into_bytes()),
    ])
    .unwrap();
    let response = OutgoingResponse::new(headers);
    response.set_status_code(200).unwrap();

    let body = response.take_body();
    response_out.set(response);
    let mut sink = StreamingSink::new(body, ctx.timing.clone());

    let shell = Shell::demo_page(
        HeadContent::new("Shop | Demos | Arjun Mehta")
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_style(SHOP_STYLES),
        "Shop",
    );

    if let Err(e) = sink.send_shell(&shell.render_opening()).await {
        logger.error_builder("Failed to send shell")
            .field("error", e.to_string())
            .emit();
        return;
    }
    metrics.record_shell_sent();

    // All four sections derive from local data, so they stream in DOM order.
    metrics.record_section_start("filters");
    let html = render_filters(&state, &cart_param);
    let _ = sink.send_section("filters", &html).await;
    metrics.record_section_sent("filters", Some(html.len()), false);

    metrics.record_section_start("catalog");
    let html = render_catalog(&view, &state, &cart);
    let _ = sink.send_section("catalog", &html).await;
    metrics.record_section_sent("catalog", Some(html.len()), false);

    metrics.record_section_start("pager");
    let html = render_pager(&view.pagination, &state, &cart_param);
    let _ = sink.send_section("pager", &html).await;
    metrics.record_section_sent("pager", Some(html.len()), false);

    metrics.record_section_start("cart");
    let html = render_cart(&cart, &state);
    let _ = sink.send_section("cart", &html).await;
    metrics.record_section_sent("cart", Some(html.len()), false);

    let _ = sink.send_raw(shell.render_closing().into_bytes()).await;
    sink.complete();

    let final_metrics = metrics.finalize(Some(200));
    logger.info("Shop demo request complete");
    eprintln!("\n{}", final_metrics.to_summary());
}

/// Build the filter state from query parameters, one lenient field at a time.
fn filter_state_from_query(ctx: &RequestContext, logger: &StructuredLogger) -> FilterState {
    let mut state = FilterState::default();

    if let Some(raw) = ctx.query_param("category") {
        match CategoryFilter::from_str(raw) {
            Ok(filter) => state.set_category(filter),
            Err(e) => logger.warn(&e.to_string()),
        }
    }

    if let Some(raw) = ctx.query_param("sort") {
        match SortKey::from_str(raw) {
            Ok(sort) => state.set_sort(sort),
            Err(e) => logger.warn(&e.to_string()),
        }
    }

    if let Some(raw) = ctx.query_param("currency") {
        match Currency::from_code(raw) {
            Ok(currency) => state.set_currency(currency),
            Err(e) => logger.warn(&e.to_string()),
        }
    }

    // Page is applied last so the category/sort resets above can't clobber
    // an explicitly requested page.
    if let Some(raw) = ctx.query_param("page") {
        match raw.parse::<i64>() {
            Ok(page) => state.set_page(page),
            Err(_) => logger.warn("Unparseable page parameter"),
        }
    }

    state
}

/// CSS styles for the shop demo.
const SHOP_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; background: #f6f5f2; }
.demo-header { background: #1d1d1f; color: white; padding: 1rem 2rem; }
.demo-header a { color: #9ecbff; text-decoration: none; }
.demo-footer { background: #1d1d1f; color: #aaa; padding: 1.5rem 2rem; text-align: center; margin-top: 2rem; }
.demo-container { max-width: 1200px; margin: 0 auto; padding: 2rem; }

/* Filters */
.shop-filters { background: white; border-radius: 8px; padding: 1rem 1.5rem; margin-bottom: 1rem; }
.filter-categories { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 0.75rem; }
.chip { padding: 0.35rem 0.9rem; border-radius: 999px; background: #eee; color: #333; text-decoration: none; font-size: 0.9rem; }
.chip-active { background: #1d1d1f; color: white; }
.filter-row { display: flex; justify-content: space-between; flex-wrap: wrap; gap: 0.75rem; }
.filter-label { color: #888; font-size: 0.8rem; text-transform: uppercase; margin-right: 0.5rem; }
.filter-sort a, .filter-currency a { color: #555; text-decoration: none; margin-right: 0.75rem; font-size: 0.9rem; }
.filter-sort a.active, .filter-currency a.active { color: #1d1d1f; font-weight: 600; border-bottom: 2px solid #1d1d1f; }

/* Catalog */
.catalog-range { color: #777; font-size: 0.85rem; }
.catalog-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 1rem; }
.product-card { background: white; border-radius: 8px; padding: 1.25rem; display: flex; flex-direction: column; gap: 0.4rem; }
.card-badges { min-height: 1.2rem; }
.badge { font-size: 0.65rem; font-weight: 700; padding: 0.15rem 0.5rem; border-radius: 4px; margin-right: 0.3rem; }
.badge-new { background: #e5f3ff; color: #0969da; }
.badge-bestseller { background: #fff3e0; color: #c2410c; }
.card-description { color: #666; font-size: 0.85rem; }
.card-features { color: #888; font-size: 0.78rem; padding-left: 1.1rem; margin: 0; }
.card-rating { color: #c2410c; font-size: 0.9rem; }
.review-count { color: #999; }
.card-price { font-size: 1.15rem; font-weight: 700; }
.price-original { color: #999; text-decoration: line-through; font-weight: 400; font-size: 0.9rem; }
.stock { color: #2e7d32; font-size: 0.8rem; }
.stock-out { color: #c62828; }
.btn-add { margin-top: auto; text-align: center; background: #1d1d1f; color: white; text-decoration: none; padding: 0.6rem; border-radius: 6px; }

/* Pager */
.shop-pager { display: flex; justify-content: center; gap: 0.75rem; padding: 1.5rem 0; }
.pager-link, .pager-num { color: #333; text-decoration: none; }
.pager-link.disabled { color: #bbb; pointer-events: none; }
.pager-num.current { font-weight: 700; border-bottom: 2px solid #1d1d1f; }

/* Cart */
.shop-cart { background: white; border-radius: 8px; padding: 1.5rem; }
.cart-count { color: #888; font-weight: 400; font-size: 0.9rem; }
.cart-line { display: flex; align-items: center; gap: 1rem; padding: 0.6rem 0; border-bottom: 1px solid #eee; }
.line-name { flex: 1; }
.qty-btn { display: inline-block; width: 1.5rem; text-align: center; background: #eee; border-radius: 4px; color: #333; text-decoration: none; }
.line-total { min-width: 6rem; text-align: right; font-weight: 600; }
.line-remove { color: #c62828; font-size: 0.8rem; text-decoration: none; }
.cart-totals { display: grid; grid-template-columns: 1fr auto; gap: 0.3rem 1rem; margin-top: 1rem; }
.cart-totals dd { margin: 0; text-align: right; }
.cart-totals .free { color: #2e7d32; }
.cart-totals .grand { font-size: 1.15rem; font-weight: 700; }

/* Skeletons */
.skeleton-block { height: 6rem; background: #eee; border-radius: 6px; }
.skeleton-line { height: 1rem; background: #eee; border-radius: 4px; margin-top: 0.5rem; }
.skeleton-line.short { width: 40%; }
"#;
