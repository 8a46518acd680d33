//! Folio - personal portfolio site.
//!
//! A client-rendered Leptos application: biography, projects, blog, contact,
//! plus links to the self-contained demo pages. The e-commerce demo also has
//! a fully reactive in-page version backed by `folio-shop`.

mod app;
mod content;
mod inquiry;
mod particles;
mod shop;

#[cfg(feature = "ssr")]
mod server;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
