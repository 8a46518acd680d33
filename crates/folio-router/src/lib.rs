//! Client-side routing for the Folio site.
//!
//! The site is a client-rendered single-page application; this crate keeps
//! the route table in one place and re-exports the Leptos router surface the
//! pages use:
//!
//! ```text
//! /                -> HomePage
//! /about           -> AboutPage
//! /projects        -> ProjectsPage
//! /blog            -> BlogPage
//! /blog/:slug      -> BlogPostPage
//! /contact         -> ContactPage
//! /demos           -> DemosPage
//! /demos/shop      -> ShopDemoPage
//! ```

pub mod prelude;
mod route;

pub use route::*;

// Re-export leptos_router essentials
pub use leptos_router::{
    components::{Route, Router, Routes},
    hooks::{use_params, use_params_map, use_query, use_query_map},
    path,
    ParamSegment, StaticSegment, WildcardSegment,
};
