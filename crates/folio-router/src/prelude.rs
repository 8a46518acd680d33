//! One import for the page components:
//!
//! ```rust,ignore
//! use folio_router::prelude::*;
//! ```

pub use crate::{
    path, site_routes, use_params, use_params_map, use_query, use_query_map, Route, RouteEntry,
    RouteMeta, RouteRegistry, Router, Routes,
};
