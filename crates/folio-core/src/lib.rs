//! Core abstractions for the Folio site and its demo pages.
//!
//! This crate provides the fundamental types:
//! - `SiteConfig` - injected site/provider configuration
//! - `WorkloadManifest` - demo page configuration
//! - `RequestContext` - typed request parameters
//! - `TimingContext` - per-request timing marks

mod config;
mod context;
mod timing;
mod workload;

pub use config::*;
pub use context::*;
pub use timing::*;
pub use workload::*;
