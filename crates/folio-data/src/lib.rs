//! Outbound data access for the demo pages.
//!
//! Every third-party concern (weather data, transactional email) is a plain
//! HTTP call made through this crate:
//! - `FetchClient` - one-shot GET/POST with per-dependency timeouts
//! - `DependencyTag` - semantic dependency categories
//! - `TimeoutConfig` - per-dependency time budgets
//!
//! There is deliberately no retry machinery: each call is a single attempt,
//! and a failure is terminal for that user action. Callers decide whether to
//! fall back to bundled demo data.

mod client;
mod dependency;
mod timeout;

pub use client::*;
pub use dependency::*;
pub use timeout::*;
