//! Public SDK for the Folio demo page platform.
//!
//! Each demo page depends on this crate alone and reaches the platform
//! through it:
//!
//! ```ignore
//! use folio_sdk::folio_core::{Method, RequestContext};
//! use folio_sdk::folio_observability::StructuredLogger;
//!
//! let ctx = RequestContext::new(Method::Get, path);
//! let logger = StructuredLogger::new(ctx.request_id.clone())
//!     .with_workload("weather-lookup");
//!
//! sink.send_shell(&shell.render_opening()).await?;
//! let conditions = client.get_json(url, DependencyTag::Weather).await;
//! sink.send_section("current", &render_current(&conditions)).await?;
//! ```

pub use folio_core;
pub use folio_data;
pub use folio_executor;
pub use folio_observability;
pub use folio_streaming;

/// Prelude for convenient imports.
pub mod prelude {
    pub use folio_core::*;
    pub use folio_data::*;
    pub use folio_executor::*;
    pub use folio_observability::*;
    pub use folio_streaming::*;
}
