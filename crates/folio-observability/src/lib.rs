//! Observability for the Folio demo pages.
//!
//! - `StructuredLogger` - request-scoped structured logs (JSON or human)
//! - `MetricsCollector` - shell/section/dependency timings per request

mod logging;
mod metrics;

pub use logging::{LogBuilder, LogEntry, LogFormat, LogLevel, StructuredLogger};
pub use metrics::{DependencyMetrics, MetricsCollector, RequestMetrics, SectionMetrics};
