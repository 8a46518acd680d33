//! Stream-as-ready section execution.
//!
//! - `SectionScheduler` - readiness tracking across section dependencies
//! - `OrderingStrategy` - in-order vs. independent streaming
//! - `FallbackStrategy` - what a section renders when its data fails

mod fallback;
mod ordering;
mod scheduler;

pub use fallback::*;
pub use ordering::*;
pub use scheduler::*;
