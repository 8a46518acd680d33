//! Section renderers for the resume studio.

mod controls;
mod preview;

pub use controls::*;
pub use preview::*;

/// Escape text destined for HTML content.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
