//! Section renderers for the weather demo.

mod current;
mod forecast;
mod search;

pub use current::*;
pub use forecast::*;
pub use search::*;

/// Escape text destined for HTML content.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
