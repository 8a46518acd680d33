//! Data models and the bundled city table for the weather demo.

mod cities;
mod models;

pub use cities::*;
pub use models::*;
