//! Data model for the resume generator.

mod resume;

pub use resume::*;
