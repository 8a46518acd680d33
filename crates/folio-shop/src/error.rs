//! Shop domain error types.

use thiserror::Error;

/// Errors that can occur in shop demo operations.
#[derive(Error, Debug)]
pub enum ShopError {
    /// Product id not present in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(u32),

    /// Unknown category label.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Unknown sort key.
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    /// Unknown currency code.
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// A cart entry that does not parse as `id:qty`.
    #[error("Malformed cart entry: {0}")]
    MalformedCartEntry(String),
}
