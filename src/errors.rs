//! Unified error types for the ledger core.
//!
//! Every validation failure is a distinct variant carrying the offending
//! values, so callers can render precise messages without string matching.
//! Validation failures are deterministic for a given store state; nothing
//! here is worth retrying without changed input.

use thiserror::Error;

/// All failures the ledger core can report.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration loading or parsing failed
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what went wrong
        message: String,
    },

    /// An operation addressed a record that does not exist
    #[error("{entity} {id} not found")]
    NotFound {
        /// Entity kind, e.g. `"product"`
        entity: &'static str,
        /// The identifier that was looked up
        id: i64,
    },

    /// A transaction referenced a master entity that does not exist
    #[error("referenced {entity} {id} does not exist")]
    ReferenceNotFound {
        /// Entity kind the dangling reference points at
        entity: &'static str,
        /// The identifier that was referenced
        id: i64,
    },

    /// A date string did not parse as `YYYY-MM-DD`
    #[error("invalid date {value:?}, expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input
        value: String,
    },

    /// A quantity or amount was zero or negative
    #[error("quantity must be a positive integer, got {quantity}")]
    InvalidQuantity {
        /// The rejected quantity
        quantity: i32,
    },

    /// A unit price or receipt total was negative or not finite
    #[error("price must be a non-negative number, got {price}")]
    InvalidPrice {
        /// The rejected price
        price: f64,
    },

    /// A sale would exceed the product's stock-on-hand
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock {
        /// Amount the sale asked for
        requested: i32,
        /// Stock-on-hand available to this sale
        available: i64,
    },

    /// A master-entity delete was refused under `ReferentialPolicy::Restrict`
    #[error("{entity} {id} is still referenced by existing transactions")]
    StillReferenced {
        /// Entity kind the delete addressed
        entity: &'static str,
        /// The identifier of the referenced entity
        id: i64,
    },

    /// Database error from the storage layer
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type for the crate
pub type Result<T> = std::result::Result<T, Error>;
