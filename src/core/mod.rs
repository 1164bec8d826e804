//! Core business logic - framework-agnostic ledger operations.
//!
//! Every mutation of the store goes through these modules; the presentation
//! layer on top must never bypass them. Transaction records (purchases,
//! sales, returns, receipts) are validated before commit, and derived figures
//! (stock-on-hand, customer totals) live in [`report`].

use serde::{Deserialize, Serialize};

/// Customer CRUD operations
pub mod customer;
/// Product CRUD operations
pub mod product;
/// Purchase ledger mutations and lookups
pub mod purchase;
/// Receipt ledger mutations and lookups
pub mod receipt;
/// Derived aggregation: stock-on-hand, customer totals, grand totals
pub mod report;
/// Sale ledger mutations and lookups, including the stock check
pub mod sale;
/// Return ledger mutations and lookups
pub mod sale_return;
/// Shared field validation: dates, quantities, prices
pub mod validate;
/// Vendor CRUD operations
pub mod vendor;

/// Policy applied when deleting a master entity (product, vendor, customer)
/// that existing transaction records still reference.
///
/// The historical behavior of the system is [`Permissive`](Self::Permissive):
/// the delete succeeds and the referencing transactions keep their now
/// dangling foreign keys. [`Restrict`](Self::Restrict) refuses such deletes
/// with [`Error::StillReferenced`](crate::errors::Error::StillReferenced).
/// Whether production data should move to `Restrict` is an open product
/// question; the default preserves the historical behavior.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferentialPolicy {
    /// Delete regardless of referencing transactions (historical behavior)
    #[default]
    Permissive,
    /// Refuse to delete while any transaction references the entity
    Restrict,
}

/// The four kinds of transaction record kept in the ledger.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransactionKind {
    /// Inbound stock bought from a vendor
    Purchase,
    /// Outbound stock sold to a customer
    Sale,
    /// Stock brought back by a customer
    Return,
    /// Payment received from a customer
    Receipt,
}
