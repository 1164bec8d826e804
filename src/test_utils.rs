//! Shared test utilities for `AtlasLedger`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{customer, product, purchase, vendor},
    entities,
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests. It goes through
/// [`crate::config::database::connect`] so tests run with the same
/// foreign-key settings as a real deployment.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = crate::config::database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test product with sensible defaults.
///
/// # Defaults
/// * `kind`: "grain"
/// * `size`: "1kg"
/// * `pr`: "PR-1"
pub async fn create_test_product(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::product::Model> {
    product::create_product(
        db,
        name.to_string(),
        "grain".to_string(),
        "1kg".to_string(),
        "PR-1".to_string(),
    )
    .await
}

/// Creates a test vendor with sensible defaults.
pub async fn create_test_vendor(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::vendor::Model> {
    vendor::create_vendor(
        db,
        name.to_string(),
        "1 Depot Rd".to_string(),
        "orders@vendor.example".to_string(),
        "555-0100".to_string(),
    )
    .await
}

/// Creates a test customer with no phone or address.
pub async fn create_test_customer(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::customer::Model> {
    customer::create_customer(db, name.to_string(), None, None).await
}

/// Creates a test purchase of the given quantity at a unit price of 4.0.
pub async fn create_test_purchase(
    db: &DatabaseConnection,
    product_id: i64,
    vendor_id: i64,
    quantity: i32,
) -> Result<entities::purchase::Model> {
    purchase::add_purchase(db, product_id, vendor_id, "2024-01-15", quantity, 4.0).await
}

/// Sets up a database with one product, one vendor, one customer, and a
/// single purchase putting `quantity` units on hand.
/// Returns (db, product, vendor, customer) for sale-oriented tests.
pub async fn setup_with_stock(
    quantity: i32,
) -> Result<(
    DatabaseConnection,
    entities::product::Model,
    entities::vendor::Model,
    entities::customer::Model,
)> {
    let db = setup_test_db().await?;
    let product = create_test_product(&db, "Test Product").await?;
    let vendor = create_test_vendor(&db, "Test Vendor").await?;
    let customer = create_test_customer(&db, "Test Customer").await?;
    create_test_purchase(&db, product.id, vendor.id, quantity).await?;
    Ok((db, product, vendor, customer))
}
