//! Purchase business logic - Records inbound stock bought from vendors.
//!
//! Every purchase add or edit validates its references, date, quantity, and
//! unit price before anything is written, inside a database transaction so a
//! failure leaves the store untouched. Deletes skip validation entirely:
//! any existing purchase may be removed at any time.

use crate::{
    core::validate,
    entities::{Product, Purchase, Vendor, purchase},
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::info;

/// Validates the master references and field values for a purchase.
///
/// Checks run in a fixed order and short-circuit: product reference, vendor
/// reference, date format, quantity, unit price.
async fn validate_purchase<C>(
    db: &C,
    product_id: i64,
    vendor_id: i64,
    date: &str,
    quantity: i32,
    unit_price: f64,
) -> Result<chrono::NaiveDate>
where
    C: ConnectionTrait,
{
    Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or(Error::ReferenceNotFound {
            entity: "product",
            id: product_id,
        })?;
    Vendor::find_by_id(vendor_id)
        .one(db)
        .await?
        .ok_or(Error::ReferenceNotFound {
            entity: "vendor",
            id: vendor_id,
        })?;

    let date = validate::parse_date(date)?;
    validate::check_quantity(quantity)?;
    validate::check_price(unit_price)?;
    Ok(date)
}

/// Creates a new purchase after validating references and field values.
///
/// # Errors
/// Returns [`Error::ReferenceNotFound`], [`Error::InvalidDate`],
/// [`Error::InvalidQuantity`], or [`Error::InvalidPrice`] without touching
/// the store.
pub async fn add_purchase(
    db: &DatabaseConnection,
    product_id: i64,
    vendor_id: i64,
    date: &str,
    quantity: i32,
    unit_price: f64,
) -> Result<purchase::Model> {
    let txn = db.begin().await?;

    let date = validate_purchase(&txn, product_id, vendor_id, date, quantity, unit_price).await?;

    let purchase = purchase::ActiveModel {
        date: Set(date),
        quantity: Set(quantity),
        unit_price: Set(unit_price),
        product_id: Set(product_id),
        vendor_id: Set(vendor_id),
        ..Default::default()
    };
    let created = purchase.insert(&txn).await?;

    txn.commit().await?;
    info!(purchase_id = created.id, product_id, quantity, "recorded purchase");
    Ok(created)
}

/// Replaces all fields of an existing purchase after revalidating.
///
/// # Errors
/// Returns [`Error::NotFound`] if the purchase does not exist, or any of the
/// validation errors of [`add_purchase`].
pub async fn edit_purchase(
    db: &DatabaseConnection,
    purchase_id: i64,
    product_id: i64,
    vendor_id: i64,
    date: &str,
    quantity: i32,
    unit_price: f64,
) -> Result<purchase::Model> {
    let txn = db.begin().await?;

    let existing = Purchase::find_by_id(purchase_id)
        .one(&txn)
        .await?
        .ok_or(Error::NotFound {
            entity: "purchase",
            id: purchase_id,
        })?;

    let date = validate_purchase(&txn, product_id, vendor_id, date, quantity, unit_price).await?;

    let mut active: purchase::ActiveModel = existing.into();
    active.date = Set(date);
    active.quantity = Set(quantity);
    active.unit_price = Set(unit_price);
    active.product_id = Set(product_id);
    active.vendor_id = Set(vendor_id);
    let updated = active.update(&txn).await?;

    txn.commit().await?;
    Ok(updated)
}

/// Deletes a purchase. No validation or stock recheck is performed.
///
/// # Errors
/// Returns [`Error::NotFound`] if the purchase does not exist.
pub async fn delete_purchase(db: &DatabaseConnection, purchase_id: i64) -> Result<()> {
    let purchase = Purchase::find_by_id(purchase_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "purchase",
            id: purchase_id,
        })?;

    purchase.delete(db).await?;
    info!(purchase_id, "deleted purchase");
    Ok(())
}

/// Retrieves a specific purchase by its unique ID.
pub async fn get_purchase_by_id(
    db: &DatabaseConnection,
    purchase_id: i64,
) -> Result<Option<purchase::Model>> {
    Purchase::find_by_id(purchase_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all purchases, ordered by identifier.
pub async fn list_purchases(db: &DatabaseConnection) -> Result<Vec<purchase::Model>> {
    Purchase::find()
        .order_by_asc(purchase::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all purchases for a specific product.
pub async fn list_purchases_for_product(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Vec<purchase::Model>> {
    Purchase::find()
        .filter(purchase::Column::ProductId.eq(product_id))
        .order_by_asc(purchase::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all purchases from a specific vendor.
pub async fn list_purchases_for_vendor(
    db: &DatabaseConnection,
    vendor_id: i64,
) -> Result<Vec<purchase::Model>> {
    Purchase::find()
        .filter(purchase::Column::VendorId.eq(vendor_id))
        .order_by_asc(purchase::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}
