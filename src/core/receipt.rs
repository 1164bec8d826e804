//! Receipt business logic - Records payments received from customers.
//!
//! A receipt carries its monetary total directly instead of deriving it from
//! a quantity and unit price, so validation is just the customer reference,
//! the date, and a non-negative finite total.

use crate::{
    core::validate,
    entities::{Customer, Receipt, receipt},
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::info;

/// Validates the customer reference and field values for a receipt.
async fn validate_receipt<C>(
    db: &C,
    customer_id: i64,
    date: &str,
    total: f64,
) -> Result<chrono::NaiveDate>
where
    C: ConnectionTrait,
{
    Customer::find_by_id(customer_id)
        .one(db)
        .await?
        .ok_or(Error::ReferenceNotFound {
            entity: "customer",
            id: customer_id,
        })?;

    let date = validate::parse_date(date)?;
    validate::check_price(total)?;
    Ok(date)
}

/// Creates a new receipt after validating the customer reference and fields.
///
/// # Errors
/// Returns [`Error::ReferenceNotFound`], [`Error::InvalidDate`], or
/// [`Error::InvalidPrice`] without touching the store.
pub async fn add_receipt(
    db: &DatabaseConnection,
    customer_id: i64,
    date: &str,
    total: f64,
) -> Result<receipt::Model> {
    let txn = db.begin().await?;

    let date = validate_receipt(&txn, customer_id, date, total).await?;

    let receipt = receipt::ActiveModel {
        date: Set(date),
        total: Set(total),
        customer_id: Set(customer_id),
        ..Default::default()
    };
    let created = receipt.insert(&txn).await?;

    txn.commit().await?;
    info!(receipt_id = created.id, customer_id, total, "recorded receipt");
    Ok(created)
}

/// Replaces all fields of an existing receipt after revalidating.
///
/// This is a full-field replace including the total, unlike the historical
/// edit form which silently kept the old total.
///
/// # Errors
/// Returns [`Error::NotFound`] if the receipt does not exist, or any of the
/// validation errors of [`add_receipt`].
pub async fn edit_receipt(
    db: &DatabaseConnection,
    receipt_id: i64,
    customer_id: i64,
    date: &str,
    total: f64,
) -> Result<receipt::Model> {
    let txn = db.begin().await?;

    let existing = Receipt::find_by_id(receipt_id)
        .one(&txn)
        .await?
        .ok_or(Error::NotFound {
            entity: "receipt",
            id: receipt_id,
        })?;

    let date = validate_receipt(&txn, customer_id, date, total).await?;

    let mut active: receipt::ActiveModel = existing.into();
    active.date = Set(date);
    active.total = Set(total);
    active.customer_id = Set(customer_id);
    let updated = active.update(&txn).await?;

    txn.commit().await?;
    Ok(updated)
}

/// Deletes a receipt. No validation is performed.
///
/// # Errors
/// Returns [`Error::NotFound`] if the receipt does not exist.
pub async fn delete_receipt(db: &DatabaseConnection, receipt_id: i64) -> Result<()> {
    let receipt = Receipt::find_by_id(receipt_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "receipt",
            id: receipt_id,
        })?;

    receipt.delete(db).await?;
    info!(receipt_id, "deleted receipt");
    Ok(())
}

/// Retrieves a specific receipt by its unique ID.
pub async fn get_receipt_by_id(
    db: &DatabaseConnection,
    receipt_id: i64,
) -> Result<Option<receipt::Model>> {
    Receipt::find_by_id(receipt_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all receipts, ordered by identifier.
pub async fn list_receipts(db: &DatabaseConnection) -> Result<Vec<receipt::Model>> {
    Receipt::find()
        .order_by_asc(receipt::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all receipts from a specific customer.
pub async fn list_receipts_for_customer(
    db: &DatabaseConnection,
    customer_id: i64,
) -> Result<Vec<receipt::Model>> {
    Receipt::find()
        .filter(receipt::Column::CustomerId.eq(customer_id))
        .order_by_asc(receipt::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{create_test_customer, setup_test_db};

    #[tokio::test]
    async fn test_add_receipt() -> Result<()> {
        let db = setup_test_db().await?;
        let customer = create_test_customer(&db, "Dina").await?;

        let receipt = add_receipt(&db, customer.id, "2024-02-04", 120.0).await?;
        assert_eq!(receipt.total, 120.0);
        assert_eq!(receipt.customer_id, customer.id);
        Ok(())
    }

    #[tokio::test]
    async fn test_add_receipt_validation() -> Result<()> {
        let db = setup_test_db().await?;
        let customer = create_test_customer(&db, "Dina").await?;

        let no_customer = add_receipt(&db, 999, "2024-02-04", 120.0).await;
        assert!(matches!(
            no_customer,
            Err(Error::ReferenceNotFound {
                entity: "customer",
                id: 999
            })
        ));

        let bad_date = add_receipt(&db, customer.id, "Feb 4", 120.0).await;
        assert!(matches!(bad_date, Err(Error::InvalidDate { .. })));

        let bad_total = add_receipt(&db, customer.id, "2024-02-04", -5.0).await;
        assert!(matches!(bad_total, Err(Error::InvalidPrice { .. })));

        assert!(list_receipts(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_edit_receipt_replaces_total() -> Result<()> {
        let db = setup_test_db().await?;
        let customer = create_test_customer(&db, "Dina").await?;
        let receipt = add_receipt(&db, customer.id, "2024-02-04", 120.0).await?;

        let updated = edit_receipt(&db, receipt.id, customer.id, "2024-02-05", 80.0).await?;
        assert_eq!(updated.total, 80.0);

        let missing = edit_receipt(&db, 999, customer.id, "2024-02-05", 80.0).await;
        assert!(matches!(missing, Err(Error::NotFound { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_receipt() -> Result<()> {
        let db = setup_test_db().await?;
        let customer = create_test_customer(&db, "Dina").await?;
        let receipt = add_receipt(&db, customer.id, "2024-02-04", 120.0).await?;

        delete_receipt(&db, receipt.id).await?;
        assert!(get_receipt_by_id(&db, receipt.id).await?.is_none());
        assert!(list_receipts_for_customer(&db, customer.id).await?.is_empty());
        Ok(())
    }
}
