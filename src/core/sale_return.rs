//! Return business logic - Records stock brought back by customers.
//!
//! Returns validate like sales minus the stock check: a return adds nothing
//! to stock-on-hand and only feeds the customer's returns total.

use crate::{
    core::validate,
    entities::{Customer, Product, SaleReturn, sale_return},
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::info;

/// Validates the master references and field values for a return.
async fn validate_return<C>(
    db: &C,
    product_id: i64,
    customer_id: i64,
    date: &str,
    amount: i32,
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
    Customer::find_by_id(customer_id)
        .one(db)
        .await?
        .ok_or(Error::ReferenceNotFound {
            entity: "customer",
            id: customer_id,
        })?;

    let date = validate::parse_date(date)?;
    validate::check_quantity(amount)?;
    validate::check_price(unit_price)?;
    Ok(date)
}

/// Creates a new return after validating references and field values.
///
/// # Errors
/// Returns [`Error::ReferenceNotFound`], [`Error::InvalidDate`],
/// [`Error::InvalidQuantity`], or [`Error::InvalidPrice`] without touching
/// the store.
pub async fn add_return(
    db: &DatabaseConnection,
    product_id: i64,
    customer_id: i64,
    date: &str,
    amount: i32,
    unit_price: f64,
) -> Result<sale_return::Model> {
    let txn = db.begin().await?;

    let date = validate_return(&txn, product_id, customer_id, date, amount, unit_price).await?;

    let ret = sale_return::ActiveModel {
        date: Set(date),
        amount: Set(amount),
        unit_price: Set(unit_price),
        product_id: Set(product_id),
        customer_id: Set(customer_id),
        ..Default::default()
    };
    let created = ret.insert(&txn).await?;

    txn.commit().await?;
    info!(return_id = created.id, product_id, amount, "recorded return");
    Ok(created)
}

/// Replaces all fields of an existing return after revalidating.
///
/// # Errors
/// Returns [`Error::NotFound`] if the return does not exist, or any of the
/// validation errors of [`add_return`].
pub async fn edit_return(
    db: &DatabaseConnection,
    return_id: i64,
    product_id: i64,
    customer_id: i64,
    date: &str,
    amount: i32,
    unit_price: f64,
) -> Result<sale_return::Model> {
    let txn = db.begin().await?;

    let existing = SaleReturn::find_by_id(return_id)
        .one(&txn)
        .await?
        .ok_or(Error::NotFound {
            entity: "return",
            id: return_id,
        })?;

    let date = validate_return(&txn, product_id, customer_id, date, amount, unit_price).await?;

    let mut active: sale_return::ActiveModel = existing.into();
    active.date = Set(date);
    active.amount = Set(amount);
    active.unit_price = Set(unit_price);
    active.product_id = Set(product_id);
    active.customer_id = Set(customer_id);
    let updated = active.update(&txn).await?;

    txn.commit().await?;
    Ok(updated)
}

/// Deletes a return. No validation is performed.
///
/// # Errors
/// Returns [`Error::NotFound`] if the return does not exist.
pub async fn delete_return(db: &DatabaseConnection, return_id: i64) -> Result<()> {
    let ret = SaleReturn::find_by_id(return_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "return",
            id: return_id,
        })?;

    ret.delete(db).await?;
    info!(return_id, "deleted return");
    Ok(())
}

/// Retrieves a specific return by its unique ID.
pub async fn get_return_by_id(
    db: &DatabaseConnection,
    return_id: i64,
) -> Result<Option<sale_return::Model>> {
    SaleReturn::find_by_id(return_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all returns, ordered by identifier.
pub async fn list_returns(db: &DatabaseConnection) -> Result<Vec<sale_return::Model>> {
    SaleReturn::find()
        .order_by_asc(sale_return::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all returns from a specific customer.
pub async fn list_returns_for_customer(
    db: &DatabaseConnection,
    customer_id: i64,
) -> Result<Vec<sale_return::Model>> {
    SaleReturn::find()
        .filter(sale_return::Column::CustomerId.eq(customer_id))
        .order_by_asc(sale_return::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}
