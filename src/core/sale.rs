//! Sale business logic - Records outbound stock sold to customers.
//!
//! Sales are the only transaction kind checked against stock-on-hand. The
//! check and the insert run inside one database transaction, so a sale either
//! commits with the stock it claimed or fails without touching the store.
//! When editing a sale that stays on the same product, the sale's previous
//! amount is added back to availability before comparing, so a sale never
//! competes against itself for stock.

use crate::{
    core::{report, validate},
    entities::{Customer, Product, Sale, sale},
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::{info, warn};

/// Validates the master references and field values for a sale.
///
/// Checks run in a fixed order and short-circuit: product reference, customer
/// reference, date format, amount, unit price. The stock check is separate
/// because add and edit compute availability differently.
async fn validate_sale_fields<C>(
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

/// Creates a new sale after validating references, fields, and stock.
///
/// # Errors
/// Returns [`Error::ReferenceNotFound`], [`Error::InvalidDate`],
/// [`Error::InvalidQuantity`], [`Error::InvalidPrice`], or
/// [`Error::InsufficientStock`] without touching the store.
pub async fn add_sale(
    db: &DatabaseConnection,
    product_id: i64,
    customer_id: i64,
    date: &str,
    amount: i32,
    unit_price: f64,
) -> Result<sale::Model> {
    let txn = db.begin().await?;

    let date = validate_sale_fields(&txn, product_id, customer_id, date, amount, unit_price).await?;

    let available = report::stock_on_hand(&txn, product_id).await?;
    if i64::from(amount) > available {
        warn!(product_id, amount, available, "sale rejected for insufficient stock");
        return Err(Error::InsufficientStock {
            requested: amount,
            available,
        });
    }

    let sale = sale::ActiveModel {
        date: Set(date),
        amount: Set(amount),
        unit_price: Set(unit_price),
        product_id: Set(product_id),
        customer_id: Set(customer_id),
        ..Default::default()
    };
    let created = sale.insert(&txn).await?;

    txn.commit().await?;
    info!(sale_id = created.id, product_id, amount, "recorded sale");
    Ok(created)
}

/// Replaces all fields of an existing sale after revalidating, including the
/// stock check.
///
/// Availability for the check excludes the sale being edited: when the sale
/// stays on the same product its previous amount is added back before
/// comparing. When the edit moves the sale to a different product, the new
/// product's stock is checked as-is and the old product regains the previous
/// amount implicitly.
///
/// # Errors
/// Returns [`Error::NotFound`] if the sale does not exist, or any of the
/// validation errors of [`add_sale`].
pub async fn edit_sale(
    db: &DatabaseConnection,
    sale_id: i64,
    product_id: i64,
    customer_id: i64,
    date: &str,
    amount: i32,
    unit_price: f64,
) -> Result<sale::Model> {
    let txn = db.begin().await?;

    let existing = Sale::find_by_id(sale_id)
        .one(&txn)
        .await?
        .ok_or(Error::NotFound {
            entity: "sale",
            id: sale_id,
        })?;

    let date = validate_sale_fields(&txn, product_id, customer_id, date, amount, unit_price).await?;

    let mut available = report::stock_on_hand(&txn, product_id).await?;
    if existing.product_id == product_id {
        available += i64::from(existing.amount);
    }
    if i64::from(amount) > available {
        warn!(sale_id, product_id, amount, available, "sale edit rejected for insufficient stock");
        return Err(Error::InsufficientStock {
            requested: amount,
            available,
        });
    }

    let mut active: sale::ActiveModel = existing.into();
    active.date = Set(date);
    active.amount = Set(amount);
    active.unit_price = Set(unit_price);
    active.product_id = Set(product_id);
    active.customer_id = Set(customer_id);
    let updated = active.update(&txn).await?;

    txn.commit().await?;
    Ok(updated)
}

/// Deletes a sale. No validation or stock recheck is performed; the freed
/// stock shows up in the next `stock_on_hand` read.
///
/// # Errors
/// Returns [`Error::NotFound`] if the sale does not exist.
pub async fn delete_sale(db: &DatabaseConnection, sale_id: i64) -> Result<()> {
    let sale = Sale::find_by_id(sale_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "sale",
            id: sale_id,
        })?;

    sale.delete(db).await?;
    info!(sale_id, "deleted sale");
    Ok(())
}

/// Retrieves a specific sale by its unique ID.
pub async fn get_sale_by_id(
    db: &DatabaseConnection,
    sale_id: i64,
) -> Result<Option<sale::Model>> {
    Sale::find_by_id(sale_id).one(db).await.map_err(Into::into)
}

/// Retrieves all sales, ordered by identifier.
pub async fn list_sales(db: &DatabaseConnection) -> Result<Vec<sale::Model>> {
    Sale::find()
        .order_by_asc(sale::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all sales of a specific product.
pub async fn list_sales_for_product(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Vec<sale::Model>> {
    Sale::find()
        .filter(sale::Column::ProductId.eq(product_id))
        .order_by_asc(sale::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all sales to a specific customer.
pub async fn list_sales_for_customer(
    db: &DatabaseConnection,
    customer_id: i64,
) -> Result<Vec<sale::Model>> {
    Sale::find()
        .filter(sale::Column::CustomerId.eq(customer_id))
        .order_by_asc(sale::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::{purchase::add_purchase, report::stock_on_hand};
    use crate::test_utils::{
        create_test_customer, create_test_product, create_test_vendor, setup_test_db,
        setup_with_stock,
    };

    #[tokio::test]
    async fn test_add_sale_round_trip_total() -> Result<()> {
        let (db, product, _vendor, customer) = setup_with_stock(100).await?;

        let sale = add_sale(&db, product.id, customer.id, "2024-02-03", 3, 12.50).await?;
        let fetched = get_sale_by_id(&db, sale.id).await?.unwrap();
        assert_eq!(fetched.total(), 37.50);
        assert_eq!(fetched, sale);
        Ok(())
    }

    #[tokio::test]
    async fn test_oversell_rejected_and_store_unchanged() -> Result<()> {
        let (db, product, _vendor, customer) = setup_with_stock(5).await?;

        let result = add_sale(&db, product.id, customer.id, "2024-02-03", 6, 1.0).await;
        assert!(matches!(
            result,
            Err(Error::InsufficientStock {
                requested: 6,
                available: 5
            })
        ));
        assert!(list_sales(&db).await?.is_empty());
        assert_eq!(stock_on_hand(&db, product.id).await?, 5);
        Ok(())
    }

    #[tokio::test]
    async fn test_sale_can_drain_stock_to_zero() -> Result<()> {
        // Two purchases (10 + 5) and one sale of 4 leave 11 on hand
        let db = setup_test_db().await?;
        let product = create_test_product(&db, "Rice").await?;
        let vendor = create_test_vendor(&db, "Acme Supply").await?;
        let customer = create_test_customer(&db, "Dina").await?;

        add_purchase(&db, product.id, vendor.id, "2024-02-01", 10, 4.0).await?;
        add_purchase(&db, product.id, vendor.id, "2024-02-02", 5, 4.0).await?;
        add_sale(&db, product.id, customer.id, "2024-02-03", 4, 6.0).await?;
        assert_eq!(stock_on_hand(&db, product.id).await?, 11);

        // Selling exactly the remaining stock succeeds
        add_sale(&db, product.id, customer.id, "2024-02-04", 11, 6.0).await?;
        assert_eq!(stock_on_hand(&db, product.id).await?, 0);

        // One more unit is one too many
        let result = add_sale(&db, product.id, customer.id, "2024-02-05", 1, 6.0).await;
        assert!(matches!(result, Err(Error::InsufficientStock { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_edit_sale_excludes_own_amount_from_stock_check() -> Result<()> {
        // Stock excluding the sale under edit is 7
        let (db, product, _vendor, customer) = setup_with_stock(7).await?;
        let sale = add_sale(&db, product.id, customer.id, "2024-02-03", 4, 6.0).await?;
        assert_eq!(stock_on_hand(&db, product.id).await?, 3);

        // Raising 4 -> 6 fits: 3 on hand plus the 4 added back makes 7
        let updated = edit_sale(&db, sale.id, product.id, customer.id, "2024-02-03", 6, 6.0).await?;
        assert_eq!(updated.amount, 6);
        assert_eq!(stock_on_hand(&db, product.id).await?, 1);

        // 8 exceeds the 7 available to this sale; amount stays at 6
        let result = edit_sale(&db, sale.id, product.id, customer.id, "2024-02-03", 8, 6.0).await;
        assert!(matches!(
            result,
            Err(Error::InsufficientStock {
                requested: 8,
                available: 7
            })
        ));
        assert_eq!(get_sale_by_id(&db, sale.id).await?.unwrap().amount, 6);
        Ok(())
    }

    #[tokio::test]
    async fn test_edit_sale_moving_product_checks_new_product_stock() -> Result<()> {
        let db = setup_test_db().await?;
        let rice = create_test_product(&db, "Rice").await?;
        let beans = create_test_product(&db, "Beans").await?;
        let vendor = create_test_vendor(&db, "Acme Supply").await?;
        let customer = create_test_customer(&db, "Dina").await?;

        add_purchase(&db, rice.id, vendor.id, "2024-02-01", 10, 4.0).await?;
        add_purchase(&db, beans.id, vendor.id, "2024-02-01", 2, 2.0).await?;
        let sale = add_sale(&db, rice.id, customer.id, "2024-02-02", 5, 6.0).await?;

        // Moving the sale to beans gets no add-back; beans only has 2
        let result = edit_sale(&db, sale.id, beans.id, customer.id, "2024-02-02", 5, 6.0).await;
        assert!(matches!(
            result,
            Err(Error::InsufficientStock {
                requested: 5,
                available: 2
            })
        ));

        // A fitting amount moves cleanly and frees the rice stock
        edit_sale(&db, sale.id, beans.id, customer.id, "2024-02-02", 2, 6.0).await?;
        assert_eq!(stock_on_hand(&db, rice.id).await?, 10);
        assert_eq!(stock_on_hand(&db, beans.id).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_add_sale_rejects_dangling_references() -> Result<()> {
        let (db, product, _vendor, customer) = setup_with_stock(10).await?;

        let no_product = add_sale(&db, 999, customer.id, "2024-02-03", 1, 1.0).await;
        assert!(matches!(
            no_product,
            Err(Error::ReferenceNotFound {
                entity: "product",
                id: 999
            })
        ));

        let no_customer = add_sale(&db, product.id, 999, "2024-02-03", 1, 1.0).await;
        assert!(matches!(
            no_customer,
            Err(Error::ReferenceNotFound {
                entity: "customer",
                id: 999
            })
        ));

        assert!(list_sales(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_validation_order_reference_before_date() -> Result<()> {
        // A dangling reference wins over a malformed date
        let db = setup_test_db().await?;
        let result = add_sale(&db, 1, 1, "not-a-date", 0, -1.0).await;
        assert!(matches!(result, Err(Error::ReferenceNotFound { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_add_sale_field_validation() -> Result<()> {
        let (db, product, _vendor, customer) = setup_with_stock(10).await?;

        let bad_date = add_sale(&db, product.id, customer.id, "2024/02/03", 1, 1.0).await;
        assert!(matches!(bad_date, Err(Error::InvalidDate { .. })));

        let bad_amount = add_sale(&db, product.id, customer.id, "2024-02-03", -2, 1.0).await;
        assert!(matches!(bad_amount, Err(Error::InvalidQuantity { .. })));

        let bad_price = add_sale(&db, product.id, customer.id, "2024-02-03", 1, f64::NAN).await;
        assert!(matches!(bad_price, Err(Error::InvalidPrice { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_sale_frees_stock() -> Result<()> {
        let (db, product, _vendor, customer) = setup_with_stock(10).await?;
        let sale = add_sale(&db, product.id, customer.id, "2024-02-03", 4, 6.0).await?;
        assert_eq!(stock_on_hand(&db, product.id).await?, 6);

        delete_sale(&db, sale.id).await?;
        assert_eq!(stock_on_hand(&db, product.id).await?, 10);

        let again = delete_sale(&db, sale.id).await;
        assert!(matches!(again, Err(Error::NotFound { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_list_sales_filters() -> Result<()> {
        let (db, product, _vendor, customer) = setup_with_stock(100).await?;
        let other = create_test_customer(&db, "Sami").await?;

        add_sale(&db, product.id, customer.id, "2024-02-03", 2, 5.0).await?;
        add_sale(&db, product.id, other.id, "2024-02-04", 3, 5.0).await?;

        assert_eq!(list_sales(&db).await?.len(), 2);
        assert_eq!(list_sales_for_product(&db, product.id).await?.len(), 2);
        assert_eq!(list_sales_for_customer(&db, customer.id).await?.len(), 1);
        Ok(())
    }
}
