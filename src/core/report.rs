//! Derived aggregation: stock-on-hand, customer totals, and grand totals.
//!
//! Nothing in this module is ever persisted. Every figure is recomputed from
//! the live transaction set on each call by rescanning the relevant records,
//! which keeps the values trivially consistent with the store at small scale.
//! Sums over empty sets are zero, not errors.

use crate::{
    core::TransactionKind,
    entities::{
        Customer, Product, Purchase, Receipt, Sale, SaleReturn, customer, product, purchase,
        receipt, sale, sale_return,
    },
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, QueryOrder, prelude::*};

/// The three derived monetary totals for a single customer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CustomerTotals {
    /// Sum of `amount * unit_price` across the customer's sales
    pub sales_total: f64,
    /// Sum of `amount * unit_price` across the customer's returns
    pub returns_total: f64,
    /// Sum of receipt totals for the customer
    pub receipts_total: f64,
}

/// One row of the stock overview: a product with its movement figures.
#[derive(Debug, Clone, PartialEq)]
pub struct StockLine {
    /// The product being summarized
    pub product: product::Model,
    /// Total units purchased across all time
    pub purchased: i64,
    /// Total units sold across all time
    pub sold: i64,
    /// Units currently available: purchased minus sold
    pub on_hand: i64,
}

/// One row of the customer ledger overview: a customer with its totals.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerLedgerLine {
    /// The customer being summarized
    pub customer: customer::Model,
    /// The customer's derived monetary totals
    pub totals: CustomerTotals,
}

/// Computes the stock-on-hand for a product: units purchased minus units sold.
///
/// The figure is recomputed from the current purchase and sale records on
/// every call. The value is signed: deleting purchases bypasses validation,
/// so a product can end up with more units sold than purchased.
///
/// Generic over the connection so mutation paths can call it inside their own
/// database transaction.
///
/// # Errors
/// Returns [`Error::NotFound`] if the product id does not exist.
pub async fn stock_on_hand<C>(db: &C, product_id: i64) -> Result<i64>
where
    C: ConnectionTrait,
{
    Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "product",
            id: product_id,
        })?;

    let purchased: i64 = Purchase::find()
        .filter(purchase::Column::ProductId.eq(product_id))
        .all(db)
        .await?
        .iter()
        .map(|p| i64::from(p.quantity))
        .sum();

    let sold: i64 = Sale::find()
        .filter(sale::Column::ProductId.eq(product_id))
        .all(db)
        .await?
        .iter()
        .map(|s| i64::from(s.amount))
        .sum();

    Ok(purchased - sold)
}

/// Computes the three monetary totals for a customer.
///
/// A customer with no sales, returns, or receipts yields `(0.0, 0.0, 0.0)`.
///
/// # Errors
/// Returns [`Error::NotFound`] if the customer id does not exist.
pub async fn customer_totals(
    db: &DatabaseConnection,
    customer_id: i64,
) -> Result<CustomerTotals> {
    Customer::find_by_id(customer_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "customer",
            id: customer_id,
        })?;

    customer_totals_unchecked(db, customer_id).await
}

/// Sums a customer's totals without checking that the customer exists.
/// Used by [`customer_ledger`] which already holds the customer row.
async fn customer_totals_unchecked(
    db: &DatabaseConnection,
    customer_id: i64,
) -> Result<CustomerTotals> {
    let sales_total: f64 = Sale::find()
        .filter(sale::Column::CustomerId.eq(customer_id))
        .all(db)
        .await?
        .iter()
        .map(sale::Model::total)
        .sum();

    let returns_total: f64 = SaleReturn::find()
        .filter(sale_return::Column::CustomerId.eq(customer_id))
        .all(db)
        .await?
        .iter()
        .map(sale_return::Model::total)
        .sum();

    let receipts_total: f64 = Receipt::find()
        .filter(receipt::Column::CustomerId.eq(customer_id))
        .all(db)
        .await?
        .iter()
        .map(|r| r.total)
        .sum();

    Ok(CustomerTotals {
        sales_total,
        returns_total,
        receipts_total,
    })
}

/// Computes the grand monetary total over all records of one transaction kind.
///
/// Used for the footer row of the list views. An empty ledger totals to zero.
pub async fn ledger_total(db: &DatabaseConnection, kind: TransactionKind) -> Result<f64> {
    let total = match kind {
        TransactionKind::Purchase => Purchase::find()
            .all(db)
            .await?
            .iter()
            .map(purchase::Model::total)
            .sum(),
        TransactionKind::Sale => Sale::find()
            .all(db)
            .await?
            .iter()
            .map(sale::Model::total)
            .sum(),
        TransactionKind::Return => SaleReturn::find()
            .all(db)
            .await?
            .iter()
            .map(sale_return::Model::total)
            .sum(),
        TransactionKind::Receipt => Receipt::find().all(db).await?.iter().map(|r| r.total).sum(),
    };
    Ok(total)
}

/// Builds the stock overview: every product with purchased, sold, and
/// on-hand figures.
pub async fn stock_report(db: &DatabaseConnection) -> Result<Vec<StockLine>> {
    let products = Product::find()
        .order_by_asc(product::Column::Id)
        .all(db)
        .await?;

    let mut lines = Vec::with_capacity(products.len());
    for p in products {
        let purchased: i64 = Purchase::find()
            .filter(purchase::Column::ProductId.eq(p.id))
            .all(db)
            .await?
            .iter()
            .map(|x| i64::from(x.quantity))
            .sum();
        let sold: i64 = Sale::find()
            .filter(sale::Column::ProductId.eq(p.id))
            .all(db)
            .await?
            .iter()
            .map(|x| i64::from(x.amount))
            .sum();
        lines.push(StockLine {
            product: p,
            purchased,
            sold,
            on_hand: purchased - sold,
        });
    }
    Ok(lines)
}

/// Builds the customer ledger overview: every customer with its three totals.
pub async fn customer_ledger(db: &DatabaseConnection) -> Result<Vec<CustomerLedgerLine>> {
    let customers = Customer::find()
        .order_by_asc(customer::Column::Id)
        .all(db)
        .await?;

    let mut lines = Vec::with_capacity(customers.len());
    for c in customers {
        let totals = customer_totals_unchecked(db, c.id).await?;
        lines.push(CustomerLedgerLine { customer: c, totals });
    }
    Ok(lines)
}
