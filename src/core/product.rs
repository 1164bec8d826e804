//! Product business logic - Handles all product-related operations.
//!
//! Products are the master records that purchases, sales, and returns hang
//! off. Deleting a product consults the configured [`ReferentialPolicy`]:
//! the permissive default matches the historical behavior of allowing the
//! delete and leaving dangling references behind.

use crate::{
    core::ReferentialPolicy,
    entities::{Product, Purchase, Sale, SaleReturn, product, purchase, sale, sale_return},
    errors::{Error, Result},
};
use sea_orm::{PaginatorTrait, QueryOrder, Set, prelude::*};
use tracing::info;

/// Retrieves all products, ordered by identifier.
pub async fn list_products(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    Product::find()
        .order_by_asc(product::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific product by its unique ID.
pub async fn get_product_by_id(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Option<product::Model>> {
    Product::find_by_id(product_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a specific product by its name, returning None if not found.
///
/// Callers that identify products by name (the sale entry form does) resolve
/// the name here before handing an id to the mutation path.
pub async fn get_product_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<product::Model>> {
    Product::find()
        .filter(product::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new product with the specified catalogue fields.
///
/// # Errors
/// Returns an error if the product name is empty or whitespace-only, or if
/// the database insert fails.
pub async fn create_product(
    db: &DatabaseConnection,
    name: String,
    kind: String,
    size: String,
    pr: String,
) -> Result<product::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Product name cannot be empty".to_string(),
        });
    }

    let product = product::ActiveModel {
        name: Set(name.trim().to_string()),
        kind: Set(kind),
        size: Set(size),
        pr: Set(pr),
        ..Default::default()
    };
    let created = product.insert(db).await?;
    info!(product_id = created.id, name = %created.name, "created product");
    Ok(created)
}

/// Replaces all catalogue fields of an existing product.
///
/// # Errors
/// Returns [`Error::NotFound`] if the product does not exist, or an error if
/// the new name is empty.
pub async fn update_product(
    db: &DatabaseConnection,
    product_id: i64,
    name: String,
    kind: String,
    size: String,
    pr: String,
) -> Result<product::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Product name cannot be empty".to_string(),
        });
    }

    let existing = Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "product",
            id: product_id,
        })?;

    let mut active: product::ActiveModel = existing.into();
    active.name = Set(name.trim().to_string());
    active.kind = Set(kind);
    active.size = Set(size);
    active.pr = Set(pr);
    active.update(db).await.map_err(Into::into)
}

/// Deletes a product according to the given referential policy.
///
/// Under [`ReferentialPolicy::Permissive`] the delete succeeds even while
/// purchases, sales, or returns still reference the product, leaving their
/// foreign keys dangling. Under [`ReferentialPolicy::Restrict`] such a delete
/// fails with [`Error::StillReferenced`].
pub async fn delete_product(
    db: &DatabaseConnection,
    product_id: i64,
    policy: ReferentialPolicy,
) -> Result<()> {
    let product = Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "product",
            id: product_id,
        })?;

    if policy == ReferentialPolicy::Restrict {
        let purchases = Purchase::find()
            .filter(purchase::Column::ProductId.eq(product_id))
            .count(db)
            .await?;
        let sales = Sale::find()
            .filter(sale::Column::ProductId.eq(product_id))
            .count(db)
            .await?;
        let returns = SaleReturn::find()
            .filter(sale_return::Column::ProductId.eq(product_id))
            .count(db)
            .await?;
        if purchases + sales + returns > 0 {
            return Err(Error::StillReferenced {
                entity: "product",
                id: product_id,
            });
        }
    }

    product.delete(db).await?;
    info!(product_id, "deleted product");
    Ok(())
}
