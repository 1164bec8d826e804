//! Customer business logic - CRUD for the buyers that sales, returns, and
//! receipts are recorded against.

use crate::{
    core::ReferentialPolicy,
    entities::{Customer, Receipt, Sale, SaleReturn, customer, receipt, sale, sale_return},
    errors::{Error, Result},
};
use sea_orm::{PaginatorTrait, QueryOrder, Set, prelude::*};
use tracing::info;

/// Retrieves all customers, ordered by identifier.
pub async fn list_customers(db: &DatabaseConnection) -> Result<Vec<customer::Model>> {
    Customer::find()
        .order_by_asc(customer::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific customer by its unique ID.
pub async fn get_customer_by_id(
    db: &DatabaseConnection,
    customer_id: i64,
) -> Result<Option<customer::Model>> {
    Customer::find_by_id(customer_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a specific customer by name, returning None if not found.
pub async fn get_customer_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<customer::Model>> {
    Customer::find()
        .filter(customer::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new customer. Phone and address are optional.
///
/// # Errors
/// Returns an error if the customer name is empty or whitespace-only.
pub async fn create_customer(
    db: &DatabaseConnection,
    name: String,
    phone: Option<String>,
    address: Option<String>,
) -> Result<customer::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Customer name cannot be empty".to_string(),
        });
    }

    let customer = customer::ActiveModel {
        name: Set(name.trim().to_string()),
        phone: Set(phone),
        address: Set(address),
        ..Default::default()
    };
    let created = customer.insert(db).await?;
    info!(customer_id = created.id, name = %created.name, "created customer");
    Ok(created)
}

/// Replaces all fields of an existing customer.
///
/// # Errors
/// Returns [`Error::NotFound`] if the customer does not exist.
pub async fn update_customer(
    db: &DatabaseConnection,
    customer_id: i64,
    name: String,
    phone: Option<String>,
    address: Option<String>,
) -> Result<customer::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Customer name cannot be empty".to_string(),
        });
    }

    let existing = Customer::find_by_id(customer_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "customer",
            id: customer_id,
        })?;

    let mut active: customer::ActiveModel = existing.into();
    active.name = Set(name.trim().to_string());
    active.phone = Set(phone);
    active.address = Set(address);
    active.update(db).await.map_err(Into::into)
}

/// Deletes a customer according to the given referential policy.
///
/// Sales, returns, and receipts can all reference a customer; under
/// [`ReferentialPolicy::Restrict`] any of them blocks the delete.
pub async fn delete_customer(
    db: &DatabaseConnection,
    customer_id: i64,
    policy: ReferentialPolicy,
) -> Result<()> {
    let customer = Customer::find_by_id(customer_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "customer",
            id: customer_id,
        })?;

    if policy == ReferentialPolicy::Restrict {
        let sales = Sale::find()
            .filter(sale::Column::CustomerId.eq(customer_id))
            .count(db)
            .await?;
        let returns = SaleReturn::find()
            .filter(sale_return::Column::CustomerId.eq(customer_id))
            .count(db)
            .await?;
        let receipts = Receipt::find()
            .filter(receipt::Column::CustomerId.eq(customer_id))
            .count(db)
            .await?;
        if sales + returns + receipts > 0 {
            return Err(Error::StillReferenced {
                entity: "customer",
                id: customer_id,
            });
        }
    }

    customer.delete(db).await?;
    info!(customer_id, "deleted customer");
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::receipt::add_receipt;
    use crate::test_utils::{create_test_customer, setup_test_db};

    #[tokio::test]
    async fn test_create_customer_with_optional_fields() -> Result<()> {
        let db = setup_test_db().await?;

        let customer = create_customer(&db, "Dina".to_string(), None, None).await?;
        assert_eq!(customer.name, "Dina");
        assert!(customer.phone.is_none());
        assert!(customer.address.is_none());

        let full = create_customer(
            &db,
            "Sami".to_string(),
            Some("555-0123".to_string()),
            Some("4 Market St".to_string()),
        )
        .await?;
        assert_eq!(full.phone.as_deref(), Some("555-0123"));
        Ok(())
    }

    #[tokio::test]
    async fn test_update_customer_full_replace() -> Result<()> {
        let db = setup_test_db().await?;
        let customer = create_test_customer(&db, "Dina").await?;

        // A full-field replace can clear previously set optional fields
        let updated =
            update_customer(&db, customer.id, "Dina K".to_string(), None, None).await?;
        assert_eq!(updated.name, "Dina K");
        assert!(updated.phone.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_customer_policies() -> Result<()> {
        let db = setup_test_db().await?;
        let customer = create_test_customer(&db, "Dina").await?;
        add_receipt(&db, customer.id, "2024-01-05", 120.0).await?;

        let blocked = delete_customer(&db, customer.id, ReferentialPolicy::Restrict).await;
        assert!(matches!(blocked, Err(Error::StillReferenced { .. })));

        delete_customer(&db, customer.id, ReferentialPolicy::Permissive).await?;
        assert!(get_customer_by_id(&db, customer.id).await?.is_none());
        Ok(())
    }
}
