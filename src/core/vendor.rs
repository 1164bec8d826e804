//! Vendor business logic - CRUD for the suppliers stock is purchased from.

use crate::{
    core::ReferentialPolicy,
    entities::{Purchase, Vendor, purchase, vendor},
    errors::{Error, Result},
};
use sea_orm::{PaginatorTrait, QueryOrder, Set, prelude::*};
use tracing::info;

/// Retrieves all vendors, ordered by identifier.
pub async fn list_vendors(db: &DatabaseConnection) -> Result<Vec<vendor::Model>> {
    Vendor::find()
        .order_by_asc(vendor::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific vendor by its unique ID.
pub async fn get_vendor_by_id(
    db: &DatabaseConnection,
    vendor_id: i64,
) -> Result<Option<vendor::Model>> {
    Vendor::find_by_id(vendor_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a specific vendor by name, returning None if not found.
pub async fn get_vendor_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<vendor::Model>> {
    Vendor::find()
        .filter(vendor::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new vendor with the specified contact details.
///
/// # Errors
/// Returns an error if the vendor name is empty or whitespace-only.
pub async fn create_vendor(
    db: &DatabaseConnection,
    name: String,
    address: String,
    email: String,
    phone: String,
) -> Result<vendor::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Vendor name cannot be empty".to_string(),
        });
    }

    let vendor = vendor::ActiveModel {
        name: Set(name.trim().to_string()),
        address: Set(address),
        email: Set(email),
        phone: Set(phone),
        ..Default::default()
    };
    let created = vendor.insert(db).await?;
    info!(vendor_id = created.id, name = %created.name, "created vendor");
    Ok(created)
}

/// Replaces all contact fields of an existing vendor.
///
/// # Errors
/// Returns [`Error::NotFound`] if the vendor does not exist.
pub async fn update_vendor(
    db: &DatabaseConnection,
    vendor_id: i64,
    name: String,
    address: String,
    email: String,
    phone: String,
) -> Result<vendor::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Vendor name cannot be empty".to_string(),
        });
    }

    let existing = Vendor::find_by_id(vendor_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "vendor",
            id: vendor_id,
        })?;

    let mut active: vendor::ActiveModel = existing.into();
    active.name = Set(name.trim().to_string());
    active.address = Set(address);
    active.email = Set(email);
    active.phone = Set(phone);
    active.update(db).await.map_err(Into::into)
}

/// Deletes a vendor according to the given referential policy.
///
/// See [`crate::core::product::delete_product`] for the policy semantics;
/// only purchases can reference a vendor.
pub async fn delete_vendor(
    db: &DatabaseConnection,
    vendor_id: i64,
    policy: ReferentialPolicy,
) -> Result<()> {
    let vendor = Vendor::find_by_id(vendor_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "vendor",
            id: vendor_id,
        })?;

    if policy == ReferentialPolicy::Restrict {
        let purchases = Purchase::find()
            .filter(purchase::Column::VendorId.eq(vendor_id))
            .count(db)
            .await?;
        if purchases > 0 {
            return Err(Error::StillReferenced {
                entity: "vendor",
                id: vendor_id,
            });
        }
    }

    vendor.delete(db).await?;
    info!(vendor_id, "deleted vendor");
    Ok(())
}
