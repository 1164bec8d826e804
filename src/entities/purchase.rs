//! Purchase entity - Represents inbound stock bought from a vendor.
//!
//! Each purchase records a date, a quantity, and a unit price against exactly
//! one product and one vendor. The monetary total is derived, never stored.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Purchase database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "purchases")]
pub struct Model {
    /// Unique identifier for the purchase
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Calendar date the purchase was made
    pub date: Date,
    /// Number of units bought, always positive
    pub quantity: i32,
    /// Price paid per unit
    pub unit_price: f64,
    /// ID of the product this purchase adds stock for
    pub product_id: i64,
    /// ID of the vendor the stock was bought from
    pub vendor_id: i64,
}

impl Model {
    /// Monetary total of this purchase, derived as `quantity * unit_price`.
    #[must_use]
    pub fn total(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

/// Defines relationships between Purchase and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each purchase belongs to one product
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,
    /// Each purchase belongs to one vendor
    #[sea_orm(
        belongs_to = "super::vendor::Entity",
        from = "Column::VendorId",
        to = "super::vendor::Column::Id"
    )]
    Vendor,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<super::vendor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vendor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
