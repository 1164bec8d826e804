//! Product entity - Represents a sellable item in the inventory.
//!
//! Each product has a name, a kind (the catalogue category), a size, and a
//! price-reference code. Stock-on-hand is never stored here; it is derived
//! from the product's purchases and sales on every read.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-readable name of the product (e.g., "Olive Oil")
    pub name: String,
    /// Catalogue category of the product (e.g., "oil", "grain")
    pub kind: String,
    /// Package size (e.g., "5L", "25kg")
    pub size: String,
    /// Price-reference code used by the sales team
    pub pr: String,
}

/// Defines relationships between Product and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One product has many purchases
    #[sea_orm(has_many = "super::purchase::Entity")]
    Purchases,
    /// One product has many sales
    #[sea_orm(has_many = "super::sale::Entity")]
    Sales,
    /// One product has many returns
    #[sea_orm(has_many = "super::sale_return::Entity")]
    Returns,
}

impl Related<super::purchase::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Purchases.def()
    }
}

impl Related<super::sale::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sales.def()
    }
}

impl Related<super::sale_return::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Returns.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
