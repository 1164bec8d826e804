//! Return entity - Represents stock brought back by a customer.
//!
//! The module is named `sale_return` because `return` is a Rust keyword.
//! Returns mirror sales in shape but do not feed back into stock-on-hand;
//! they only contribute to the customer's returns total.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Return database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "returns")]
pub struct Model {
    /// Unique identifier for the return
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Calendar date the return was accepted
    pub date: Date,
    /// Number of units returned, always positive
    pub amount: i32,
    /// Price credited per unit
    pub unit_price: f64,
    /// ID of the product that was returned
    pub product_id: i64,
    /// ID of the customer who returned it
    pub customer_id: i64,
}

impl Model {
    /// Monetary total of this return, derived as `amount * unit_price`.
    #[must_use]
    pub fn total(&self) -> f64 {
        f64::from(self.amount) * self.unit_price
    }
}

/// Defines relationships between Return and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each return belongs to one product
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,
    /// Each return belongs to one customer
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id"
    )]
    Customer,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
