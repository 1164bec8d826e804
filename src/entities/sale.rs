//! Sale entity - Represents outbound stock sold to a customer.
//!
//! Each sale records a date, an amount, and a unit price against exactly one
//! product and one customer. Sales are the only records validated against
//! stock-on-hand before they are committed.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sale database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sales")]
pub struct Model {
    /// Unique identifier for the sale
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Calendar date the sale was made
    pub date: Date,
    /// Number of units sold, always positive
    pub amount: i32,
    /// Price charged per unit
    pub unit_price: f64,
    /// ID of the product this sale draws stock from
    pub product_id: i64,
    /// ID of the customer the stock was sold to
    pub customer_id: i64,
}

impl Model {
    /// Monetary total of this sale, derived as `amount * unit_price`.
    #[must_use]
    pub fn total(&self) -> f64 {
        f64::from(self.amount) * self.unit_price
    }
}

/// Defines relationships between Sale and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each sale belongs to one product
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,
    /// Each sale belongs to one customer
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
