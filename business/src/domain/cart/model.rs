use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;

/// Product snapshot attached to a cart line.
#[derive(Debug, Clone, PartialEq)]
pub struct CartProduct {
    pub id: Uuid,
    pub name: String,
    pub price: BigDecimal,
    /// Vendor selling the product.
    pub seller_id: Uuid,
}

/// A single line of a customer's cart.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: Uuid,
    pub user_id: UserId,
    pub product: CartProduct,
    pub quantity: u32,
    pub added_at: DateTime<Utc>,
}

impl Cart {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        product: CartProduct,
        quantity: u32,
        added_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            product,
            quantity,
            added_at,
        }
    }

    pub fn line_total(&self) -> BigDecimal {
        self.product.price.clone() * BigDecimal::from(self.quantity)
    }
}
