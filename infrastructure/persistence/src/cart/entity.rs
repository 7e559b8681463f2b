use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::cart::model::{Cart, CartProduct};
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

/// A `carts` row joined with its `products` row.
#[derive(Debug, FromRow)]
pub struct CartEntity {
    pub id: Uuid,
    pub user_id: String,
    pub quantity: i32,
    pub added_at: DateTime<Utc>,
    pub product_id: Uuid,
    pub product_name: String,
    pub product_price: BigDecimal,
    pub seller_id: Uuid,
}

impl CartEntity {
    pub fn into_domain(self) -> Result<Cart, RepositoryError> {
        let quantity = u32::try_from(self.quantity).map_err(|_| {
            tracing::warn!("Cart {} has negative quantity {}", self.id, self.quantity);
            RepositoryError::Persistence
        })?;

        Ok(Cart::from_repository(
            self.id,
            UserId::new(self.user_id),
            CartProduct {
                id: self.product_id,
                name: self.product_name,
                price: self.product_price,
                seller_id: self.seller_id,
            },
            quantity,
            self.added_at,
        ))
    }
}
