use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::CartEntity;

pub struct CartRepositoryPostgres {
    pool: PgPool,
}

impl CartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Cart>, RepositoryError> {
        let entities = sqlx::query_as::<_, CartEntity>(
            r#"SELECT c.id, c.user_id, c.quantity, c.added_at,
                p.id AS product_id, p.name AS product_name, p.price AS product_price, p.seller_id
            FROM carts c
            JOIN products p ON p.id = c.product_id
            WHERE c.user_id = $1
            ORDER BY c.added_at ASC, c.id ASC"#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to query carts for user {user_id}: {e}");
            RepositoryError::DatabaseError
        })?;

        entities.into_iter().map(CartEntity::into_domain).collect()
    }
}
