use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::domain::cart::aggregate::CartAggregate;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get_cart::{GetCartParams, GetCartUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::UserId;

pub struct GetCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self, params: GetCartParams) -> Result<CartAggregate, CartError> {
        let user_id = UserId::parse(&params.user_id).ok_or(CartError::UserIdEmpty)?;

        self.logger
            .info(&format!("Fetching cart for user: {}", user_id));

        let items = self.repository.find_by_user(&user_id).await.map_err(|e| {
            self.logger
                .error(&format!("Failed to load cart for user {}: {}", user_id, e));
            CartError::Repository(e)
        })?;

        // Sum of line totals, no discounts applied
        let total = items
            .iter()
            .fold(BigDecimal::zero(), |acc, line| acc + line.line_total());

        self.logger.info(&format!(
            "Cart for user {} has {} lines totalling {}",
            user_id,
            items.len(),
            total
        ));
        Ok(CartAggregate::new(items, total))
    }
}
