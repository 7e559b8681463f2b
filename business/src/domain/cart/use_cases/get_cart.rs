use async_trait::async_trait;

use crate::domain::cart::aggregate::CartAggregate;
use crate::domain::cart::errors::CartError;

pub struct GetCartParams {
    /// Raw caller identity as received from the transport layer.
    pub user_id: String,
}

#[async_trait]
pub trait GetCartUseCase: Send + Sync {
    async fn execute(&self, params: GetCartParams) -> Result<CartAggregate, CartError>;
}
