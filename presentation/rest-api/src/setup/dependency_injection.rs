use std::sync::Arc;

use business::application::cart::get_cart::GetCartUseCaseImpl;
use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryPostgres;

use crate::api::cart::routes::CartApi;
use crate::api::health::routes::HealthApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub cart_api: CartApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);
        let cart_repository = Arc::new(CartRepositoryPostgres::new(pool));

        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            repository: cart_repository,
            logger,
        });

        Self {
            health_api: HealthApi,
            cart_api: CartApi::new(get_cart_use_case),
        }
    }
}
