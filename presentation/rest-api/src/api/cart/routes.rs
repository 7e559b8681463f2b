use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::cart::aggregate::CartAggregate;
use business::domain::cart::errors::CartError;
use business::domain::cart::use_cases::get_cart::{GetCartParams, GetCartUseCase};

use crate::api::cart::dto::CartResponse;
use crate::api::envelope::ResponseEnvelope;
use crate::api::error::IntoErrorResponse;
use crate::api::tags::ApiTags;

const CART_FETCHED: &str = "cart.fetched";

pub struct CartApi {
    get_cart_use_case: Arc<dyn GetCartUseCase>,
}

impl CartApi {
    pub fn new(get_cart_use_case: Arc<dyn GetCartUseCase>) -> Self {
        Self { get_cart_use_case }
    }
}

/// Cart API
///
/// Read access to customer carts.
#[OpenApi]
impl CartApi {
    /// Fetch a customer's cart
    ///
    /// Returns every line in the customer's cart together with the total
    /// amount. Failures are reported through the envelope `status` and
    /// `message` fields with an empty cart.
    #[oai(path = "/carts", method = "get", tag = "ApiTags::Carts")]
    async fn fetch(
        &self,
        /// Customer whose cart is fetched
        user_id: Query<Option<String>>,
    ) -> FetchCartResponse {
        // A missing id is reported like a blank one, inside the cart envelope
        let user_id = user_id.0.unwrap_or_default();
        let result = self
            .get_cart_use_case
            .execute(GetCartParams { user_id })
            .await;

        into_fetch_response(result)
    }
}

fn into_fetch_response(result: Result<CartAggregate, CartError>) -> FetchCartResponse {
    match result {
        Ok(aggregate) => FetchCartResponse::Ok(Json(CartResponse::new(
            ResponseEnvelope::success(CART_FETCHED),
            aggregate,
        ))),
        Err(err) => {
            let (status, envelope) = err.into_error_response();
            let body = Json(CartResponse::failed(envelope));
            match status.as_u16() {
                400 => FetchCartResponse::BadRequest(body),
                _ => FetchCartResponse::InternalError(body),
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum FetchCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<CartResponse>),
    #[oai(status = 500)]
    InternalError(Json<CartResponse>),
}
