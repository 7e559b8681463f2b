use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use poem_openapi::Object;
use uuid::Uuid;

use business::domain::cart::aggregate::CartAggregate;
use business::domain::cart::model::Cart;

use crate::api::envelope::ResponseEnvelope;

/// Renders an amount with at least two fraction digits, never rounding
/// away extra precision.
pub fn format_amount(amount: &BigDecimal) -> String {
    let (_, scale) = amount.as_bigint_and_exponent();
    if scale < 2 {
        amount.with_scale(2).to_plain_string()
    } else {
        amount.to_plain_string()
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CartItemResponse {
    /// Cart line identifier
    pub id: Uuid,
    /// Product in the cart
    pub product_id: Uuid,
    /// Product name
    pub product_name: String,
    /// Unit price as a decimal string
    pub price: String,
    /// Vendor selling the product
    pub seller_id: Uuid,
    /// Number of units
    pub quantity: u32,
    /// Unit price times quantity as a decimal string
    pub line_total: String,
    /// When the product was added to the cart
    pub added_at: DateTime<Utc>,
}

impl From<Cart> for CartItemResponse {
    fn from(cart: Cart) -> Self {
        let line_total = format_amount(&cart.line_total());
        Self {
            id: cart.id,
            product_id: cart.product.id,
            product_name: cart.product.name,
            price: format_amount(&cart.product.price),
            seller_id: cart.product.seller_id,
            quantity: cart.quantity,
            line_total,
            added_at: cart.added_at,
        }
    }
}

/// Body of the cart retrieval endpoint: the envelope fields followed by the
/// cart lines and the total amount.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CartResponse {
    #[oai(flatten)]
    pub envelope: ResponseEnvelope,
    /// Cart lines, oldest first (always present, possibly empty)
    pub carts: Vec<CartItemResponse>,
    /// Total amount as a decimal string with at least two fraction digits
    pub total_cart_amount: String,
}

impl Default for CartResponse {
    fn default() -> Self {
        Self::new(ResponseEnvelope::default(), CartAggregate::default())
    }
}

impl CartResponse {
    pub fn new(envelope: ResponseEnvelope, aggregate: CartAggregate) -> Self {
        let (items, total) = aggregate.into_parts();
        Self {
            envelope,
            carts: items.into_iter().map(CartItemResponse::from).collect(),
            total_cart_amount: format_amount(&total),
        }
    }

    /// Response for a request that failed before any cart could be loaded.
    pub fn failed(envelope: ResponseEnvelope) -> Self {
        Self::new(envelope, CartAggregate::default())
    }
}
