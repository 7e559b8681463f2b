use poem::http::StatusCode;

use business::domain::cart::errors::CartError;

use crate::api::envelope::ResponseEnvelope;
use crate::api::error::IntoErrorResponse;

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, ResponseEnvelope) {
        let status = match &self {
            CartError::UserIdEmpty => StatusCode::BAD_REQUEST,
            CartError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, ResponseEnvelope::failure(self.to_string()))
    }
}
