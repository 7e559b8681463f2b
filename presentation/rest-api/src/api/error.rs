use poem::http::StatusCode;

use crate::api::envelope::ResponseEnvelope;

/// Maps a domain error onto an HTTP status and a failed envelope.
pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, ResponseEnvelope);
}
