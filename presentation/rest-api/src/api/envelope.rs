use poem_openapi::{Enum, Object};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
#[oai(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Failure,
}

/// Status and message fields shared by every API response.
///
/// Embedded (flattened) into each response body rather than wrapping it, so
/// clients read `status` and `message` next to the payload fields.
#[derive(Debug, Clone, PartialEq, Eq, Object)]
pub struct ResponseEnvelope {
    /// Outcome of the request
    pub status: ResponseStatus,
    /// Message code describing the outcome (i18n key)
    pub message: String,
}

impl Default for ResponseEnvelope {
    fn default() -> Self {
        Self {
            status: ResponseStatus::Failure,
            message: String::new(),
        }
    }
}

impl ResponseEnvelope {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Failure,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }
}
