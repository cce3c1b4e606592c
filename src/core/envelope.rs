use serde::Serialize;
use serde_json::Value;

pub const OFFICIAL_EMAIL: &str = "operator@bfhl.dev";

/// Fixed response shape shared by every endpoint.
///
/// Success carries `data` (or nothing, for health), failure carries `error`.
#[derive(Debug, Clone, Serialize)]
pub struct ApiEnvelope {
    pub is_success: bool,
    pub official_email: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiEnvelope {
    pub fn success(data: Value) -> Self {
        Self {
            is_success: true,
            official_email: OFFICIAL_EMAIL,
            data: Some(data),
            error: None,
        }
    }

    pub fn healthy() -> Self {
        Self {
            is_success: true,
            official_email: OFFICIAL_EMAIL,
            data: None,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            official_email: OFFICIAL_EMAIL,
            data: None,
            error: Some(message.into()),
        }
    }
}
