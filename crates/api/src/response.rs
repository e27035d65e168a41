//! Shared response envelope types for API handlers.
//!
//! Form actions answer with a `{ "success": bool, "message"?: string }`
//! status that the entry page's scripts inspect; read endpoints use the
//! `{ "data": ... }` envelope.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "success": bool, "message"?: string }` status returned by form actions.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn ok_with(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }

    pub fn rejected() -> Self {
        Self {
            success: false,
            message: None,
        }
    }
}
