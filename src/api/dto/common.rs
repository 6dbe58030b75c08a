//! Common API DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standard API response envelope
///
/// Every REST endpoint wraps its payload in this shape.
/// Success: `{"success": true, "data": {...}}`;
/// failure: `{"success": false, "error": "description"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` if the request succeeded
    pub success: bool,
    /// Payload; `null` on error
    pub data: Option<T>,
    /// Error description; `null` on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Request field the error is about, when one can be named
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            field: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            field: None,
        }
    }

    pub fn error_with_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            field: Some(field.into()),
        }
    }
}

/// Empty response for operations without return data
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmptyData {}
