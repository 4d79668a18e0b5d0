//! # API Error Type
//!
//! Unified error type for Tauri commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Patungan                               │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  invoke('update_bill_field', { field: 'totalBill', value: '100' })     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<BillView, ApiError>                                      │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Unknown field name? ──► ApiError { UNKNOWN_FIELD } ────────────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ── BillView (errors map INSIDE the payload) ──────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  NOTE: per-field validation messages are NOT ApiErrors. They ride      │
//! │  inside BillView.errors and never fail the command, because invalid    │
//! │  text still feeds the calculation (advisory-only semantics).           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tauri Error Serialization
//! Tauri requires errors to be serializable. We implement `Serialize`
//! and include both a machine-readable `code` and human-readable `message`.

use patungan_core::UnknownField;
use serde::Serialize;

/// API error returned from Tauri commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "UNKNOWN_FIELD",
///   "message": "unknown bill field: grandTotal"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The frontend named a field that isn't part of the bill form
    UnknownField,

    /// Input validation failed
    ValidationError,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts an unrecognized field name into an API error.
impl From<UnknownField> for ApiError {
    fn from(err: UnknownField) -> Self {
        ApiError::new(ErrorCode::UnknownField, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_field_conversion() {
        let err: ApiError = "grandTotal".parse::<patungan_core::BillField>().unwrap_err().into();
        assert!(matches!(err.code, ErrorCode::UnknownField));
        assert_eq!(err.message, "unknown bill field: grandTotal");
    }

    #[test]
    fn test_error_code_serializes_screaming_snake() {
        let err = ApiError::validation("nope");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"VALIDATION_ERROR\""));
    }
}
