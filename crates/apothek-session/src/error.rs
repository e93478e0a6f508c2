//! # API Error Type
//!
//! Unified error type for session commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Apothek                            │
//! │                                                                     │
//! │  UI                           Session Layer                         │
//! │  ──                           ─────────────                         │
//! │                                                                     │
//! │  select_catalog_item("m9")                                          │
//! │         │                                                           │
//! │         ▼                                                           │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                             │  │
//! │  │  Result<T, ApiError>                                          │  │
//! │  │         │                                                     │  │
//! │  │         ▼                                                     │  │
//! │  │  CoreError::CatalogItemNotFound ─────► ApiError ─────────────►│  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │                                                                     │
//! │  { code: "NOT_FOUND", message: "Catalog item not found: m9" }       │
//! │  rendered by the UI as a user-facing message                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All of these are local, recoverable conditions; none abort the
//! session. Network and storage failures never reach this type - they
//! belong to the external fetch layer.

use serde::Serialize;

use apothek_core::CoreError;

/// API error returned from session commands.
///
/// ## Serialization
/// This is what the UI receives when a command fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Catalog item not found: m9"
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
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (stale catalog selection, unknown document)
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Cart operation failed
    CartError,

    /// Report operation failed
    ReportError,

    /// Unexpected internal error
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

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a report error.
    pub fn report(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ReportError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::CatalogItemNotFound(id) => ApiError::not_found("Catalog item", &id),
            CoreError::LineIndexOutOfBounds(index) => ApiError::new(
                ErrorCode::CartError,
                format!("No cart line at index {}", index),
            ),
            CoreError::DivisionUndefined => ApiError::report(
                "Cannot derive the pre-discount amount for a 100% discount",
            ),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use apothek_core::ValidationError;

    #[test]
    fn test_not_found_mapping() {
        let api: ApiError = CoreError::CatalogItemNotFound("m9".to_string()).into();
        assert_eq!(api.code, ErrorCode::NotFound);
        assert_eq!(api.message, "Catalog item not found: m9");
    }

    #[test]
    fn test_validation_mapping() {
        let core: CoreError = ValidationError::MissingSelection { index: 2 }.into();
        let api: ApiError = core.into();
        assert_eq!(api.code, ErrorCode::ValidationError);
        assert!(api.message.contains("Line 2"));
    }

    #[test]
    fn test_division_undefined_mapping() {
        let api: ApiError = CoreError::DivisionUndefined.into();
        assert_eq!(api.code, ErrorCode::ReportError);
    }

    #[test]
    fn test_display() {
        let api = ApiError::not_found("Invoice", "42");
        assert_eq!(api.to_string(), "[NotFound] Invoice not found: 42");
    }
}
