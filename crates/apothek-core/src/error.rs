//! # Error Types
//!
//! Domain-specific error types for apothek-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  apothek-core errors (this file)                                    │
//! │  ├── CoreError        - Domain rule failures                        │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  apothek-session errors (separate crate)                            │
//! │  └── ApiError         - What the UI sees (serialized)               │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → ApiError → UI message          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (index, id, value)
//! 3. Errors are enum variants, never String
//! 4. Quantity above stock is NOT an error - it is clamped (see cart)

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// All of these are local, recoverable conditions surfaced to the
/// calling UI layer as user-facing messages; none are fatal.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The requested id is not in the supplied catalog snapshot.
    ///
    /// ## When This Occurs
    /// - A stale selection after the catalog was refreshed
    /// - The item was archived between fetch and selection
    #[error("Catalog item not found: {0}")]
    CatalogItemNotFound(String),

    /// A cart operation addressed a line that does not exist.
    #[error("No cart line at index {0}")]
    LineIndexOutOfBounds(usize),

    /// Pre-discount recovery was asked for a 100% discount, where the
    /// post-discount amount carries no information about the original.
    #[error("Cannot recover the pre-discount amount for a 100% discount")]
    DivisionUndefined,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when user input or externally supplied rows do not meet
/// requirements. Malformed feed rows fail fast here rather than
/// propagating garbage into totals.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// A cart line has no catalog item selected yet.
    #[error("Line {index} has no medicine selected")]
    MissingSelection { index: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// An externally supplied row failed shape validation.
    #[error("{entity} record {index} is malformed: {reason}")]
    Malformed {
        entity: String,
        index: usize,
        reason: String,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::CatalogItemNotFound("m9".to_string());
        assert_eq!(err.to_string(), "Catalog item not found: m9");

        let err = CoreError::LineIndexOutOfBounds(3);
        assert_eq!(err.to_string(), "No cart line at index 3");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "counterparty".to_string(),
        };
        assert_eq!(err.to_string(), "counterparty is required");

        let err = ValidationError::MissingSelection { index: 1 };
        assert_eq!(err.to_string(), "Line 1 has no medicine selected");

        let err = ValidationError::Malformed {
            entity: "transaction".to_string(),
            index: 4,
            reason: "negative quantity".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "transaction record 4 is malformed: negative quantity"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "counterparty".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
