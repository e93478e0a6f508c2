//! # Validation Module
//!
//! Fail-fast validators for externally supplied data.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Frontend forms                                            │
//! │  ├── Basic format checks (empty, numeric)                           │
//! │  └── Immediate user feedback                                        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE                                               │
//! │  ├── Snapshot/feed shape validation (no negative prices,            │
//! │  │   no negative quantities, ids present)                           │
//! │  └── Finalization requirements (counterparty set)                   │
//! │                                                                     │
//! │  A malformed row fails here with a descriptive error instead of     │
//! │  silently poisoning every total derived from it.                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::{CatalogItem, TransactionRecord};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Identifier Validators
// =============================================================================

/// Validates a counterparty identifier for invoice finalization.
///
/// ## Rules
/// - Must not be empty (after trimming)
pub fn validate_counterparty_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "counterparty".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Snapshot / Feed Validators
// =============================================================================

/// Validates a catalog item on snapshot construction.
///
/// ## Rules
/// - Id and name must be present
/// - Unit price must not be negative
/// - Stock must not be negative
pub fn validate_catalog_item(index: usize, item: &CatalogItem) -> ValidationResult<()> {
    let malformed = |reason: &str| ValidationError::Malformed {
        entity: "catalog".to_string(),
        index,
        reason: reason.to_string(),
    };

    if item.id.trim().is_empty() {
        return Err(malformed("empty id"));
    }
    if item.name.trim().is_empty() {
        return Err(malformed("empty name"));
    }
    if item.unit_price.is_negative() {
        return Err(malformed("negative unit price"));
    }
    if item.stock_quantity < 0 {
        return Err(malformed("negative stock quantity"));
    }

    Ok(())
}

/// Validates a transaction record on report construction.
///
/// ## Rules
/// - Document id must be present (it is the grouping key)
/// - Quantity must not be negative
/// - Unit price and line cost must not be negative
pub fn validate_transaction_record(
    index: usize,
    record: &TransactionRecord,
) -> ValidationResult<()> {
    let malformed = |reason: &str| ValidationError::Malformed {
        entity: "transaction".to_string(),
        index,
        reason: reason.to_string(),
    };

    if record.document_id.trim().is_empty() {
        return Err(malformed("empty document id"));
    }
    if record.quantity < 0 {
        return Err(malformed("negative quantity"));
    }
    if record.unit_price.is_negative() {
        return Err(malformed("negative unit price"));
    }
    if record.line_cost.is_negative() {
        return Err(malformed("negative line cost"));
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
