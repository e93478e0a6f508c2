//! # apothek-core: Pure Business Logic for Apothek
//!
//! This crate is the **heart** of the pharmacy administration tool. It
//! contains the order-composition and report-aggregation logic as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Apothek Architecture                           │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                  Pharmacy Frontend (React)                  │   │
//! │  │   Invoice Form ──► Sales Report ──► Purchase Report ──► …   │   │
//! │  └───────────────────────────┬─────────────────────────────────┘   │
//! │                              │ command calls                        │
//! │  ┌───────────────────────────▼─────────────────────────────────┐   │
//! │  │                    apothek-session                          │   │
//! │  │     CartState, ReportState, command functions, ApiError     │   │
//! │  └───────────────────────────┬─────────────────────────────────┘   │
//! │                              │                                      │
//! │  ┌───────────────────────────▼─────────────────────────────────┐   │
//! │  │               ★ apothek-core (THIS CRATE) ★                 │   │
//! │  │                                                             │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌───────┐  │   │
//! │  │  │  money  │ │  cart   │ │ report  │ │ catalog │ │ stats │  │   │
//! │  │  │  Money  │ │  Cart   │ │ group   │ │ filters │ │ month │  │   │
//! │  │  │ Percent │ │LineItem │ │summarize│ │ expiry  │ │ sums  │  │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └─────────┘ └───────┘  │   │
//! │  │                                                             │   │
//! │  │    NO I/O • NO CLOCK • NO NETWORK • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! │                              │                                      │
//! │        catalog snapshots, record feeds, and submissions are         │
//! │        exchanged with an external HTTP fetch layer (out of scope)   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Decimal-backed `Money` (unrounded until display)
//! - [`types`] - Domain types (`CatalogItem`, `TransactionRecord`, …)
//! - [`cart`] - Cart Engine: stock-clamped lines, derived totals
//! - [`report`] - Report Aggregator: grouping, summaries, expansion
//! - [`catalog`] - Catalog snapshot and list-view helpers
//! - [`stats`] - Dashboard roll-ups
//! - [`error`] - Domain error types
//! - [`validation`] - Fail-fast input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output - always
//! 2. **No I/O**: network, storage, and even clock reads are FORBIDDEN
//!    here; dates are passed in by the caller
//! 3. **Exact Money**: decimal arithmetic, rounding only at display
//! 4. **Clamp, don't reject**: a quantity above stock is capped, never
//!    an error
//!
//! ## Example Usage
//!
//! ```rust
//! use apothek_core::cart::Cart;
//! use apothek_core::catalog::CatalogSnapshot;
//! use apothek_core::money::Money;
//! use apothek_core::types::CatalogItem;
//!
//! let catalog = CatalogSnapshot::new(vec![CatalogItem {
//!     id: "m1".to_string(),
//!     name: "Paracetamol".to_string(),
//!     unit_price: Money::from_major(5),
//!     stock_quantity: 10,
//!     expiry_date: None,
//!     is_active: true,
//! }])
//! .unwrap();
//!
//! let mut cart = Cart::new();
//! cart.select_catalog_item(0, &catalog, "m1").unwrap();
//!
//! // Requesting 15 with 10 in stock silently caps at 10
//! assert_eq!(cart.set_quantity(0, 15).unwrap(), 10);
//! assert_eq!(cart.subtotal(), Money::from_major(50));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod report;
pub mod stats;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use apothek_core::Money` instead of
// `use apothek_core::money::Money`

pub use cart::{Cart, CartTotals, LineItem};
pub use catalog::CatalogSnapshot;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use report::{derive_pre_discount, group, summarize, Report, ReportGroup, ReportSummary};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Stock level at or below which an active item appears on the
/// dashboard's reorder shortlist.
pub const LOW_STOCK_THRESHOLD: i64 = 20;

/// Days ahead the dashboard looks when listing items near expiry.
pub const NEAR_EXPIRY_WINDOW_DAYS: i64 = 30;
