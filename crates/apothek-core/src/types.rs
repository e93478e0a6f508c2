//! # Domain Types
//!
//! Core domain types used throughout Apothek.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌────────────────┐  ┌───────────────────┐  ┌───────────────────┐  │
//! │  │  CatalogItem   │  │ TransactionRecord │  │ InvoiceSubmission │  │
//! │  │  ────────────  │  │ ───────────────── │  │ ───────────────── │  │
//! │  │  id            │  │  document_id      │  │  counterparty_id  │  │
//! │  │  name          │  │  counterparty_*   │  │  date             │  │
//! │  │  unit_price    │  │  item_*           │  │  items[]          │  │
//! │  │  stock_quantity│  │  quantity/price   │  │  discount_percent │  │
//! │  │  expiry_date   │  │  line_cost        │  │  final_total      │  │
//! │  └────────────────┘  └───────────────────┘  └───────────────────┘  │
//! │                                                                     │
//! │  ┌────────────────┐  ┌───────────────────┐                         │
//! │  │  Counterparty  │  │     Percent       │                         │
//! │  │  ────────────  │  │  ───────────────  │                         │
//! │  │  id, name      │  │  Decimal percent  │                         │
//! │  └────────────────┘  │  10 = 10%         │                         │
//! │                      └───────────────────┘                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Catalog items, counterparties, and transaction records are supplied
//! by the external fetch layer and are read-only to this crate.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Percent
// =============================================================================

/// A percentage value, e.g. a uniform invoice discount.
///
/// ## Range Policy
/// The value is stored exactly as supplied. Negative values and values
/// above 100 are NOT clamped: the discount field in the invoice form
/// has no range validation, and the computation layer mirrors that.
/// Callers that want a bounded discount must bound it themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Percent(Decimal);

impl Percent {
    /// Wraps a percentage value (10 means 10%).
    #[inline]
    pub const fn new(value: Decimal) -> Self {
        Percent(value)
    }

    /// Zero percent.
    #[inline]
    pub const fn zero() -> Self {
        Percent(Decimal::ZERO)
    }

    /// Returns the raw percentage value.
    #[inline]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Returns the fraction of an amount retained after the discount:
    /// `1 − percent/100`. A 100% discount retains 0.
    pub fn retained_factor(&self) -> Decimal {
        Decimal::ONE - self.0 / Decimal::ONE_HUNDRED
    }

    /// Checks whether this is a full 100% discount (retained factor 0).
    pub fn is_full(&self) -> bool {
        self.0 == Decimal::ONE_HUNDRED
    }
}

impl Default for Percent {
    fn default() -> Self {
        Percent::zero()
    }
}

// =============================================================================
// Catalog Item
// =============================================================================

/// A medicine available for sale, as listed in the catalog snapshot.
///
/// Supplied once per cart session by the external fetch layer and never
/// mutated by the core. Lines copy `unit_price` and `stock_quantity`
/// at selection time (snapshot pattern), so a later catalog refresh
/// does not silently rewrite in-flight cart data.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogItem {
    /// Opaque identifier assigned by the external catalog.
    pub id: String,

    /// Display name shown in the medicine picker.
    pub name: String,

    /// Current unit price.
    #[ts(as = "String")]
    pub unit_price: Money,

    /// Units currently in stock; the ceiling for cart quantities.
    pub stock_quantity: i64,

    /// Expiry date, if tracked for this item.
    #[ts(as = "Option<String>")]
    pub expiry_date: Option<NaiveDate>,

    /// Whether the item is sellable (stock-outs get archived).
    pub is_active: bool,
}

// =============================================================================
// Counterparty
// =============================================================================

/// The customer (sales) or supplier (purchases) party to a transaction.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Counterparty {
    /// Opaque identifier from the external party listing.
    pub id: String,

    /// Display name.
    pub name: String,
}

// =============================================================================
// Transaction Record
// =============================================================================

/// One sold or purchased unit line from the transaction feed.
///
/// Rows arrive already scoped to a date window and optional
/// counterparty by the external query layer; the aggregator only
/// groups and sums them.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TransactionRecord {
    /// Parent document (invoice or purchase) identifier.
    pub document_id: String,

    /// Document date.
    #[ts(as = "String")]
    pub date: NaiveDate,

    /// Counterparty identifier.
    pub counterparty_id: String,

    /// Counterparty display name at time of the transaction.
    pub counterparty_name: String,

    /// Item identifier.
    pub item_id: String,

    /// Item display name at time of the transaction.
    pub item_name: String,

    /// Units moved on this line.
    pub quantity: i64,

    /// Unit price on this line.
    #[ts(as = "String")]
    pub unit_price: Money,

    /// Total cost of this line.
    #[ts(as = "String")]
    pub line_cost: Money,
}

// =============================================================================
// Invoice Submission
// =============================================================================

/// One line of a finalized invoice submission.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmissionItem {
    /// Selected catalog item.
    pub catalog_id: String,

    /// Committed quantity (already clamped to the stock ceiling).
    pub quantity: i64,

    /// Unit price frozen at selection time.
    #[ts(as = "String")]
    pub unit_price: Money,
}

/// The finalized order payload handed to the external invoice-creation
/// collaborator. Produced by [`crate::cart::Cart::finalize`]; the core
/// performs no network call itself.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvoiceSubmission {
    /// Customer the invoice is billed to.
    pub counterparty_id: String,

    /// Order date (today at finalization; not user-editable).
    #[ts(as = "String")]
    pub date: NaiveDate,

    /// Committed lines.
    pub items: Vec<SubmissionItem>,

    /// Uniform discount percent applied to the subtotal.
    #[ts(as = "String")]
    pub discount_percent: Percent,

    /// Subtotal after discount, unrounded.
    #[ts(as = "String")]
    pub final_total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
