//! # Cart Engine
//!
//! Maintains the editable line-item list for a single invoice being
//! composed, enforces stock-bound quantities, and derives all totals.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                  │
//! │                                                                     │
//! │  UI Action               Engine Operation        State Change      │
//! │  ─────────               ────────────────        ────────────      │
//! │                                                                     │
//! │  "+ Add medicine" ──────► add_line() ───────────► lines.push(empty) │
//! │                                                                     │
//! │  Pick medicine ─────────► select_catalog_item() ► freeze price,     │
//! │                                                   stock; qty = 1    │
//! │                                                                     │
//! │  Type quantity ─────────► set_quantity() ───────► clamp to          │
//! │                                                   [1, stock]        │
//! │                                                                     │
//! │  Remove row ────────────► remove_line() ────────► lines.remove(i)   │
//! │                                                                     │
//! │  Type discount ─────────► set_discount() ───────► stored as-is      │
//! │                                                                     │
//! │  "Generate Invoice" ────► finalize() ───────────► submission        │
//! │                                                   payload           │
//! │                                                                     │
//! │  Totals are DERIVED on every read - never cached, never stale.      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Clamp Policy
//! A quantity above the stock ceiling is NOT an error. The effective
//! quantity is `min(max(requested, 1), available_stock)`: typing 15
//! with 10 in stock silently caps at 10. Oversell is impossible by
//! construction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::CatalogSnapshot;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{InvoiceSubmission, Percent, SubmissionItem};
use crate::validation::validate_counterparty_id;

// =============================================================================
// Line Item
// =============================================================================

/// One medicine row within a cart.
///
/// ## Snapshot Pattern
/// `name`, `unit_price`, and `available_stock` are frozen copies taken
/// from the catalog at selection time. A later catalog refresh does not
/// touch them; only re-selecting the line does.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Selected catalog item, `None` while the row is still empty.
    pub catalog_id: Option<String>,

    /// Item name at selection time (frozen).
    pub name: String,

    /// Unit price at selection time (frozen).
    #[ts(as = "String")]
    pub unit_price: Money,

    /// Stock ceiling at selection time (frozen).
    pub available_stock: i64,

    /// Quantity on this row, kept within `[1, available_stock]` by
    /// [`Cart::set_quantity`]. An unselected row has ceiling 0.
    pub quantity: i64,
}

impl LineItem {
    /// A fresh, unselected row.
    fn empty() -> Self {
        LineItem {
            catalog_id: None,
            name: String::new(),
            unit_price: Money::zero(),
            available_stock: 0,
            quantity: 1,
        }
    }

    /// Whether a catalog item has been chosen for this row.
    pub fn is_selected(&self) -> bool {
        self.catalog_id.is_some()
    }

    /// Derived line total: `quantity × unit_price`.
    /// An empty row contributes zero.
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The in-progress, not-yet-submitted invoice being composed.
///
/// ## Invariants
/// - Quantities never exceed the stock frozen on their line
/// - `subtotal` and `final_total` are computed on access, so no caller
///   can observe a total that is stale with respect to the lines or
///   the discount
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    /// Rows in display order. Starts with a single empty row.
    pub lines: Vec<LineItem>,

    /// Selected customer, unset until chosen.
    pub counterparty_id: Option<String>,

    /// Uniform discount on the subtotal. Stored exactly as supplied;
    /// out-of-range values are not clamped here.
    pub discount: Percent,
}

impl Cart {
    /// Creates a cart with one empty line, no discount, no customer.
    pub fn new() -> Self {
        Cart {
            lines: vec![LineItem::empty()],
            counterparty_id: None,
            discount: Percent::zero(),
        }
    }

    fn line_mut(&mut self, index: usize) -> CoreResult<&mut LineItem> {
        self.lines
            .get_mut(index)
            .ok_or(CoreError::LineIndexOutOfBounds(index))
    }

    /// Appends an empty row. Always succeeds; totals are unaffected
    /// because an empty row contributes zero.
    pub fn add_line(&mut self) {
        self.lines.push(LineItem::empty());
    }

    /// Chooses a catalog item for the row at `index`, freezing its
    /// price and stock ceiling and resetting the quantity to 1.
    ///
    /// ## Errors
    /// - [`CoreError::LineIndexOutOfBounds`] for an invalid row
    /// - [`CoreError::CatalogItemNotFound`] when `catalog_id` is absent
    ///   from the snapshot (e.g. a stale selection after a refresh)
    pub fn select_catalog_item(
        &mut self,
        index: usize,
        catalog: &CatalogSnapshot,
        catalog_id: &str,
    ) -> CoreResult<()> {
        // Look up before borrowing the line mutably
        let item = catalog
            .get(catalog_id)
            .ok_or_else(|| CoreError::CatalogItemNotFound(catalog_id.to_string()))?
            .clone();

        let line = self.line_mut(index)?;
        line.catalog_id = Some(item.id);
        line.name = item.name;
        line.unit_price = item.unit_price;
        line.available_stock = item.stock_quantity;
        line.quantity = 1;

        Ok(())
    }

    /// Sets the quantity on the row at `index`, clamped to
    /// `[1, available_stock]`. Returns the effective quantity.
    ///
    /// Requests above stock are capped, not rejected. With a ceiling of
    /// 0 (unselected row) the effective quantity is 0.
    pub fn set_quantity(&mut self, index: usize, requested: i64) -> CoreResult<i64> {
        let line = self.line_mut(index)?;

        let effective = requested.max(1).min(line.available_stock);
        line.quantity = effective;

        Ok(effective)
    }

    /// Deletes the row at `index`. The engine imposes no floor on the
    /// number of rows; callers decide whether to keep a minimum of one.
    pub fn remove_line(&mut self, index: usize) -> CoreResult<()> {
        if index >= self.lines.len() {
            return Err(CoreError::LineIndexOutOfBounds(index));
        }
        self.lines.remove(index);

        Ok(())
    }

    /// Stores the discount exactly as supplied.
    pub fn set_discount(&mut self, discount: Percent) {
        self.discount = discount;
    }

    /// Sets the customer the invoice will be billed to.
    pub fn set_counterparty(&mut self, id: impl Into<String>) {
        self.counterparty_id = Some(id.into());
    }

    /// Clears the cart back to one empty line, discount 0, no customer.
    pub fn reset(&mut self) {
        *self = Cart::new();
    }

    /// Number of rows, selected or not.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total quantity across selected rows.
    pub fn total_quantity(&self) -> i64 {
        self.lines
            .iter()
            .filter(|line| line.is_selected())
            .map(|line| line.quantity)
            .sum()
    }

    /// Derived subtotal: exact sum of the line totals.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(|line| line.line_total()).sum()
    }

    /// Derived final total: `subtotal × (1 − discount/100)`, unrounded.
    pub fn final_total(&self) -> Money {
        self.subtotal().discounted_by(self.discount)
    }

    /// Produces the immutable submission payload for the external
    /// invoice-creation collaborator.
    ///
    /// `date` is the order date the caller stamps in (today; the form
    /// field is read-only).
    ///
    /// ## Errors
    /// [`ValidationError::Required`] when no counterparty is set, and
    /// [`ValidationError::MissingSelection`] for the first row without
    /// a catalog item.
    pub fn finalize(&self, date: NaiveDate) -> CoreResult<InvoiceSubmission> {
        let counterparty_id = match &self.counterparty_id {
            Some(id) => {
                validate_counterparty_id(id)?;
                id.clone()
            }
            None => {
                return Err(ValidationError::Required {
                    field: "counterparty".to_string(),
                }
                .into())
            }
        };

        let mut items = Vec::with_capacity(self.lines.len());
        for (index, line) in self.lines.iter().enumerate() {
            let catalog_id = line
                .catalog_id
                .clone()
                .ok_or(ValidationError::MissingSelection { index })?;

            items.push(SubmissionItem {
                catalog_id,
                quantity: line.quantity,
                unit_price: line.unit_price,
            });
        }

        Ok(InvoiceSubmission {
            counterparty_id,
            date,
            items,
            discount_percent: self.discount,
            final_total: self.final_total(),
        })
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Derived cart totals for UI responses.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    #[ts(as = "String")]
    pub subtotal: Money,
    #[ts(as = "String")]
    pub discount_percent: Percent,
    #[ts(as = "String")]
    pub final_total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            subtotal: cart.subtotal(),
            discount_percent: cart.discount,
            final_total: cart.final_total(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
