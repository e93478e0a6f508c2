//! # Cart Commands
//!
//! Commands behind the invoice-composition form.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                   │
//! │                                                                     │
//! │  ┌──────────┐     ┌──────────┐     ┌────────────┐                   │
//! │  │  Empty   │────►│ Composing│────►│ Finalized  │                   │
//! │  │  Cart    │     │          │     │ Submission │                   │
//! │  └──────────┘     └──────────┘     └────────────┘                   │
//! │                        │            (invoice.rs)                    │
//! │                   add_line                                          │
//! │                   select_catalog_item                               │
//! │                   set_quantity                                      │
//! │                   remove_line                                       │
//! │                   set_discount                                      │
//! │                        │                                            │
//! │                        ▼                                            │
//! │                   reset_cart ────────────────► (back to empty)      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use apothek_core::cart::{CartTotals, LineItem};
use apothek_core::types::Percent;

use crate::error::ApiError;
use crate::state::{CartSession, CartState};

/// Cart response including lines and derived totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<LineItem>,
    pub totals: CartTotals,
}

impl From<&CartSession> for CartResponse {
    fn from(session: &CartSession) -> Self {
        CartResponse {
            lines: session.cart.lines.clone(),
            totals: CartTotals::from(&session.cart),
        }
    }
}

/// Gets the current cart contents with derived totals.
pub fn get_cart(state: &CartState) -> CartResponse {
    debug!("get_cart command");
    state.with_session(|session| CartResponse::from(session))
}

/// Appends an empty line ("+ Add another medicine").
pub fn add_line(state: &CartState) -> CartResponse {
    debug!("add_line command");

    state.with_session_mut(|session| {
        session.cart.add_line();
        CartResponse::from(&*session)
    })
}

/// Chooses a medicine for a line, freezing price and stock ceiling.
///
/// ## Errors
/// `NOT_FOUND` when the id is not in the session's catalog snapshot
/// (e.g. a stale pick after a refresh), `CART_ERROR` for a bad index.
pub fn select_catalog_item(
    state: &CartState,
    line_index: usize,
    catalog_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(line_index, catalog_id, "select_catalog_item command");

    state.with_session_mut(|session| {
        session
            .cart
            .select_catalog_item(line_index, &session.catalog, catalog_id)?;
        Ok(CartResponse::from(&*session))
    })
}

/// Sets a line quantity. Values above the frozen stock ceiling are
/// capped, not rejected; the response carries the effective quantity.
pub fn set_quantity(
    state: &CartState,
    line_index: usize,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(line_index, quantity, "set_quantity command");

    state.with_session_mut(|session| {
        let effective = session.cart.set_quantity(line_index, quantity)?;
        if effective != quantity {
            debug!(requested = quantity, effective, "Quantity clamped");
        }
        Ok(CartResponse::from(&*session))
    })
}

/// Removes a line from the cart.
pub fn remove_line(state: &CartState, line_index: usize) -> Result<CartResponse, ApiError> {
    debug!(line_index, "remove_line command");

    state.with_session_mut(|session| {
        session.cart.remove_line(line_index)?;
        Ok(CartResponse::from(&*session))
    })
}

/// Sets the uniform discount percent.
///
/// The value is applied exactly as typed; out-of-range discounts are
/// logged but not clamped (the form imposes no range either).
pub fn set_discount(state: &CartState, percent: Decimal) -> CartResponse {
    debug!(%percent, "set_discount command");

    if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
        warn!(%percent, "Discount outside [0, 100] accepted as-is");
    }

    state.with_session_mut(|session| {
        session.cart.set_discount(Percent::new(percent));
        CartResponse::from(&*session)
    })
}

/// Clears the cart back to a single empty line ("Reset").
pub fn reset_cart(state: &CartState) -> CartResponse {
    debug!("reset_cart command");

    state.with_session_mut(|session| {
        session.cart.reset();
        CartResponse::from(&*session)
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use apothek_core::catalog::CatalogSnapshot;
    use apothek_core::money::Money;
    use apothek_core::types::CatalogItem;
    use rust_decimal_macros::dec;

    fn test_state() -> CartState {
        let catalog = CatalogSnapshot::new(vec![
            CatalogItem {
                id: "m1".to_string(),
                name: "Paracetamol".to_string(),
                unit_price: Money::from_major(5),
                stock_quantity: 10,
                expiry_date: None,
                is_active: true,
            },
            CatalogItem {
                id: "m2".to_string(),
                name: "Amoxicillin".to_string(),
                unit_price: Money::from_major(10),
                stock_quantity: 30,
                expiry_date: None,
                is_active: true,
            },
        ])
        .unwrap();

        CartState::new(catalog)
    }

    #[test]
    fn test_compose_flow() {
        let state = test_state();

        let response = get_cart(&state);
        assert_eq!(response.totals.line_count, 1);

        select_catalog_item(&state, 0, "m1").unwrap();
        let response = set_quantity(&state, 0, 15).unwrap();
        assert_eq!(response.lines[0].quantity, 10); // capped at stock
        assert_eq!(response.totals.subtotal, Money::from_major(50));

        let response = add_line(&state);
        assert_eq!(response.totals.line_count, 2);
        assert_eq!(response.totals.subtotal, Money::from_major(50));

        select_catalog_item(&state, 1, "m2").unwrap();
        let response = set_quantity(&state, 1, 15).unwrap();
        assert_eq!(response.totals.subtotal, Money::from_major(200));

        let response = set_discount(&state, dec!(10));
        assert_eq!(response.totals.final_total, Money::from_major(180));

        let response = remove_line(&state, 0).unwrap();
        assert_eq!(response.totals.subtotal, Money::from_major(150));
        assert_eq!(response.totals.final_total, Money::from_major(135));
    }

    #[test]
    fn test_select_unknown_id_is_not_found() {
        let state = test_state();
        let err = select_catalog_item(&state, 0, "m9").unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::NotFound);
    }

    #[test]
    fn test_bad_index_is_cart_error() {
        let state = test_state();
        let err = set_quantity(&state, 7, 1).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::CartError);
    }

    #[test]
    fn test_out_of_range_discount_is_accepted() {
        let state = test_state();
        select_catalog_item(&state, 0, "m1").unwrap();
        set_quantity(&state, 0, 10).unwrap(); // 50

        let response = set_discount(&state, dec!(-50));
        assert_eq!(response.totals.final_total, Money::from_major(75));
    }

    #[test]
    fn test_response_shape_for_the_ui() {
        let state = test_state();
        select_catalog_item(&state, 0, "m1").unwrap();

        let json = serde_json::to_value(get_cart(&state)).unwrap();
        assert!(json["lines"].is_array());
        assert_eq!(json["lines"][0]["name"], "Paracetamol");
        assert_eq!(json["totals"]["subtotal"], "5");
    }

    #[test]
    fn test_reset_cart() {
        let state = test_state();
        select_catalog_item(&state, 0, "m1").unwrap();
        set_discount(&state, dec!(5));

        let response = reset_cart(&state);
        assert_eq!(response.totals.line_count, 1);
        assert!(response.totals.subtotal.is_zero());
        assert_eq!(response.totals.discount_percent, Percent::zero());
    }
}
