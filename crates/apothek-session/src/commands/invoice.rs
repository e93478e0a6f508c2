//! # Invoice Commands
//!
//! Finalizes the composed cart into the submission payload handed to
//! the external invoice-creation collaborator. The session layer never
//! performs the network call itself; it only produces the payload.

use chrono::Utc;
use tracing::{debug, info};

use apothek_core::types::{Counterparty, InvoiceSubmission};

use crate::error::ApiError;
use crate::state::CartState;

/// Finalizes the cart for the selected customer ("Generate Invoice").
///
/// Stamps today's date (the date field in the form is read-only) and
/// validates that a customer is chosen and every line has a medicine
/// selected. The cart is left intact so the caller can retry after a
/// failed submission; a successful submission is followed by
/// [`crate::commands::cart::reset_cart`].
pub fn finalize_invoice(
    state: &CartState,
    counterparty: &Counterparty,
) -> Result<InvoiceSubmission, ApiError> {
    debug!(counterparty_id = %counterparty.id, "finalize_invoice command");

    let submission = state.with_session_mut(|session| {
        session.cart.set_counterparty(counterparty.id.clone());
        session.cart.finalize(Utc::now().date_naive())
    })?;

    info!(
        customer = %counterparty.name,
        lines = submission.items.len(),
        total = %submission.final_total,
        "Invoice finalized"
    );

    Ok(submission)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::{add_line, select_catalog_item, set_discount, set_quantity};
    use crate::error::ErrorCode;
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

    fn customer() -> Counterparty {
        Counterparty {
            id: "c1".to_string(),
            name: "John Doe".to_string(),
        }
    }

    #[test]
    fn test_finalize_produces_submission() {
        let state = test_state();
        select_catalog_item(&state, 0, "m1").unwrap();
        set_quantity(&state, 0, 10).unwrap(); // 50
        add_line(&state);
        select_catalog_item(&state, 1, "m2").unwrap();
        set_quantity(&state, 1, 15).unwrap(); // 150
        set_discount(&state, dec!(10));

        let submission = finalize_invoice(&state, &customer()).unwrap();

        assert_eq!(submission.counterparty_id, "c1");
        assert_eq!(submission.date, Utc::now().date_naive());
        assert_eq!(submission.items.len(), 2);
        assert_eq!(submission.final_total, Money::from_major(180));
    }

    #[test]
    fn test_finalize_with_unselected_line_fails() {
        let state = test_state();
        select_catalog_item(&state, 0, "m1").unwrap();
        add_line(&state); // left empty

        let err = finalize_invoice(&state, &customer()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_finalize_without_counterparty_fails() {
        let state = test_state();
        select_catalog_item(&state, 0, "m1").unwrap();

        let nobody = Counterparty {
            id: "  ".to_string(),
            name: String::new(),
        };
        let err = finalize_invoice(&state, &nobody).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_cart_is_left_intact_after_finalize() {
        let state = test_state();
        select_catalog_item(&state, 0, "m1").unwrap();
        finalize_invoice(&state, &customer()).unwrap();

        let lines = state.with_session(|session| session.cart.line_count());
        assert_eq!(lines, 1);
    }
}
