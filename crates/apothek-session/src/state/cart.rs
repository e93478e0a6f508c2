//! # Cart State
//!
//! Holds the invoice being composed together with the catalog snapshot
//! it selects from.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>`: commands may be invoked
//! from any thread of the surrounding shell, but only one mutation runs
//! at a time, so every cart operation is atomic with respect to the
//! others.

use std::sync::{Arc, Mutex};

use apothek_core::cart::Cart;
use apothek_core::catalog::CatalogSnapshot;

/// One invoice-composition session: the catalog snapshot supplied at
/// session start, plus the cart built against it.
#[derive(Debug, Clone, Default)]
pub struct CartSession {
    /// Snapshot the medicine picker offers. Read-only to the cart;
    /// replaced whole on refresh.
    pub catalog: CatalogSnapshot,

    /// The invoice under composition.
    pub cart: Cart,
}

impl CartSession {
    /// Starts a session against a catalog snapshot, with a fresh cart.
    pub fn new(catalog: CatalogSnapshot) -> Self {
        CartSession {
            catalog,
            cart: Cart::new(),
        }
    }
}

/// Shared, mutex-guarded cart session state.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    session: Arc<Mutex<CartSession>>,
}

impl CartState {
    /// Creates session state over a catalog snapshot.
    pub fn new(catalog: CatalogSnapshot) -> Self {
        CartState {
            session: Arc::new(Mutex::new(CartSession::new(catalog))),
        }
    }

    /// Executes a function with read access to the session.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartSession) -> R,
    {
        let session = self.session.lock().expect("Cart mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session.
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CartSession) -> R,
    {
        let mut session = self.session.lock().expect("Cart mutex poisoned");
        f(&mut session)
    }

    /// Swaps in a refreshed catalog snapshot.
    ///
    /// In-flight lines keep the unit price and stock ceiling frozen at
    /// their selection time; only a subsequent re-selection picks up
    /// the refreshed values. Committed line data is never rewritten.
    pub fn replace_catalog(&self, catalog: CatalogSnapshot) {
        let mut session = self.session.lock().expect("Cart mutex poisoned");
        session.catalog = catalog;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
