//! # State Module
//!
//! Per-session state for the pharmacy UI.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything, we use
//! separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: each state type has a single
//!    responsibility
//! 2. **Clearer Command Signatures**: commands declare exactly what
//!    state they need
//! 3. **Reduced Contention**: the report view never blocks on the cart
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                               │
//! │                                                                     │
//! │  ┌─────────────────────────┐   ┌─────────────────────────────────┐  │
//! │  │       CartState         │   │          ReportState            │  │
//! │  │                         │   │                                 │  │
//! │  │  Arc<Mutex<             │   │  Arc<Mutex<                     │  │
//! │  │    CartSession {        │   │    Option<Report>               │  │
//! │  │      catalog snapshot,  │   │  >>                             │  │
//! │  │      cart               │   │                                 │  │
//! │  │    }>>                  │   │  (replaced whole per load)      │  │
//! │  └─────────────────────────┘   └─────────────────────────────────┘  │
//! │                                                                     │
//! │  THREAD SAFETY: both are protected by Arc<Mutex<T>>; each UI        │
//! │  mutation is applied atomically with respect to the others.         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod report;

pub use cart::{CartSession, CartState};
pub use report::ReportState;
