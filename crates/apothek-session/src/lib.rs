//! # Apothek Session Library
//!
//! The command surface the pharmacy UI binds to. Commands lock the
//! state they need, delegate to `apothek-core`, and surface failures
//! as serializable [`error::ApiError`] values.
//!
//! ## Module Organization
//! ```text
//! apothek_session/
//! ├── lib.rs          ◄─── You are here (wiring + tracing setup)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Cart session (catalog snapshot + cart)
//! │   └── report.rs   ◄─── Currently loaded report
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── invoice.rs  ◄─── Invoice finalization
//! │   └── report.rs   ◄─── Report load/toggle/detail commands
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## No Ambient State
//! Nothing in this crate reads globals, environment, or shared
//! storage. Catalog snapshots and record feeds are passed in by the
//! external fetch layer; commands receive the state they operate on
//! explicitly. The only clock read is stamping the order date at
//! finalization.

pub mod commands;
pub mod error;
pub mod state;

use tracing::Level;
use tracing_subscriber::EnvFilter;

pub use error::{ApiError, ErrorCode};
pub use state::{CartSession, CartState, ReportState};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=apothek=trace` - Show trace for apothek crates only
/// - Default: INFO level, DEBUG for apothek crates
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,apothek=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}
