//! # Command Module
//!
//! One function per UI action. Each command locks the state it needs,
//! delegates to `apothek-core`, and returns a serializable response or
//! an [`crate::error::ApiError`].

pub mod cart;
pub mod invoice;
pub mod report;
