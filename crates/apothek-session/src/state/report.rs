//! # Report State
//!
//! Holds the currently loaded report (sales or purchase). A report is
//! built whole from a record feed and replaced whole on every reload;
//! only its expansion state mutates in place.

use std::sync::{Arc, Mutex};

use apothek_core::report::Report;

/// Shared, mutex-guarded report state. `None` until a report is
/// generated for the first time.
#[derive(Debug, Clone, Default)]
pub struct ReportState {
    report: Arc<Mutex<Option<Report>>>,
}

impl ReportState {
    /// Creates empty report state.
    pub fn new() -> Self {
        ReportState::default()
    }

    /// Replaces the loaded report.
    pub fn set(&self, report: Report) {
        let mut slot = self.report.lock().expect("Report mutex poisoned");
        *slot = Some(report);
    }

    /// Drops the loaded report.
    pub fn clear(&self) {
        let mut slot = self.report.lock().expect("Report mutex poisoned");
        *slot = None;
    }

    /// Executes a function with read access to the loaded report.
    /// Returns `None` when no report has been generated yet.
    pub fn with_report<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&Report) -> R,
    {
        let slot = self.report.lock().expect("Report mutex poisoned");
        slot.as_ref().map(f)
    }

    /// Executes a function with write access to the loaded report.
    /// Returns `None` when no report has been generated yet.
    pub fn with_report_mut<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut Report) -> R,
    {
        let mut slot = self.report.lock().expect("Report mutex poisoned");
        slot.as_mut().map(f)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
