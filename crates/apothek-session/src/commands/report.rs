//! # Report Commands
//!
//! Commands behind the sales and purchase report views: load a record
//! feed into a grouped report, toggle the expanded row, and fetch the
//! expanded detail (with the pre-discount derivation for invoices).

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use apothek_core::money::Money;
use apothek_core::report::{derive_pre_discount, Report, ReportGroup, ReportSummary};
use apothek_core::types::{Percent, TransactionRecord};

use crate::error::ApiError;
use crate::state::ReportState;

/// Grouped report plus grand totals, as the report table renders it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub groups: Vec<ReportGroup>,
    pub summary: ReportSummary,
    pub expanded_id: Option<String>,
}

impl From<&Report> for ReportResponse {
    fn from(report: &Report) -> Self {
        ReportResponse {
            groups: report.groups().to_vec(),
            summary: report.summary().clone(),
            expanded_id: report.expanded_id().map(str::to_string),
        }
    }
}

/// Expanded-row detail for one document. For sales groups the
/// pre-discount amounts are derived from the post-discount total.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDetailResponse {
    pub group: ReportGroup,
    pub discount_percent: Percent,
    pub amount_before_discount: Money,
    pub discount_amount: Money,
}

/// Builds a report from a record feed already scoped by the external
/// query layer ("Generate Report"). Replaces any previously loaded
/// report and collapses the expansion.
pub fn load_report(
    state: &ReportState,
    records: Vec<TransactionRecord>,
) -> Result<ReportResponse, ApiError> {
    debug!(records = records.len(), "load_report command");

    let report = Report::build(records)?;
    let response = ReportResponse::from(&report);
    state.set(report);

    Ok(response)
}

/// Toggles the expanded document row: same id collapses, different id
/// switches.
pub fn toggle_group(state: &ReportState, document_id: &str) -> Result<ReportResponse, ApiError> {
    debug!(document_id, "toggle_group command");

    state
        .with_report_mut(|report| {
            report.toggle_expanded(document_id);
            ReportResponse::from(&*report)
        })
        .ok_or_else(|| ApiError::report("No report loaded"))
}

/// Fetches the expanded detail for one document, deriving the
/// pre-discount amounts from the supplied invoice discount.
///
/// ## Errors
/// `REPORT_ERROR` when no report is loaded or the discount is 100%
/// (the pre-discount amount is then unrecoverable), `NOT_FOUND` for an
/// unknown document id.
pub fn group_detail(
    state: &ReportState,
    document_id: &str,
    discount_percent: Decimal,
) -> Result<GroupDetailResponse, ApiError> {
    debug!(document_id, %discount_percent, "group_detail command");

    let group = state
        .with_report(|report| report.get(document_id).cloned())
        .ok_or_else(|| ApiError::report("No report loaded"))?
        .ok_or_else(|| ApiError::not_found("Document", document_id))?;

    let discount = Percent::new(discount_percent);
    let derived = derive_pre_discount(&group, discount)?;

    Ok(GroupDetailResponse {
        group,
        discount_percent: discount,
        amount_before_discount: derived.amount_before_discount,
        discount_amount: derived.discount_amount,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
