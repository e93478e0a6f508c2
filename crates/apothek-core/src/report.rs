//! # Report Aggregator
//!
//! Turns a flat list of transaction records (sales or purchases,
//! already scoped to a date window and optional counterparty by the
//! external query layer) into per-document groups and a grand total,
//! and tracks which single document is expanded in the report view.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Report Aggregation                               │
//! │                                                                     │
//! │  TransactionRecord feed (flat, one row per sold/purchased line)     │
//! │        │                                                            │
//! │        ▼                                                            │
//! │  Report::build ── validate each row ── fail fast on malformed       │
//! │        │                                                            │
//! │        ├──► group()      one ReportGroup per document id,           │
//! │        │                 first-seen document order,                 │
//! │        │                 member rows in input order                 │
//! │        │                                                            │
//! │        └──► summarize()  grand totals over ALL rows,                │
//! │                          independent of grouping                    │
//! │                                                                     │
//! │  Groups are recomputed from scratch per input set - never patched.  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Percent, TransactionRecord};
use crate::validation::validate_transaction_record;

// =============================================================================
// Report Group
// =============================================================================

/// The per-document (invoice or purchase) rollup of transaction lines.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportGroup {
    /// Parent document identifier.
    pub document_id: String,

    /// Document date (from the first member row).
    #[ts(as = "String")]
    pub date: NaiveDate,

    /// Counterparty identifier (from the first member row).
    pub counterparty_id: String,

    /// Counterparty display name (from the first member row).
    pub counterparty_name: String,

    /// Member rows, in feed order.
    pub records: Vec<TransactionRecord>,

    /// Sum of member quantities.
    pub total_quantity: i64,

    /// Sum of member line costs.
    #[ts(as = "String")]
    pub total_amount: Money,
}

/// Grand totals across the whole filtered record set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportSummary {
    pub total_quantity: i64,
    #[ts(as = "String")]
    pub total_amount: Money,
}

/// Pre-discount amounts recovered from a post-discount group total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PreDiscount {
    #[ts(as = "String")]
    pub amount_before_discount: Money,
    #[ts(as = "String")]
    pub discount_amount: Money,
}

// =============================================================================
// Pure Aggregation
// =============================================================================

/// Partitions records by document id.
///
/// Document order follows first appearance in the input; member rows
/// keep their input order. Deterministic: the same input list always
/// yields the same groups in the same order.
pub fn group(records: &[TransactionRecord]) -> Vec<ReportGroup> {
    let mut groups: Vec<ReportGroup> = Vec::new();
    let mut index_by_document: HashMap<String, usize> = HashMap::new();

    for record in records {
        let index = match index_by_document.get(&record.document_id) {
            Some(&index) => index,
            None => {
                index_by_document.insert(record.document_id.clone(), groups.len());
                groups.push(ReportGroup {
                    document_id: record.document_id.clone(),
                    date: record.date,
                    counterparty_id: record.counterparty_id.clone(),
                    counterparty_name: record.counterparty_name.clone(),
                    records: Vec::new(),
                    total_quantity: 0,
                    total_amount: Money::zero(),
                });
                groups.len() - 1
            }
        };

        let group = &mut groups[index];
        group.total_quantity += record.quantity;
        group.total_amount += record.line_cost;
        group.records.push(record.clone());
    }

    groups
}

/// Grand totals over all records, independent of grouping.
///
/// For any input, this equals the sum of the totals of
/// [`group`]\(records\).
pub fn summarize(records: &[TransactionRecord]) -> ReportSummary {
    ReportSummary {
        total_quantity: records.iter().map(|record| record.quantity).sum(),
        total_amount: records.iter().map(|record| record.line_cost).sum(),
    }
}

/// Recovers the pre-discount amount from a group's post-discount total:
/// `before = total / (1 − discount/100)`.
///
/// ## Errors
/// [`CoreError::DivisionUndefined`] for a 100% discount - the divisor
/// is zero and the original amount is unrecoverable. Callers must
/// guard this case before presenting the derivation.
pub fn derive_pre_discount(group: &ReportGroup, discount: Percent) -> CoreResult<PreDiscount> {
    let factor = discount.retained_factor();
    if factor.is_zero() {
        return Err(CoreError::DivisionUndefined);
    }

    let amount_before_discount = Money::new(group.total_amount.amount() / factor);

    Ok(PreDiscount {
        amount_before_discount,
        discount_amount: amount_before_discount - group.total_amount,
    })
}

// =============================================================================
// Report
// =============================================================================

/// A built report: groups, grand summary, and the expand/collapse state
/// of the report view (at most one document expanded at a time).
#[derive(Debug, Clone)]
pub struct Report {
    groups: Vec<ReportGroup>,
    summary: ReportSummary,
    expanded: Option<String>,
}

impl Report {
    /// Builds a report from the raw feed, failing fast on malformed
    /// rows (empty document id, negative quantity or amounts) instead
    /// of carrying garbage into the totals.
    pub fn build(records: Vec<TransactionRecord>) -> CoreResult<Self> {
        for (index, record) in records.iter().enumerate() {
            validate_transaction_record(index, record)?;
        }

        Ok(Report {
            groups: group(&records),
            summary: summarize(&records),
            expanded: None,
        })
    }

    /// Groups in first-seen document order.
    pub fn groups(&self) -> &[ReportGroup] {
        &self.groups
    }

    /// Grand totals across the whole record set.
    pub fn summary(&self) -> &ReportSummary {
        &self.summary
    }

    /// Looks up a group by document id.
    pub fn get(&self, document_id: &str) -> Option<&ReportGroup> {
        self.groups
            .iter()
            .find(|group| group.document_id == document_id)
    }

    /// Currently expanded document id, if any.
    pub fn expanded_id(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    /// The expanded group, if the expanded id resolves to one.
    pub fn expanded_group(&self) -> Option<&ReportGroup> {
        self.expanded.as_deref().and_then(|id| self.get(id))
    }

    /// Toggles the expansion target: the same id collapses, a
    /// different id switches. Ids are not validated against the group
    /// list; an unknown id just resolves to no expanded group.
    pub fn toggle_expanded(&mut self, document_id: &str) {
        self.expanded = match self.expanded.as_deref() {
            Some(current) if current == document_id => None,
            _ => Some(document_id.to_string()),
        };
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn record(document_id: &str, quantity: i64, cost_major: i64) -> TransactionRecord {
        TransactionRecord {
            document_id: document_id.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            counterparty_id: "c1".to_string(),
            counterparty_name: "John Doe".to_string(),
            item_id: "m1".to_string(),
            item_name: "Paracetamol".to_string(),
            quantity,
            unit_price: Money::from_major(10),
            line_cost: Money::from_major(cost_major),
        }
    }

    fn sample_feed() -> Vec<TransactionRecord> {
        vec![record("1", 2, 20), record("1", 1, 10), record("2", 5, 50)]
    }

    #[test]
    fn test_grouping_example() {
        let groups = group(&sample_feed());

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].document_id, "1");
        assert_eq!(groups[0].total_quantity, 3);
        assert_eq!(groups[0].total_amount, Money::from_major(30));
        assert_eq!(groups[0].records.len(), 2);
        assert_eq!(groups[1].document_id, "2");
        assert_eq!(groups[1].total_quantity, 5);
        assert_eq!(groups[1].total_amount, Money::from_major(50));
    }

    #[test]
    fn test_summary_example() {
        let summary = summarize(&sample_feed());
        assert_eq!(summary.total_quantity, 8);
        assert_eq!(summary.total_amount, Money::from_major(80));
    }

    #[test]
    fn test_summary_equals_sum_of_group_totals() {
        let feed = sample_feed();
        let groups = group(&feed);
        let summary = summarize(&feed);

        let group_quantity: i64 = groups.iter().map(|g| g.total_quantity).sum();
        let group_amount: Money = groups.iter().map(|g| g.total_amount).sum();

        assert_eq!(summary.total_quantity, group_quantity);
        assert_eq!(summary.total_amount, group_amount);
    }

    #[test]
    fn test_grouping_is_deterministic_and_order_preserving() {
        // Interleaved documents: first-seen order is 7, 3, 9
        let feed = vec![
            record("7", 1, 10),
            record("3", 2, 20),
            record("7", 3, 30),
            record("9", 1, 5),
            record("3", 1, 15),
        ];

        let first = group(&feed);
        let second = group(&feed);

        let order: Vec<&str> = first.iter().map(|g| g.document_id.as_str()).collect();
        assert_eq!(order, vec!["7", "3", "9"]);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.document_id, b.document_id);
            assert_eq!(a.total_quantity, b.total_quantity);
            assert_eq!(a.total_amount, b.total_amount);
            assert_eq!(a.records.len(), b.records.len());
        }

        // Member rows keep their feed order
        assert_eq!(first[0].records[0].quantity, 1);
        assert_eq!(first[0].records[1].quantity, 3);
    }

    #[test]
    fn test_empty_feed() {
        let report = Report::build(Vec::new()).unwrap();
        assert!(report.groups().is_empty());
        assert_eq!(report.summary().total_quantity, 0);
        assert!(report.summary().total_amount.is_zero());
    }

    #[test]
    fn test_build_rejects_malformed_record() {
        let err = Report::build(vec![record("1", -2, 20)]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Malformed { index: 0, .. })
        ));
    }

    #[test]
    fn test_toggle_expanded() {
        let mut report = Report::build(sample_feed()).unwrap();
        assert_eq!(report.expanded_id(), None);

        report.toggle_expanded("1");
        assert_eq!(report.expanded_id(), Some("1"));
        assert_eq!(report.expanded_group().unwrap().document_id, "1");

        // Different id switches the target
        report.toggle_expanded("2");
        assert_eq!(report.expanded_id(), Some("2"));

        // Same id collapses
        report.toggle_expanded("2");
        assert_eq!(report.expanded_id(), None);
    }

    #[test]
    fn test_toggle_expanded_unknown_id() {
        let mut report = Report::build(sample_feed()).unwrap();
        report.toggle_expanded("42");
        assert_eq!(report.expanded_id(), Some("42"));
        assert!(report.expanded_group().is_none());
    }

    #[test]
    fn test_derive_pre_discount() {
        use rust_decimal_macros::dec;

        // 180 after a 10% discount was 200 before, 20 discounted
        let groups = group(&[record("1", 3, 180)]);
        let derived = derive_pre_discount(&groups[0], Percent::new(dec!(10))).unwrap();

        assert_eq!(derived.amount_before_discount, Money::from_major(200));
        assert_eq!(derived.discount_amount, Money::from_major(20));
    }

    #[test]
    fn test_derive_pre_discount_at_full_discount_fails() {
        use rust_decimal_macros::dec;

        let groups = group(&sample_feed());
        let err = derive_pre_discount(&groups[0], Percent::new(dec!(100))).unwrap_err();
        assert!(matches!(err, CoreError::DivisionUndefined));
    }
}
