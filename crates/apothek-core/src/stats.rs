//! # Dashboard Roll-ups
//!
//! Pure aggregations behind the dashboard tiles: monthly sales totals
//! for the chart, and the all-time / current-month purchase summary.
//! Rows arrive as `{date, amount}` pairs from the external query layer.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Row and Result Types
// =============================================================================

/// One document-level total (an invoice or purchase with its date).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DocumentTotal {
    #[ts(as = "String")]
    pub date: NaiveDate,
    #[ts(as = "String")]
    pub amount: Money,
}

/// Amount total for one calendar month, keyed `MM-YYYY`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MonthlyTotal {
    pub month: String,
    #[ts(as = "String")]
    pub total: Money,
}

/// All-time total plus the running total for the current month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PeriodSummary {
    #[ts(as = "String")]
    pub total: Money,
    #[ts(as = "String")]
    pub current_month: Money,
}

// =============================================================================
// Aggregations
// =============================================================================

/// Groups document totals by calendar month, in chronological order.
///
/// Keys are formatted `MM-YYYY` (e.g. `04-2025`), matching what the
/// dashboard chart expects on its axis.
pub fn monthly_totals(rows: &[DocumentTotal]) -> Vec<MonthlyTotal> {
    let mut by_month: BTreeMap<(i32, u32), Money> = BTreeMap::new();

    for row in rows {
        let key = (row.date.year(), row.date.month());
        let entry = by_month.entry(key).or_insert_with(Money::zero);
        *entry += row.amount;
    }

    by_month
        .into_iter()
        .map(|((year, month), total)| MonthlyTotal {
            month: format!("{:02}-{}", month, year),
            total,
        })
        .collect()
}

/// All-time total plus the total for the month containing `today`.
pub fn period_summary(rows: &[DocumentTotal], today: NaiveDate) -> PeriodSummary {
    let current = (today.year(), today.month());

    let mut total = Money::zero();
    let mut current_month = Money::zero();

    for row in rows {
        total += row.amount;
        if (row.date.year(), row.date.month()) == current {
            current_month += row.amount;
        }
    }

    PeriodSummary {
        total,
        current_month,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
