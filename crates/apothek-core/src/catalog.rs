//! # Catalog Snapshot
//!
//! Read-only view over the medicine catalog supplied at the start of a
//! cart session, plus the list-view helpers the inventory pages use
//! (substring filter, low-stock and near-expiry shortlists).
//!
//! The snapshot is validated once on construction; every helper after
//! that is infallible.

use chrono::{Duration, NaiveDate};

use crate::error::CoreResult;
use crate::types::CatalogItem;
use crate::validation::validate_catalog_item;
use crate::{LOW_STOCK_THRESHOLD, NEAR_EXPIRY_WINDOW_DAYS};

// =============================================================================
// Catalog Snapshot
// =============================================================================

/// The catalog snapshot a cart session selects from.
///
/// ## Refresh Semantics
/// A snapshot is immutable for the duration of one computation. If the
/// external fetch layer refreshes the catalog mid-session, the session
/// swaps in a whole new snapshot; lines already in the cart keep their
/// frozen price and stock ceiling until explicitly re-selected.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    items: Vec<CatalogItem>,
}

impl CatalogSnapshot {
    /// Builds a snapshot, failing fast on malformed items
    /// (empty ids, negative prices or stock).
    pub fn new(items: Vec<CatalogItem>) -> CoreResult<Self> {
        for (index, item) in items.iter().enumerate() {
            validate_catalog_item(index, item)?;
        }

        Ok(CatalogSnapshot { items })
    }

    /// All items, in listing order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Looks up an item by id.
    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of items in the snapshot.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // =========================================================================
    // List-View Helpers
    // =========================================================================

    /// Case-insensitive substring filter over item names, as the list
    /// pages apply it to a locally held catalog.
    pub fn filter_by_name(&self, query: &str) -> Vec<&CatalogItem> {
        let needle = query.trim().to_lowercase();

        self.items
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Items still sellable.
    pub fn active(&self) -> Vec<&CatalogItem> {
        self.items.iter().filter(|item| item.is_active).collect()
    }

    /// Items archived after stocking out.
    pub fn archived(&self) -> Vec<&CatalogItem> {
        self.items.iter().filter(|item| !item.is_active).collect()
    }

    /// Active items at or below the reorder threshold.
    pub fn low_stock(&self) -> Vec<&CatalogItem> {
        self.items
            .iter()
            .filter(|item| item.is_active && item.stock_quantity <= LOW_STOCK_THRESHOLD)
            .collect()
    }

    /// Items whose expiry date falls within the warning window from
    /// `today`. Already-expired items are included; items without an
    /// expiry date never show up here.
    pub fn near_expiry(&self, today: NaiveDate) -> Vec<&CatalogItem> {
        let cutoff = today + Duration::days(NEAR_EXPIRY_WINDOW_DAYS);

        self.items
            .iter()
            .filter(|item| matches!(item.expiry_date, Some(expiry) if expiry <= cutoff))
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn item(id: &str, name: &str, stock: i64) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: name.to_string(),
            unit_price: Money::from_major(5),
            stock_quantity: stock,
            expiry_date: None,
            is_active: true,
        }
    }

    fn snapshot() -> CatalogSnapshot {
        let mut paracetamol = item("m1", "Paracetamol", 50);
        paracetamol.expiry_date = NaiveDate::from_ymd_opt(2025, 4, 20);

        let mut amoxicillin = item("m2", "Amoxicillin", 12);
        amoxicillin.expiry_date = NaiveDate::from_ymd_opt(2026, 1, 1);

        let mut aspirin = item("m3", "Aspirin", 0);
        aspirin.is_active = false;

        CatalogSnapshot::new(vec![paracetamol, amoxicillin, aspirin]).unwrap()
    }

    #[test]
    fn test_get_by_id() {
        let catalog = snapshot();
        assert_eq!(catalog.get("m2").unwrap().name, "Amoxicillin");
        assert!(catalog.get("m9").is_none());
    }

    #[test]
    fn test_rejects_malformed_items() {
        let mut bad = item("m1", "Paracetamol", 50);
        bad.unit_price = Money::from_minor(-100);
        assert!(CatalogSnapshot::new(vec![bad]).is_err());

        let mut bad = item("m1", "Paracetamol", 50);
        bad.stock_quantity = -1;
        assert!(CatalogSnapshot::new(vec![bad]).is_err());
    }

    #[test]
    fn test_filter_by_name_is_case_insensitive_substring() {
        let catalog = snapshot();

        let hits = catalog.filter_by_name("para");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "m1");

        let hits = catalog.filter_by_name("CIL");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "m2");

        // Empty query matches everything
        assert_eq!(catalog.filter_by_name("").len(), 3);
    }

    #[test]
    fn test_active_archived_partition() {
        let catalog = snapshot();
        assert_eq!(catalog.active().len(), 2);
        assert_eq!(catalog.archived().len(), 1);
        assert_eq!(catalog.archived()[0].id, "m3");
    }

    #[test]
    fn test_low_stock_excludes_archived() {
        let catalog = snapshot();
        let low = catalog.low_stock();
        // m2 (12 <= 20) qualifies; m3 has 0 stock but is archived
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].id, "m2");
    }

    #[test]
    fn test_near_expiry_window() {
        let catalog = snapshot();
        let today = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();

        let soon = catalog.near_expiry(today);
        assert_eq!(soon.len(), 1);
        assert_eq!(soon[0].id, "m1");

        // A date past m2's expiry pulls it in as well
        let later = NaiveDate::from_ymd_opt(2025, 12, 15).unwrap();
        assert_eq!(catalog.near_expiry(later).len(), 2);
    }
}
