//! Turning recognized receipt text into inventory additions.

use chrono::{Days, NaiveDate};

use fridgekeep_core::{Quantity, Unit};

use crate::item::NewItem;
use crate::store::InventoryStore;

/// Defaults applied to every ingested line. Nothing is inferred from the text.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShelfLifePolicy {
    pub quantity: Quantity,
    pub unit: Unit,
    pub shelf_life_days: u32,
}

impl ShelfLifePolicy {
    pub const DEFAULT_SHELF_LIFE_DAYS: u32 = 7;

    pub fn expiry_for(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_add_days(Days::new(u64::from(self.shelf_life_days)))
            .unwrap_or(NaiveDate::MAX)
    }
}

impl Default for ShelfLifePolicy {
    fn default() -> Self {
        Self {
            quantity: Quantity::ONE,
            unit: Unit::Piece,
            shelf_life_days: Self::DEFAULT_SHELF_LIFE_DAYS,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReceiptIngestor {
    policy: ShelfLifePolicy,
}

impl ReceiptIngestor {
    pub fn new(policy: ShelfLifePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ShelfLifePolicy {
        &self.policy
    }

    /// Trimmed, non-empty lines of `text`, in order.
    pub fn candidate_names(text: &str) -> impl Iterator<Item = &str> {
        text.lines().map(str::trim).filter(|line| !line.is_empty())
    }

    /// Add one item per candidate line and return how many were added.
    pub fn ingest(&self, store: &mut InventoryStore, text: &str, today: NaiveDate) -> usize {
        let expiry_date = self.policy.expiry_for(today);
        let mut added = 0;
        for name in Self::candidate_names(text) {
            let data = NewItem::new(name, self.policy.quantity, expiry_date).with_unit(self.policy.unit);
            store.add(data);
            added += 1;
        }
        added
    }
}
