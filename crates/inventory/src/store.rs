//! The session's ordered collection of tracked items.

use chrono::NaiveDate;

use fridgekeep_core::{DomainError, DomainResult};

use crate::item::{Item, NewItem};
use crate::status::{ExpiryCounts, ExpiryStatus, ExpiryWindow};

/// Ordered, in-memory inventory owned by a single session.
///
/// Insertion order is the only identity items have; every positional operation
/// refers to indices into that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryStore {
    items: Vec<Item>,
}

/// An item as seen through a derived view, paired with its storage index.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Entry<'a> {
    pub index: usize,
    pub item: &'a Item,
}

impl Entry<'_> {
    /// `"3. Mleko (2026-10-20)"`: one-based position, name and expiry date.
    pub fn label(&self) -> String {
        format!(
            "{}. {} ({})",
            self.index + 1,
            self.item.name(),
            self.item.expiry_date()
        )
    }
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(Item::name)
    }

    /// Append an item. Callers validate `data` beforehand.
    pub fn add(&mut self, data: NewItem) -> &Item {
        let index = self.items.len();
        self.items.push(Item::from(data));
        &self.items[index]
    }

    /// Remove and return the item at `index`; the store is untouched on error.
    pub fn remove_at(&mut self, index: usize) -> DomainResult<Item> {
        if index >= self.items.len() {
            return Err(DomainError::out_of_range(index, self.items.len()));
        }
        Ok(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Drop every item that expired strictly before `reference_date`. Idempotent.
    pub fn purge_expired(&mut self, reference_date: NaiveDate) {
        self.items.retain(|item| !item.is_expired(reference_date));
    }

    /// Status of each item, in storage order.
    pub fn classify(&self, reference_date: NaiveDate, window: ExpiryWindow) -> Vec<ExpiryStatus> {
        self.items
            .iter()
            .map(|item| window.status(item.expiry_date(), reference_date))
            .collect()
    }

    /// All items by ascending expiry date; ties keep insertion order.
    pub fn sorted_by_expiry(&self) -> Vec<Entry<'_>> {
        let mut entries: Vec<Entry<'_>> = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| Entry { index, item })
            .collect();
        entries.sort_by_key(|e| e.item.expiry_date());
        entries
    }

    pub fn counts(&self, reference_date: NaiveDate, window: ExpiryWindow) -> ExpiryCounts {
        self.classify(reference_date, window)
            .into_iter()
            .fold(ExpiryCounts::default(), |mut counts, status| {
                counts.record(status);
                counts
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use fridgekeep_core::Quantity;
    use proptest::prelude::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn in_days(n: u64) -> NaiveDate {
        today().checked_add_days(Days::new(n)).unwrap()
    }

    fn days_ago(n: u64) -> NaiveDate {
        today().checked_sub_days(Days::new(n)).unwrap()
    }

    fn item(name: &str, expiry: NaiveDate) -> NewItem {
        NewItem::new(name, Quantity::ONE, expiry)
    }

    fn fridge() -> InventoryStore {
        let mut store = InventoryStore::new();
        store.add(item("Milk", today()));
        store.add(item("Bread", in_days(1)));
        store.add(item("Cheese", in_days(10)));
        store
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let store = fridge();
        let names: Vec<&str> = store.names().collect();
        assert_eq!(names, vec!["Milk", "Bread", "Cheese"]);
    }

    #[test]
    fn add_permits_duplicates_by_name() {
        let mut store = InventoryStore::new();
        store.add(item("Eggs", in_days(3)));
        store.add(item("Eggs", in_days(3)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn remove_at_returns_removed_item() {
        let mut store = fridge();
        let removed = store.remove_at(1).unwrap();
        assert_eq!(removed.name(), "Bread");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn remove_at_out_of_range_leaves_store_unchanged() {
        let mut store = fridge();
        let before = store.clone();
        let err = store.remove_at(3).unwrap_err();
        assert_eq!(err, DomainError::OutOfRange { index: 3, len: 3 });
        assert_eq!(store, before);
    }

    #[test]
    fn clear_empties_the_store() {
        let mut store = fridge();
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn purge_removes_only_strictly_expired() {
        let mut store = fridge();
        store.add(item("Yoghurt", days_ago(1)));
        store.purge_expired(today());
        let names: Vec<&str> = store.names().collect();
        assert_eq!(names, vec!["Milk", "Bread", "Cheese"]);
    }

    #[test]
    fn classify_scenario() {
        let statuses = fridge().classify(today(), ExpiryWindow::default());
        assert_eq!(
            statuses,
            vec![
                ExpiryStatus::ExpiresToday,
                ExpiryStatus::ExpiresSoon,
                ExpiryStatus::Ok
            ]
        );
    }

    #[test]
    fn counts_scenario() {
        let counts = fridge().counts(today(), ExpiryWindow::default());
        assert_eq!(
            counts,
            ExpiryCounts { total: 3, expiring_today: 1, expiring_soon: 1 }
        );
    }

    #[test]
    fn sorted_by_expiry_is_stable_and_keeps_storage_index() {
        let mut store = InventoryStore::new();
        store.add(item("Cheese", in_days(10)));
        store.add(item("Butter", in_days(2)));
        store.add(item("Ham", in_days(2)));
        store.add(item("Milk", today()));

        let sorted = store.sorted_by_expiry();
        let view: Vec<(usize, &str)> = sorted.iter().map(|e| (e.index, e.item.name())).collect();
        assert_eq!(view, vec![(3, "Milk"), (1, "Butter"), (2, "Ham"), (0, "Cheese")]);
        assert_eq!(sorted[0].label(), "4. Milk (2026-10-18)");
    }

    #[test]
    fn add_then_remove_round_trips() {
        let mut store = fridge();
        let before = store.clone();
        store.add(item("Tomato", in_days(4)));

        let sorted = store.sorted_by_expiry();
        let found: Vec<&Entry<'_>> = sorted.iter().filter(|e| e.item.name() == "Tomato").collect();
        assert_eq!(found.len(), 1);
        let index = found[0].index;

        store.remove_at(index).unwrap();
        assert_eq!(store, before);
    }

    fn arb_store() -> impl Strategy<Value = InventoryStore> {
        prop::collection::vec(("[a-z]{1,8}", -5i64..15), 0..20).prop_map(|rows| {
            let mut store = InventoryStore::new();
            for (name, offset) in rows {
                let expiry = if offset < 0 {
                    days_ago(offset.unsigned_abs())
                } else {
                    in_days(offset as u64)
                };
                store.add(item(&name, expiry));
            }
            store
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        #[test]
        fn remove_outside_bounds_never_mutates(store in arb_store(), extra in 0usize..10) {
            let mut store = store;
            let before = store.clone();
            let index = store.len() + extra;
            let is_out_of_range = matches!(
                store.remove_at(index),
                Err(DomainError::OutOfRange { .. })
            );
            prop_assert!(is_out_of_range);
            prop_assert_eq!(store, before);
        }

        #[test]
        fn purge_is_idempotent(store in arb_store()) {
            let mut once = store.clone();
            once.purge_expired(today());
            let mut twice = once.clone();
            twice.purge_expired(today());
            prop_assert_eq!(&once, &twice);
            prop_assert!(once.items().iter().all(|i| !i.is_expired(today())));
        }

        #[test]
        fn counts_match_flagged_statuses(store in arb_store(), days in 0u32..5) {
            let window = ExpiryWindow::new(days);
            let statuses = store.classify(today(), window);
            let counts = store.counts(today(), window);

            prop_assert_eq!(counts.total, store.len());
            let not_ok = statuses.iter().filter(|s| **s != ExpiryStatus::Ok).count();
            prop_assert_eq!(counts.flagged(), not_ok);

            for (item, status) in store.items().iter().zip(&statuses) {
                if item.expiry_date() == today() {
                    prop_assert_eq!(*status, ExpiryStatus::ExpiresToday);
                }
            }
        }

        #[test]
        fn sorted_view_is_a_permutation_in_date_order(store in arb_store()) {
            let sorted = store.sorted_by_expiry();
            prop_assert_eq!(sorted.len(), store.len());
            for pair in sorted.windows(2) {
                prop_assert!(pair[0].item.expiry_date() <= pair[1].item.expiry_date());
                if pair[0].item.expiry_date() == pair[1].item.expiry_date() {
                    prop_assert!(pair[0].index < pair[1].index);
                }
            }
            let mut indices: Vec<usize> = sorted.iter().map(|e| e.index).collect();
            indices.sort_unstable();
            prop_assert_eq!(indices, (0..store.len()).collect::<Vec<_>>());
        }
    }
}
