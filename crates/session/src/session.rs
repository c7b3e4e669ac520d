//! One user session: an owned inventory plus the policies that drive its views.

use chrono::NaiveDate;
use serde::Serialize;

use fridgekeep_core::DomainResult;
use fridgekeep_inventory::{
    ExpiryCounts, ExpiryStatus, ExportError, InventoryStore, Item, NewItem, ReceiptIngestor,
    SuggestionMatcher, reference,
};

use crate::command::{CommandOutcome, SessionCommand};
use crate::config::SessionConfig;
use crate::receipt_reader::ReceiptReader;

/// Row of the inventory listing, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListedItem {
    /// Storage index; pass it to [`Session::remove_at`].
    pub index: usize,
    /// Deletion-picker label, e.g. `"2. Chleb (2026-10-19)"`.
    pub label: String,
    pub item: Item,
    pub status: ExpiryStatus,
}

/// A rendered export, named per the session config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub contents: String,
}

impl ExportFile {
    pub fn mime_type(&self) -> &'static str {
        "text/csv"
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    store: InventoryStore,
    config: SessionConfig,
    ingestor: ReceiptIngestor,
    recipes: SuggestionMatcher,
    tips: Vec<String>,
}

impl Session {
    /// Empty session backed by the built-in recipe ideas and tips.
    pub fn new(config: SessionConfig) -> Self {
        let recipes = reference::recipe_matcher().with_policy(config.match_policy);
        Self {
            store: InventoryStore::new(),
            ingestor: ReceiptIngestor::new(config.shelf_life_policy()),
            recipes,
            tips: reference::TIPS.iter().map(|t| t.to_string()).collect(),
            config,
        }
    }

    /// Swap the reference data. The configured match policy still applies.
    pub fn with_reference(mut self, recipes: SuggestionMatcher, tips: Vec<String>) -> Self {
        self.recipes = recipes.with_policy(self.config.match_policy);
        self.tips = tips;
        self
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    pub fn execute(
        &mut self,
        command: SessionCommand,
        today: NaiveDate,
    ) -> DomainResult<CommandOutcome> {
        tracing::debug!(command = command.kind(), "executing command");
        match command {
            SessionCommand::Add(data) => self.add(data, today).map(CommandOutcome::Added),
            SessionCommand::Remove { index } => self.remove_at(index).map(CommandOutcome::Removed),
            SessionCommand::Clear => Ok(CommandOutcome::Cleared {
                removed: self.clear(),
            }),
            SessionCommand::Ingest { text } => Ok(CommandOutcome::Ingested {
                added: self.ingest(&text, today),
            }),
        }
    }

    /// Validate and append. A rejected item leaves the inventory untouched.
    pub fn add(&mut self, data: NewItem, today: NaiveDate) -> DomainResult<Item> {
        if let Err(err) = data.validate(today) {
            tracing::warn!(name = %data.name, error = %err, "item rejected");
            return Err(err);
        }
        let item = self.store.add(data).clone();
        tracing::info!(
            name = %item.name(),
            quantity = %item.quantity(),
            unit = item.unit().name(),
            expiry_date = %item.expiry_date(),
            "item added"
        );
        Ok(item)
    }

    pub fn remove_at(&mut self, index: usize) -> DomainResult<Item> {
        match self.store.remove_at(index) {
            Ok(item) => {
                tracing::info!(index, name = %item.name(), "item removed");
                Ok(item)
            }
            Err(err) => {
                tracing::warn!(index, error = %err, "remove rejected");
                Err(err)
            }
        }
    }

    /// Empty the inventory and return how many items were dropped.
    pub fn clear(&mut self) -> usize {
        let removed = self.store.len();
        self.store.clear();
        tracing::info!(removed, "inventory cleared");
        removed
    }

    /// Add one item per non-blank line of already-recognized receipt text.
    pub fn ingest(&mut self, text: &str, today: NaiveDate) -> usize {
        let added = self.ingestor.ingest(&mut self.store, text, today);
        tracing::info!(
            added,
            shelf_life_days = self.ingestor.policy().shelf_life_days,
            "receipt ingested"
        );
        added
    }

    /// Run `reader` over a receipt image and ingest the result. A failed read adds nothing.
    pub fn ingest_receipt<R>(&mut self, reader: &R, image: &[u8], today: NaiveDate) -> usize
    where
        R: ReceiptReader + ?Sized,
    {
        match reader.read_text(image) {
            Ok(text) => self.ingest(&text, today),
            Err(err) => {
                tracing::warn!(error = %err, bytes = image.len(), "receipt could not be read");
                0
            }
        }
    }

    /// Drop expired items and return how many went.
    pub fn purge_expired(&mut self, today: NaiveDate) -> usize {
        let before = self.store.len();
        self.store.purge_expired(today);
        let purged = before - self.store.len();
        if purged > 0 {
            tracing::info!(purged, %today, "expired items purged");
        }
        purged
    }

    fn before_read(&mut self, today: NaiveDate) {
        if self.config.purge_on_read {
            self.purge_expired(today);
        }
    }

    /// Items by ascending expiry date with their status and storage index.
    pub fn listing(&mut self, today: NaiveDate) -> Vec<ListedItem> {
        self.before_read(today);
        let window = self.config.soon_window_days;
        self.store
            .sorted_by_expiry()
            .into_iter()
            .map(|entry| ListedItem {
                index: entry.index,
                label: entry.label(),
                item: entry.item.clone(),
                status: window.status(entry.item.expiry_date(), today),
            })
            .collect()
    }

    pub fn classify(&mut self, today: NaiveDate) -> Vec<ExpiryStatus> {
        self.before_read(today);
        self.store.classify(today, self.config.soon_window_days)
    }

    pub fn counts(&mut self, today: NaiveDate) -> ExpiryCounts {
        self.before_read(today);
        self.store.counts(today, self.config.soon_window_days)
    }

    /// Recipe ideas for the tracked items; empty means "no suggestions".
    pub fn suggestions(&self) -> Vec<&str> {
        self.recipes.suggest(self.store.names())
    }

    pub fn tips(&self) -> &[String] {
        &self.tips
    }

    pub fn export(&mut self, today: NaiveDate) -> Result<ExportFile, ExportError> {
        self.before_read(today);
        let contents = self.store.export(
            &self.config.export_layout,
            today,
            self.config.soon_window_days,
        )?;
        tracing::info!(rows = self.store.len(), "inventory exported");
        Ok(ExportFile {
            file_name: self.config.export_file_name(),
            contents,
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
