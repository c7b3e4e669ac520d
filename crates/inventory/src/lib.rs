//! Perishable inventory domain module.
//!
//! This crate contains the rules for tracking perishable items, implemented purely
//! as deterministic domain logic (no IO, no clock, no storage). Every
//! date-sensitive operation takes its reference date as an argument.

pub mod export;
pub mod item;
pub mod receipt;
pub mod reference;
pub mod status;
pub mod store;
pub mod suggestions;

pub use export::{ExportError, ExportLayout};
pub use item::{Item, NewItem};
pub use receipt::{ReceiptIngestor, ShelfLifePolicy};
pub use status::{ExpiryCounts, ExpiryStatus, ExpiryWindow};
pub use store::{Entry, InventoryStore};
pub use suggestions::{MatchPolicy, SuggestionMatcher};
