//! `fridgekeep-session` — the command/query boundary of one user session.
//!
//! A [`Session`] owns its inventory for the session's lifetime. Display layers
//! send it commands and read back plain data; every date-sensitive call takes
//! the reference date explicitly.

pub mod cli;
pub mod command;
pub mod config;
pub mod receipt_reader;
pub mod session;

pub use command::{CommandOutcome, SessionCommand};
pub use config::{ConfigError, SessionConfig};
pub use receipt_reader::{PlainTextReader, ReceiptReadError, ReceiptReader};
pub use session::{ExportFile, ListedItem, Session};
