//! Commands a display layer sends to a session, and what they produced.

use serde::{Deserialize, Serialize};

use fridgekeep_inventory::{Item, NewItem};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionCommand {
    Add(NewItem),
    Remove { index: usize },
    Clear,
    /// Raw text already extracted from a receipt.
    Ingest { text: String },
}

impl SessionCommand {
    pub fn kind(&self) -> &'static str {
        match self {
            SessionCommand::Add(_) => "add",
            SessionCommand::Remove { .. } => "remove",
            SessionCommand::Clear => "clear",
            SessionCommand::Ingest { .. } => "ingest",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CommandOutcome {
    Added(Item),
    Removed(Item),
    Cleared { removed: usize },
    Ingested { added: usize },
}
