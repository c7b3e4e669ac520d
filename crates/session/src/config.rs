//! Session configuration.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use fridgekeep_inventory::{ExpiryWindow, ExportLayout, MatchPolicy, ShelfLifePolicy};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tunables of a session. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Width of the "expires soon" window in days (inclusive of the last day).
    pub soon_window_days: ExpiryWindow,
    /// Expiry offset given to items ingested from a receipt.
    pub receipt_shelf_life_days: u32,
    /// Purge expired items before every query.
    pub purge_on_read: bool,
    pub export_layout: ExportLayout,
    pub match_policy: MatchPolicy,
    /// Export file name without the `.csv` extension.
    pub export_file_stem: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            soon_window_days: ExpiryWindow::default(),
            receipt_shelf_life_days: ShelfLifePolicy::DEFAULT_SHELF_LIFE_DAYS,
            purge_on_read: false,
            export_layout: ExportLayout::default(),
            match_policy: MatchPolicy::default(),
            export_file_stem: "produkty_w_lodowce".to_string(),
        }
    }
}

impl SessionConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("failed to load config at {}", path.display()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let stem = self.export_file_stem.trim();
        if stem.is_empty() {
            return Err(ConfigError::Invalid("export_file_stem cannot be empty".into()));
        }
        if stem.contains(['/', '\\']) {
            return Err(ConfigError::Invalid(
                "export_file_stem must be a bare file name".into(),
            ));
        }
        Ok(())
    }

    pub fn export_file_name(&self) -> String {
        format!("{}.csv", self.export_file_stem.trim())
    }

    pub fn shelf_life_policy(&self) -> ShelfLifePolicy {
        ShelfLifePolicy {
            shelf_life_days: self.receipt_shelf_life_days,
            ..ShelfLifePolicy::default()
        }
    }
}
