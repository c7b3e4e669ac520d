//! Expiry classification relative to a reference date.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Per-item expiry status. The three values are mutually exclusive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryStatus {
    ExpiresToday,
    ExpiresSoon,
    Ok,
}

impl ExpiryStatus {
    pub fn label(self) -> &'static str {
        match self {
            ExpiryStatus::ExpiresToday => "⚠️ Dziś",
            ExpiryStatus::ExpiresSoon => "🕓 Wkrótce",
            ExpiryStatus::Ok => "✅ OK",
        }
    }
}

/// Width of the "expires soon" window, counted in days after the reference date.
///
/// The window is `(reference, reference + days]`: the reference day itself is
/// always `ExpiresToday`, the last day of the window is included.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpiryWindow {
    days: u32,
}

impl ExpiryWindow {
    pub const DEFAULT_DAYS: u32 = 2;

    pub fn new(days: u32) -> Self {
        Self { days }
    }

    pub fn days(self) -> u32 {
        self.days
    }

    /// Last date still counted as "soon".
    pub fn horizon(self, reference_date: NaiveDate) -> NaiveDate {
        reference_date
            .checked_add_days(Days::new(u64::from(self.days)))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Today is checked first, so an item due on the reference date is never "soon".
    /// Already expired items fall through to `Ok`; purging is a separate step.
    pub fn status(self, expiry_date: NaiveDate, reference_date: NaiveDate) -> ExpiryStatus {
        if expiry_date == reference_date {
            ExpiryStatus::ExpiresToday
        } else if expiry_date > reference_date && expiry_date <= self.horizon(reference_date) {
            ExpiryStatus::ExpiresSoon
        } else {
            ExpiryStatus::Ok
        }
    }
}

impl Default for ExpiryWindow {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DAYS)
    }
}

/// Summary counts for the statistics panel.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ExpiryCounts {
    pub total: usize,
    pub expiring_today: usize,
    pub expiring_soon: usize,
}

impl ExpiryCounts {
    pub fn record(&mut self, status: ExpiryStatus) {
        self.total += 1;
        match status {
            ExpiryStatus::ExpiresToday => self.expiring_today += 1,
            ExpiryStatus::ExpiresSoon => self.expiring_soon += 1,
            ExpiryStatus::Ok => {}
        }
    }

    /// Items that need attention (anything not `Ok`).
    pub fn flagged(&self) -> usize {
        self.expiring_today + self.expiring_soon
    }
}
