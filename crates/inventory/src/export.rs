//! CSV export of the current inventory snapshot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::item::Item;
use crate::status::ExpiryWindow;
use crate::store::InventoryStore;

pub const COLUMN_NAME: &str = "Nazwa";
pub const COLUMN_QUANTITY: &str = "Ilość";
pub const COLUMN_UNIT: &str = "Jednostka";
pub const COLUMN_EXPIRY: &str = "Data ważności";
pub const COLUMN_GLYCEMIC_INDEX: &str = "IG";
pub const COLUMN_STATUS: &str = "Status";

/// Date format used in exported rows.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("flushing export buffer failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("export is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Optional columns of the export. Name, quantity and expiry date are always present.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportLayout {
    pub unit: bool,
    pub glycemic_index: bool,
    pub status: bool,
}

impl ExportLayout {
    /// `Nazwa,Ilość,Data ważności`
    pub const BASIC: ExportLayout = ExportLayout {
        unit: false,
        glycemic_index: false,
        status: false,
    };

    /// Every optional column.
    pub const FULL: ExportLayout = ExportLayout {
        unit: true,
        glycemic_index: true,
        status: true,
    };

    pub fn headers(&self) -> Vec<&'static str> {
        let mut headers = vec![COLUMN_NAME, COLUMN_QUANTITY];
        if self.unit {
            headers.push(COLUMN_UNIT);
        }
        headers.push(COLUMN_EXPIRY);
        if self.glycemic_index {
            headers.push(COLUMN_GLYCEMIC_INDEX);
        }
        if self.status {
            headers.push(COLUMN_STATUS);
        }
        headers
    }

    fn row(&self, item: &Item, reference_date: NaiveDate, window: ExpiryWindow) -> Vec<String> {
        let mut row = vec![item.name().to_string(), item.quantity().to_string()];
        if self.unit {
            row.push(item.unit().label().to_string());
        }
        row.push(item.expiry_date().format(DATE_FORMAT).to_string());
        if self.glycemic_index {
            row.push(
                item.glycemic_index()
                    .map(|gi| gi.label().to_string())
                    .unwrap_or_default(),
            );
        }
        if self.status {
            let status = window.status(item.expiry_date(), reference_date);
            row.push(status.label().to_string());
        }
        row
    }
}

impl Default for ExportLayout {
    fn default() -> Self {
        Self {
            unit: true,
            glycemic_index: false,
            status: true,
        }
    }
}

impl InventoryStore {
    /// Serialize the current sequence (storage order) as CSV with a header row.
    ///
    /// `reference_date` and `window` only feed the status column.
    pub fn export(
        &self,
        layout: &ExportLayout,
        reference_date: NaiveDate,
        window: ExpiryWindow,
    ) -> Result<String, ExportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(layout.headers())?;
        for item in self.items() {
            writer.write_record(layout.row(item, reference_date, window))?;
        }
        let bytes = writer.into_inner().map_err(|e| e.into_error())?;
        Ok(String::from_utf8(bytes)?)
    }
}
