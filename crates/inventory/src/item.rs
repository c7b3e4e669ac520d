use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use fridgekeep_core::{DomainError, DomainResult, GlycemicIndex, Quantity, Unit};

/// A tracked perishable product.
///
/// Items have no identity of their own: two items with equal fields are
/// interchangeable and are told apart only by their position in the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    name: String,
    quantity: Quantity,
    unit: Unit,
    expiry_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    glycemic_index: Option<GlycemicIndex>,
}

impl Item {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn expiry_date(&self) -> NaiveDate {
        self.expiry_date
    }

    pub fn glycemic_index(&self) -> Option<GlycemicIndex> {
        self.glycemic_index
    }

    /// Case-folded name used for matching against reference data.
    pub fn match_key(&self) -> String {
        self.name.trim().to_lowercase()
    }

    /// True when the item expired strictly before `reference_date`.
    pub fn is_expired(&self, reference_date: NaiveDate) -> bool {
        self.expiry_date < reference_date
    }
}

impl From<NewItem> for Item {
    fn from(data: NewItem) -> Self {
        Self {
            name: data.name,
            quantity: data.quantity,
            unit: data.unit,
            expiry_date: data.expiry_date,
            glycemic_index: data.glycemic_index,
        }
    }
}

/// Command data: add an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub quantity: Quantity,
    #[serde(default)]
    pub unit: Unit,
    pub expiry_date: NaiveDate,
    #[serde(default)]
    pub glycemic_index: Option<GlycemicIndex>,
}

impl NewItem {
    /// Item counted in pieces, without a glycemic index.
    pub fn new(name: impl Into<String>, quantity: Quantity, expiry_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: Unit::Piece,
            expiry_date,
            glycemic_index: None,
        }
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    pub fn with_glycemic_index(mut self, glycemic_index: GlycemicIndex) -> Self {
        self.glycemic_index = Some(glycemic_index);
        self
    }

    /// Input-boundary checks. The store itself never validates.
    pub fn validate(&self, reference_date: NaiveDate) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.quantity.is_zero() {
            return Err(DomainError::validation("quantity must be positive"));
        }
        if self.expiry_date < reference_date {
            return Err(DomainError::validation(format!(
                "expiry date {} is in the past",
                self.expiry_date
            )));
        }
        Ok(())
    }
}
