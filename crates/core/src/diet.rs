//! Dietary attributes carried by some inventory variants.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Coarse glycemic index band of a product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlycemicIndex {
    Low,
    Medium,
    High,
}

impl GlycemicIndex {
    pub fn label(self) -> &'static str {
        match self {
            GlycemicIndex::Low => "niski",
            GlycemicIndex::Medium => "średni",
            GlycemicIndex::High => "wysoki",
        }
    }
}

impl fmt::Display for GlycemicIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GlycemicIndex {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" | "niski" => Ok(GlycemicIndex::Low),
            "medium" | "średni" => Ok(GlycemicIndex::Medium),
            "high" | "wysoki" => Ok(GlycemicIndex::High),
            other => Err(DomainError::validation(format!(
                "unknown glycemic index: {other}"
            ))),
        }
    }
}
