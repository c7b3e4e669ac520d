//! `fridgekeep-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no clock, no storage).

pub mod diet;
pub mod error;
pub mod measure;

pub use diet::GlycemicIndex;
pub use error::{DomainError, DomainResult};
pub use measure::{Quantity, Unit};
