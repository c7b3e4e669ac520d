//! Tracing/logging setup shared by every fridgekeep binary.

pub mod tracing;

pub use self::tracing::{LogFormat, init_with};

/// Initialize process-wide logging with JSON output.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    self::tracing::init_with(LogFormat::Json, "info");
}
