//! Clock adapters for migration timestamps.

use chrono::Local;

use crudsmith_core::application::ports::Clock;

/// Migration file prefix format, e.g. `2026_10_18_093015`.
pub const MIGRATION_TIMESTAMP_FORMAT: &str = "%Y_%m_%d_%H%M%S";

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn migration_timestamp(&self) -> String {
        Local::now().format(MIGRATION_TIMESTAMP_FORMAT).to_string()
    }
}

/// Always returns the same timestamp.
#[derive(Debug, Clone)]
pub struct FixedClock(String);

impl FixedClock {
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self(timestamp.into())
    }
}

impl Clock for FixedClock {
    fn migration_timestamp(&self) -> String {
        self.0.clone()
    }
}
