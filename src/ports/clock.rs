//! Clock port.
//!
//! "Now" is injected so that membership status, ages and check-in times
//! are deterministic under test.

use chrono::{NaiveDate, NaiveDateTime};

/// Source of the current local date and time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}
