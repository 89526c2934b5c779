//! Shared helpers for unit tests.

use crate::date::GregorianDate;

/// Builds a date known to be valid.
pub fn date(year: u16, month: u8, day: u8) -> GregorianDate {
    GregorianDate::from_ymd(year, month, day).expect("test date should be valid")
}
