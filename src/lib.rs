//! Conversion of Gregorian dates into the traditional Khmer lunar calendar.
//!
//! A date is located by replaying a day counter from the nearest January 1
//! anchor of the epoch table (1900..=2100), applying the leap-day and
//! leap-month rules of each year as the counter crosses month seven and
//! eight. The result carries the lunar month, moon phase, day, Buddhist-Era
//! year, animal year and Sak, a compact code and a Khmer description.
//!
//! ```
//! use khmer_lunar::LunarDate;
//!
//! let lunar = LunarDate::from_ymd(2017, 12, 10)?;
//! assert_eq!(lunar.code, "0910256101R07");
//! # Ok::<(), khmer_lunar::ConversionError>(())
//! ```

mod consts;
mod prelude;
#[cfg(test)]
mod test_utils;

pub mod counter;
pub mod cycle;
pub mod date;
pub mod epoch;
pub mod fmt;
pub mod leap;
pub mod lunar;
pub mod range;
pub mod solar;
pub mod table;
pub mod types;

pub use consts::*;
pub use cycle::{CycleLabels, khmer_new_year};
pub use date::{GregorianDate, Weekday};
pub use leap::LeapType;
pub use lunar::{ConversionError, LunarDate, lunar_code};
pub use range::{DateRange, LunarDays, RangeError};
pub use solar::{FormattedSolarDate, from_buddhist_era, khmer_months, khmer_weekdays, to_buddhist_era};
pub use types::{Day, MoonPhase, Month, Ordinal, Year};

use crate::prelude::*;

/// Error type for Gregorian date input.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_messages() {
        assert_eq!(
            ParseError::InvalidFormat("20x8".to_owned()).to_string(),
            "Invalid date format: 20x8"
        );
        assert_eq!(ParseError::InvalidYear(0).to_string(), "Invalid year: 0 (must be 1-9999)");
        assert_eq!(ParseError::InvalidMonth(13).to_string(), "Invalid month: 13 (must be 1-12)");
        assert_eq!(
            ParseError::InvalidDay {
                month: 2,
                day:   30,
                year:  2018,
            }
            .to_string(),
            "Invalid day 30 for month 2018-02"
        );
        assert_eq!(ParseError::EmptyInput.to_string(), "Empty date string");
    }

    #[test]
    fn test_errors_chain() {
        let err: ConversionError = ParseError::EmptyInput.into();
        assert_eq!(err.to_string(), "Empty date string");

        let err: RangeError = ParseError::InvalidMonth(0).into();
        assert_eq!(err.to_string(), "Invalid month: 0 (must be 1-12)");
    }

    #[test]
    fn test_constants() {
        assert_eq!(MAX_YEAR, 9999);
        assert_eq!(MIN_LUNAR_YEAR, 1900);
        assert_eq!(MAX_LUNAR_YEAR, 2100);
        assert_eq!(BUDDHIST_ERA_OFFSET, 543);
    }

    #[test]
    fn test_public_surface() {
        let date: GregorianDate = "2018-04-14".parse().unwrap();
        assert_eq!(khmer_new_year(2018).unwrap(), date);
        assert_eq!(to_buddhist_era(date.year()), 2561);
        assert_eq!(lunar_code(date).unwrap(), "1011256105R14S");

        let span: DateRange = "2018-04-13/2018-04-15".parse().unwrap();
        assert_eq!(span.lunar_days().count(), 3);
        assert_eq!(FormattedSolarDate::new(date).day_name, "ថ្ងៃសៅរ៍");
    }
}
