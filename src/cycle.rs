//! Khmer New Year and the animal-year / Sak cycles that turn over on it.

use serde::Serialize;

use crate::consts::{ANIMAL_CYCLE_LEN, APRIL, NEW_YEAR_FIRST_DAY, NEW_YEAR_LAST_DAY, SAK_CYCLE_LEN};
use crate::date::{GregorianDate, Weekday};
use crate::ParseError;

/// Weekday on which Khmer New Year falls in `year`.
pub const fn new_year_weekday(year: u16) -> Weekday {
    Weekday::from_index(year as u32 + 4)
}

/// Khmer New Year's Day of Gregorian `year`: the first day of April 11..=17
/// falling on [`new_year_weekday`].
///
/// # Errors
/// Returns `ParseError::InvalidYear` if `year` is out of range.
pub fn khmer_new_year(year: u16) -> Result<GregorianDate, ParseError> {
    let target = new_year_weekday(year);
    for day in NEW_YEAR_FIRST_DAY..=NEW_YEAR_LAST_DAY {
        let candidate = GregorianDate::from_ymd(year, APRIL, day)?;
        if candidate.weekday() == target {
            return Ok(candidate);
        }
    }
    // Seven consecutive days cover every weekday
    GregorianDate::from_ymd(year, APRIL, NEW_YEAR_LAST_DAY)
}

/// Animal-year and Sak labels in effect on a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleLabels {
    /// Decade cycle, `1..=10`
    pub sak:         u8,
    /// Twelve-year animal cycle, `1..=12`
    pub animal_year: u8,
}

impl CycleLabels {
    /// Labels for a date given its year's New Year's Day.
    pub fn new(date: GregorianDate, new_year: GregorianDate) -> Self {
        let year = date.year();
        let (animal_shift, sak_shift) = if date >= new_year { (8, 1) } else { (7, 0) };
        Self {
            sak:         cycle_index(year, sak_shift, SAK_CYCLE_LEN),
            animal_year: cycle_index(year, animal_shift, ANIMAL_CYCLE_LEN),
        }
    }

    /// Labels for `date`, locating New Year in its own year.
    ///
    /// # Errors
    /// Propagates `ParseError` from [`khmer_new_year`].
    pub fn for_date(date: GregorianDate) -> Result<Self, ParseError> {
        khmer_new_year(date.year()).map(|new_year| Self::new(date, new_year))
    }
}

fn cycle_index(year: u16, shift: u16, len: u16) -> u8 {
    // Always in 1..=len, and len <= 12
    ((year + shift) % len + 1) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_new_year_dates() {
        let cases = [
            (1900, date(1900, 4, 15)),
            (2017, date(2017, 4, 14)),
            (2018, date(2018, 4, 14)),
            (2019, date(2019, 4, 14)),
            (2020, date(2020, 4, 13)),
            (2024, date(2024, 4, 12)),
            (2100, date(2100, 4, 15)),
        ];
        for (year, expected) in cases {
            assert_eq!(khmer_new_year(year).unwrap(), expected, "{year}");
        }
    }

    #[test]
    fn test_new_year_always_in_window() {
        for year in 1900..=2200 {
            let day = khmer_new_year(year).unwrap();
            assert_eq!(day.month(), 4);
            assert!((11..=17).contains(&day.day()), "{year}: {day}");
            assert_eq!(day.weekday(), new_year_weekday(year));
        }
    }

    #[test]
    fn test_labels_straddle_new_year() {
        // 2018 New Year falls on April 14
        let before = CycleLabels::for_date(date(2018, 4, 13)).unwrap();
        assert_eq!(before, CycleLabels {
            sak:         9,
            animal_year: 10,
        });

        let on = CycleLabels::for_date(date(2018, 4, 14)).unwrap();
        assert_eq!(on, CycleLabels {
            sak:         10,
            animal_year: 11,
        });

        let after = CycleLabels::for_date(date(2018, 12, 31)).unwrap();
        assert_eq!(after, on);
    }

    #[test]
    fn test_labels_wrap() {
        // 2019 on/after New Year: animal (2019 + 8) % 12 + 1 = 12, sak (2019 + 1) % 10 + 1 = 1
        let labels = CycleLabels::for_date(date(2019, 4, 14)).unwrap();
        assert_eq!((labels.sak, labels.animal_year), (1, 12));

        let labels = CycleLabels::for_date(date(2019, 4, 13)).unwrap();
        assert_eq!((labels.sak, labels.animal_year), (10, 11));
    }
}
