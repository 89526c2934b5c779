//! Lunar-day ordinal of January 1 for every Gregorian year in
//! `MIN_LUNAR_YEAR..=MAX_LUNAR_YEAR`.

use crate::consts::{MAX_LUNAR_YEAR, MIN_LUNAR_YEAR};
use crate::date::GregorianDate;
use crate::lunar::ConversionError;
use crate::types::Ordinal;

/// Ordinal of January 1, indexed by `year - MIN_LUNAR_YEAR`.
#[rustfmt::skip]
pub const EPOCH_ORDINALS: [u16; (MAX_LUNAR_YEAR - MIN_LUNAR_YEAR + 1) as usize] = [
    30, 41, 22, 32, 43, 25, 36, 46, 27, 39,  // 1900
    20, 31, 41, 23, 34, 45, 26, 38, 48, 29,  // 1910
    40, 22, 33, 43, 24, 36, 47, 28, 38, 20,  // 1920
    31, 42, 23, 34, 45, 26, 37, 49, 30, 40,  // 1930
    21, 33, 44, 25, 35, 47, 28, 39, 20, 31,  // 1940
    42, 23, 34, 46, 27, 37, 48, 30, 41, 22,  // 1950
    32, 44, 25, 36, 46, 28, 39, 20, 31, 42,  // 1960
    23, 34, 45, 27, 37, 48, 29, 41, 22, 32,  // 1970
    43, 25, 36, 47, 28, 39, 20, 31, 42, 24,  // 1980
    34, 45, 26, 38, 19, 29, 40, 22, 33, 44,  // 1990
    25, 36, 47, 28, 39, 21, 31, 42, 23, 35,  // 2000
    45, 26, 37, 19, 30, 41, 22, 33, 44, 25,  // 2010
    36, 47, 28, 39, 20, 32, 42, 23, 34, 46,  // 2020
    27, 37, 18, 30, 41, 22, 32, 44, 25, 36,  // 2030
    47, 29, 39, 20, 31, 43, 24, 34, 45, 27,  // 2040
    38, 19, 29, 41, 22, 33, 44, 26, 36, 47,  // 2050
    28, 40, 21, 31, 42, 24, 35, 45, 26, 38,  // 2060
    19, 30, 40, 22, 33, 44, 25, 36, 47, 28,  // 2070
    39, 21, 32, 42, 23, 35, 46, 27, 37, 19,  // 2080
    30, 41, 22, 33, 44, 25, 36, 48, 29, 39,  // 2090
    20,  // 2100
];

/// Starting point of the day-count replay for a query year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    /// January 1 of the anchor year
    pub date:         GregorianDate,
    pub ordinal:      Ordinal,
    /// Set when the query year lies past `MAX_LUNAR_YEAR` and the 2100 anchor
    /// stands in for it
    pub extrapolated: bool,
}

/// Returns the ordinal of January 1 of `year`.
///
/// # Errors
/// Returns `ConversionError::InvalidRange` outside `MIN_LUNAR_YEAR..=MAX_LUNAR_YEAR`.
pub fn anchor_ordinal(year: u16) -> Result<Ordinal, ConversionError> {
    if !(MIN_LUNAR_YEAR..=MAX_LUNAR_YEAR).contains(&year) {
        return Err(ConversionError::InvalidRange { year });
    }
    let raw = EPOCH_ORDINALS[usize::from(year - MIN_LUNAR_YEAR)];
    Ordinal::new(raw).ok_or(ConversionError::UnmappedOrdinal(raw))
}

impl Anchor {
    /// Anchor for a query in `year`. Years past `MAX_LUNAR_YEAR` clamp to the
    /// last table entry.
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidRange` for years before `MIN_LUNAR_YEAR`.
    pub fn for_year(year: u16) -> Result<Self, ConversionError> {
        let extrapolated = year > MAX_LUNAR_YEAR;
        let anchor_year = year.min(MAX_LUNAR_YEAR);
        let ordinal = anchor_ordinal(anchor_year)?;
        let date = GregorianDate::new_year_day(anchor_year)?;
        Ok(Self {
            date,
            ordinal,
            extrapolated,
        })
    }

    /// Buddhist-Era label the year path starts from
    pub const fn year_path(&self) -> u16 {
        crate::solar::to_buddhist_era(self.date.year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_table_covers_every_year() {
        assert_eq!(EPOCH_ORDINALS.len(), 201);
        for year in MIN_LUNAR_YEAR..=MAX_LUNAR_YEAR {
            assert!(anchor_ordinal(year).is_ok(), "missing anchor for {year}");
        }
    }

    #[test]
    fn test_known_anchors() {
        assert_eq!(anchor_ordinal(1900).unwrap().get(), 30);
        assert_eq!(anchor_ordinal(2017).unwrap().get(), 33);
        assert_eq!(anchor_ordinal(2018).unwrap().get(), 44);
        assert_eq!(anchor_ordinal(2100).unwrap().get(), 20);
    }

    #[test]
    fn test_out_of_table() {
        assert!(matches!(
            anchor_ordinal(1899),
            Err(ConversionError::InvalidRange { year: 1899 })
        ));
        assert!(matches!(
            anchor_ordinal(2101),
            Err(ConversionError::InvalidRange { year: 2101 })
        ));
    }

    #[test]
    fn test_anchor_clamps_past_table() {
        let anchor = Anchor::for_year(2150).unwrap();
        assert!(anchor.extrapolated);
        assert_eq!(anchor.date, date(2100, 1, 1));
        assert_eq!(anchor.ordinal.get(), 20);
        assert_eq!(anchor.year_path(), 2643);

        let anchor = Anchor::for_year(2017).unwrap();
        assert!(!anchor.extrapolated);
        assert_eq!(anchor.year_path(), 2560);
        assert!(Anchor::for_year(1800).is_err());
    }
}
