//! Khmer rendering of ordinary Gregorian dates with Buddhist-Era years.

use serde::Serialize;

use crate::consts::{BUDDHIST_ERA_OFFSET, MAX_MONTH};
use crate::date::{GregorianDate, Weekday};
use crate::ParseError;

/// Gregorian month names in Khmer, index `month - 1`.
pub const KHMER_MONTHS: [&str; MAX_MONTH as usize] = [
    "មករា",
    "កុម្ភៈ",
    "មីនា",
    "មេសា",
    "ឧសភា",
    "មិថុនា",
    "កក្កដា",
    "សីហា",
    "កញ្ញា",
    "តុលា",
    "វិច្ឆិកា",
    "ធ្នូ",
];

pub const ENGLISH_MONTHS: [&str; MAX_MONTH as usize] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday names in Khmer, Sunday first.
pub const KHMER_WEEKDAYS: [&str; 7] = [
    "ថ្ងៃអាទិត្យ",
    "ថ្ងៃច័ន្ទ",
    "ថ្ងៃអង្គារ",
    "ថ្ងៃពុធ",
    "ថ្ងៃព្រហស្បតិ៍",
    "ថ្ងៃសុក្រ",
    "ថ្ងៃសៅរ៍",
];

pub const fn to_buddhist_era(year: u16) -> u16 {
    year + BUDDHIST_ERA_OFFSET
}

/// `None` for Buddhist-Era years before the Common Era.
pub const fn from_buddhist_era(be_year: u16) -> Option<u16> {
    be_year.checked_sub(BUDDHIST_ERA_OFFSET)
}

/// A Gregorian month with its Khmer and English names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SolarMonth {
    /// `1..=12`
    pub index:   u8,
    pub khmer:   &'static str,
    pub english: &'static str,
}

/// A weekday with its Khmer and English names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SolarWeekday {
    /// `0..=6`, Sunday first
    pub index:   u8,
    pub khmer:   &'static str,
    pub english: &'static str,
}

pub fn khmer_months() -> [SolarMonth; MAX_MONTH as usize] {
    std::array::from_fn(|i| SolarMonth {
        index:   (i + 1) as u8,
        khmer:   KHMER_MONTHS[i],
        english: ENGLISH_MONTHS[i],
    })
}

pub fn khmer_weekdays() -> [SolarWeekday; 7] {
    std::array::from_fn(|i| {
        let weekday = Weekday::from_index(i as u32);
        SolarWeekday {
            index:   weekday.index(),
            khmer:   weekday_name(weekday),
            english: english_weekday(weekday),
        }
    })
}

/// Khmer name of Gregorian `month`.
///
/// # Errors
/// Returns `ParseError::InvalidMonth` outside `1..=12`.
pub fn month_name(month: u8) -> Result<&'static str, ParseError> {
    usize::from(month)
        .checked_sub(1)
        .and_then(|i| KHMER_MONTHS.get(i))
        .copied()
        .ok_or(ParseError::InvalidMonth(month))
}

pub const fn weekday_name(weekday: Weekday) -> &'static str {
    KHMER_WEEKDAYS[weekday.index() as usize]
}

const fn english_weekday(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sunday => "Sunday",
        Weekday::Monday => "Monday",
        Weekday::Tuesday => "Tuesday",
        Weekday::Wednesday => "Wednesday",
        Weekday::Thursday => "Thursday",
        Weekday::Friday => "Friday",
        Weekday::Saturday => "Saturday",
    }
}

/// A Gregorian date rendered with Khmer names and a Buddhist-Era year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedSolarDate {
    pub year:     u16,
    pub month:    u8,
    pub day:      u8,
    pub day_name: &'static str,
    /// `{weekday} ថ្ងៃទី {day} {month} ឆ្នាំ {BE}`
    pub khmer:    String,
    /// `{Weekday} {day} {month} {BE} BE`; the month stays in Khmer
    pub english:  String,
}

impl FormattedSolarDate {
    pub fn new(date: GregorianDate) -> Self {
        let weekday = date.weekday();
        let day_name = weekday_name(weekday);
        // Every valid date has a named month
        let month = KHMER_MONTHS[usize::from(date.month() - 1)];
        let be_year = to_buddhist_era(date.year());
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            day_name,
            khmer: format!("{day_name} ថ្ងៃទី {} {month} ឆ្នាំ {be_year}", date.day()),
            english: format!("{} {} {month} {be_year} BE", english_weekday(weekday), date.day()),
        }
    }
}

impl From<GregorianDate> for FormattedSolarDate {
    fn from(date: GregorianDate) -> Self {
        Self::new(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_buddhist_era() {
        assert_eq!(to_buddhist_era(2018), 2561);
        assert_eq!(from_buddhist_era(2561), Some(2018));
        assert_eq!(from_buddhist_era(543), Some(0));
        assert_eq!(from_buddhist_era(100), None);
    }

    #[test]
    fn test_month_table() {
        let months = khmer_months();
        assert_eq!(months[0], SolarMonth {
            index:   1,
            khmer:   "មករា",
            english: "January",
        });
        assert_eq!(months[11].index, 12);
        assert_eq!(months[11].khmer, "ធ្នូ");
        assert_eq!(months[11].english, "December");
    }

    #[test]
    fn test_weekday_table() {
        let weekdays = khmer_weekdays();
        assert_eq!(weekdays[0], SolarWeekday {
            index:   0,
            khmer:   "ថ្ងៃអាទិត្យ",
            english: "Sunday",
        });
        assert_eq!(weekdays[6].english, "Saturday");
        assert_eq!(weekdays[6].khmer, "ថ្ងៃសៅរ៍");
        for (i, weekday) in weekdays.iter().enumerate() {
            assert_eq!(usize::from(weekday.index), i);
        }
    }

    #[test]
    fn test_month_name_bounds() {
        assert_eq!(month_name(4), Ok("មេសា"));
        assert_eq!(month_name(0), Err(ParseError::InvalidMonth(0)));
        assert_eq!(month_name(13), Err(ParseError::InvalidMonth(13)));
    }

    #[test]
    fn test_formatted_date() {
        // 2018-01-01 was a Monday
        let formatted = FormattedSolarDate::new(date(2018, 1, 1));
        assert_eq!(formatted.day_name, "ថ្ងៃច័ន្ទ");
        assert_eq!(formatted.khmer, "ថ្ងៃច័ន្ទ ថ្ងៃទី 1 មករា ឆ្នាំ 2561");
        assert_eq!(formatted.english, "Monday 1 មករា 2561 BE");
    }

    #[test]
    fn test_formatted_date_serialization() {
        let formatted = FormattedSolarDate::from(date(2024, 4, 13));
        let json = serde_json::to_value(&formatted).unwrap();
        assert_eq!(json["year"], 2024);
        assert_eq!(json["month"], 4);
        assert_eq!(json["day"], 13);
        assert_eq!(json["dayName"], "ថ្ងៃសៅរ៍");
        assert_eq!(json["english"], "Saturday 13 មេសា 2567 BE");
    }
}
