use std::cmp::Ordering;
use std::str::FromStr;

use crate::consts::{DATE_SEPARATOR, DECEMBER, JANUARY, MAX_YEAR, MIN_DAY};
use crate::prelude::*;
use crate::types::{self, days_in_month};
use crate::ParseError;

/// A concrete proleptic Gregorian calendar date.
///
/// Components are validated on construction, so every value names a day
/// that exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct GregorianDate {
    year:  types::Year,
    month: types::Month,
    day:   types::Day,
}

/// Day of week, numbered from Sunday (0) to Saturday (6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Sunday-first index, `0..=6`
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Wraps `index` modulo 7.
    pub const fn from_index(index: u32) -> Self {
        Self::ALL[(index % 7) as usize]
    }
}

impl GregorianDate {
    /// Creates a date from already-validated components
    pub const fn new(year: types::Year, month: types::Month, day: types::Day) -> Self {
        Self { year, month, day }
    }

    /// Creates a date from raw components, validating each one.
    ///
    /// # Errors
    /// Returns `ParseError` if any component is out of range.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year:  types::Year::new(year)?,
            month: types::Month::new(month)?,
            day:   types::Day::new(day, year, month)?,
        })
    }

    /// January 1 of `year`.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the year is out of range.
    pub fn new_year_day(year: u16) -> Result<Self, ParseError> {
        Self::from_ymd(year, JANUARY, MIN_DAY)
    }

    #[inline]
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Julian Day Number of the date.
    pub const fn jdn(&self) -> u32 {
        let (y, m, d) = (self.year() as i32, self.month() as i32, self.day() as i32);
        let jdn = (1461 * (y + 4800 + (m - 14) / 12)) / 4
            + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
            - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
            + d
            - 32075;
        // Year 1 already yields a JDN well above zero
        jdn as u32
    }

    /// Inverse of [`GregorianDate::jdn`].
    ///
    /// Returns `None` when the JDN falls outside years `1..=MAX_YEAR`.
    pub fn from_jdn(jdn: u32) -> Option<Self> {
        let jdn = i64::from(jdn);
        let f = jdn + 1401 + (((4 * jdn + 274_277) / 146_097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;

        let year = u16::try_from(year).ok()?;
        let month = u8::try_from(month).ok()?;
        let day = u8::try_from(day).ok()?;
        Self::from_ymd(year, month, day).ok()
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(&self, other: &Self) -> i64 {
        i64::from(other.jdn()) - i64::from(self.jdn())
    }

    /// Day of week
    pub const fn weekday(&self) -> Weekday {
        Weekday::from_index(self.jdn() + 1)
    }

    /// The following day, or `None` past the last day of `MAX_YEAR`.
    pub fn succ(&self) -> Option<Self> {
        let (year, month, day) = (self.year(), self.month(), self.day());
        let (year, month, day) = if day < days_in_month(year, month) {
            (year, month, day + 1)
        } else if month < DECEMBER {
            (year, month + 1, MIN_DAY)
        } else if year < MAX_YEAR {
            (year + 1, JANUARY, MIN_DAY)
        } else {
            return None;
        };
        Self::from_ymd(year, month, day).ok()
    }

    /// Moves `days` forward (or backward when negative).
    ///
    /// Returns `None` when the result leaves years `1..=MAX_YEAR`.
    pub fn add_days(&self, days: i64) -> Option<Self> {
        let jdn = i64::from(self.jdn()).checked_add(days)?;
        Self::from_jdn(u32::try_from(jdn).ok()?)
    }
}

impl PartialOrd for GregorianDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GregorianDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // ISO format only: YYYY-MM-DD
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        match parts.as_slice() {
            [year, month, day] => {
                let year = parse_component::<u16>(year)?;
                let month = parse_component::<u8>(month)?;
                let day = parse_component::<u8>(day)?;
                Self::from_ymd(year, month, day)
            },
            _ => Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s) in {trimmed}",
                parts.len()
            ))),
        }
    }
}

fn parse_component<T: FromStr>(s: &str) -> Result<T, ParseError> {
    s.parse::<T>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl TryFrom<(u16, u8, u8)> for GregorianDate {
    type Error = ParseError;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::from_ymd(year, month, day)
    }
}

impl From<GregorianDate> for (u16, u8, u8) {
    fn from(date: GregorianDate) -> Self {
        (date.year(), date.month(), date.day())
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
