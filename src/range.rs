use std::{cmp::Ordering, iter::FusedIterator, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::counter::DayCounter;
use crate::date::GregorianDate;
use crate::lunar::{ConversionError, LunarDate};
use crate::{MAX_LUNAR_YEAR, ParseError, RANGE_SEPARATOR, prelude::*};

/// An inclusive span of Gregorian days.
/// The start date must be less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateRange {
    start: GregorianDate,
    end:   GregorianDate,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: GregorianDate, end: GregorianDate },

    /// Error parsing date component.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl DateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: GregorianDate, end: GregorianDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Range covering a single day
    pub const fn day(date: GregorianDate) -> Self {
        Self { start: date, end: date }
    }

    /// Returns the start date of the range
    pub const fn start(&self) -> GregorianDate {
        self.start
    }

    /// Returns the end date of the range
    pub const fn end(&self) -> GregorianDate {
        self.end
    }

    /// Returns both start and end dates as a tuple
    pub const fn dates(&self) -> (GregorianDate, GregorianDate) {
        (self.start, self.end)
    }

    /// Number of days in the range, counting both ends
    pub const fn len_days(&self) -> u32 {
        self.end.jdn() - self.start.jdn() + 1
    }

    pub fn contains(&self, date: &GregorianDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Checks if the ranges share at least one day
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Checks if this range is completely contained within another range
    pub fn is_within(&self, other: &Self) -> bool {
        other.start <= self.start && self.end <= other.end
    }

    /// Every Gregorian day of the range, in order.
    pub fn days(&self) -> impl Iterator<Item = GregorianDate> + use<> {
        let end = self.end;
        std::iter::successors(Some(self.start), move |date| date.succ().filter(|next| *next <= end))
    }

    /// Lunar dates for every day of the range, in order.
    ///
    /// The day counter is replayed from an anchor once for the start date and
    /// then stepped a day at a time, so each item matches
    /// [`LunarDate::from_gregorian`] for the same day. A start before the
    /// epoch table yields a single error and ends the iteration.
    pub fn lunar_days(&self) -> LunarDays {
        if self.end.year() > MAX_LUNAR_YEAR {
            warn!(range = %self, "extrapolating lunar dates past {MAX_LUNAR_YEAR}");
        }
        let state = DayCounter::anchored_for(self.start.year()).map(|mut counter| {
            counter.advance_to(self.start);
            counter
        });
        match state {
            Ok(counter) => LunarDays {
                counter: Some(counter),
                error:   None,
                end:     self.end,
            },
            Err(err) => LunarDays {
                counter: None,
                error:   Some(err),
                end:     self.end,
            },
        }
    }
}

/// Iterator returned by [`DateRange::lunar_days`].
#[derive(Debug, Clone)]
pub struct LunarDays {
    counter: Option<DayCounter>,
    error:   Option<ConversionError>,
    end:     GregorianDate,
}

impl Iterator for LunarDays {
    type Item = Result<LunarDate, ConversionError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(err) = self.error.take() {
            return Some(Err(err));
        }
        let counter = self.counter.as_mut()?;
        if counter.date() > self.end {
            self.counter = None;
            return None;
        }
        let item = LunarDate::from_counter(counter);
        if item.is_err() || counter.date() == self.end || !counter.step() {
            self.counter = None;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (&self.counter, &self.error) {
            (_, Some(_)) => (1, Some(1)),
            (Some(counter), None) => {
                let remaining = usize::try_from(counter.date().days_until(&self.end) + 1).unwrap_or(0);
                (remaining, Some(remaining))
            },
            (None, None) => (0, Some(0)),
        }
    }
}

impl FusedIterator for LunarDays {}

impl FromStr for DateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start_str, end_str) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!("Separator '{RANGE_SEPARATOR}' not found despite count == 1"))
                })?;

                let start = start_str.trim().parse::<GregorianDate>()?;
                let end = end_str.trim().parse::<GregorianDate>()?;

                Self::new(start, end)
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl PartialOrd for DateRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateRange {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.start.cmp(&other.start) {
            Ordering::Equal => self.end.cmp(&other.end),
            ord => ord,
        }
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
