use serde::Serialize;
use tracing::{debug, warn};

use crate::consts::{MAX_LUNAR_YEAR, MIN_LUNAR_YEAR};
use crate::counter::{DayCounter, leap_for_gregorian_year};
use crate::cycle::CycleLabels;
use crate::date::GregorianDate;
use crate::epoch::Anchor;
use crate::types::{MoonPhase, Ordinal};
use crate::{ParseError, fmt, table};

/// Error type for lunar conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Year outside the epoch table. Conversion rejects only years before
    /// `MIN_LUNAR_YEAR`; later years are extrapolated.
    #[error("Year {year} is outside the lunar epoch table ({}-{})", MIN_LUNAR_YEAR, MAX_LUNAR_YEAR)]
    InvalidRange { year: u16 },

    /// The day counter produced a slot the code table does not have.
    #[error("Lunar ordinal {0} is not in the code table")]
    UnmappedOrdinal(u16),

    /// A cycle or month index has no name.
    #[error("No {table} name for index {index}")]
    UnnamedIndex { table: &'static str, index: u8 },

    /// Error parsing the Gregorian date.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A Gregorian date expressed in the Khmer lunar calendar.
///
/// Serializes with camelCase keys for the service layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LunarDate {
    /// The Gregorian date this was computed for
    pub date:              GregorianDate,
    /// Slot of the lunar-day code table
    #[serde(skip)]
    pub ordinal:           Ordinal,
    pub sak:               u8,
    pub sak_label:         &'static str,
    pub animal_year:       u8,
    pub animal_year_label: &'static str,
    /// Buddhist-Era year as carried by the day counter; it turns over at the
    /// lunar new year (6th month, first waning day)
    pub buddhist_era_year: u16,
    /// `1..=14`, where 9 and 10 are the doubled month of a leap-month year
    pub lunar_month:       u8,
    pub lunar_month_label: &'static str,
    pub moon_phase:        MoonPhase,
    pub moon_phase_label:  &'static str,
    /// Day within the phase, `1..=15`
    pub lunar_day:         u8,
    /// `lunar_day` in Khmer numerals
    pub lunar_day_label:   String,
    pub is_holy_day:       bool,
    /// `SSAAYYYYMMPDD[S]`: Sak, animal year, Buddhist-Era year, lunar month,
    /// phase, day and holy-day marker
    pub code:              String,
    pub full_description:  String,
}

impl LunarDate {
    /// Converts `date`.
    ///
    /// Dates after `MAX_LUNAR_YEAR` are computed by counting forward from the
    /// last anchor; their accuracy is unverified.
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidRange` for years before `MIN_LUNAR_YEAR`.
    pub fn from_gregorian(date: GregorianDate) -> Result<Self, ConversionError> {
        let anchor = Anchor::for_year(date.year())?;
        if anchor.extrapolated {
            warn!(%date, anchor = %anchor.date, "extrapolating lunar date past {MAX_LUNAR_YEAR}");
        }
        let mut counter = DayCounter::new(anchor);
        counter.advance_to(date);
        Self::from_counter(&counter)
    }

    /// Converts a date given as raw components.
    ///
    /// # Errors
    /// Returns `ConversionError::Parse` for an invalid date, otherwise as
    /// [`LunarDate::from_gregorian`].
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, ConversionError> {
        Self::from_gregorian(GregorianDate::from_ymd(year, month, day)?)
    }

    /// Converts an ISO `YYYY-MM-DD` date string.
    ///
    /// # Errors
    /// Returns `ConversionError::Parse` for malformed input, otherwise as
    /// [`LunarDate::from_gregorian`].
    pub fn from_iso(s: &str) -> Result<Self, ConversionError> {
        Self::from_gregorian(s.parse()?)
    }

    /// Builds the record for the counter's current date.
    pub(crate) fn from_counter(counter: &DayCounter) -> Result<Self, ConversionError> {
        let date = counter.date();
        let ordinal = counter.ordinal()?;
        let leap = leap_for_gregorian_year(date.year());
        let day_code = table::lookup(ordinal, leap).ok_or(ConversionError::UnmappedOrdinal(ordinal.get()))?;
        let cycle = CycleLabels::for_date(date)?;
        let buddhist_era_year = counter.year_path();

        let sak_label = named("sak", cycle.sak, fmt::sak)?;
        let animal_year_label = named("animal year", cycle.animal_year, fmt::animal_year)?;
        let lunar_month_label = named("lunar month", day_code.month, fmt::lunar_month)?;

        let code = format!(
            "{:02}{:02}{:04}{}",
            cycle.sak,
            cycle.animal_year,
            buddhist_era_year,
            day_code.fragment()
        );
        let full_description = fmt::describe(&fmt::Description {
            day: day_code.day,
            phase: day_code.phase,
            month_name: lunar_month_label,
            buddhist_era: buddhist_era_year,
            animal_name: animal_year_label,
            sak_name: sak_label,
        });
        debug!(%date, ordinal = ordinal.get(), buddhist_era_year, %leap, code = %code, "converted lunar date");

        Ok(Self {
            date,
            ordinal,
            sak: cycle.sak,
            sak_label,
            animal_year: cycle.animal_year,
            animal_year_label,
            buddhist_era_year,
            lunar_month: day_code.month,
            lunar_month_label,
            moon_phase: day_code.phase,
            moon_phase_label: fmt::moon_phase(day_code.phase),
            lunar_day: day_code.day,
            lunar_day_label: fmt::khmer_number(day_code.day),
            is_holy_day: day_code.is_holy_day,
            code,
            full_description,
        })
    }

    /// សីល on holy days
    pub const fn holy_day_label(&self) -> Option<&'static str> {
        if self.is_holy_day { Some(fmt::HOLY_DAY_NAME) } else { None }
    }

    /// Buddhist-Era year in Khmer numerals
    pub fn buddhist_era_label(&self) -> String {
        fmt::khmer_number(self.buddhist_era_year)
    }
}

fn named(
    table: &'static str,
    index: u8,
    lookup: fn(u8) -> Option<&'static str>,
) -> Result<&'static str, ConversionError> {
    lookup(index).ok_or(ConversionError::UnnamedIndex { table, index })
}

/// Lunar code string for `date`.
///
/// # Errors
/// As [`LunarDate::from_gregorian`].
pub fn lunar_code(date: GregorianDate) -> Result<String, ConversionError> {
    LunarDate::from_gregorian(date).map(|lunar| lunar.code)
}
