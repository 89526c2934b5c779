//! Day-by-day replay from a January 1 anchor to the query date.

use tracing::trace;

use crate::consts::{
    LEAP_DAY_SLOT, LEAP_LOOKUP_OFFSET, LEAP_MONTH_SLOT, LUNAR_CYCLE_LEN, MONTH_EIGHT_SLOT, MONTH_ELEVEN_SLOT,
    YEAR_ROLLOVER_SLOT,
};
use crate::date::GregorianDate;
use crate::epoch::Anchor;
use crate::leap::{LeapType, calendar_leap};
use crate::lunar::ConversionError;
use crate::types::Ordinal;

/// Leap type governing the transitions taken while leaving a day of
/// Gregorian `year`.
pub fn leap_for_gregorian_year(year: u16) -> LeapType {
    calendar_leap(i64::from(year) + i64::from(LEAP_LOOKUP_OFFSET))
}

/// Raw ordinal following `current` under `leap`.
///
/// Slots the current year does not have are skipped: 207 without a leap day,
/// 238..=297 without a leap month. A leap month year also jumps from 208
/// straight to 238.
pub fn next_ordinal(current: u16, leap: LeapType) -> u16 {
    let mut next = current + 1;
    if next == LEAP_DAY_SLOT && leap != LeapType::LeapDay {
        next = MONTH_EIGHT_SLOT;
    }
    if next == MONTH_EIGHT_SLOT && leap == LeapType::LeapMonth {
        next = LEAP_MONTH_SLOT;
    }
    if next == LEAP_MONTH_SLOT && leap != LeapType::LeapMonth {
        next = MONTH_ELEVEN_SLOT;
    }
    if next == LUNAR_CYCLE_LEN + 1 {
        next = 1;
    }
    next
}

/// Running state of the counting automaton.
#[derive(Debug, Clone)]
pub struct DayCounter {
    date:      GregorianDate,
    ordinal:   u16,
    year_path: u16,
    leap:      (u16, LeapType),
}

impl DayCounter {
    /// Starts at `anchor`.
    pub fn new(anchor: Anchor) -> Self {
        let year = anchor.date.year();
        Self {
            date:      anchor.date,
            ordinal:   anchor.ordinal.get(),
            year_path: anchor.year_path(),
            leap:      (year, leap_for_gregorian_year(year)),
        }
    }

    /// Starts at the anchor used for queries in `year`.
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidRange` for years before the table.
    pub fn anchored_for(year: u16) -> Result<Self, ConversionError> {
        Anchor::for_year(year).map(Self::new)
    }

    /// Simulated date the state describes
    pub const fn date(&self) -> GregorianDate {
        self.date
    }

    /// Buddhist-Era year label, which rolls over at the lunar new year
    pub const fn year_path(&self) -> u16 {
        self.year_path
    }

    /// Current slot of the code table.
    ///
    /// # Errors
    /// Returns `ConversionError::UnmappedOrdinal` if the automaton left the
    /// table, which indicates a logic error rather than bad input.
    pub fn ordinal(&self) -> Result<Ordinal, ConversionError> {
        Ordinal::new(self.ordinal).ok_or(ConversionError::UnmappedOrdinal(self.ordinal))
    }

    fn leap(&mut self) -> LeapType {
        let year = self.date.year();
        if self.leap.0 != year {
            self.leap = (year, leap_for_gregorian_year(year));
        }
        self.leap.1
    }

    /// Advances one day. Returns `false`, leaving the state untouched, when
    /// the calendar has no following day.
    pub fn step(&mut self) -> bool {
        let Some(tomorrow) = self.date.succ() else {
            return false;
        };
        let leap = self.leap();
        let next = next_ordinal(self.ordinal, leap);
        if next != self.ordinal + 1 {
            trace!(from = self.ordinal, to = next, %leap, date = %self.date, "ordinal jump");
        }
        if next == YEAR_ROLLOVER_SLOT {
            self.year_path += 1;
        }
        self.ordinal = next;
        self.date = tomorrow;
        true
    }

    /// Steps until the simulated date reaches `target`.
    ///
    /// Targets before the current date leave the state unchanged.
    pub fn advance_to(&mut self, target: GregorianDate) {
        while self.date < target && self.step() {}
    }
}
