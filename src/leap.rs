//! Leap-day and leap-month rules of the Khmer lunisolar calendar.
//!
//! Every quantity here is an integer recurrence over the Buddhist-Era year
//! (Aharkun, Avoman, Kromthupul, Bodithey). The functions are pure and cheap,
//! so callers recompute them instead of storing leap types.

use crate::consts::{
    AHARKUN_SHIFT, AVOMAN_FACTOR, AVOMAN_MODULUS, AVOMAN_SHIFT, BODITHEY_MODULUS, BODITHEY_SHIFT,
    KROMTHUPUL_SOLAR_LEAP_MAX, SOLAR_DAYS_DENOMINATOR, SOLAR_DAYS_NUMERATOR, SOLAR_DAYS_ROUNDING,
};
use crate::prelude::*;

/// Which insertions a lunar year carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum LeapType {
    /// Regular year: no inserted day or month
    #[display(fmt = "")]
    None,
    /// Month 8 is doubled (months "09"/"10" of the code table)
    #[display(fmt = "M")]
    LeapMonth,
    /// Month 7 gains a 30th day
    #[display(fmt = "D")]
    LeapDay,
    /// Both insertions; only ever produced by [`bodithey_leap`]
    #[display(fmt = "MD")]
    LeapMonthAndDay,
}

impl LeapType {
    const fn from_flags(leap_month: bool, leap_day: bool) -> Self {
        match (leap_month, leap_day) {
            (true, true) => Self::LeapMonthAndDay,
            (true, false) => Self::LeapMonth,
            (false, true) => Self::LeapDay,
            (false, false) => Self::None,
        }
    }

    pub const fn has_leap_month(self) -> bool {
        matches!(self, Self::LeapMonth | Self::LeapMonthAndDay)
    }

    pub const fn has_leap_day(self) -> bool {
        matches!(self, Self::LeapDay | Self::LeapMonthAndDay)
    }
}

#[inline]
const fn solar_days(be_year: i64) -> i64 {
    be_year * SOLAR_DAYS_NUMERATOR + SOLAR_DAYS_ROUNDING
}

/// Days elapsed since the start of the Chulasakarat era, plus the fixed shift.
pub const fn aharkun(be_year: i64) -> i64 {
    solar_days(be_year).div_euclid(SOLAR_DAYS_DENOMINATOR) + AHARKUN_SHIFT
}

#[inline]
const fn avoman_numerator(be_year: i64) -> i64 {
    aharkun(be_year) * AVOMAN_FACTOR + AVOMAN_SHIFT
}

/// Lunar-day excess used by the leap-day rule, in `0..692`.
pub const fn avoman(be_year: i64) -> i64 {
    avoman_numerator(be_year).rem_euclid(AVOMAN_MODULUS)
}

/// Remaining solar fraction of the year, in `1..=800`.
pub const fn kromthupul(be_year: i64) -> i64 {
    SOLAR_DAYS_DENOMINATOR - solar_days(be_year).rem_euclid(SOLAR_DAYS_DENOMINATOR)
}

pub const fn is_solar_leap(be_year: i64) -> bool {
    kromthupul(be_year) <= KROMTHUPUL_SOLAR_LEAP_MAX
}

/// Lunar age at the start of the year, in `0..30`.
pub const fn bodithey(be_year: i64) -> i64 {
    (avoman_numerator(be_year).div_euclid(AVOMAN_MODULUS) + aharkun(be_year) + BODITHEY_SHIFT)
        .rem_euclid(BODITHEY_MODULUS)
}

fn has_leap_day(be_year: i64) -> bool {
    let current = avoman(be_year);
    if is_solar_leap(be_year) && current < 127 {
        return true;
    }
    if current == 137 && avoman(be_year + 1) == 0 {
        return false;
    }
    if avoman(be_year - 1) == 138 && current == 0 {
        return true;
    }
    current < 138
}

fn has_leap_month(be_year: i64) -> bool {
    let current = bodithey(be_year);
    let next = bodithey(be_year + 1);
    if current == 25 && next == 5 {
        return false;
    }
    if current == 24 && next == 6 {
        return true;
    }
    !(6..=24).contains(&current)
}

/// Astronomical leap type of a Buddhist-Era year.
pub fn bodithey_leap(be_year: i64) -> LeapType {
    LeapType::from_flags(has_leap_month(be_year), has_leap_day(be_year))
}

/// Leap type the calendar actually applies to a Buddhist-Era year.
///
/// A year that astronomically needs both insertions keeps only the leap
/// month; its leap day moves to the following year. Never returns
/// [`LeapType::LeapMonthAndDay`].
pub fn calendar_leap(be_year: i64) -> LeapType {
    match bodithey_leap(be_year) {
        LeapType::LeapMonthAndDay => LeapType::LeapMonth,
        _ if bodithey_leap(be_year - 1) == LeapType::LeapMonthAndDay => LeapType::LeapDay,
        leap => leap,
    }
}
