//! The 415-slot lunar-day code table.
//!
//! Slots describe a "full" lunar year carrying both a leap day (slot 207) and
//! a leap month (slots 238..=297); the day counter skips whatever the current
//! year does not have. Each fragment is `MM` month, `K`/`R` phase, `DD` day
//! of phase and an optional `S` holy-day marker.

use crate::consts::{HOLY_DAY_MARKER, LUNAR_CYCLE_LEN};
use crate::leap::LeapType;
use crate::types::{MoonPhase, Ordinal};

/// Fragment for every ordinal, indexed by `ordinal - 1`.
#[rustfmt::skip]
pub const LUNAR_DAY_CODES: [&str; LUNAR_CYCLE_LEN as usize] = [
    "01K01", "01K02", "01K03", "01K04", "01K05", "01K06", "01K07", "01K08S", "01K09", "01K10", "01K11", "01K12", "01K13", "01K14", "01K15S",
    "01R01", "01R02", "01R03", "01R04", "01R05", "01R06", "01R07", "01R08S", "01R09", "01R10", "01R11", "01R12", "01R13", "01R14S",
    "02K01", "02K02", "02K03", "02K04", "02K05", "02K06", "02K07", "02K08S", "02K09", "02K10", "02K11", "02K12", "02K13", "02K14", "02K15S",
    "02R01", "02R02", "02R03", "02R04", "02R05", "02R06", "02R07", "02R08S", "02R09", "02R10", "02R11", "02R12", "02R13", "02R14", "02R15S",
    "03K01", "03K02", "03K03", "03K04", "03K05", "03K06", "03K07", "03K08S", "03K09", "03K10", "03K11", "03K12", "03K13", "03K14", "03K15S",
    "03R01", "03R02", "03R03", "03R04", "03R05", "03R06", "03R07", "03R08S", "03R09", "03R10", "03R11", "03R12", "03R13", "03R14S",
    "04K01", "04K02", "04K03", "04K04", "04K05", "04K06", "04K07", "04K08S", "04K09", "04K10", "04K11", "04K12", "04K13", "04K14", "04K15S",
    "04R01", "04R02", "04R03", "04R04", "04R05", "04R06", "04R07", "04R08S", "04R09", "04R10", "04R11", "04R12", "04R13", "04R14", "04R15S",
    "05K01", "05K02", "05K03", "05K04", "05K05", "05K06", "05K07", "05K08S", "05K09", "05K10", "05K11", "05K12", "05K13", "05K14", "05K15S",
    "05R01", "05R02", "05R03", "05R04", "05R05", "05R06", "05R07", "05R08S", "05R09", "05R10", "05R11", "05R12", "05R13", "05R14S",
    "06K01", "06K02", "06K03", "06K04", "06K05", "06K06", "06K07", "06K08S", "06K09", "06K10", "06K11", "06K12", "06K13", "06K14", "06K15S",
    "06R01", "06R02", "06R03", "06R04", "06R05", "06R06", "06R07", "06R08S", "06R09", "06R10", "06R11", "06R12", "06R13", "06R14", "06R15S",
    "07K01", "07K02", "07K03", "07K04", "07K05", "07K06", "07K07", "07K08S", "07K09", "07K10", "07K11", "07K12", "07K13", "07K14", "07K15S",
    "07R01", "07R02", "07R03", "07R04", "07R05", "07R06", "07R07", "07R08S", "07R09", "07R10", "07R11", "07R12", "07R13", "07R14", "07R15S",
    "08K01", "08K02", "08K03", "08K04", "08K05", "08K06", "08K07", "08K08S", "08K09", "08K10", "08K11", "08K12", "08K13", "08K14", "08K15S",
    "08R01", "08R02", "08R03", "08R04", "08R05", "08R06", "08R07", "08R08S", "08R09", "08R10", "08R11", "08R12", "08R13", "08R14", "08R15S",
    "09K01", "09K02", "09K03", "09K04", "09K05", "09K06", "09K07", "09K08S", "09K09", "09K10", "09K11", "09K12", "09K13", "09K14", "09K15S",
    "09R01", "09R02", "09R03", "09R04", "09R05", "09R06", "09R07", "09R08S", "09R09", "09R10", "09R11", "09R12", "09R13", "09R14", "09R15S",
    "10K01", "10K02", "10K03", "10K04", "10K05", "10K06", "10K07", "10K08S", "10K09", "10K10", "10K11", "10K12", "10K13", "10K14", "10K15S",
    "10R01", "10R02", "10R03", "10R04", "10R05", "10R06", "10R07", "10R08S", "10R09", "10R10", "10R11", "10R12", "10R13", "10R14", "10R15S",
    "11K01", "11K02", "11K03", "11K04", "11K05", "11K06", "11K07", "11K08S", "11K09", "11K10", "11K11", "11K12", "11K13", "11K14", "11K15S",
    "11R01", "11R02", "11R03", "11R04", "11R05", "11R06", "11R07", "11R08S", "11R09", "11R10", "11R11", "11R12", "11R13", "11R14S",
    "12K01", "12K02", "12K03", "12K04", "12K05", "12K06", "12K07", "12K08S", "12K09", "12K10", "12K11", "12K12", "12K13", "12K14", "12K15S",
    "12R01", "12R02", "12R03", "12R04", "12R05", "12R06", "12R07", "12R08S", "12R09", "12R10", "12R11", "12R12", "12R13", "12R14", "12R15S",
    "13K01", "13K02", "13K03", "13K04", "13K05", "13K06", "13K07", "13K08S", "13K09", "13K10", "13K11", "13K12", "13K13", "13K14", "13K15S",
    "13R01", "13R02", "13R03", "13R04", "13R05", "13R06", "13R07", "13R08S", "13R09", "13R10", "13R11", "13R12", "13R13", "13R14S",
    "14K01", "14K02", "14K03", "14K04", "14K05", "14K06", "14K07", "14K08S", "14K09", "14K10", "14K11", "14K12", "14K13", "14K14", "14K15S",
    "14R01", "14R02", "14R03", "14R04", "14R05", "14R06", "14R07", "14R08S", "14R09", "14R10", "14R11", "14R12", "14R13", "14R14", "14R15S",
];

/// Last waning day of month 7 in years without a leap day.
const SHORT_MONTH_SEVEN_END: &str = "07R14";

/// Decoded lunar-day code fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDayCode {
    /// Month index `1..=14`; 9 and 10 are the doubled leap months
    pub month:       u8,
    pub phase:       MoonPhase,
    /// Day within the phase, `1..=15`
    pub day:         u8,
    pub is_holy_day: bool,
}

impl LunarDayCode {
    /// Decodes a `MMPDD[S]` fragment.
    pub fn parse(fragment: &str) -> Option<Self> {
        let month = fragment.get(0..2)?.parse().ok()?;
        let phase = MoonPhase::from_marker(fragment.get(2..)?.chars().next()?)?;
        let day = fragment.get(3..5)?.parse().ok()?;
        let is_holy_day = match fragment.get(5..)? {
            "" => false,
            rest if rest.len() == 1 && rest.starts_with(HOLY_DAY_MARKER) => true,
            _ => return None,
        };
        Some(Self {
            month,
            phase,
            day,
            is_holy_day,
        })
    }

    /// Re-encodes to the `MMPDD[S]` form
    pub fn fragment(&self) -> String {
        let mut out = format!("{:02}{}{:02}", self.month, self.phase.marker(), self.day);
        if self.is_holy_day {
            out.push(HOLY_DAY_MARKER);
        }
        out
    }
}

/// Raw table fragment for `ordinal`.
pub const fn fragment_for(ordinal: Ordinal) -> &'static str {
    LUNAR_DAY_CODES[ordinal.index()]
}

/// Looks up and decodes `ordinal`, applying the month-7 holy-day rule for the
/// calendar leap type of the query year.
///
/// In years without a leap day, `07R14` is the last day of month 7 and is
/// observed as a holy day.
pub fn lookup(ordinal: Ordinal, leap: LeapType) -> Option<LunarDayCode> {
    let fragment = fragment_for(ordinal);
    let mut code = LunarDayCode::parse(fragment)?;
    if fragment == SHORT_MONTH_SEVEN_END && leap != LeapType::LeapDay {
        code.is_holy_day = true;
    }
    Some(code)
}
