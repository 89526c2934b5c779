//! Khmer names and numerals used when rendering lunar dates.

use crate::types::MoonPhase;

/// Khmer digits, indexed by the ASCII digit they replace.
pub const KHMER_DIGITS: [char; 10] = ['០', '១', '២', '៣', '៤', '៥', '៦', '៧', '៨', '៩'];

/// Lunar month names, index `month - 1`. Months 9 and 10 are the first and
/// second Asadha of a leap-month year.
pub const LUNAR_MONTH_NAMES: [&str; 14] = [
    "មិគសិរ",
    "បុស្ស",
    "មាឃ",
    "ផល្គុន",
    "ចេត្រ",
    "ពិសាខ",
    "ជេស្ឋ",
    "អាសាធ",
    "បឋមសាធ",
    "ទុតិយសាធ",
    "ស្រាពណ៌",
    "ភទ្របទ",
    "អស្សុជ",
    "កក្ដិក",
];

/// Animal-year names, index `animal_year - 1` (rat first).
pub const ANIMAL_YEAR_NAMES: [&str; 12] = [
    "ជូត", "ឆ្លូវ", "ខាល", "ថោះ", "រោង", "ម្សាញ់", "មមី", "ម្មែ", "វក", "រកា", "ច", "កុរ",
];

/// Sak names, index `sak - 1`. A zero-width space separates the ordinal
/// prefix from ស័ក.
pub const SAK_NAMES: [&str; 10] = [
    "ឯក\u{200b}ស័ក",
    "ទោ\u{200b}ស័ក",
    "ត្រី\u{200b}ស័ក",
    "ចត្វា\u{200b}ស័ក",
    "បញ្ច\u{200b}ស័ក",
    "ឆ\u{200b}ស័ក",
    "សប្ត\u{200b}ស័ក",
    "អដ្ឋ\u{200b}ស័ក",
    "នព្វ\u{200b}ស័ក",
    "សំរឹទ្ធិ\u{200b}ស័ក",
];

/// Label for a holy (សីល) day
pub const HOLY_DAY_NAME: &str = "សីល";

fn one_based<T: Copy>(table: &[T], index: u8) -> Option<T> {
    usize::from(index).checked_sub(1).and_then(|i| table.get(i)).copied()
}

/// Lunar month name for `month` in `1..=14`.
pub fn lunar_month(month: u8) -> Option<&'static str> {
    one_based(&LUNAR_MONTH_NAMES, month)
}

/// Animal-year name for `animal_year` in `1..=12`.
pub fn animal_year(animal_year: u8) -> Option<&'static str> {
    one_based(&ANIMAL_YEAR_NAMES, animal_year)
}

/// Sak name for `sak` in `1..=10`.
pub fn sak(sak: u8) -> Option<&'static str> {
    one_based(&SAK_NAMES, sak)
}

/// កើត for waxing, រោច for waning.
pub const fn moon_phase(phase: MoonPhase) -> &'static str {
    match phase {
        MoonPhase::Waxing => "កើត",
        MoonPhase::Waning => "រោច",
    }
}

/// Replaces every ASCII digit with its Khmer numeral; other characters pass
/// through unchanged.
pub fn to_khmer_numerals(src: &str) -> String {
    src.chars()
        .map(|c| c.to_digit(10).map_or(c, |d| KHMER_DIGITS[d as usize]))
        .collect()
}

/// Inverse of [`to_khmer_numerals`].
pub fn from_khmer_numerals(src: &str) -> String {
    src.chars()
        .map(|c| {
            KHMER_DIGITS
                .iter()
                .position(|&k| k == c)
                .and_then(|d| char::from_digit(d as u32, 10))
                .unwrap_or(c)
        })
        .collect()
}

/// Renders an integer in Khmer numerals.
pub fn khmer_number(value: impl ToString) -> String {
    to_khmer_numerals(&value.to_string())
}

/// Parts of the descriptive sentence, already resolved to names.
#[derive(Debug, Clone, Copy)]
pub struct Description<'a> {
    pub day:          u8,
    pub phase:        MoonPhase,
    pub month_name:   &'a str,
    pub buddhist_era: u16,
    pub animal_name:  &'a str,
    pub sak_name:     &'a str,
}

/// `ថ្ងៃ {day}{phase} ខែ{month} ព.ស {BE} ឆ្នាំ {animal} {sak}`, with numbers in
/// Khmer numerals.
pub fn describe(parts: &Description<'_>) -> String {
    format!(
        "ថ្ងៃ {}{} ខែ{} ព.ស {} ឆ្នាំ {} {}",
        khmer_number(parts.day),
        moon_phase(parts.phase),
        parts.month_name,
        khmer_number(parts.buddhist_era),
        parts.animal_name,
        parts.sak_name,
    )
}
