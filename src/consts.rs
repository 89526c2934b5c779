/// Maximum valid Gregorian year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for April (Khmer New Year falls in mid-April)
pub const APRIL: u8 = 4;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Range separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';

/// First Gregorian year covered by the epoch table
pub const MIN_LUNAR_YEAR: u16 = 1900;
/// Last Gregorian year covered by the epoch table; later dates are extrapolated
pub const MAX_LUNAR_YEAR: u16 = 2100;

/// Buddhist Era year = Gregorian year + 543
pub const BUDDHIST_ERA_OFFSET: u16 = 543;
/// Offset used when looking up the leap type of the lunar year that
/// starts inside a Gregorian year
pub const LEAP_LOOKUP_OFFSET: u16 = 544;

// Aharkun / Avoman / Bodithey coefficients
pub(crate) const SOLAR_DAYS_NUMERATOR: i64 = 292_207;
pub(crate) const SOLAR_DAYS_ROUNDING: i64 = 499;
pub(crate) const SOLAR_DAYS_DENOMINATOR: i64 = 800;
pub(crate) const AHARKUN_SHIFT: i64 = 4;
pub(crate) const AVOMAN_FACTOR: i64 = 11;
pub(crate) const AVOMAN_SHIFT: i64 = 25;
pub(crate) const AVOMAN_MODULUS: i64 = 692;
pub(crate) const BODITHEY_SHIFT: i64 = 29;
pub(crate) const BODITHEY_MODULUS: i64 = 30;
/// Kromthupul at or below this value marks a Khmer solar leap year
pub(crate) const KROMTHUPUL_SOLAR_LEAP_MAX: i64 = 207;

/// Number of slots in the lunar-day code table
pub const LUNAR_CYCLE_LEN: u16 = 415;
/// Slot of the inserted 30th day of month 7 (leap-day years only)
pub(crate) const LEAP_DAY_SLOT: u16 = 207;
/// First day of month 8
pub(crate) const MONTH_EIGHT_SLOT: u16 = 208;
/// First day of the inserted months 9/10 (leap-month years only)
pub(crate) const LEAP_MONTH_SLOT: u16 = 238;
/// First day of month 11
pub(crate) const MONTH_ELEVEN_SLOT: u16 = 298;
/// The Buddhist-Era year label rolls over when the counter lands here
pub(crate) const YEAR_ROLLOVER_SLOT: u16 = 163;

/// First and last April day scanned for Khmer New Year
pub(crate) const NEW_YEAR_FIRST_DAY: u8 = 11;
pub(crate) const NEW_YEAR_LAST_DAY: u8 = 17;

/// Animal years repeat every 12 years
pub const ANIMAL_CYCLE_LEN: u16 = 12;
/// Sak labels repeat every 10 years
pub const SAK_CYCLE_LEN: u16 = 10;

/// Code marker for the waxing phase (កើត)
pub const WAXING_MARKER: char = 'K';
/// Code marker for the waning phase (រោច)
pub const WANING_MARKER: char = 'R';
/// Code suffix for holy days (ថ្ងៃសីល)
pub const HOLY_DAY_MARKER: char = 'S';
