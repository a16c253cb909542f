/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Largest value the date segment accepts before clamping
pub const MAX_DATE: u8 = 31;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Month lengths in a common year, indexed by month number (index 0 unused)
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Digits held by the date segment
pub const DAY_DIGITS: usize = 2;
/// Digits held by the month segment
pub const MONTH_DIGITS: usize = 2;
/// Digits held by the year segment
pub const YEAR_DIGITS: usize = 4;

/// Two-digit years below this value land in the 2000s, the rest in the 1900s
/// (the POSIX `%y` convention).
pub const DEFAULT_CENTURY_PIVOT: u8 = 69;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Separator between the minimum and maximum of a bounds string
pub const BOUNDS_SEPARATOR: char = '/';
