/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Maximum valid day of any month
pub const MAX_DAY: u8 = 31;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

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

/// Every month number in calendar order
pub const ALL_MONTHS: [u8; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];

/// English month names, used for parsing and as default selector labels
pub const MONTH_NAMES: [&str; 12] = [
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

/// Shortest month-name prefix accepted by the parser ("Jan", "Dec", ...)
pub const MONTH_ABBREVIATION_LEN: usize = 3;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Largest value treated as a two-digit year
pub const TWO_DIGIT_YEAR_MAX: i32 = 99;
/// Single-digit years always land in this century ("00".."09")
pub const SINGLE_DIGIT_YEAR_MAX: i32 = 9;
/// Century tried first for two-digit years
pub const CURRENT_CENTURY: i32 = 2000;
/// Century used when the current one would put the year in the future
pub const PREVIOUS_CENTURY: i32 = 1900;
/// Year tokens at or above this value are used verbatim
pub const FOUR_DIGIT_YEAR_MIN: i32 = 1000;

/// Default attribute marking an age field
pub const DEFAULT_DATA_ATTRIBUTE: &str = "data-age-picker";
/// Required prefix of any marker attribute
pub const DATA_ATTRIBUTE_PREFIX: &str = "data-";
/// Appended to the marker attribute for direct-entry-only fields
pub const DIRECT_ENTRY_SUFFIX: &str = "-direct-entry-only";
/// Default CSS class prefix
pub const DEFAULT_PREFIX_CLASS: &str = "age-picker";
/// Default placeholder label of the month selector
pub const DEFAULT_MONTH_PLACEHOLDER: &str = "Month";
/// Default placeholder label of the day selector
pub const DEFAULT_DAY_PLACEHOLDER: &str = "Day";
