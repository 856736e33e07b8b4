use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_DAY, MAX_MONTH, MONTH_ABBREVIATION_LEN, MONTH_NAMES,
};
use crate::DateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::MonthOutOfRange` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::MonthOutOfRange(value))?;
        if value > MAX_MONTH {
            return Err(DateError::MonthOutOfRange(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// English name of the month
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.0.get() as usize - 1]
    }

    /// Looks up a month by a case-insensitive name or name prefix.
    ///
    /// The prefix must be at least `MONTH_ABBREVIATION_LEN` letters long, so
    /// `"dec"`, `"Decemb"` and `"DECEMBER"` all resolve to December while
    /// `"de"` and `"decembers"` do not.
    pub fn from_name(token: &str) -> Option<Self> {
        if token.len() < MONTH_ABBREVIATION_LEN || !token.is_ascii() {
            return None;
        }
        let lowered = token.to_ascii_lowercase();
        MONTH_NAMES
            .iter()
            .position(|name| name.to_ascii_lowercase().starts_with(&lowered))
            .and_then(|index| u8::try_from(index + 1).ok())
            .and_then(|value| Self::new(value).ok())
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day-of-month value in the range `1..=MAX_DAY` (1..=31).
/// Whether it fits a particular month is checked by [`CalendarDate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and <= `MAX_DAY`
    ///
    /// # Errors
    /// Returns `DateError::DayOutOfRange` if the value is 0 or > `MAX_DAY`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::DayOutOfRange(value))?;
        if value > MAX_DAY {
            return Err(DateError::DayOutOfRange(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A birth date whose day is known to exist in its month and year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CalendarDateParts", into = "CalendarDateParts")]
pub struct CalendarDate {
    month: Month,
    day:   Day,
    year:  i32,
}

impl CalendarDate {
    /// Creates a date, checking the day against the month length of `year`.
    ///
    /// # Errors
    /// `MonthOutOfRange` / `DayOutOfRange` for values outside 1-12 / 1-31,
    /// `InvalidDay` when the day does not exist in that month (e.g. Feb 30).
    pub fn new(month: u8, day: u8, year: i32) -> Result<Self, DateError> {
        let month = Month::new(month)?;
        let day = Day::new(day)?;
        Self::from_parts(month, day, year)
    }

    /// Same as [`CalendarDate::new`] for already range-checked components.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the day does not exist in the month.
    pub fn from_parts(month: Month, day: Day, year: i32) -> Result<Self, DateError> {
        if day.get() > month_length(month, is_leap_year(year)) {
            return Err(DateError::InvalidDay {
                month: month.get(),
                day: day.get(),
                year,
            });
        }
        Ok(Self { month, day, year })
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    pub const fn year(&self) -> i32 {
        self.year
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.month, self.day, self.year)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct CalendarDateParts {
    month: u8,
    day:   u8,
    year:  i32,
}

impl TryFrom<CalendarDateParts> for CalendarDate {
    type Error = DateError;

    fn try_from(parts: CalendarDateParts) -> Result<Self, Self::Error> {
        Self::new(parts.month, parts.day, parts.year)
    }
}

impl From<CalendarDate> for CalendarDateParts {
    fn from(date: CalendarDate) -> Self {
        Self {
            month: date.month.get(),
            day:   date.day.get(),
            year:  date.year,
        }
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Length of `month` given whether the year is a leap year.
pub const fn month_length(month: Month, leap: bool) -> u8 {
    if month.get() == FEBRUARY && leap {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month.get() as usize]
    }
}
