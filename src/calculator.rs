use chrono::Datelike;

use crate::clock::{Clock, SystemClock};
use crate::consts::{
    ALL_MONTHS, CURRENT_CENTURY, PREVIOUS_CENTURY, SINGLE_DIGIT_YEAR_MAX, TWO_DIGIT_YEAR_MAX,
};
use crate::types::{self, CalendarDate, Day, Month};
use crate::DateError;

/// Age arithmetic relative to the date reported by an injected [`Clock`].
#[derive(Debug, Clone, Default)]
pub struct AgeCalculator<C = SystemClock> {
    clock: C,
}

impl<C: Clock> AgeCalculator<C> {
    pub const fn new(clock: C) -> Self {
        Self { clock }
    }

    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Whole years elapsed since the given birth date.
    ///
    /// `provided_year` in `0..=99` is run through
    /// [`normalize_two_digit_year`](Self::normalize_two_digit_year) first.
    /// The components are not validated and a future date yields a negative age.
    /// Years far outside the calendar saturate at the `i32` bounds.
    pub fn calculate_age(&self, month: u8, day: u8, provided_year: i32) -> i32 {
        let birth_year = self.normalize_two_digit_year(provided_year);
        let today = self.clock.today();

        let mut age = today.year().saturating_sub(birth_year);
        // Compare (month, day) lexicographically: day only matters within the same month
        if (today.month(), today.day()) < (u32::from(month), u32::from(day)) {
            age = age.saturating_sub(1);
        }
        age
    }

    /// Age for an already validated date.
    pub fn age_on(&self, date: &CalendarDate) -> i32 {
        self.calculate_age(date.month().get(), date.day().get(), date.year())
    }

    /// Maps a two-digit year onto a century using the current year as pivot.
    ///
    /// `0..=9` become `2000..=2009`. `10..=99` become `20yy`, or `19yy` when
    /// `20yy` is still in the future. Other values are returned unchanged.
    pub fn normalize_two_digit_year(&self, raw_year: i32) -> i32 {
        match raw_year {
            0..=SINGLE_DIGIT_YEAR_MAX => CURRENT_CENTURY + raw_year,
            10..=TWO_DIGIT_YEAR_MAX => {
                let candidate = CURRENT_CENTURY + raw_year;
                if candidate > self.clock.today().year() {
                    PREVIOUS_CENTURY + raw_year
                } else {
                    candidate
                }
            },
            _ => raw_year,
        }
    }
}

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    types::is_leap_year(year)
}

/// Leap-year check for unparsed text; anything that is not an integer is not a leap year.
pub fn is_leap_year_text(text: &str) -> bool {
    text.trim().parse::<i32>().is_ok_and(is_leap_year)
}

/// Number of days in `month_number` of `year`.
///
/// # Errors
/// Returns `DateError::MonthOutOfRange` unless `month_number` is 1-12.
pub fn days_in_month(month_number: u8, year: i32) -> Result<u8, DateError> {
    let month = Month::new(month_number)?;
    Ok(types::month_length(month, is_leap_year(year)))
}

/// Months of `year` that have at least `day_number` days, in calendar order.
///
/// # Errors
/// Returns `DateError::DayOutOfRange` unless `day_number` is 1-31.
pub fn available_months(day_number: u8, year: i32) -> Result<Vec<u8>, DateError> {
    let day = Day::new(day_number)?;
    Ok(months_with_day(day, is_leap_year(year)))
}

pub(crate) fn months_with_day(day: Day, leap: bool) -> Vec<u8> {
    ALL_MONTHS
        .into_iter()
        .filter_map(|value| Month::new(value).ok())
        .filter(|month| types::month_length(*month, leap) >= day.get())
        .map(Month::get)
        .collect()
}
