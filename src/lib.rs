//! Headless core of an age picker.
//!
//! Reads loosely formatted birth dates (`Dec 1 99`, `1-Dec-1999`,
//! `1999-01-01`, `7/1/15`), turns them into an age in whole years relative to
//! an injected [`Clock`], and resolves what an age field's hidden value should
//! be given its text and month/day selectors.
//!
//! ```
//! use age_picker_core::{AgeCalculator, DateInterpreter, FixedClock};
//!
//! let clock = FixedClock::from_ymd(2016, 1, 1).unwrap();
//! let interpreter = DateInterpreter::new(AgeCalculator::new(clock));
//!
//! assert_eq!(interpreter.age_for("Dec 1 99"), Some(16));
//! assert_eq!(interpreter.age_for("7 1 1999"), None);
//! ```

mod binding;
mod calculator;
mod clock;
mod config;
mod consts;
mod interpreter;
mod prelude;
mod resolve;
#[cfg(test)]
mod test_utils;
mod types;

pub use binding::{AgeChanged, AgeField, BindingError, SelectOption};
pub use calculator::{
    available_months, days_in_month, is_leap_year, is_leap_year_text, AgeCalculator,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, Labels, PickerConfig, PickerConfigBuilder};
pub use consts::*;
pub use interpreter::{DateInterpreter, Interpretation, ParseStrategy};
pub use resolve::{FieldKind, FieldResolver, PartialInput, Resolution, Selection};
pub use types::{CalendarDate, Day, Month};

use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DateError {
    #[display(fmt = "month must be between 1 and {} inclusive, got {}", MAX_MONTH, "_0")]
    MonthOutOfRange(u8),
    #[display(fmt = "day must be between 1 and {} inclusive, got {}", MAX_DAY, "_0")]
    DayOutOfRange(u8),
    #[display(fmt = "day {day} does not exist in {month}/{year}")]
    InvalidDay { month: u8, day: u8, year: i32 },
}

impl std::error::Error for DateError {}

/// Builds a resolver for `kind` whose clock reads the local date.
pub fn system_resolver(kind: FieldKind) -> FieldResolver<SystemClock> {
    FieldResolver::new(kind, DateInterpreter::new(AgeCalculator::new(SystemClock)))
}
