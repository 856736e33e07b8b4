//! Shared constructors for unit tests.

use crate::calculator::AgeCalculator;
use crate::clock::FixedClock;
use crate::interpreter::DateInterpreter;
use crate::resolve::{FieldKind, FieldResolver};

/// 2016-01-01, the reference "today" used throughout the tests
pub const NEW_YEAR_2016: (i32, u32, u32) = (2016, 1, 1);

pub fn clock_at((year, month, day): (i32, u32, u32)) -> FixedClock {
    FixedClock::from_ymd(year, month, day).expect("test clock date must exist")
}

pub fn calculator_at(today: (i32, u32, u32)) -> AgeCalculator<FixedClock> {
    AgeCalculator::new(clock_at(today))
}

pub fn interpreter_at(today: (i32, u32, u32)) -> DateInterpreter<FixedClock> {
    DateInterpreter::new(calculator_at(today))
}

pub fn standard_resolver() -> FieldResolver<FixedClock> {
    FieldResolver::new(FieldKind::Standard, interpreter_at(NEW_YEAR_2016))
}

pub fn direct_entry_resolver() -> FieldResolver<FixedClock> {
    FieldResolver::new(FieldKind::DirectEntryOnly, interpreter_at(NEW_YEAR_2016))
}
