//! The "current moment" used for age arithmetic.
//!
//! Calculations never read the system time directly; they ask a [`Clock`]
//! handed to them at construction. Production code uses [`SystemClock`],
//! tests pin "today" with [`FixedClock`].

use chrono::{Local, NaiveDate};
use std::sync::Arc;

/// Provides today's date.
pub trait Clock: Send + Sync {
    /// Returns today's date as a [`NaiveDate`].
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub const fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Fixed clock for a year/month/day triple, `None` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::new)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
