//! Maps the raw text of an age field, plus the month/day picked in its
//! selectors, to the value that belongs in the hidden output field.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::interpreter::DateInterpreter;
use crate::types::CalendarDate;

/// What kind of age field is being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    /// Free text plus month and day selectors that appear once a year is typed.
    #[default]
    Standard,
    /// Free text only. A bare four-digit number is taken literally.
    DirectEntryOnly,
}

impl FieldKind {
    pub const fn has_selectors(self) -> bool {
        matches!(self, Self::Standard)
    }
}

/// Month and day currently chosen in the selectors, `None` for the placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Selection {
    pub month: Option<u8>,
    pub day:   Option<u8>,
}

impl Selection {
    pub const NONE: Self = Self {
        month: None,
        day:   None,
    };

    pub const fn new(month: Option<u8>, day: Option<u8>) -> Self {
        Self { month, day }
    }

    const fn both(self) -> Option<(u8, u8)> {
        match (self.month, self.day) {
            (Some(month), Some(day)) => Some((month, day)),
            _ => None,
        }
    }
}

/// A not yet resolved reading of the field. Rebuilt on every event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartialInput {
    FullDate(CalendarDate),
    YearOnly(i32),
    MonthDayOnly { month: u8, day: u8 },
    LiteralValue(String),
}

/// Value written to the hidden output field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Resolution {
    Age(i32),
    /// Not enough information yet (a year without month and day).
    #[default]
    Empty,
    Literal(String),
}

impl Resolution {
    pub const fn age(&self) -> Option<i32> {
        match self {
            Self::Age(age) => Some(*age),
            Self::Empty | Self::Literal(_) => None,
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Age(age) => write!(f, "{age}"),
            Self::Empty => Ok(()),
            Self::Literal(text) => f.write_str(text),
        }
    }
}

impl Serialize for Resolution {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Pure resolution of field input; holds no state besides its interpreter.
#[derive(Debug, Clone, Default)]
pub struct FieldResolver<C = SystemClock> {
    kind:        FieldKind,
    interpreter: DateInterpreter<C>,
}

impl<C: Clock> FieldResolver<C> {
    pub const fn new(kind: FieldKind, interpreter: DateInterpreter<C>) -> Self {
        Self { kind, interpreter }
    }

    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    pub const fn interpreter(&self) -> &DateInterpreter<C> {
        &self.interpreter
    }

    /// Reads the text and selection without computing anything clock-dependent
    /// beyond two-digit year normalization.
    pub fn classify(&self, text: &str, selection: Selection) -> PartialInput {
        if let Some(date) = self.interpreter.interpret(text).date() {
            return PartialInput::FullDate(date);
        }

        if !self.kind.has_selectors() {
            return PartialInput::LiteralValue(text.to_owned());
        }

        let trimmed = text.trim();
        if let Some(year) = bare_year(trimmed) {
            return selection
                .both()
                .and_then(|(month, day)| CalendarDate::new(month, day, year).ok())
                .map_or(PartialInput::YearOnly(year), PartialInput::FullDate);
        }

        match selection.both() {
            Some((month, day)) if trimmed.is_empty() => PartialInput::MonthDayOnly { month, day },
            _ => PartialInput::LiteralValue(text.to_owned()),
        }
    }

    pub fn resolve(&self, text: &str, selection: Selection) -> Resolution {
        match self.classify(text, selection) {
            PartialInput::FullDate(date) => Resolution::Age(self.interpreter.calculator().age_on(&date)),
            PartialInput::YearOnly(_) | PartialInput::MonthDayOnly { .. } => Resolution::Empty,
            PartialInput::LiteralValue(text) => Resolution::Literal(text),
        }
    }
}

/// Exactly four ASCII digits.
pub(crate) fn bare_year(text: &str) -> Option<i32> {
    if text.len() == 4 && text.bytes().all(|b| b.is_ascii_digit()) {
        text.parse().ok()
    } else {
        None
    }
}
