//! Turns loosely formatted, human-typed text into a birth date.
//!
//! Parsing is an ordered list of [`ParseStrategy`] values. Each strategy is
//! tried in [`ParseStrategy::ORDER`] and the first one producing a valid
//! [`CalendarDate`] wins. When none does, the text is meant to be used as a
//! literal value (an age typed directly, or free text).

use std::sync::LazyLock;

use regex::Regex;

use crate::calculator::AgeCalculator;
use crate::clock::{Clock, SystemClock};
use crate::consts::FOUR_DIGIT_YEAR_MIN;
use crate::prelude::*;
use crate::types::{CalendarDate, Month};

/// `M/D/Y`, `M-D-Y`, `Y-M-D` with 1-4 digit outer segments
static NUMERIC_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,4})[/-](\d{1,2})[/-](\d{1,4})$").expect("numeric date pattern is valid")
});

/// Letters, digits and the separators allowed around a month name
static MONTH_NAME_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9/,.\s-]+$").expect("month name shape pattern is valid")
});

/// Maximal runs of letters or of digits
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]+|[0-9]+").expect("token pattern is valid"));

const ORDINAL_SUFFIXES: [&str; 4] = ["st", "nd", "rd", "th"];

/// A named way of reading a date out of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ParseStrategy {
    /// `Dec 1 1999`, `1-Dec-99`, `1999 1 Dec`, `December1 1999`
    #[display(fmt = "month-name")]
    MonthName,
    /// `1/1/1999`, `01-01-99`, `1999-01-01`
    #[display(fmt = "numeric")]
    Numeric,
}

impl ParseStrategy {
    /// Evaluation order; earlier strategies shadow later ones.
    pub const ORDER: [Self; 2] = [Self::MonthName, Self::Numeric];
}

/// Outcome of interpreting a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpretation {
    /// The text names a real calendar date.
    Date {
        date:     CalendarDate,
        strategy: ParseStrategy,
    },
    /// Not a date; use the text as-is.
    Literal,
}

impl Interpretation {
    pub const fn date(&self) -> Option<CalendarDate> {
        match self {
            Self::Date { date, .. } => Some(*date),
            Self::Literal => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Word(&'a str),
    Number(&'a str),
}

#[derive(Debug, Clone, Default)]
pub struct DateInterpreter<C = SystemClock> {
    calculator: AgeCalculator<C>,
}

impl<C: Clock> DateInterpreter<C> {
    pub const fn new(calculator: AgeCalculator<C>) -> Self {
        Self { calculator }
    }

    pub const fn calculator(&self) -> &AgeCalculator<C> {
        &self.calculator
    }

    /// Runs the strategies in order and stops at the first date found.
    pub fn interpret(&self, text: &str) -> Interpretation {
        ParseStrategy::ORDER
            .into_iter()
            .find_map(|strategy| {
                self.apply(strategy, text)
                    .map(|date| Interpretation::Date { date, strategy })
            })
            .unwrap_or(Interpretation::Literal)
    }

    /// Age for `text` when it names a date.
    pub fn age_for(&self, text: &str) -> Option<i32> {
        self.interpret(text)
            .date()
            .map(|date| self.calculator.age_on(&date))
    }

    /// Runs a single strategy. `None` when it does not match or the date it
    /// reads does not exist.
    pub fn apply(&self, strategy: ParseStrategy, text: &str) -> Option<CalendarDate> {
        let text = text.trim();
        match strategy {
            ParseStrategy::MonthName => self.parse_month_name(text),
            ParseStrategy::Numeric => self.parse_numeric(text),
        }
    }

    fn parse_month_name(&self, text: &str) -> Option<CalendarDate> {
        if !MONTH_NAME_SHAPE.is_match(text) {
            return None;
        }

        let mut month = None;
        let mut numbers = Vec::with_capacity(2);
        let mut previous = None;
        for found in TOKEN.find_iter(text) {
            let token = if found.as_str().as_bytes()[0].is_ascii_digit() {
                Token::Number(found.as_str())
            } else {
                Token::Word(found.as_str())
            };

            match token {
                Token::Number(digits) => numbers.push(digits),
                Token::Word(word) if is_ordinal_suffix(word, previous) => {},
                Token::Word(word) => {
                    // A second word, or one that is not a month, is not a date
                    if month.is_some() {
                        return None;
                    }
                    month = Some(Month::from_name(word)?);
                },
            }
            previous = Some(token);
        }

        let month = month?;
        let [first, second] = numbers.as_slice() else {
            return None;
        };

        // Year last wins when both readings are possible ("10 Dec 30")
        [(*first, *second), (*second, *first)]
            .into_iter()
            .filter(|(_, year)| is_year_width(year))
            .find_map(|(day, year)| self.build_month_name_date(month, day, year))
    }

    fn build_month_name_date(&self, month: Month, day: &str, year: &str) -> Option<CalendarDate> {
        if day.len() > 2 {
            return None;
        }
        let day = day.parse::<u8>().ok()?;
        let year = self.resolve_year(year)?;

        CalendarDate::new(month.get(), day, year).ok()
    }

    fn parse_numeric(&self, text: &str) -> Option<CalendarDate> {
        let captures = NUMERIC_DATE.captures(text)?;
        let (first, second, third) = (&captures[1], &captures[2], &captures[3]);

        // A leading 3-4 digit segment can only be a year: Y-M-D
        let (month, day, year) = if first.len() > 2 {
            (second, third, first)
        } else {
            (first, second, third)
        };

        if day.len() > 2 {
            return None;
        }
        let month = month.parse::<u8>().ok()?;
        let day = day.parse::<u8>().ok()?;
        let year = self.resolve_year(year)?;

        CalendarDate::new(month, day, year).ok()
    }

    /// Four-digit-looking years are kept verbatim, shorter ones are normalized.
    fn resolve_year(&self, token: &str) -> Option<i32> {
        let value = token.parse::<i32>().ok()?;
        if value >= FOUR_DIGIT_YEAR_MIN {
            Some(value)
        } else {
            Some(self.calculator.normalize_two_digit_year(value))
        }
    }
}

/// Only two- and four-digit numbers may stand for a year next to a month name.
fn is_year_width(token: &str) -> bool {
    matches!(token.len(), 2 | 4)
}

fn is_ordinal_suffix(word: &str, previous: Option<Token<'_>>) -> bool {
    matches!(previous, Some(Token::Number(_)))
        && ORDINAL_SUFFIXES
            .iter()
            .any(|suffix| suffix.eq_ignore_ascii_case(word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{calculator_at, interpreter_at, NEW_YEAR_2016};

    fn date(month: u8, day: u8, year: i32) -> CalendarDate {
        CalendarDate::new(month, day, year).unwrap()
    }

    #[test]
    fn test_month_name_forms() {
        struct TestCase {
            text:     &'static str,
            expected: (u8, u8, i32),
        }

        let cases = [
            TestCase { text: "Jan 1 1999", expected: (1, 1, 1999) },
            TestCase { text: "January 1 1999", expected: (1, 1, 1999) },
            TestCase { text: "Feb 1 1999", expected: (2, 1, 1999) },
            TestCase { text: "Mar 1 1999", expected: (3, 1, 1999) },
            TestCase { text: "April 1 1999", expected: (4, 1, 1999) },
            TestCase { text: "May 1 1999", expected: (5, 1, 1999) },
            TestCase { text: "June 1 1999", expected: (6, 1, 1999) },
            TestCase { text: "Jul 1 1999", expected: (7, 1, 1999) },
            TestCase { text: "August 1 1999", expected: (8, 1, 1999) },
            TestCase { text: "Sep 1 1999", expected: (9, 1, 1999) },
            TestCase { text: "October 1 1999", expected: (10, 1, 1999) },
            TestCase { text: "Nov 1 1999", expected: (11, 1, 1999) },
            TestCase { text: "Dec 31 1999", expected: (12, 31, 1999) },
            TestCase { text: "DEC 1 1999", expected: (12, 1, 1999) },
            TestCase { text: "DECEMBER 1 1999", expected: (12, 1, 1999) },
            TestCase { text: "Dec1 1999", expected: (12, 1, 1999) },
            TestCase { text: "Decemb1 1999", expected: (12, 1, 1999) },
            TestCase { text: "December1 1999", expected: (12, 1, 1999) },
            TestCase { text: "December 1, 1999", expected: (12, 1, 1999) },
            TestCase { text: "1st Dec 1999", expected: (12, 1, 1999) },
            TestCase { text: "1 Dec 1999", expected: (12, 1, 1999) },
            TestCase { text: "01 Dec 1999", expected: (12, 1, 1999) },
            TestCase { text: "1 Dec 99", expected: (12, 1, 1999) },
            TestCase { text: "01 Dec 99", expected: (12, 1, 1999) },
            TestCase { text: "1999 Dec 1", expected: (12, 1, 1999) },
            TestCase { text: "1999 1 Dec", expected: (12, 1, 1999) },
            TestCase { text: "1999 Dec 12", expected: (12, 12, 1999) },
            TestCase { text: "1999 12 Dec", expected: (12, 12, 1999) },
            TestCase { text: "1999-Dec-25", expected: (12, 25, 1999) },
            TestCase { text: "00 Dec 12", expected: (12, 12, 2000) },
            TestCase { text: "00 Dec 1", expected: (12, 1, 2000) },
            TestCase { text: "00 1 Dec", expected: (12, 1, 2000) },
            TestCase { text: "Dec 1 00", expected: (12, 1, 2000) },
            TestCase { text: "Dec 1 30", expected: (12, 1, 1930) },
            TestCase { text: "1 Dec 30", expected: (12, 1, 1930) },
            TestCase { text: "Dec 10 30", expected: (12, 10, 1930) },
            TestCase { text: "10 Dec 30", expected: (12, 10, 1930) },
            TestCase { text: "Dec 1 01", expected: (12, 1, 2001) },
            TestCase { text: "1 Dec 01", expected: (12, 1, 2001) },
            TestCase { text: "1-Dec-1999", expected: (12, 1, 1999) },
            TestCase { text: "01-Dec-99", expected: (12, 1, 1999) },
            TestCase { text: "  Dec 1 99  ", expected: (12, 1, 1999) },
        ];

        let interpreter = interpreter_at(NEW_YEAR_2016);
        for case in &cases {
            let (month, day, year) = case.expected;
            assert_eq!(
                interpreter.apply(ParseStrategy::MonthName, case.text),
                Some(date(month, day, year)),
                "text {:?}",
                case.text
            );
        }
    }

    #[test]
    fn test_month_name_rejects() {
        let interpreter = interpreter_at(NEW_YEAR_2016);
        for text in [
            "December 1",
            "Dec 1",
            "Dec",
            "Dec 1 5",
            "Dec 1 1999 2",
            "Dec Jan 1 1999",
            "Foo 1 1999",
            "Dec 1 1999!",
            "Feb 30 1999",
            "Dec 123 1999",
            "7 1 1999",
        ] {
            assert_eq!(
                interpreter.apply(ParseStrategy::MonthName, text),
                None,
                "text {text:?}"
            );
        }
    }

    #[test]
    fn test_numeric_forms() {
        struct TestCase {
            text:     &'static str,
            expected: (u8, u8, i32),
        }

        let cases = [
            TestCase { text: "1/1/1999", expected: (1, 1, 1999) },
            TestCase { text: "01/01/1999", expected: (1, 1, 1999) },
            TestCase { text: "1-1-1999", expected: (1, 1, 1999) },
            TestCase { text: "01-1-1999", expected: (1, 1, 1999) },
            TestCase { text: "1/1/99", expected: (1, 1, 1999) },
            TestCase { text: "1-01-99", expected: (1, 1, 1999) },
            TestCase { text: "1999-1-1", expected: (1, 1, 1999) },
            TestCase { text: "1999-01-01", expected: (1, 1, 1999) },
            TestCase { text: "1/1/51", expected: (1, 1, 1951) },
            TestCase { text: "1/1/50", expected: (1, 1, 1950) },
            TestCase { text: "1/1/49", expected: (1, 1, 1949) },
            TestCase { text: "1/1/02", expected: (1, 1, 2002) },
            TestCase { text: "7/1/1999", expected: (7, 1, 1999) },
            TestCase { text: "07/01/1999", expected: (7, 1, 1999) },
            TestCase { text: "2/29/2016", expected: (2, 29, 2016) },
        ];

        let interpreter = interpreter_at(NEW_YEAR_2016);
        for case in &cases {
            let (month, day, year) = case.expected;
            assert_eq!(
                interpreter.apply(ParseStrategy::Numeric, case.text),
                Some(date(month, day, year)),
                "text {:?}",
                case.text
            );
        }
    }

    #[test]
    fn test_numeric_rejects() {
        let interpreter = interpreter_at(NEW_YEAR_2016);
        for text in [
            "7 1 1999",
            "07 01 1999",
            "13/1/1999",
            "0/1/1999",
            "2/29/2015",
            "1/32/1999",
            "1999-01-123",
            "1/1",
            "25",
            "1999",
            "1/1/1999/1",
        ] {
            assert_eq!(interpreter.apply(ParseStrategy::Numeric, text), None, "text {text:?}");
        }
    }

    #[test]
    fn test_interpret_reports_strategy() {
        let interpreter = interpreter_at(NEW_YEAR_2016);

        assert_eq!(
            interpreter.interpret("Dec 1 99"),
            Interpretation::Date {
                date:     date(12, 1, 1999),
                strategy: ParseStrategy::MonthName,
            }
        );
        assert_eq!(
            interpreter.interpret("12/1/1999"),
            Interpretation::Date {
                date:     date(12, 1, 1999),
                strategy: ParseStrategy::Numeric,
            }
        );
    }

    #[test]
    fn test_interpret_falls_back_to_literal() {
        let interpreter = interpreter_at(NEW_YEAR_2016);
        for text in ["", "   ", "25", "101", "1990", "7 1 1999", "December 1", "hello", "2/30/1999"] {
            assert_eq!(interpreter.interpret(text), Interpretation::Literal, "text {text:?}");
        }
    }

    #[test]
    fn test_age_for_matches_calculator() {
        let interpreter = interpreter_at(NEW_YEAR_2016);
        let calculator = calculator_at(NEW_YEAR_2016);

        assert_eq!(interpreter.age_for("Dec 1 99"), Some(calculator.calculate_age(12, 1, 1999)));
        assert_eq!(interpreter.age_for("1/2/2011"), Some(4));
        assert_eq!(interpreter.age_for("7 1 1999"), None);
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(ParseStrategy::MonthName.to_string(), "month-name");
        assert_eq!(ParseStrategy::Numeric.to_string(), "numeric");
    }
}
