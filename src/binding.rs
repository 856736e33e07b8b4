//! Headless state of one age field.
//!
//! A presentation layer forwards keystrokes and selector changes to an
//! [`AgeField`], writes [`AgeField::output`] into the hidden form field, and
//! renders the selector options it reports. A change notification is produced
//! only when the resolved value differs from the previous one.

use crate::calculator::months_with_day;
use crate::clock::Clock;
use crate::config::PickerConfig;
use crate::consts::{ALL_MONTHS, MAX_DAY, MIN_DAY};
use crate::resolve::{bare_year, FieldKind, FieldResolver, Resolution, Selection};
use crate::types::{is_leap_year, month_length, Day, Month};
use crate::DateError;

/// Error type for field interactions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    /// Direct-entry fields have no month or day selector.
    #[error("direct-entry-only fields have no month or day selector")]
    NoSelectors,

    #[error(transparent)]
    Date(#[from] DateError),
}

/// Emitted when the hidden value of a field changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeChanged {
    pub value: Resolution,
}

/// One entry of a month or day selector. The placeholder has no value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value:    Option<u8>,
    pub label:    String,
    pub disabled: bool,
    pub hidden:   bool,
}

impl SelectOption {
    fn placeholder(label: &str) -> Self {
        Self {
            value:    None,
            label:    label.to_owned(),
            disabled: false,
            hidden:   false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeField {
    kind:   FieldKind,
    text:   String,
    month:  Option<Month>,
    day:    Option<Day>,
    output: Resolution,
}

impl AgeField {
    /// Wraps a field, honouring any value it already holds.
    pub fn new<C: Clock>(initial_text: impl Into<String>, resolver: &FieldResolver<C>) -> Self {
        let text = initial_text.into();
        let output = resolver.resolve(&text, Selection::NONE);
        Self {
            kind: resolver.kind(),
            text,
            month: None,
            day: None,
            output,
        }
    }

    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn selection(&self) -> Selection {
        Selection::new(
            match self.month {
                Some(month) => Some(month.get()),
                None => None,
            },
            match self.day {
                Some(day) => Some(day.get()),
                None => None,
            },
        )
    }

    /// Value for the hidden output field.
    pub const fn output(&self) -> &Resolution {
        &self.output
    }

    /// Month and day selectors are shown while the text is a bare four-digit
    /// year, the same text the resolver combines with a selection.
    pub fn selectors_visible(&self) -> bool {
        self.kind.has_selectors() && self.typed_year().is_some()
    }

    /// New raw text from the input. Hiding the selectors clears them.
    pub fn input_text<C: Clock>(
        &mut self,
        text: impl Into<String>,
        resolver: &FieldResolver<C>,
    ) -> Option<AgeChanged> {
        self.text = text.into();
        if !self.selectors_visible() {
            self.month = None;
            self.day = None;
        }
        self.refresh(resolver)
    }

    /// Month picked in the selector, `None` for the placeholder.
    ///
    /// # Errors
    /// `NoSelectors` on direct-entry fields, `Date` for a month outside 1-12.
    pub fn select_month<C: Clock>(
        &mut self,
        month: Option<u8>,
        resolver: &FieldResolver<C>,
    ) -> Result<Option<AgeChanged>, BindingError> {
        self.ensure_selectors()?;
        self.month = month.map(Month::new).transpose()?;
        Ok(self.refresh(resolver))
    }

    /// Day picked in the selector, `None` for the placeholder.
    ///
    /// # Errors
    /// `NoSelectors` on direct-entry fields, `Date` for a day outside 1-31.
    pub fn select_day<C: Clock>(
        &mut self,
        day: Option<u8>,
        resolver: &FieldResolver<C>,
    ) -> Result<Option<AgeChanged>, BindingError> {
        self.ensure_selectors()?;
        self.day = day.map(Day::new).transpose()?;
        Ok(self.refresh(resolver))
    }

    /// Month selector entries; months too short for the selected day are disabled.
    pub fn month_options(&self, config: &PickerConfig) -> Vec<SelectOption> {
        let available = self
            .day
            .map(|day| months_with_day(day, self.leap_year()));

        let months = ALL_MONTHS.into_iter().filter_map(|value| Month::new(value).ok());
        std::iter::once(SelectOption::placeholder(&config.labels().month_placeholder))
            .chain(months.map(|month| SelectOption {
                value:    Some(month.get()),
                label:    config.month_label(month).to_owned(),
                disabled: available
                    .as_ref()
                    .is_some_and(|months| !months.contains(&month.get())),
                hidden:   false,
            }))
            .collect()
    }

    /// Day selector entries; days past the end of the selected month are
    /// disabled and hidden.
    pub fn day_options(&self, config: &PickerConfig) -> Vec<SelectOption> {
        let last_day = self
            .month
            .map_or(MAX_DAY, |month| month_length(month, self.leap_year()));

        std::iter::once(SelectOption::placeholder(&config.labels().day_placeholder))
            .chain((MIN_DAY..=MAX_DAY).map(|day| SelectOption {
                value:    Some(day),
                label:    day.to_string(),
                disabled: day > last_day,
                hidden:   day > last_day,
            }))
            .collect()
    }

    /// Leap-year status of the year typed so far; no year counts as non-leap.
    fn leap_year(&self) -> bool {
        self.typed_year().is_some_and(is_leap_year)
    }

    fn typed_year(&self) -> Option<i32> {
        bare_year(self.text.trim())
    }

    const fn ensure_selectors(&self) -> Result<(), BindingError> {
        if self.kind.has_selectors() {
            Ok(())
        } else {
            Err(BindingError::NoSelectors)
        }
    }

    fn refresh<C: Clock>(&mut self, resolver: &FieldResolver<C>) -> Option<AgeChanged> {
        let resolved = resolver.resolve(&self.text, self.selection());
        if resolved == self.output {
            return None;
        }
        self.output = resolved.clone();
        Some(AgeChanged { value: resolved })
    }
}
