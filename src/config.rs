use serde::{Deserialize, Serialize};

use crate::consts::{
    DATA_ATTRIBUTE_PREFIX, DEFAULT_DATA_ATTRIBUTE, DEFAULT_DAY_PLACEHOLDER,
    DEFAULT_MONTH_PLACEHOLDER, DEFAULT_PREFIX_CLASS, DIRECT_ENTRY_SUFFIX, MAX_MONTH, MONTH_NAMES,
};
use crate::resolve::FieldKind;
use crate::types::Month;

/// Error type for picker configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Marker attribute without the `data-` prefix.
    #[error("configuration dataAttribute must start with \"{}\", got {:?}", DATA_ATTRIBUTE_PREFIX, .0)]
    InvalidDataAttribute(String),

    #[error("configuration prefixClass must not be empty")]
    EmptyPrefixClass,

    #[error("configuration i18n.months must name {} months, found {}", MAX_MONTH, .0)]
    MonthNameCount(usize),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Labels shown by the selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Labels {
    pub months:            Vec<String>,
    pub month_placeholder: String,
    pub day_placeholder:   String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            months:            MONTH_NAMES.iter().map(|name| (*name).to_owned()).collect(),
            month_placeholder: DEFAULT_MONTH_PLACEHOLDER.to_owned(),
            day_placeholder:   DEFAULT_DAY_PLACEHOLDER.to_owned(),
        }
    }
}

/// Validated, immutable picker configuration.
///
/// Build one with [`PickerConfig::builder`], [`PickerConfig::from_json`] or
/// `Default`; every path runs the same validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PickerConfigBuilder", rename_all = "camelCase")]
pub struct PickerConfig {
    data_attribute: String,
    prefix_class:   String,
    select_classes: Vec<String>,
    i18n:           Labels,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            data_attribute: DEFAULT_DATA_ATTRIBUTE.to_owned(),
            prefix_class:   DEFAULT_PREFIX_CLASS.to_owned(),
            select_classes: Vec::new(),
            i18n:           Labels::default(),
        }
    }
}

impl PickerConfig {
    pub fn builder() -> PickerConfigBuilder {
        PickerConfigBuilder::default()
    }

    /// Parses a JSON object; omitted keys keep their defaults.
    ///
    /// # Errors
    /// `ConfigError::Json` for malformed JSON or a failed validation.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn data_attribute(&self) -> &str {
        &self.data_attribute
    }

    /// Attribute marking fields that accept typed values only.
    pub fn direct_entry_attribute(&self) -> String {
        format!("{}{DIRECT_ENTRY_SUFFIX}", self.data_attribute)
    }

    pub fn prefix_class(&self) -> &str {
        &self.prefix_class
    }

    pub fn container_class(&self) -> String {
        format!("{}-container", self.prefix_class)
    }

    pub fn month_select_class(&self) -> String {
        format!("{}-month", self.prefix_class)
    }

    pub fn day_select_class(&self) -> String {
        format!("{}-day", self.prefix_class)
    }

    pub fn select_classes(&self) -> &[String] {
        &self.select_classes
    }

    pub const fn labels(&self) -> &Labels {
        &self.i18n
    }

    /// Label for a month, taken from the configured month names.
    pub fn month_label(&self, month: Month) -> &str {
        self.i18n
            .months
            .get(usize::from(month.get()) - 1)
            .map_or_else(|| month.name(), String::as_str)
    }

    /// Kind of field an element carrying `attribute` is, if any.
    pub fn field_kind(&self, attribute: &str) -> Option<FieldKind> {
        if attribute == self.data_attribute {
            Some(FieldKind::Standard)
        } else if attribute == self.direct_entry_attribute() {
            Some(FieldKind::DirectEntryOnly)
        } else {
            None
        }
    }
}

/// Unvalidated configuration; also the shape accepted from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PickerConfigBuilder {
    data_attribute: String,
    prefix_class:   String,
    select_classes: Vec<String>,
    i18n:           Labels,
}

impl Default for PickerConfigBuilder {
    fn default() -> Self {
        let PickerConfig {
            data_attribute,
            prefix_class,
            select_classes,
            i18n,
        } = PickerConfig::default();
        Self {
            data_attribute,
            prefix_class,
            select_classes,
            i18n,
        }
    }
}

impl PickerConfigBuilder {
    #[must_use]
    pub fn data_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.data_attribute = attribute.into();
        self
    }

    #[must_use]
    pub fn prefix_class(mut self, prefix: impl Into<String>) -> Self {
        self.prefix_class = prefix.into();
        self
    }

    #[must_use]
    pub fn select_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select_classes = classes.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn month_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.i18n.months = names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn placeholders(mut self, month: impl Into<String>, day: impl Into<String>) -> Self {
        self.i18n.month_placeholder = month.into();
        self.i18n.day_placeholder = day.into();
        self
    }

    /// Validates and freezes the configuration.
    ///
    /// # Errors
    /// Returns the first `ConfigError` found.
    pub fn build(self) -> Result<PickerConfig, ConfigError> {
        if !self.data_attribute.starts_with(DATA_ATTRIBUTE_PREFIX) {
            return Err(ConfigError::InvalidDataAttribute(self.data_attribute));
        }
        if self.prefix_class.trim().is_empty() {
            return Err(ConfigError::EmptyPrefixClass);
        }
        if self.i18n.months.len() != usize::from(MAX_MONTH) {
            return Err(ConfigError::MonthNameCount(self.i18n.months.len()));
        }

        Ok(PickerConfig {
            data_attribute: self.data_attribute,
            prefix_class:   self.prefix_class,
            select_classes: self.select_classes,
            i18n:           self.i18n,
        })
    }
}

impl TryFrom<PickerConfigBuilder> for PickerConfig {
    type Error = ConfigError;

    fn try_from(builder: PickerConfigBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}
