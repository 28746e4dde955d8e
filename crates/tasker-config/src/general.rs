//! General application configuration.

use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use tasker_core::Category;

use crate::error::ConfigError;

/// Default input/output date format (`yyyy-MM-dd`).
fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_category() -> String {
    Category::Work.as_str().to_string()
}

/// Default number of prompts before giving up on invalid input.
const fn default_max_input_attempts() -> u32 {
    3
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// chrono `strftime` pattern for reading and printing due dates.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Category offered when the user enters an empty category at the prompt.
    #[serde(default = "default_category")]
    pub default_category: String,

    /// How many times the prompt re-asks after unparsable input.
    #[serde(default = "default_max_input_attempts")]
    pub max_input_attempts: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            default_category: default_category(),
            max_input_attempts: default_max_input_attempts(),
        }
    }
}

impl GeneralConfig {
    /// Check that every field holds a usable value.
    ///
    /// The date format must render a date that parses back to itself.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.category()?;

        if self.max_input_attempts == 0 {
            return Err(ConfigError::invalid(
                "general.max_input_attempts",
                "must be at least 1",
            ));
        }

        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::invalid(
                "general.date_format",
                format!("'{}' is not a valid strftime pattern", self.date_format),
            ));
        }

        let sample = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or_default();
        let rendered = sample.format(&self.date_format).to_string();
        match NaiveDate::parse_from_str(&rendered, &self.date_format) {
            Ok(parsed) if parsed == sample => Ok(()),
            _ => Err(ConfigError::invalid(
                "general.date_format",
                format!("'{}' does not identify a full date", self.date_format),
            )),
        }
    }

    /// The configured default category.
    pub fn category(&self) -> Result<Category, ConfigError> {
        self.default_category
            .parse()
            .map_err(|error| ConfigError::invalid("general.default_category", format!("{error}")))
    }
}
