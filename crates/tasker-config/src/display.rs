//! Output rendering configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Output formats the CLI knows how to render.
pub const OUTPUT_FORMATS: [&str; 3] = ["json", "table", "raw"];

fn default_format() -> String {
    "table".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Output format used when `--format` is not given.
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if OUTPUT_FORMATS.contains(&self.format.as_str()) {
            Ok(())
        } else {
            Err(ConfigError::invalid(
                "display.format",
                format!("'{}' is not one of {}", self.format, OUTPUT_FORMATS.join(", ")),
            ))
        }
    }
}
