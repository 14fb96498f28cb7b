//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_image_dimension == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_image_dimension must be > 0".into(),
            ));
        }
        if self.limits.max_target_dimension == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_target_dimension must be > 0".into(),
            ));
        }
        if self.output.jpeg_quality == 0 || self.output.jpeg_quality > 100 {
            return Err(ConfigError::ValidationError(
                "output.jpeg_quality must be between 1 and 100".into(),
            ));
        }
        if !matches!(self.output.format.as_str(), "text" | "json" | "jsonl") {
            return Err(ConfigError::ValidationError(format!(
                "output.format must be one of text, json, jsonl (got {:?})",
                self.output.format
            )));
        }
        Ok(())
    }
}
