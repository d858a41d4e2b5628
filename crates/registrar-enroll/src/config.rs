// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Registrar configuration loaded from TOML.
//!
//! Every field has a default, so an empty document is a valid configuration:
//!
//! ```toml
//! schedule_title = "My Schedule"
//! default_max_credits = 18
//! default_enrollment_cap = 10
//! log_level = "info"
//! ```

use crate::roster::{MAX_ENROLLMENT, MIN_ENROLLMENT};
use registrar_model::person::{MAX_STUDENT_CREDITS, MIN_STUDENT_CREDITS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The error type for loading and validating a `RegistrarConfig`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Settings applied by the registrar when it creates rosters, students and
/// schedules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrarConfig {
    /// Title of every new or reset schedule.
    #[serde(default = "default_schedule_title")]
    pub schedule_title: String,
    /// Credit limit for students registered without an explicit one.
    #[serde(default = "default_max_credits")]
    pub default_max_credits: u32,
    /// Enrollment cap of newly cataloged courses.
    #[serde(default = "default_enrollment_cap")]
    pub default_enrollment_cap: usize,
    /// Level the `LogMonitor` emits enrollment events at.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schedule_title() -> String {
    crate::schedule::DEFAULT_TITLE.to_string()
}

fn default_max_credits() -> u32 {
    MAX_STUDENT_CREDITS
}

fn default_enrollment_cap() -> usize {
    MIN_ENROLLMENT
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for RegistrarConfig {
    fn default() -> Self {
        Self {
            schedule_title: default_schedule_title(),
            default_max_credits: default_max_credits(),
            default_enrollment_cap: default_enrollment_cap(),
            log_level: default_log_level(),
        }
    }
}

impl RegistrarConfig {
    /// Parses and validates a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: RegistrarConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Checks every field against the limits the registrar enforces.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.schedule_title.is_empty() {
            return Err(ConfigError::Invalid(
                "'schedule_title' must not be empty".to_string(),
            ));
        }
        if !(MIN_STUDENT_CREDITS..=MAX_STUDENT_CREDITS).contains(&self.default_max_credits) {
            return Err(ConfigError::Invalid(format!(
                "'default_max_credits' must be in {}..={}, got {}",
                MIN_STUDENT_CREDITS, MAX_STUDENT_CREDITS, self.default_max_credits
            )));
        }
        if !(MIN_ENROLLMENT..=MAX_ENROLLMENT).contains(&self.default_enrollment_cap) {
            return Err(ConfigError::Invalid(format!(
                "'default_enrollment_cap' must be in {}..={}, got {}",
                MIN_ENROLLMENT, MAX_ENROLLMENT, self.default_enrollment_cap
            )));
        }
        self.log_level()?;
        Ok(())
    }

    /// Returns `log_level` as a `log::Level`.
    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        self.log_level.parse::<log::Level>().map_err(|_| {
            ConfigError::Invalid(format!("unknown log level '{}'", self.log_level))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = RegistrarConfig::from_toml_str("").unwrap();
        assert_eq!(config, RegistrarConfig::default());
        assert_eq!(config.schedule_title, "My Schedule");
        assert_eq!(config.default_max_credits, 18);
        assert_eq!(config.default_enrollment_cap, 10);
        assert_eq!(config.log_level().unwrap(), log::Level::Info);
    }

    #[test]
    fn test_partial_document() {
        let config = RegistrarConfig::from_toml_str(
            "default_enrollment_cap = 40\nlog_level = \"debug\"\n",
        )
        .unwrap();
        assert_eq!(config.default_enrollment_cap, 40);
        assert_eq!(config.default_max_credits, 18);
        assert_eq!(config.log_level().unwrap(), log::Level::Debug);
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        assert!(matches!(
            RegistrarConfig::from_toml_str("default_enrollment_cap = 5"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            RegistrarConfig::from_toml_str("default_max_credits = 19"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            RegistrarConfig::from_toml_str("schedule_title = \"\""),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            RegistrarConfig::from_toml_str("log_level = \"loud\""),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            RegistrarConfig::from_toml_str("default_enrollment_cap = \"ten\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "schedule_title = \"Fall 2025\"").unwrap();
        let config = RegistrarConfig::from_file(file.path()).unwrap();
        assert_eq!(config.schedule_title, "Fall 2025");

        let missing = file.path().with_extension("missing");
        assert!(matches!(
            RegistrarConfig::from_file(missing),
            Err(ConfigError::Io { .. })
        ));
    }
}
