//! TOML configuration.
//!
//! Every section and key is optional; an empty file yields the defaults,
//! and the defaults reproduce the canonical diversity thresholds exactly.
//!
//! ```toml
//! [logging]
//! profile = "production"
//!
//! [diversity]
//! min_tokens = 25
//! medium_above = 15.0
//! high_above = 25.0
//! ```

use crate::errors::{QuillError, Result};
use crate::logging_facility::Profile;
use serde::Deserialize;
use std::path::Path;

/// Minimum token count below which diversity is not measured.
pub const DEFAULT_MIN_TOKENS: usize = 25;
/// Scores strictly above this are at least `Medium`.
pub const DEFAULT_MEDIUM_ABOVE: f64 = 15.0;
/// Scores strictly above this are `High`.
pub const DEFAULT_HIGH_ABOVE: f64 = 25.0;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuillConfig {
    pub logging: LoggingConfig,
    pub diversity: DiversityConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub profile: Profile,
}

/// Thresholds of the lexical diversity estimator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiversityConfig {
    pub min_tokens: usize,
    pub medium_above: f64,
    pub high_above: f64,
}

impl Default for DiversityConfig {
    fn default() -> Self {
        Self {
            min_tokens: DEFAULT_MIN_TOKENS,
            medium_above: DEFAULT_MEDIUM_ABOVE,
            high_above: DEFAULT_HIGH_ABOVE,
        }
    }
}

impl DiversityConfig {
    /// Check the thresholds are usable.
    ///
    /// # Errors
    ///
    /// `InvalidThresholds` if `min_tokens` is zero, a threshold is not
    /// finite, or `medium_above` exceeds `high_above`.
    pub fn validate(&self) -> Result<()> {
        if self.min_tokens == 0 {
            return Err(QuillError::InvalidThresholds {
                reason: "min_tokens must be at least 1".to_string(),
            });
        }
        if !self.medium_above.is_finite() || !self.high_above.is_finite() {
            return Err(QuillError::InvalidThresholds {
                reason: "thresholds must be finite numbers".to_string(),
            });
        }
        if self.medium_above > self.high_above {
            return Err(QuillError::InvalidThresholds {
                reason: format!(
                    "medium_above ({}) is greater than high_above ({})",
                    self.medium_above, self.high_above
                ),
            });
        }
        Ok(())
    }
}

impl QuillConfig {
    /// Parse and validate a config document.
    ///
    /// # Errors
    ///
    /// `ConfigParse` for malformed TOML or unknown keys, `InvalidThresholds`
    /// for inconsistent diversity settings.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: QuillConfig = toml::from_str(source).map_err(|e| QuillError::ConfigParse {
            message: e.to_string(),
        })?;
        config.diversity.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read, otherwise as [`QuillConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| QuillError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = QuillConfig::from_toml_str("").unwrap();
        assert_eq!(config, QuillConfig::default());
        assert_eq!(config.diversity.min_tokens, 25);
        assert_eq!(config.diversity.medium_above, 15.0);
        assert_eq!(config.diversity.high_above, 25.0);
        assert_eq!(config.logging.profile, Profile::Development);
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = QuillConfig::from_toml_str(
            r#"
            [logging]
            profile = "production"

            [diversity]
            min_tokens = 50
            "#,
        )
        .unwrap();
        assert_eq!(config.logging.profile, Profile::Production);
        assert_eq!(config.diversity.min_tokens, 50);
        assert_eq!(config.diversity.high_above, DEFAULT_HIGH_ABOVE);
    }

    #[test]
    fn test_inverted_thresholds_are_rejected() {
        let err = QuillConfig::from_toml_str(
            r#"
            [diversity]
            medium_above = 30.0
            high_above = 20.0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, QuillError::InvalidThresholds { .. }));
    }

    #[test]
    fn test_unknown_key_is_a_parse_error() {
        let err = QuillConfig::from_toml_str("[diversity]\nthreshold = 3\n").unwrap_err();
        assert!(matches!(err, QuillError::ConfigParse { .. }));
    }

    #[test]
    fn test_zero_min_tokens_is_rejected() {
        let config = DiversityConfig {
            min_tokens: 0,
            ..DiversityConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = QuillConfig::load("/definitely/not/here/quill.toml").unwrap_err();
        assert!(matches!(err, QuillError::Io { .. }));
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quill.toml");
        std::fs::write(&path, "[diversity]\nhigh_above = 40.0\n").unwrap();
        let config = QuillConfig::load(&path).unwrap();
        assert_eq!(config.diversity.high_above, 40.0);
    }
}
