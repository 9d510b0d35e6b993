//! Configuration for the `pontifex` command-line tool.
//!
//! Loaded from a TOML file; every field has a default so a missing file or
//! a partial file is fine.
//!
//! ```toml
//! [defaults]
//! key = "CRYPTONOMICON"
//! text = "Solitaire!"
//!
//! [log]
//! level = "warn"
//! format = "text"
//!
//! [replay]
//! delay_ms = 150
//!
//! [fields]
//! remember = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{PontifexError, PontifexResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PontifexConfig {
    pub defaults: DefaultsConfig,
    pub log: LogConfig,
    pub replay: ReplayConfig,
    pub fields: FieldsConfig,
}

/// Inputs used when neither the command line nor the field store has one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub key: String,
    /// Plaintext for `encrypt`; there is no default ciphertext.
    pub text: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            key: "CRYPTONOMICON".into(),
            text: "Solitaire!".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive, overridden by `RUST_LOG` (default: warn)
    pub level: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: LogFormat::Text,
        }
    }
}

/// Pacing of the step-by-step replay. Only the CLI sleeps; the cipher never does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    /// Pause between replayed steps in milliseconds (0 = no pause)
    pub delay_ms: u64,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self { delay_ms: 150 }
    }
}

/// Remembering the last key and text between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldsConfig {
    pub remember: bool,
    /// Field store file (default: `pontifex/fields.toml` in the user config dir)
    pub path: Option<PathBuf>,
}

impl Default for FieldsConfig {
    fn default() -> Self {
        Self {
            remember: true,
            path: None,
        }
    }
}

impl PontifexConfig {
    /// Loads the configuration at `path`, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    /// - [`PontifexError::Io`] if the file exists but cannot be read.
    /// - [`PontifexError::Config`] if the file is not valid configuration TOML.
    pub fn load(path: &Path) -> PontifexResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(contents: &str) -> PontifexResult<Self> {
        toml::from_str(contents).map_err(|e| PontifexError::Config(e.to_string()))
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> PontifexResult<String> {
        toml::to_string_pretty(self).map_err(|e| PontifexError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PontifexConfig::default();
        assert_eq!(config.defaults.key, "CRYPTONOMICON");
        assert_eq!(config.defaults.text, "Solitaire!");
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.log.format, LogFormat::Text);
        assert_eq!(config.replay.delay_ms, 150);
        assert!(config.fields.remember);
        assert!(config.fields.path.is_none());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = PontifexConfig::from_toml(
            r#"
            [log]
            format = "json"

            [replay]
            delay_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.log.format, LogFormat::Json);
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.replay.delay_ms, 0);
        assert_eq!(config.defaults, DefaultsConfig::default());
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let err = PontifexConfig::from_toml("[log\nlevel = ").unwrap_err();
        assert!(matches!(err, PontifexError::Config(_)));

        let err = PontifexConfig::from_toml("[log]\nformat = \"yaml\"").unwrap_err();
        assert!(matches!(err, PontifexError::Config(_)));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PontifexConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, PontifexConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pontifex.toml");
        std::fs::write(&path, "[defaults]\nkey = \"FOO\"\n").unwrap();
        let config = PontifexConfig::load(&path).unwrap();
        assert_eq!(config.defaults.key, "FOO");
        assert_eq!(config.defaults.text, "Solitaire!");
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = PontifexConfig::default();
        config.fields.path = Some(PathBuf::from("/tmp/fields.toml"));
        let rendered = config.to_toml().unwrap();
        assert_eq!(PontifexConfig::from_toml(&rendered).unwrap(), config);
    }
}
