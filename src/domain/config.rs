//! Tool configuration loaded from `carta.toml` in the working directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::AppError;

/// Name of the optional configuration file.
pub const CONFIG_FILE: &str = "carta.toml";

/// Default catalog file when nothing else is configured.
pub const DEFAULT_DATA_FILE: &str = "menu.json";

/// Environment variable overriding the configured catalog file.
pub const DATA_FILE_ENV: &str = "CARTA_FILE";

const DEFAULT_CURRENCY: &str = "$";

/// Settings for a carta invocation. Every field is optional; defaults
/// match the behavior of running the tool with no configuration at all.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path to the persisted catalog file.
    #[serde(default, rename = "data-file")]
    pub data_file: Option<PathBuf>,
    /// Display prefix for prices in listings.
    #[serde(default)]
    pub currency: Option<String>,
}

impl Config {
    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(content)?)
    }

    /// Load `carta.toml` from `dir`, falling back to defaults when absent.
    pub fn load_from_dir(dir: &Path) -> Result<Self, AppError> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        Self::parse_toml(&content)
    }

    pub fn currency(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_data_file_and_currency() {
        let config = Config::parse_toml(
            r#"
data-file = "data/menu-items.json"
currency = "€"
"#,
        )
        .unwrap();

        assert_eq!(config.data_file, Some(PathBuf::from("data/menu-items.json")));
        assert_eq!(config.currency(), "€");
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config.data_file, None);
        assert_eq!(config.currency(), "$");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::parse_toml("menu-file = \"x.json\"").unwrap_err();
        assert!(matches!(err, AppError::TomlParseError(_)));
    }

    #[test]
    fn load_from_dir_without_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.data_file, None);
    }
}
