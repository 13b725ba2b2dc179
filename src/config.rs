//! Application configuration for exchange-rate tables
//!
//! Configuration is TOML by default; files with a `.json` extension are
//! parsed as JSON, matching the shape of the original appsettings file
//! (PascalCase keys are accepted as aliases).

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{FxError, Result};

/// File name probed in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "fx-exchange.toml";

/// One configured currency with its anchor-relative rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyRateEntry {
    #[serde(alias = "Code")]
    pub code: String,
    #[serde(default, alias = "Name")]
    pub name: String,
    #[serde(alias = "Rate")]
    pub rate: Decimal,
}

/// Exchange-rate section of the configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExchangeRateConfig {
    /// When set, `currencies` replaces the built-in rate table.
    #[serde(default, alias = "LoadFromConfig")]
    pub load_from_config: bool,

    /// Configured currencies; ignored unless `load_from_config` is set.
    #[serde(default, alias = "Currencies")]
    pub currencies: Vec<CurrencyRateEntry>,
}

impl ExchangeRateConfig {
    /// Load configuration.
    ///
    /// An explicit `path` must exist and parse. Without one, the default
    /// locations are probed in order (`./fx-exchange.toml`, then
    /// `~/.fx-exchange/config.toml`); if none exists the defaults apply and
    /// the built-in rate table is used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        for candidate in Self::default_locations() {
            if candidate.is_file() {
                debug!("loading configuration from {}", candidate.display());
                return Self::from_file(&candidate);
            }
        }

        debug!("no configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Read and parse one configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| FxError::Config(format!("failed to read {}: {}", path.display(), e)))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            serde_json::from_str(&contents)
                .map_err(|e| FxError::Config(format!("failed to parse {}: {}", path.display(), e)))
        } else {
            toml::from_str(&contents)
                .map_err(|e| FxError::Config(format!("failed to parse {}: {}", path.display(), e)))
        }
    }

    fn default_locations() -> Vec<PathBuf> {
        let mut locations = vec![PathBuf::from(DEFAULT_CONFIG_FILE)];
        if let Some(home) = dirs::home_dir() {
            locations.push(home.join(".fx-exchange").join("config.toml"));
        }
        locations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_uses_builtin_table() {
        let config = ExchangeRateConfig::default();
        assert!(!config.load_from_config);
        assert!(config.currencies.is_empty());
    }

    #[test]
    fn test_parse_toml() {
        let config: ExchangeRateConfig = toml::from_str(
            r#"
            load_from_config = true

            [[currencies]]
            code = "TS1"
            name = "Test currency 1"
            rate = 10.5

            [[currencies]]
            code = "TS2"
            name = "Test currency 2"
            rate = 20.75
            "#,
        )
        .unwrap();

        assert!(config.load_from_config);
        assert_eq!(config.currencies.len(), 2);
        assert_eq!(config.currencies[0].code, "TS1");
        assert_eq!(config.currencies[0].rate, dec!(10.5));
        assert_eq!(config.currencies[1].name, "Test currency 2");
        assert_eq!(config.currencies[1].rate, dec!(20.75));
    }

    #[test]
    fn test_parse_json_with_pascal_case_aliases() {
        let config: ExchangeRateConfig = serde_json::from_str(
            r#"{
                "LoadFromConfig": true,
                "Currencies": [
                    { "Code": "TS1", "Name": "Test currency 1", "Rate": 10.5 }
                ]
            }"#,
        )
        .unwrap();

        assert!(config.load_from_config);
        assert_eq!(config.currencies.len(), 1);
        assert_eq!(config.currencies[0].code, "TS1");
        assert_eq!(config.currencies[0].rate, dec!(10.5));
    }

    #[test]
    fn test_parse_toml_missing_fields_default() {
        let config: ExchangeRateConfig = toml::from_str("").unwrap();
        assert!(!config.load_from_config);
        assert!(config.currencies.is_empty());

        let config: ExchangeRateConfig = toml::from_str(
            r#"
            [[currencies]]
            code = "TS1"
            rate = 1.0
            "#,
        )
        .unwrap();
        assert!(!config.load_from_config);
        assert_eq!(config.currencies[0].name, "");
    }

    #[test]
    fn test_from_file_toml() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(
            file,
            "load_from_config = true\n\n\
             [[currencies]]\n\
             code = \"ABC\"\n\
             name = \"Alphabet coin\"\n\
             rate = 2.5"
        )
        .unwrap();
        file.flush().unwrap();

        let config = ExchangeRateConfig::from_file(file.path()).unwrap();
        assert!(config.load_from_config);
        assert_eq!(config.currencies.len(), 1);
        assert_eq!(config.currencies[0].rate, dec!(2.5));
    }

    #[test]
    fn test_from_file_json_by_extension() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        writeln!(
            file,
            r#"{{ "LoadFromConfig": false, "Currencies": [] }}"#
        )
        .unwrap();
        file.flush().unwrap();

        let config = ExchangeRateConfig::from_file(file.path()).unwrap();
        assert!(!config.load_from_config);
    }

    #[test]
    fn test_from_file_rejects_invalid_content() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "load_from_config = \"not a bool\"").unwrap();
        file.flush().unwrap();

        let err = ExchangeRateConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, FxError::Config(_)));
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn test_from_file_missing_path_errors() {
        let err =
            ExchangeRateConfig::from_file(Path::new("/nonexistent/fx-exchange.toml")).unwrap_err();
        assert!(matches!(err, FxError::Config(_)));
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn test_load_with_explicit_path() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "load_from_config = true").unwrap();
        file.flush().unwrap();

        let config = ExchangeRateConfig::load(Some(file.path())).unwrap();
        assert!(config.load_from_config);
    }
}
