//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! defaults from a YAML file.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{FarmSettings, HourlyDefaults, PayrollConfig, SalariedDefaults};

/// File name of the payroll configuration inside the config directory.
pub const PAYROLL_CONFIG_FILE: &str = "payroll.yaml";

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/farm/
/// └── payroll.yaml   # Farm settings, hourly and salaried defaults
/// ```
///
/// # Example
///
/// ```no_run
/// use farm_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/farm").unwrap();
/// println!("Farm: {}", loader.farm().name);
/// println!("Standard day: {} hours", loader.hourly().standard_work_hours_per_day);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/farm")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `payroll.yaml` is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or a required field is missing
    ///   (`ConfigParseError`)
    /// - A default is out of range, such as a standard day that is not
    ///   positive (`ConfigParseError`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use farm_payroll::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/farm")?;
    /// # Ok::<(), farm_payroll::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let config_path = path.as_ref().join(PAYROLL_CONFIG_FILE);
        let config = Self::load_yaml::<PayrollConfig>(&config_path)?;
        Self::validate(&config, &config_path)?;
        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: PayrollConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate(config: &PayrollConfig, path: &Path) -> EngineResult<()> {
        let invalid = |message: String| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message,
        };

        if config.hourly.standard_work_hours_per_day <= Decimal::ZERO {
            return Err(invalid(format!(
                "hourly.standard_work_hours_per_day must be greater than zero, got {}",
                config.hourly.standard_work_hours_per_day
            )));
        }
        if config.hourly.overtime_rate_multiplier < Decimal::ZERO {
            return Err(invalid(format!(
                "hourly.overtime_rate_multiplier must not be negative, got {}",
                config.hourly.overtime_rate_multiplier
            )));
        }
        Ok(())
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the farm settings.
    pub fn farm(&self) -> &FarmSettings {
        &self.config.farm
    }

    /// Returns the currency symbol used in rendered breakdowns.
    pub fn currency_symbol(&self) -> &str {
        &self.config.farm.currency_symbol
    }

    /// Returns the hourly defaults.
    pub fn hourly(&self) -> &HourlyDefaults {
        &self.config.hourly
    }

    /// Returns the salaried defaults.
    pub fn salaried(&self) -> &SalariedDefaults {
        &self.config.salaried
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayConvention, PartialMonthPolicy};
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/farm"
    }

    /// Writes `content` as payroll.yaml in a fresh temporary directory.
    fn write_config(content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("farm-payroll-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(PAYROLL_CONFIG_FILE), content).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.farm().name, "Green Acres Farm");
        assert_eq!(loader.currency_symbol(), "₹");
        assert_eq!(loader.hourly().standard_work_hours_per_day, Decimal::new(8, 0));
        assert_eq!(loader.hourly().overtime_rate_multiplier, Decimal::new(15, 1));
        assert_eq!(loader.salaried().day_convention, DayConvention::WorkingDays260);
        assert_eq!(loader.salaried().partial_month, PartialMonthPolicy::ProRate);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("payroll.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = write_config("farm: [unterminated\n");
        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, .. }) => assert!(path.contains("payroll.yaml")),
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_missing_farm_section_returns_parse_error() {
        let dir = write_config("hourly:\n  standard_work_hours_per_day: 8\n");
        assert!(matches!(
            ConfigLoader::load(&dir),
            Err(EngineError::ConfigParseError { .. })
        ));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_zero_standard_day_returns_parse_error() {
        let dir = write_config("farm:\n  name: \"X\"\nhourly:\n  standard_work_hours_per_day: 0\n");
        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("standard_work_hours_per_day"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_negative_multiplier_returns_parse_error() {
        let dir = write_config("farm:\n  name: \"X\"\nhourly:\n  overtime_rate_multiplier: -1\n");
        assert!(matches!(
            ConfigLoader::load(&dir),
            Err(EngineError::ConfigParseError { .. })
        ));
        fs::remove_dir_all(dir).ok();
    }
}
