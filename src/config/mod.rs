//! Configuration loading for the farm payroll engine.
//!
//! This module loads the farm's payroll defaults from YAML: the currency
//! symbol used in breakdown text, the standard working day and overtime
//! multiplier for hourly staff, and the day convention and partial-month
//! policy for salaried staff.
//!
//! # Example
//!
//! ```no_run
//! use farm_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/farm").unwrap();
//! println!("Loaded payroll defaults for {}", config.farm().name);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, PAYROLL_CONFIG_FILE};
pub use types::{FarmSettings, HourlyDefaults, PayrollConfig, SalariedDefaults};
