//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};
use crate::models::EmployeeCategory;

use super::types::PayrollConfig;

/// Loads and validates payroll configuration.
///
/// # File Format
///
/// ```yaml
/// delimiter: ","
/// categories:
///   salaried: { min: 0, max: 4 }
///   wage: { min: 5, max: 7 }
///   part_time: { min: 8, max: 9 }
/// ```
///
/// Both keys are optional and fall back to the defaults shown above.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML
    /// - A category range is empty or two ranges overlap
    ///
    /// # Example
    ///
    /// ```no_run
    /// use weekly_pay::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/payroll.yaml")?;
    /// println!("Delimiter: {:?}", loader.config().delimiter);
    /// # Ok::<(), weekly_pay::error::PayrollError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: PayrollConfig =
            serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        Self::from_config(config).inspect(|_| debug!(path = %path_str, "Loaded payroll config"))
    }

    /// Validates an already-built configuration.
    pub fn from_config(config: PayrollConfig) -> PayrollResult<Self> {
        validate(&config)?;
        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> PayrollConfig {
        self.config
    }
}

fn validate(config: &PayrollConfig) -> PayrollResult<()> {
    let ranges = &config.categories;

    for category in EmployeeCategory::ALL {
        let range = ranges.range_for(category);
        if range.min > range.max {
            return Err(PayrollError::InvalidConfig {
                message: format!(
                    "{} range is empty ({} > {})",
                    category, range.min, range.max
                ),
            });
        }
    }

    for (i, first) in EmployeeCategory::ALL.iter().enumerate() {
        for second in &EmployeeCategory::ALL[i + 1..] {
            if ranges.range_for(*first).overlaps(&ranges.range_for(*second)) {
                return Err(PayrollError::InvalidConfig {
                    message: format!("{} range overlaps {} range", first, second),
                });
            }
        }
    }

    if config.delimiter == '\n' || config.delimiter == '\r' {
        return Err(PayrollError::InvalidConfig {
            message: "delimiter cannot be a line break".to_string(),
        });
    }

    Ok(())
}
