//! Configuration for record parsing and classification.
//!
//! The employee ID ranges that decide each employee's pay category, and the
//! record delimiter, live here rather than in the parser. Defaults match the
//! standard payroll file; a YAML file can override them.
//!
//! # Example
//!
//! ```no_run
//! use weekly_pay::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll.yaml").unwrap().into_config();
//! println!("Wage IDs: {:?}", config.categories.wage);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CategoryRanges, IdRange, PART_TIME_IDS, PayrollConfig, SALARIED_IDS, WAGE_IDS};
