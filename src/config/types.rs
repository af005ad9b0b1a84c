//! Configuration types for record classification.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::models::EmployeeCategory;

/// An inclusive range of employee IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRange {
    /// The lowest ID in the range.
    pub min: i32,
    /// The highest ID in the range.
    pub max: i32,
}

impl IdRange {
    /// Creates a new inclusive range.
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Returns true if the ID falls within this range.
    pub fn contains(&self, id: i32) -> bool {
        self.min <= id && id <= self.max
    }

    /// Returns true if the two ranges share at least one ID.
    pub fn overlaps(&self, other: &IdRange) -> bool {
        self.min <= other.max && other.min <= self.max
    }
}

/// Default salaried IDs.
pub const SALARIED_IDS: IdRange = IdRange::new(0, 4);
/// Default wage IDs.
pub const WAGE_IDS: IdRange = IdRange::new(5, 7);
/// Default part-time IDs.
pub const PART_TIME_IDS: IdRange = IdRange::new(8, 9);

/// The ID range assigned to each employee category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRanges {
    /// IDs classified as salaried.
    pub salaried: IdRange,
    /// IDs classified as wage.
    pub wage: IdRange,
    /// IDs classified as part-time.
    pub part_time: IdRange,
}

impl CategoryRanges {
    /// Returns the range configured for a category.
    pub fn range_for(&self, category: EmployeeCategory) -> IdRange {
        match category {
            EmployeeCategory::Salaried => self.salaried,
            EmployeeCategory::Wage => self.wage,
            EmployeeCategory::PartTime => self.part_time,
        }
    }
}

impl Default for CategoryRanges {
    fn default() -> Self {
        Self {
            salaried: SALARIED_IDS,
            wage: WAGE_IDS,
            part_time: PART_TIME_IDS,
        }
    }
}

fn default_delimiter() -> char {
    ','
}

/// Settings that control how employee records are parsed and classified.
///
/// # Example
///
/// ```
/// use weekly_pay::config::PayrollConfig;
/// use weekly_pay::models::EmployeeCategory;
///
/// let config = PayrollConfig::default();
/// assert_eq!(config.classify(2), Some(EmployeeCategory::Salaried));
/// assert_eq!(config.classify(7), Some(EmployeeCategory::Wage));
/// assert_eq!(config.classify(9), Some(EmployeeCategory::PartTime));
/// assert_eq!(config.classify(10), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PayrollConfig {
    /// The field separator within a record.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// The ID ranges used to classify employees.
    #[serde(default)]
    pub categories: CategoryRanges,
}

impl PayrollConfig {
    /// Returns the category whose ID range contains `employee_id`.
    pub fn classify(&self, employee_id: i32) -> Option<EmployeeCategory> {
        EmployeeCategory::ALL
            .into_iter()
            .find(|category| self.categories.range_for(*category).contains(employee_id))
    }
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            categories: CategoryRanges::default(),
        }
    }
}
