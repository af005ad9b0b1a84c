//! Weekly pay calculator.
//!
//! This crate reads a flat employee file, classifies each employee into a
//! pay category by ID range, computes weekly pay per category, and reports
//! payroll statistics such as average pay and category percentages.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod report;
