//! Core data models for the weekly pay calculator.
//!
//! This module contains the domain models used throughout the crate.

mod employee;

pub use employee::{Compensation, Employee, EmployeeCategory};
