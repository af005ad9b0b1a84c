//! Employee file input.
//!
//! The record parser classifies and builds one employee per line; the loader
//! reads a whole file and collects the accepted employees in order.

mod loader;
mod parser;

pub use loader::{LoadReport, load_employees, parse_employees};
pub use parser::{MIN_FIELDS, RecordRejection, parse_record};
