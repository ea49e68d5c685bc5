//! # icdxn-tabular
//!
//! Spreadsheet-shaped input and output.
//!
//! - [`export`] writes the flattened association snapshot as CSV or XLSX
//! - [`import`] reads the disease and lab test catalog sheets from CSV

pub mod error;
pub mod export;
pub mod import;

pub use error::TabularError;
pub use export::{Export, export_to_dir, render, write_csv, xlsx_bytes};
pub use import::{read_diseases_csv, read_tests_csv};
