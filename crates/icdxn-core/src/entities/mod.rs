//! Plain records for all stored rows.
//!
//! Each record maps to a table in the libSQL database (`icd`, `xn`, `icd_xn`)
//! or to a joined view of them. Relationships are explicit foreign-key fields.

mod association;
mod disease;
mod export;
mod lab_test;

pub use association::{Association, DiseaseTests};
pub use disease::{Disease, NewDisease};
pub use export::ExportRow;
pub use lab_test::{LabTest, NewLabTest};
