use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One flattened association for export: `icd_xn` joined to `icd` and `xn`.
///
/// Field order is the export column order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ExportRow {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Disease Name")]
    pub disease_name: String,
    #[serde(rename = "Test Name")]
    pub test_name: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Finalized")]
    pub finalized: String,
}

impl ExportRow {
    /// Column headers, in file order.
    pub const HEADERS: [&'static str; 5] = ["ID", "Disease Name", "Test Name", "Status", "Finalized"];
}
