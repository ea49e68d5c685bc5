use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A lab test entry (row of `xn`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LabTest {
    pub id: i64,
    pub chapter: String,
    pub group: String,
    pub name: String,
    pub occurrence: Option<i64>,
}

/// A lab test row as read from the catalog sheet, before it has an id.
///
/// `xn_occurence` keeps the sheet's spelling.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewLabTest {
    #[serde(rename = "xn_chapter")]
    pub chapter: String,
    #[serde(rename = "xn_group")]
    pub group: String,
    #[serde(rename = "xn_name")]
    pub name: String,
    #[serde(rename = "xn_occurence", default)]
    pub occurrence: Option<i64>,
}
