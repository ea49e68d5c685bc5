use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A disease classification entry (row of `icd`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Disease {
    pub id: i64,
    pub chapter: String,
    pub group: Option<String>,
    pub name: String,
    pub code: String,
}

/// A disease row as read from the catalog sheet, before it has an id.
///
/// Field names follow the sheet's column headers.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewDisease {
    #[serde(rename = "disease_chapter")]
    pub chapter: String,
    #[serde(rename = "disease_group", default)]
    pub group: Option<String>,
    #[serde(rename = "disease_name")]
    pub name: String,
    #[serde(rename = "disease_code")]
    pub code: String,
}
