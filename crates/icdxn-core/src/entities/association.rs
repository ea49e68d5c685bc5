use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::AssociationStatus;

/// One (disease, test) pair from the `icd_xn` join table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Association {
    pub id: i64,
    pub icd_id: i64,
    pub xn_id: i64,
    pub status: AssociationStatus,
    /// Written once at seeding and carried unchanged.
    pub finalized: String,
}

/// A disease with the names of every test marked used for it, joined by `", "`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DiseaseTests {
    pub disease: String,
    pub tests: String,
}
