//! Request and response bodies.

use icdxn_core::{DiseaseAttribute, Selector};
use serde::{Deserialize, Serialize};

/// Selector fields as sent by the curation UI. Blank strings count as missing.
#[derive(Debug, Default, Deserialize)]
pub struct SelectionRequest {
    pub chapter: Option<String>,
    pub group: Option<String>,
    pub name: Option<String>,
}

impl SelectionRequest {
    /// Selector on one fixed attribute, ignoring the other fields.
    #[must_use]
    pub fn select(&self, attribute: DiseaseAttribute) -> Option<Selector> {
        let field = match attribute {
            DiseaseAttribute::Chapter => &self.chapter,
            DiseaseAttribute::Group => &self.group,
            DiseaseAttribute::Name => &self.name,
        };
        let value = field.as_deref().filter(|v| !v.trim().is_empty())?;
        Some(match attribute {
            DiseaseAttribute::Chapter => Selector::Chapter(value.to_string()),
            DiseaseAttribute::Group => Selector::Group(value.to_string()),
            DiseaseAttribute::Name => Selector::Name(value.to_string()),
        })
    }

    /// Selector from whichever field is present: chapter, then group, then name.
    #[must_use]
    pub fn any(&self) -> Option<Selector> {
        Selector::from_fields(
            self.chapter.as_deref(),
            self.group.as_deref(),
            self.name.as_deref(),
        )
    }
}

/// `POST /update_icd_xn*` body.
#[derive(Debug, Deserialize)]
pub struct ActivateRequest {
    #[serde(flatten)]
    pub selection: SelectionRequest,
    #[serde(default)]
    pub test_ids: Vec<i64>,
}

/// `POST /remove_xn_from_*` body.
#[derive(Debug, Deserialize)]
pub struct DeactivateRequest {
    #[serde(flatten)]
    pub selection: SelectionRequest,
    pub xn_name: Option<String>,
}

/// Either a list of test names or an explanatory sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TestsField {
    Names(Vec<String>),
    Text(String),
}

/// `{"tests": ...}` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestsResponse {
    pub tests: TestsField,
}

impl TestsResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            tests: TestsField::Text(text.into()),
        }
    }

    #[must_use]
    pub const fn names(names: Vec<String>) -> Self {
        Self {
            tests: TestsField::Names(names),
        }
    }
}

/// `{"message": ...}` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
