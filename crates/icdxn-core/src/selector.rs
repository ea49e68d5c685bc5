//! Disease selector.
//!
//! Every association query and update picks its diseases by one attribute:
//! chapter, group, or name. The selector carries that choice; the store resolves
//! it to a set of disease ids with a single query.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Disease attribute a selector matches on, or whose distinct values are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DiseaseAttribute {
    Chapter,
    Group,
    Name,
}

impl DiseaseAttribute {
    /// Column of the `icd` table holding this attribute.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Chapter => "disease_chapter",
            Self::Group => "disease_group",
            Self::Name => "disease_name",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chapter => "chapter",
            Self::Group => "group",
            Self::Name => "name",
        }
    }
}

/// Criterion used to pick which diseases an operation applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "by", content = "value", rename_all = "snake_case")]
pub enum Selector {
    /// All diseases whose chapter equals the value.
    Chapter(String),
    /// All diseases whose group equals the value.
    Group(String),
    /// The first disease (by id) whose name equals the value.
    Name(String),
}

impl Selector {
    /// Build a selector from the optional request fields, in precedence order
    /// chapter, group, name. Blank values count as missing.
    #[must_use]
    pub fn from_fields(
        chapter: Option<&str>,
        group: Option<&str>,
        name: Option<&str>,
    ) -> Option<Self> {
        let present =
            |v: Option<&str>| v.filter(|s| !s.trim().is_empty()).map(String::from);
        present(chapter)
            .map(Self::Chapter)
            .or_else(|| present(group).map(Self::Group))
            .or_else(|| present(name).map(Self::Name))
    }

    #[must_use]
    pub const fn attribute(&self) -> DiseaseAttribute {
        match self {
            Self::Chapter(_) => DiseaseAttribute::Chapter,
            Self::Group(_) => DiseaseAttribute::Group,
            Self::Name(_) => DiseaseAttribute::Name,
        }
    }

    /// Column of the `icd` table matched by this selector.
    #[must_use]
    pub const fn column(&self) -> &'static str {
        self.attribute().column()
    }

    /// Human-readable kind, used in operator-facing messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.attribute().as_str()
    }

    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Chapter(v) | Self::Group(v) | Self::Name(v) => v,
        }
    }

    /// Whether the selector resolves to at most one disease.
    #[must_use]
    pub const fn is_single(&self) -> bool {
        matches!(self, Self::Name(_))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind(), self.value())
    }
}
