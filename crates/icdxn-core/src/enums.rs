//! Association status and export format enums.
//!
//! Status values are stored verbatim (`"Unknown"`, `"Used"`) so the table stays
//! readable by the spreadsheet tooling that produced the catalog.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Value written to `icd_xn.finalized` at seeding. Never transitioned.
pub const DEFAULT_FINALIZED: &str = "Not Yet";

// ---------------------------------------------------------------------------
// AssociationStatus
// ---------------------------------------------------------------------------

/// Whether a test is designated as used for a disease.
///
/// ```text
/// unknown ⇄ used
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum AssociationStatus {
    #[default]
    Unknown,
    Used,
}

impl AssociationStatus {
    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Used => "Used",
        }
    }
}

impl fmt::Display for AssociationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssociationStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Unknown" => Ok(Self::Unknown),
            "Used" => Ok(Self::Used),
            other => Err(CoreError::UnknownVariant {
                kind: "association status",
                value: other.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// ExportFormat
// ---------------------------------------------------------------------------

/// File kinds the association snapshot can be exported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

impl ExportFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
        }
    }

    /// Fixed output file name. Each export overwrites the previous one.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Csv => "exported_data.csv",
            Self::Xlsx => "exported_data.xlsx",
        }
    }

    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Csv => "text/csv; charset=utf-8",
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        }
    }

    /// Parse a format, treating anything other than `xlsx` as CSV.
    #[must_use]
    pub fn parse_lenient(s: &str) -> Self {
        if s.eq_ignore_ascii_case("xlsx") {
            Self::Xlsx
        } else {
            Self::Csv
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" => Ok(Self::Xlsx),
            _ => Err(CoreError::UnknownVariant {
                kind: "export format",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn status_roundtrips_through_storage_string() {
        for status in [AssociationStatus::Unknown, AssociationStatus::Used] {
            assert_eq!(status.as_str().parse::<AssociationStatus>().unwrap(), status);
        }
    }

    #[test]
    fn status_serializes_like_storage() {
        let json = serde_json::to_string(&AssociationStatus::Used).unwrap();
        assert_eq!(json, "\"Used\"");
    }

    #[test]
    fn status_rejects_other_values() {
        let err = "used".parse::<AssociationStatus>().unwrap_err();
        assert!(err.to_string().contains("association status"));
    }

    #[test]
    fn status_defaults_to_unknown() {
        assert_eq!(AssociationStatus::default(), AssociationStatus::Unknown);
    }

    #[rstest]
    #[case("xlsx", ExportFormat::Xlsx)]
    #[case("XLSX", ExportFormat::Xlsx)]
    #[case("csv", ExportFormat::Csv)]
    #[case("pdf", ExportFormat::Csv)]
    #[case("", ExportFormat::Csv)]
    fn lenient_format_falls_back_to_csv(#[case] input: &str, #[case] expected: ExportFormat) {
        assert_eq!(ExportFormat::parse_lenient(input), expected);
    }

    #[test]
    fn strict_format_rejects_unknown() {
        assert!("pdf".parse::<ExportFormat>().is_err());
        assert_eq!("Xlsx".parse::<ExportFormat>().unwrap(), ExportFormat::Xlsx);
    }

    #[test]
    fn file_names_are_fixed_per_format() {
        assert_eq!(ExportFormat::Csv.file_name(), "exported_data.csv");
        assert_eq!(ExportFormat::Xlsx.file_name(), "exported_data.xlsx");
    }
}
