//! Catalog sheet readers.
//!
//! The sheets are read by header name, so column order does not matter and
//! extra columns are ignored.

use std::io::Read;
use std::path::Path;

use icdxn_core::entities::{NewDisease, NewLabTest};
use serde::de::DeserializeOwned;

use crate::error::TabularError;

fn read_records<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>, csv::Error> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .deserialize()
        .collect()
}

fn read_file<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, TabularError> {
    let file = std::fs::File::open(path)?;
    let records = read_records(std::io::BufReader::new(file)).map_err(|source| {
        TabularError::Read {
            path: path.to_path_buf(),
            source,
        }
    })?;
    tracing::debug!(path = %path.display(), rows = records.len(), "read catalog sheet");
    Ok(records)
}

/// Read disease rows (`disease_chapter, disease_group, disease_name, disease_code`).
/// An empty `disease_group` cell reads as no group.
///
/// # Errors
///
/// Returns `TabularError` if the file cannot be opened or a row does not parse.
pub fn read_diseases_csv(path: &Path) -> Result<Vec<NewDisease>, TabularError> {
    read_file(path)
}

/// Read lab test rows (`xn_chapter, xn_group, xn_name, xn_occurence`).
///
/// # Errors
///
/// Returns `TabularError` if the file cannot be opened or a row does not parse.
pub fn read_tests_csv(path: &Path) -> Result<Vec<NewLabTest>, TabularError> {
    read_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn diseases_read_by_header_with_optional_group() {
        let data = "\
disease_code,disease_chapter,disease_group,disease_name
A00,A00-B99,Intestinal infectious diseases,Cholera
C00,C00-D48,,Malignant neoplasm of lip
";
        let diseases: Vec<NewDisease> = read_records(data.as_bytes()).unwrap();
        assert_eq!(diseases.len(), 2);
        assert_eq!(diseases[0].name, "Cholera");
        assert_eq!(
            diseases[0].group.as_deref(),
            Some("Intestinal infectious diseases")
        );
        assert_eq!(diseases[1].group, None);
    }

    #[test]
    fn tests_read_occurrence_when_present() {
        let data = "\
xn_chapter,xn_group,xn_name,xn_occurence
Hematology,CBC,WBC,120
Chemistry,Inflammation, CRP ,
";
        let tests: Vec<NewLabTest> = read_records(data.as_bytes()).unwrap();
        assert_eq!(tests[0].occurrence, Some(120));
        assert_eq!(tests[1].name, "CRP");
        assert_eq!(tests[1].occurrence, None);
    }

    #[test]
    fn missing_required_column_fails() {
        let data = "xn_chapter,xn_name\nHematology,WBC\n";
        let result: Result<Vec<NewLabTest>, _> = read_records(data.as_bytes());
        assert!(result.is_err());
    }
}
