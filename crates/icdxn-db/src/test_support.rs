//! Shared test utilities for icdxn-db unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use icdxn_core::entities::{NewDisease, NewLabTest};

    use crate::CurationDb;
    use crate::service::CurationService;

    /// Create an empty in-memory `CurationService`.
    pub async fn test_service() -> CurationService {
        let db = CurationDb::open_local(":memory:").await.unwrap();
        CurationService::from_db(db)
    }

    /// Diseases 1-3 share chapter `A00-B99`; 1-2 also share a group.
    /// Disease 4 has no group.
    pub fn sample_diseases() -> Vec<NewDisease> {
        let disease = |chapter: &str, group: Option<&str>, name: &str, code: &str| NewDisease {
            chapter: chapter.to_string(),
            group: group.map(String::from),
            name: name.to_string(),
            code: code.to_string(),
        };
        vec![
            disease("A00-B99", Some("Intestinal infectious diseases"), "Cholera", "A00"),
            disease("A00-B99", Some("Intestinal infectious diseases"), "Typhoid fever", "A01"),
            disease("A00-B99", Some("Tuberculosis"), "Respiratory tuberculosis", "A15"),
            disease("C00-D48", None, "Malignant neoplasm of lip", "C00"),
        ]
    }

    /// Tests 1-3: WBC, Hemoglobin, CRP.
    pub fn sample_tests() -> Vec<NewLabTest> {
        let test = |chapter: &str, group: &str, name: &str, occurrence: Option<i64>| NewLabTest {
            chapter: chapter.to_string(),
            group: group.to_string(),
            name: name.to_string(),
            occurrence,
        };
        vec![
            test("Hematology", "CBC", "WBC", Some(120)),
            test("Hematology", "CBC", "Hemoglobin", Some(95)),
            test("Chemistry", "Inflammation", "CRP", None),
        ]
    }

    /// Service with the sample catalog loaded but no associations.
    pub async fn catalog_service() -> CurationService {
        let svc = test_service().await;
        svc.replace_catalog(&sample_diseases(), &sample_tests())
            .await
            .unwrap();
        svc
    }

    /// Service with the sample catalog loaded and the full product seeded.
    pub async fn seeded_service() -> CurationService {
        let svc = catalog_service().await;
        svc.seed_associations().await.unwrap();
        svc
    }
}
