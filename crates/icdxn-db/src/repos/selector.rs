//! Selector resolution: the one place a `Selector` becomes disease ids.

use icdxn_core::Selector;

use crate::error::DatabaseError;
use crate::helpers::collect_ids;
use crate::service::CurationService;

/// Resolve `selector` to the ids of the diseases it picks, ascending.
///
/// A name selector yields at most one id: the first disease with that name.
pub(crate) async fn resolve(
    conn: &libsql::Connection,
    selector: &Selector,
) -> Result<Vec<i64>, DatabaseError> {
    let limit = if selector.is_single() { " LIMIT 1" } else { "" };
    let sql = format!(
        "SELECT id FROM icd WHERE {} = ?1 ORDER BY id{limit}",
        selector.column()
    );
    let rows = conn.query(&sql, [selector.value()]).await?;
    collect_ids(rows).await
}

/// Operator-facing message for a selector that matched no diseases.
pub(crate) fn no_diseases_message(selector: &Selector) -> String {
    if selector.is_single() {
        "No matching disease found for this name".to_string()
    } else {
        format!("No diseases found for this {}", selector.kind())
    }
}

impl CurationService {
    /// Resolve a selector to disease ids.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn resolve_diseases(&self, selector: &Selector) -> Result<Vec<i64>, DatabaseError> {
        let conn = self.db().lock().await;
        resolve(&conn, selector).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::catalog_service;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn chapter_resolves_to_all_members() {
        let svc = catalog_service().await;
        let ids = svc
            .resolve_diseases(&Selector::Chapter("A00-B99".into()))
            .await
            .unwrap();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn group_resolves_by_group_column() {
        let svc = catalog_service().await;
        let ids = svc
            .resolve_diseases(&Selector::Group("Intestinal infectious diseases".into()))
            .await
            .unwrap();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn name_resolves_to_first_match_only() {
        let svc = catalog_service().await;
        {
            let conn = svc.db().lock().await;
            conn.execute(
                "INSERT INTO icd (disease_chapter, disease_group, disease_name, disease_code)
                 VALUES ('Z00-Z99', NULL, 'Cholera', 'Z99')",
                (),
            )
            .await
            .unwrap();
        }
        let ids = svc
            .resolve_diseases(&Selector::Name("Cholera".into()))
            .await
            .unwrap();
        assert_eq!(ids, vec![1]);
    }

    #[tokio::test]
    async fn unknown_value_resolves_to_nothing() {
        let svc = catalog_service().await;
        let ids = svc
            .resolve_diseases(&Selector::Chapter("Q00-Q99".into()))
            .await
            .unwrap();
        assert!(ids.is_empty());
    }

    #[test]
    fn messages_name_the_selector_kind() {
        assert_eq!(
            no_diseases_message(&Selector::Group("G".into())),
            "No diseases found for this group"
        );
        assert_eq!(
            no_diseases_message(&Selector::Name("N".into())),
            "No matching disease found for this name"
        );
    }
}
