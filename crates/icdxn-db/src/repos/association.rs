//! Association queries and status updates, all driven by a `Selector`.

use icdxn_core::entities::{Association, DiseaseTests};
use icdxn_core::enums::AssociationStatus;
use icdxn_core::{DiseaseAttribute, Selector};
use serde::Serialize;

use crate::error::DatabaseError;
use crate::helpers::{collect_strings, id_params, parse_status, placeholders};
use crate::repos::catalog::distinct;
use crate::repos::selector::{no_diseases_message, resolve};
use crate::service::CurationService;

/// Result of looking for tests shared by every selected disease.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommonTests {
    /// The selector matched no diseases.
    NoDiseases,
    /// Names of tests used for every matched disease, possibly empty.
    Common(Vec<String>),
}

/// Home-screen data: every chapter and the used tests of every disease.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overview {
    pub disease_chapters: Vec<String>,
    pub grouped_data: Vec<DiseaseTests>,
}

fn row_to_association(row: &libsql::Row) -> Result<Association, DatabaseError> {
    Ok(Association {
        id: row.get::<i64>(0)?,
        icd_id: row.get::<i64>(1)?,
        xn_id: row.get::<i64>(2)?,
        status: parse_status(&row.get::<String>(3)?)?,
        finalized: row.get::<String>(4)?,
    })
}

async fn common_in(conn: &libsql::Connection, ids: &[i64]) -> Result<Vec<String>, DatabaseError> {
    let sql = format!(
        "SELECT x.xn_name FROM icd_xn a JOIN xn x ON x.id = a.xn_id
         WHERE a.status = 'Used' AND a.icd_id IN ({})
         GROUP BY x.xn_name
         HAVING COUNT(DISTINCT a.icd_id) = ?{}
         ORDER BY MIN(x.id)",
        placeholders(1, ids.len()),
        ids.len() + 1
    );
    let mut params = id_params(ids);
    params.push(libsql::Value::Integer(i64::try_from(ids.len()).map_err(
        |e| DatabaseError::Query(format!("selection too large: {e}")),
    )?));
    let rows = conn.query(&sql, libsql::params_from_iter(params)).await?;
    collect_strings(rows).await
}

/// Used tests per disease, restricted to `ids` when given. Diseases with no
/// used test are left out.
async fn grouped(
    conn: &libsql::Connection,
    ids: Option<&[i64]>,
) -> Result<Vec<DiseaseTests>, DatabaseError> {
    let filter = ids.map_or_else(String::new, |ids| {
        format!(" AND a.icd_id IN ({})", placeholders(1, ids.len()))
    });
    let sql = format!(
        "SELECT a.icd_id, i.disease_name, x.xn_name
         FROM icd_xn a
         JOIN icd i ON i.id = a.icd_id
         JOIN xn x ON x.id = a.xn_id
         WHERE a.status = 'Used'{filter}
         ORDER BY a.icd_id, x.id"
    );
    let params = ids.map(id_params).unwrap_or_default();
    let mut rows = conn.query(&sql, libsql::params_from_iter(params)).await?;

    let mut grouped: Vec<(i64, String, Vec<String>)> = Vec::new();
    while let Some(row) = rows.next().await? {
        let icd_id = row.get::<i64>(0)?;
        let test = row.get::<String>(2)?;
        match grouped.last_mut() {
            Some((last, _, tests)) if *last == icd_id => tests.push(test),
            _ => grouped.push((icd_id, row.get::<String>(1)?, vec![test])),
        }
    }
    Ok(grouped
        .into_iter()
        .map(|(_, disease, tests)| DiseaseTests {
            disease,
            tests: tests.join(", "),
        })
        .collect())
}

async fn activate_in(
    conn: &libsql::Connection,
    selector: &Selector,
    test_ids: &[i64],
) -> Result<u64, DatabaseError> {
    let ids = resolve(conn, selector).await?;
    if ids.is_empty() {
        return Err(DatabaseError::NotFound(no_diseases_message(selector)));
    }

    let sql = format!(
        "UPDATE icd_xn SET status = 'Used'
         WHERE icd_id IN ({}) AND xn_id IN ({})",
        placeholders(1, ids.len()),
        placeholders(ids.len() + 1, test_ids.len())
    );
    let mut params = id_params(&ids);
    params.extend(id_params(test_ids));
    let updated = conn.execute(&sql, libsql::params_from_iter(params)).await?;
    if updated == 0 {
        return Err(DatabaseError::NotFound(
            "No matching ICD-XN records found".to_string(),
        ));
    }
    Ok(updated)
}

async fn deactivate_in(
    conn: &libsql::Connection,
    selector: &Selector,
    test_name: &str,
) -> Result<u64, DatabaseError> {
    let ids = resolve(conn, selector).await?;
    if ids.is_empty() {
        let message = if selector.is_single() {
            "Disease not found".to_string()
        } else {
            no_diseases_message(selector)
        };
        return Err(DatabaseError::NotFound(message));
    }

    // Duplicate test names resolve to the first by id.
    let mut rows = conn
        .query(
            "SELECT id FROM xn WHERE xn_name = ?1 ORDER BY id LIMIT 1",
            [test_name],
        )
        .await?;
    let Some(row) = rows.next().await? else {
        return Err(DatabaseError::NotFound("Test not found".to_string()));
    };
    let xn_id = row.get::<i64>(0)?;

    let sql = format!(
        "UPDATE icd_xn SET status = 'Unknown'
         WHERE icd_id IN ({}) AND xn_id = ?{} AND status = 'Used'",
        placeholders(1, ids.len()),
        ids.len() + 1
    );
    let mut params = id_params(&ids);
    params.push(libsql::Value::Integer(xn_id));
    let updated = conn.execute(&sql, libsql::params_from_iter(params)).await?;
    if updated == 0 {
        return Err(DatabaseError::NotFound(
            "No matching records found".to_string(),
        ));
    }
    Ok(updated)
}

impl CurationService {
    /// Names of tests marked used for every disease the selector matches.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a query fails.
    pub async fn common_tests(&self, selector: &Selector) -> Result<CommonTests, DatabaseError> {
        let conn = self.db().lock().await;
        let ids = resolve(&conn, selector).await?;
        if ids.is_empty() {
            return Ok(CommonTests::NoDiseases);
        }
        let names = common_in(&conn, &ids).await?;
        tracing::debug!(%selector, diseases = ids.len(), common = names.len(), "common tests");
        Ok(CommonTests::Common(names))
    }

    /// Names of tests marked used for the first disease called `name`.
    ///
    /// An empty list means the disease exists but has no used tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidInput` for a blank name and
    /// `DatabaseError::NotFound` if no disease has that name.
    pub async fn tests_for_disease(&self, name: &str) -> Result<Vec<String>, DatabaseError> {
        if name.trim().is_empty() {
            return Err(DatabaseError::InvalidInput("No disease selected".to_string()));
        }
        let conn = self.db().lock().await;
        let ids = resolve(&conn, &Selector::Name(name.to_string())).await?;
        let Some(&icd_id) = ids.first() else {
            return Err(DatabaseError::NotFound("Disease not found".to_string()));
        };
        let rows = conn
            .query(
                "SELECT x.xn_name FROM icd_xn a JOIN xn x ON x.id = a.xn_id
                 WHERE a.icd_id = ?1 AND a.status = 'Used'
                 ORDER BY x.id",
                [icd_id],
            )
            .await?;
        collect_strings(rows).await
    }

    /// Used tests per matched disease, joined by `", "`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a query fails.
    pub async fn selected_tests(
        &self,
        selector: &Selector,
    ) -> Result<Vec<DiseaseTests>, DatabaseError> {
        let conn = self.db().lock().await;
        let ids = resolve(&conn, selector).await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        grouped(&conn, Some(&ids)).await
    }

    /// Distinct chapters and the used tests of every disease.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a query fails.
    pub async fn overview(&self) -> Result<Overview, DatabaseError> {
        let conn = self.db().lock().await;
        let disease_chapters = distinct(&conn, DiseaseAttribute::Chapter).await?;
        let grouped_data = grouped(&conn, None).await?;
        Ok(Overview {
            disease_chapters,
            grouped_data,
        })
    }

    /// Mark the given tests used for every matched disease.
    ///
    /// Rows already `Used` are rewritten unchanged, so repeating a call is
    /// harmless. Returns the number of rows matched.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidInput` for an empty id list and
    /// `DatabaseError::NotFound` if no disease or no association matches.
    pub async fn activate(&self, selector: &Selector, test_ids: &[i64]) -> Result<u64, DatabaseError> {
        if test_ids.is_empty() {
            return Err(DatabaseError::InvalidInput("Invalid data received".to_string()));
        }
        let conn = self.db().lock().await;
        let tx = conn.transaction().await?;
        let result = activate_in(&tx, selector, test_ids).await;
        let updated = crate::finish(tx, result).await?;
        tracing::info!(%selector, tests = test_ids.len(), updated, "activated tests");
        Ok(updated)
    }

    /// Return one test to `Unknown` for every matched disease where it is `Used`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidInput` for a blank test name and
    /// `DatabaseError::NotFound` if no disease, test, or used association matches.
    pub async fn deactivate(&self, selector: &Selector, test_name: &str) -> Result<u64, DatabaseError> {
        if test_name.trim().is_empty() {
            return Err(DatabaseError::InvalidInput("Invalid data received".to_string()));
        }
        let conn = self.db().lock().await;
        let tx = conn.transaction().await?;
        let result = deactivate_in(&tx, selector, test_name).await;
        let updated = crate::finish(tx, result).await?;
        tracing::info!(%selector, test = test_name, updated, "deactivated test");
        Ok(updated)
    }

    /// Every association, by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_associations(&self) -> Result<Vec<Association>, DatabaseError> {
        let conn = self.db().lock().await;
        let mut rows = conn
            .query(
                "SELECT id, icd_id, xn_id, status, finalized FROM icd_xn ORDER BY id",
                (),
            )
            .await?;
        let mut associations = Vec::new();
        while let Some(row) = rows.next().await? {
            associations.push(row_to_association(&row)?);
        }
        Ok(associations)
    }

    /// Status of the association between one disease and one test.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the pair has no association.
    pub async fn association_status(
        &self,
        icd_id: i64,
        xn_id: i64,
    ) -> Result<AssociationStatus, DatabaseError> {
        let conn = self.db().lock().await;
        let mut rows = conn
            .query(
                "SELECT status FROM icd_xn WHERE icd_id = ?1 AND xn_id = ?2",
                [icd_id, xn_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        parse_status(&row.get::<String>(0)?)
    }
}
