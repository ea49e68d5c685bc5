//! Disease and lab test catalog: distinct values, listings, wholesale reload.

use icdxn_core::DiseaseAttribute;
use icdxn_core::entities::{Disease, LabTest, NewDisease, NewLabTest};
use serde::Serialize;

use crate::error::DatabaseError;
use crate::helpers::{collect_strings, get_opt_string, scalar_count};
use crate::service::CurationService;

/// Row counts across the three tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogCounts {
    pub diseases: u64,
    pub tests: u64,
    pub associations: u64,
    /// Associations currently marked `Used`.
    pub used: u64,
}

fn row_to_disease(row: &libsql::Row) -> Result<Disease, DatabaseError> {
    Ok(Disease {
        id: row.get::<i64>(0)?,
        chapter: row.get::<String>(1)?,
        group: get_opt_string(row, 2)?,
        name: row.get::<String>(3)?,
        code: row.get::<String>(4)?,
    })
}

fn row_to_lab_test(row: &libsql::Row) -> Result<LabTest, DatabaseError> {
    Ok(LabTest {
        id: row.get::<i64>(0)?,
        chapter: row.get::<String>(1)?,
        group: row.get::<String>(2)?,
        name: row.get::<String>(3)?,
        occurrence: row.get::<Option<i64>>(4)?,
    })
}

fn require(value: &str, table: &str, row: usize, column: &str) -> Result<(), DatabaseError> {
    if value.trim().is_empty() {
        return Err(DatabaseError::InvalidInput(format!(
            "{table} row {row}: {column} is blank"
        )));
    }
    Ok(())
}

fn validate_catalog(diseases: &[NewDisease], tests: &[NewLabTest]) -> Result<(), DatabaseError> {
    for (i, d) in diseases.iter().enumerate() {
        let row = i + 1;
        require(&d.chapter, "icd", row, "disease_chapter")?;
        require(&d.name, "icd", row, "disease_name")?;
        require(&d.code, "icd", row, "disease_code")?;
    }
    for (i, t) in tests.iter().enumerate() {
        let row = i + 1;
        require(&t.chapter, "xn", row, "xn_chapter")?;
        require(&t.group, "xn", row, "xn_group")?;
        require(&t.name, "xn", row, "xn_name")?;
    }
    Ok(())
}

pub(crate) async fn distinct(
    conn: &libsql::Connection,
    attribute: DiseaseAttribute,
) -> Result<Vec<String>, DatabaseError> {
    let column = attribute.column();
    let sql =
        format!("SELECT DISTINCT {column} FROM icd WHERE {column} IS NOT NULL ORDER BY {column}");
    collect_strings(conn.query(&sql, ()).await?).await
}

async fn count(conn: &libsql::Connection, sql: &str) -> Result<u64, DatabaseError> {
    scalar_count(conn.query(sql, ()).await?).await
}

pub(crate) async fn counts(conn: &libsql::Connection) -> Result<CatalogCounts, DatabaseError> {
    Ok(CatalogCounts {
        diseases: count(conn, "SELECT COUNT(*) FROM icd").await?,
        tests: count(conn, "SELECT COUNT(*) FROM xn").await?,
        associations: count(conn, "SELECT COUNT(*) FROM icd_xn").await?,
        used: count(conn, "SELECT COUNT(*) FROM icd_xn WHERE status = 'Used'").await?,
    })
}

async fn reload(
    conn: &libsql::Connection,
    diseases: &[NewDisease],
    tests: &[NewLabTest],
) -> Result<CatalogCounts, DatabaseError> {
    // Associations go with their rows via ON DELETE CASCADE.
    conn.execute("DELETE FROM icd", ()).await?;
    conn.execute("DELETE FROM xn", ()).await?;

    for d in diseases {
        conn.execute(
            "INSERT INTO icd (disease_chapter, disease_group, disease_name, disease_code)
             VALUES (?1, ?2, ?3, ?4)",
            libsql::params![
                d.chapter.as_str(),
                d.group.as_deref().filter(|g| !g.is_empty()),
                d.name.as_str(),
                d.code.as_str()
            ],
        )
        .await?;
    }
    for t in tests {
        conn.execute(
            "INSERT INTO xn (xn_chapter, xn_group, xn_name, xn_occurence)
             VALUES (?1, ?2, ?3, ?4)",
            libsql::params![
                t.chapter.as_str(),
                t.group.as_str(),
                t.name.as_str(),
                t.occurrence
            ],
        )
        .await?;
    }
    counts(conn).await
}

impl CurationService {
    /// Distinct values of one disease attribute, ascending. Diseases without a
    /// group contribute nothing to the group listing.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn distinct_values(
        &self,
        attribute: DiseaseAttribute,
    ) -> Result<Vec<String>, DatabaseError> {
        let conn = self.db().lock().await;
        distinct(&conn, attribute).await
    }

    /// Every lab test, by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the catalog holds no tests.
    pub async fn list_tests(&self) -> Result<Vec<LabTest>, DatabaseError> {
        let conn = self.db().lock().await;
        let mut rows = conn
            .query(
                "SELECT id, xn_chapter, xn_group, xn_name, xn_occurence FROM xn ORDER BY id",
                (),
            )
            .await?;
        let mut tests = Vec::new();
        while let Some(row) = rows.next().await? {
            tests.push(row_to_lab_test(&row)?);
        }
        if tests.is_empty() {
            return Err(DatabaseError::NotFound("No tests found".to_string()));
        }
        Ok(tests)
    }

    /// Every disease, by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_diseases(&self) -> Result<Vec<Disease>, DatabaseError> {
        let conn = self.db().lock().await;
        let mut rows = conn
            .query(
                "SELECT id, disease_chapter, disease_group, disease_name, disease_code
                 FROM icd ORDER BY id",
                (),
            )
            .await?;
        let mut diseases = Vec::new();
        while let Some(row) = rows.next().await? {
            diseases.push(row_to_disease(&row)?);
        }
        Ok(diseases)
    }

    /// Truncate both catalog tables and load the given rows in one transaction.
    ///
    /// Existing associations are removed by the cascade; callers reseed after.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidInput` if a required field is blank, or
    /// any store error. Nothing is changed on error.
    pub async fn replace_catalog(
        &self,
        diseases: &[NewDisease],
        tests: &[NewLabTest],
    ) -> Result<CatalogCounts, DatabaseError> {
        validate_catalog(diseases, tests)?;

        let conn = self.db().lock().await;
        let tx = conn.transaction().await?;
        let result = reload(&tx, diseases, tests).await;
        let counts = crate::finish(tx, result).await?;
        tracing::info!(
            diseases = counts.diseases,
            tests = counts.tests,
            "catalog reloaded"
        );
        Ok(counts)
    }

    /// Row counts across the store.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a count query fails.
    pub async fn catalog_counts(&self) -> Result<CatalogCounts, DatabaseError> {
        let conn = self.db().lock().await;
        counts(&conn).await
    }
}
