//! Flattened association snapshot for file export.

use icdxn_core::entities::ExportRow;

use crate::error::DatabaseError;
use crate::service::CurationService;

impl CurationService {
    /// One row per association joined to its disease and test, by association id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn export_rows(&self) -> Result<Vec<ExportRow>, DatabaseError> {
        let conn = self.db().lock().await;
        let mut rows = conn
            .query(
                "SELECT a.id, i.disease_name, x.xn_name, a.status, a.finalized
                 FROM icd_xn a
                 JOIN icd i ON i.id = a.icd_id
                 JOIN xn x ON x.id = a.xn_id
                 ORDER BY a.id",
                (),
            )
            .await?;
        let mut out = Vec::new();
        while let Some(row) = rows.next().await? {
            out.push(ExportRow {
                id: row.get::<i64>(0)?,
                disease_name: row.get::<String>(1)?,
                test_name: row.get::<String>(2)?,
                status: row.get::<String>(3)?,
                finalized: row.get::<String>(4)?,
            });
        }
        tracing::debug!(rows = out.len(), "export snapshot");
        Ok(out)
    }
}
