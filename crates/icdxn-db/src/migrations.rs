//! Schema runner.
//!
//! Embeds the SQL schema at compile time and executes it on database open.
//! All statements use `IF NOT EXISTS` for idempotent re-running.

use crate::CurationDb;
use crate::error::DatabaseError;

/// Initial schema: `icd`, `xn`, `icd_xn` and their lookup indexes.
const MIGRATION_001: &str = include_str!("../migrations/001_initial.sql");

impl CurationDb {
    /// Run all embedded migrations in sequence.
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        let conn = self.lock().await;
        conn.execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_initial: {e}")))?;
        Ok(())
    }
}
