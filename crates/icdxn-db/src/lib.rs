//! # icdxn-db
//!
//! libSQL store for the ICD/XN curation service.
//!
//! Holds the three relational tables (`icd`, `xn`, `icd_xn`), seeds the
//! disease × test product, and hosts the association query/update layer.
//!
//! Uses the `libsql` crate (C `SQLite` fork) in local mode.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;
use tokio::sync::{Mutex, MutexGuard};

/// Central database handle.
///
/// Wraps a libSQL database and a single connection. Callers lock the
/// connection for the whole of one operation, so every operation runs in its
/// own transaction without interleaving with another.
pub struct CurationDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: Mutex<libsql::Connection>,
}

impl CurationDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let curation_db = Self {
            db,
            conn: Mutex::new(conn),
        };
        curation_db.run_migrations().await?;
        tracing::debug!(path, "opened curation store");
        Ok(curation_db)
    }

    /// Acquire the connection for the duration of one operation.
    pub async fn lock(&self) -> MutexGuard<'_, libsql::Connection> {
        self.conn.lock().await
    }
}

/// Commit `tx` if `result` is `Ok`, otherwise roll it back.
///
/// A failed rollback is logged; the original error is returned.
pub(crate) async fn finish<T>(
    tx: libsql::Transaction,
    result: Result<T, DatabaseError>,
) -> Result<T, DatabaseError> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(error) => {
            if let Err(rollback) = tx.rollback().await {
                tracing::warn!(%rollback, %error, "rollback failed");
            }
            Err(error)
        }
    }
}
