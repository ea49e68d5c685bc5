//! Service layer owning the store handle.
//!
//! `CurationService` wraps `CurationDb` (raw database access). All repo
//! methods are implemented as `impl CurationService` blocks in `repos/`.
//!
//! Every multi-statement method follows this protocol:
//! 1. Lock the connection
//! 2. Begin transaction
//! 3. Execute SQL
//! 4. Commit on success, roll back on error

use crate::CurationDb;
use crate::error::DatabaseError;

/// Explicitly constructed store-access object passed to every operation.
pub struct CurationService {
    db: CurationDb,
}

impl CurationService {
    /// Create a new service wrapping a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path`: Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = CurationDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `CurationDb`.
    #[must_use]
    pub const fn from_db(db: CurationDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &CurationDb {
        &self.db
    }
}
