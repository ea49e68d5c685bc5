//! Seeding: one association per (disease, test) pair.

use icdxn_core::enums::{AssociationStatus, DEFAULT_FINALIZED};
use serde::Serialize;

use crate::error::DatabaseError;
use crate::helpers::scalar_count;
use crate::service::CurationService;

/// What a seeding run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SeedOutcome {
    /// Associations were already present; nothing was written.
    AlreadySeeded { existing: u64 },
    /// The full disease × test product was inserted.
    Seeded { inserted: u64 },
}

async fn seed_in(conn: &libsql::Connection) -> Result<SeedOutcome, DatabaseError> {
    let existing = scalar_count(conn.query("SELECT COUNT(*) FROM icd_xn", ()).await?).await?;
    if existing > 0 {
        return Ok(SeedOutcome::AlreadySeeded { existing });
    }

    let inserted = conn
        .execute(
            "INSERT INTO icd_xn (icd_id, xn_id, status, finalized)
             SELECT icd.id, xn.id, ?1, ?2
             FROM icd CROSS JOIN xn
             ORDER BY icd.id, xn.id",
            libsql::params![AssociationStatus::Unknown.as_str(), DEFAULT_FINALIZED],
        )
        .await?;
    Ok(SeedOutcome::Seeded { inserted })
}

impl CurationService {
    /// Insert every missing association if the table is empty.
    ///
    /// A no-op when any association exists, so it is safe to run at every start.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the store cannot be read or written; the
    /// insert is rolled back as a whole.
    pub async fn seed_associations(&self) -> Result<SeedOutcome, DatabaseError> {
        let conn = self.db().lock().await;
        let tx = conn.transaction().await?;
        let result = seed_in(&tx).await;
        let outcome = crate::finish(tx, result).await?;

        match outcome {
            SeedOutcome::AlreadySeeded { existing } => {
                tracing::info!(existing, "associations already seeded");
            }
            SeedOutcome::Seeded { inserted } => {
                tracing::info!(inserted, "seeded associations");
            }
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{catalog_service, test_service};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn seeds_full_product() {
        let svc = catalog_service().await;
        let outcome = svc.seed_associations().await.unwrap();
        assert_eq!(outcome, SeedOutcome::Seeded { inserted: 12 });

        let all = svc.list_associations().await.unwrap();
        assert_eq!(all.len(), 12);
        assert!(all.iter().all(|a| a.status == AssociationStatus::Unknown));
        assert!(all.iter().all(|a| a.finalized == DEFAULT_FINALIZED));
    }

    #[tokio::test]
    async fn reseeding_is_a_no_op() {
        let svc = catalog_service().await;
        svc.seed_associations().await.unwrap();
        let again = svc.seed_associations().await.unwrap();
        assert_eq!(again, SeedOutcome::AlreadySeeded { existing: 12 });
        assert_eq!(svc.catalog_counts().await.unwrap().associations, 12);
    }

    #[tokio::test]
    async fn empty_catalog_seeds_nothing() {
        let svc = test_service().await;
        let outcome = svc.seed_associations().await.unwrap();
        assert_eq!(outcome, SeedOutcome::Seeded { inserted: 0 });
    }

    #[test]
    fn outcome_serializes_tagged() {
        let json = serde_json::to_value(SeedOutcome::Seeded { inserted: 3 }).unwrap();
        assert_eq!(json, serde_json::json!({"outcome": "seeded", "inserted": 3}));
    }
}
