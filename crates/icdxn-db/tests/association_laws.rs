//! Store-level laws for seeding, selection, and status updates.
//!
//! - Seeding yields the full product exactly once
//! - Activate/deactivate round-trips and activate is idempotent
//! - Common tests are exactly those used for every selected disease
//! - Cascade deletes and on-disk persistence

use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;

use icdxn_core::Selector;
use icdxn_core::entities::{NewDisease, NewLabTest};
use icdxn_core::enums::AssociationStatus;
use icdxn_db::error::DatabaseError;
use icdxn_db::repos::association::CommonTests;
use icdxn_db::repos::seed::SeedOutcome;
use icdxn_db::service::CurationService;

fn diseases() -> Vec<NewDisease> {
    [
        ("I00-I99", Some("Hypertensive diseases"), "Essential hypertension", "I10"),
        ("I00-I99", Some("Hypertensive diseases"), "Hypertensive heart disease", "I11"),
        ("I00-I99", Some("Ischaemic heart diseases"), "Angina pectoris", "I20"),
        ("E00-E90", Some("Diabetes mellitus"), "Type 2 diabetes", "E11"),
        ("E00-E90", None, "Obesity", "E66"),
    ]
    .into_iter()
    .map(|(chapter, group, name, code)| NewDisease {
        chapter: chapter.into(),
        group: group.map(String::from),
        name: name.into(),
        code: code.into(),
    })
    .collect()
}

fn tests() -> Vec<NewLabTest> {
    [
        ("Chemistry", "Lipids", "LDL"),
        ("Chemistry", "Glucose", "HbA1c"),
        ("Chemistry", "Renal", "Creatinine"),
        ("Cardiology", "Markers", "Troponin"),
    ]
    .into_iter()
    .map(|(chapter, group, name)| NewLabTest {
        chapter: chapter.into(),
        group: group.into(),
        name: name.into(),
        occurrence: None,
    })
    .collect()
}

async fn seeded(path: &str) -> CurationService {
    let svc = CurationService::new_local(path).await.unwrap();
    svc.replace_catalog(&diseases(), &tests()).await.unwrap();
    svc.seed_associations().await.unwrap();
    svc
}

// ---------------------------------------------------------------------------
// Seeding
// ---------------------------------------------------------------------------

#[tokio::test]
async fn seeding_yields_product_without_duplicates() {
    let svc = seeded(":memory:").await;
    let all = svc.list_associations().await.unwrap();
    assert_eq!(all.len(), diseases().len() * tests().len());

    let mut pairs: Vec<(i64, i64)> = all.iter().map(|a| (a.icd_id, a.xn_id)).collect();
    pairs.sort_unstable();
    pairs.dedup();
    assert_eq!(pairs.len(), all.len());
}

#[tokio::test]
async fn reseeding_leaves_statuses_alone() {
    let svc = seeded(":memory:").await;
    svc.activate(&Selector::Chapter("I00-I99".into()), &[1]).await.unwrap();
    let before = svc.list_associations().await.unwrap();

    let outcome = svc.seed_associations().await.unwrap();
    assert_eq!(outcome, SeedOutcome::AlreadySeeded { existing: 20 });
    assert_eq!(svc.list_associations().await.unwrap(), before);
}

#[tokio::test]
async fn seeded_store_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("curation.db");
    let path = path.to_str().unwrap();

    {
        let svc = seeded(path).await;
        svc.activate(&Selector::Name("Obesity".into()), &[2]).await.unwrap();
    }

    let svc = CurationService::new_local(path).await.unwrap();
    assert_eq!(
        svc.seed_associations().await.unwrap(),
        SeedOutcome::AlreadySeeded { existing: 20 }
    );
    assert_eq!(
        svc.tests_for_disease("Obesity").await.unwrap(),
        vec!["HbA1c"]
    );
}

// ---------------------------------------------------------------------------
// Status updates
// ---------------------------------------------------------------------------

#[rstest]
#[case::chapter(Selector::Chapter("I00-I99".into()), 3)]
#[case::group(Selector::Group("Hypertensive diseases".into()), 2)]
#[case::name(Selector::Name("Angina pectoris".into()), 1)]
#[tokio::test]
async fn activate_then_deactivate_restores_unknown(
    #[case] selector: Selector,
    #[case] diseases_hit: u64,
) {
    let svc = seeded(":memory:").await;
    let original = svc.list_associations().await.unwrap();

    assert_eq!(svc.activate(&selector, &[4]).await.unwrap(), diseases_hit);
    assert_eq!(svc.deactivate(&selector, "Troponin").await.unwrap(), diseases_hit);

    assert_eq!(svc.list_associations().await.unwrap(), original);
}

#[rstest]
#[case::chapter(Selector::Chapter("E00-E90".into()))]
#[case::group(Selector::Group("Diabetes mellitus".into()))]
#[case::name(Selector::Name("Type 2 diabetes".into()))]
#[tokio::test]
async fn activate_twice_equals_once(#[case] selector: Selector) {
    let svc = seeded(":memory:").await;
    svc.activate(&selector, &[2, 3]).await.unwrap();
    let once = svc.list_associations().await.unwrap();
    svc.activate(&selector, &[2, 3]).await.unwrap();
    assert_eq!(svc.list_associations().await.unwrap(), once);
}

#[tokio::test]
async fn empty_test_ids_are_invalid() {
    let svc = seeded(":memory:").await;
    let err = svc
        .activate(&Selector::Chapter("I00-I99".into()), &[])
        .await
        .unwrap_err();
    assert!(matches!(err, DatabaseError::InvalidInput(_)));
}

#[tokio::test]
async fn failed_update_changes_nothing() {
    let svc = seeded(":memory:").await;
    let before = svc.list_associations().await.unwrap();
    let err = svc
        .activate(&Selector::Group("Hypertensive diseases".into()), &[42])
        .await
        .unwrap_err();
    assert!(matches!(err, DatabaseError::NotFound(_)));
    assert_eq!(svc.list_associations().await.unwrap(), before);
}

#[tokio::test]
async fn group_deactivate_leaves_sibling_groups() {
    let svc = seeded(":memory:").await;
    svc.activate(&Selector::Chapter("I00-I99".into()), &[1]).await.unwrap();
    svc.deactivate(&Selector::Group("Hypertensive diseases".into()), "LDL")
        .await
        .unwrap();

    // Angina pectoris (id 3) is in the same chapter but another group.
    assert_eq!(
        svc.association_status(3, 1).await.unwrap(),
        AssociationStatus::Used
    );
    assert_eq!(
        svc.association_status(1, 1).await.unwrap(),
        AssociationStatus::Unknown
    );
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

#[tokio::test]
async fn common_tests_are_used_for_every_disease() {
    let svc = seeded(":memory:").await;
    let chapter = Selector::Chapter("I00-I99".into());
    svc.activate(&chapter, &[1, 3]).await.unwrap();
    svc.activate(&Selector::Name("Angina pectoris".into()), &[4])
        .await
        .unwrap();
    svc.deactivate(&Selector::Name("Essential hypertension".into()), "Creatinine")
        .await
        .unwrap();

    assert_eq!(
        svc.common_tests(&chapter).await.unwrap(),
        CommonTests::Common(vec!["LDL".to_string()])
    );
}

#[tokio::test]
async fn unused_chapter_has_empty_selection() {
    let svc = seeded(":memory:").await;
    let selected = svc
        .selected_tests(&Selector::Chapter("E00-E90".into()))
        .await
        .unwrap();
    assert!(selected.is_empty());
}

#[tokio::test]
async fn export_matches_associations() {
    let svc = seeded(":memory:").await;
    svc.activate(&Selector::Name("Obesity".into()), &[2]).await.unwrap();

    let rows = svc.export_rows().await.unwrap();
    let associations = svc.list_associations().await.unwrap();
    assert_eq!(rows.len(), associations.len());
    for (row, assoc) in rows.iter().zip(&associations) {
        assert_eq!(row.id, assoc.id);
        assert_eq!(row.status, assoc.status.as_str());
    }
    assert_eq!(
        rows.iter().filter(|r| r.status == "Used").count(),
        1
    );
}

#[tokio::test]
async fn deleting_a_disease_cascades() {
    let svc = seeded(":memory:").await;
    {
        let conn = svc.db().lock().await;
        conn.execute("DELETE FROM icd WHERE disease_name = 'Obesity'", ())
            .await
            .unwrap();
    }
    let counts = svc.catalog_counts().await.unwrap();
    assert_eq!(counts.diseases, 4);
    assert_eq!(counts.associations, 16);
}
