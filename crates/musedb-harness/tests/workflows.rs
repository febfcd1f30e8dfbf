//! End-to-end workflow runs against the in-memory workbench, with
//! enough simulated latency that every bounded wait actually polls.

use musedb_harness::{
    create_collection_object_workflow, create_taxon_workflow, login_workflow, HarnessConfig,
    HarnessError, MemoryWorkbench, Workbench,
};
use std::time::Duration;

fn config() -> HarnessConfig {
    // Tight windows keep the suite fast; the defaults match a browser
    // run against a real server.
    HarnessConfig::new()
        .with_wait_timeout(Duration::from_secs(2))
        .with_poll_interval(Duration::from_millis(10))
}

fn workbench() -> MemoryWorkbench {
    MemoryWorkbench::new()
        .with_user("curator", "testing")
        .with_latency(Duration::from_millis(50))
}

#[test]
fn login_establishes_session() {
    let mut wb = workbench();
    assert!(!wb.is_logged_in());

    login_workflow(&mut wb, &config(), "curator", "testing").unwrap();
    assert!(wb.is_logged_in());
}

#[test]
fn login_with_bad_password_times_out() {
    let mut wb = workbench();
    let tight = config().with_wait_timeout(Duration::from_millis(150));

    let err = login_workflow(&mut wb, &tight, "curator", "nope").unwrap_err();
    assert!(matches!(err, HarnessError::WaitTimeout { .. }));
    assert!(!wb.is_logged_in());
}

#[test]
fn create_taxon() {
    let mut wb = workbench();
    let config = config();
    login_workflow(&mut wb, &config, "curator", "testing").unwrap();

    let id = create_taxon_workflow(&mut wb, &config, "Carex aquatilis", 220).unwrap();

    assert_eq!(wb.record_count("Taxon"), 1);
    assert_eq!(
        wb.field_value("Taxon", id, "name"),
        Some("Carex aquatilis".to_string())
    );
    assert_eq!(wb.field_value("Taxon", id, "rankId"), Some("220".to_string()));
}

#[test]
fn create_collection_object_with_accession_and_determination() {
    let mut wb = workbench();
    let config = config();
    login_workflow(&mut wb, &config, "curator", "testing").unwrap();

    wb.seed_record("Accession", &[("accessionNumber", "2006-IC-123")])
        .unwrap();
    let taxon_id = create_taxon_workflow(&mut wb, &config, "Ambystoma mexicanum", 220).unwrap();

    let co_id = create_collection_object_workflow(
        &mut wb,
        &config,
        "KU-1958",
        "2006-IC-123",
        "Ambystoma mexicanum",
    )
    .unwrap();

    assert_eq!(
        wb.field_value("CollectionObject", co_id, "catalogNumber"),
        Some("KU-1958".to_string())
    );
    // The accession was attached through the query dialog.
    let accession_ref = wb
        .field_value("CollectionObject", co_id, "accession")
        .unwrap();
    assert!(!accession_ref.is_empty());

    // The determination landed too; it is committed a moment after its
    // parent, so give it its own wait.
    musedb_harness::wait_until(&config, "determination visible", || {
        wb.record_count("Determination") == 1
    })
    .unwrap();
    assert_eq!(wb.record_count("Taxon"), 1);
    assert!(wb.field_value("Taxon", taxon_id, "name").is_some());
}

#[test]
fn accession_pick_times_out_when_absent() {
    let mut wb = workbench();
    let tight = config().with_wait_timeout(Duration::from_millis(150));
    login_workflow(&mut wb, &tight, "curator", "testing").unwrap();
    create_taxon_workflow(&mut wb, &tight, "Carex", 220).unwrap();

    // No accession seeded: the query dialog never finds one.
    let err = create_collection_object_workflow(&mut wb, &tight, "KU-1", "missing", "Carex")
        .unwrap_err();
    assert!(matches!(err, HarnessError::WaitTimeout { .. }));
}
