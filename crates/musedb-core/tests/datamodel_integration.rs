//! End-to-end checks over the shipped datamodel: every reciprocity rule
//! the forms layer relies on, plus a publish/reload round trip through
//! the catalog store.

use musedb_core::{datamodel, ensure_valid, CatalogStore, Cardinality};

#[test]
fn shipped_datamodel_is_consistent() {
    assert!(ensure_valid(datamodel()).is_ok());
}

#[test]
fn every_other_side_points_back() {
    let bundle = datamodel();

    for table in bundle.sorted_tables() {
        for relationship in &table.relationships {
            let Some(other_side) = &relationship.other_side else {
                continue;
            };
            let related = bundle
                .get_table(&relationship.related_table)
                .unwrap_or_else(|| panic!("{}.{} dangles", table.name, relationship.name));
            let reverse = related.get_relationship(other_side).unwrap_or_else(|| {
                panic!(
                    "{}.{} has no reverse {} on {}",
                    table.name, relationship.name, other_side, related.name
                )
            });
            assert!(
                reverse.related_table.eq_ignore_ascii_case(&table.name),
                "{}.{} reverse points at {}",
                table.name,
                relationship.name,
                reverse.related_table
            );
            assert!(
                relationship.cardinality.pairs_with(reverse.cardinality),
                "{}.{} cardinality mismatch",
                table.name,
                relationship.name
            );
        }
    }
}

#[test]
fn to_one_relationships_carry_foreign_key_columns() {
    let bundle = datamodel();

    for table in bundle.sorted_tables() {
        for relationship in &table.relationships {
            if relationship.cardinality == Cardinality::ManyToOne {
                assert!(
                    relationship.column.is_some(),
                    "{}.{} has no foreign key column",
                    table.name,
                    relationship.name
                );
            }
            if relationship.cardinality == Cardinality::OneToMany {
                assert!(
                    relationship.column.is_none(),
                    "{}.{} should not carry a column",
                    table.name,
                    relationship.name
                );
            }
        }
    }
}

#[test]
fn form_workflow_tables_expose_views() {
    let bundle = datamodel();

    for name in ["Taxon", "CollectionObject", "Accession", "Locality", "Agent"] {
        let table = bundle.get_table(name).unwrap();
        assert!(table.view.is_some(), "{name} has no form view");
    }

    // Search dialogs back the query-dialog picks in the workflows.
    for name in ["Accession", "Taxon", "CollectionObject"] {
        let table = bundle.get_table(name).unwrap();
        assert!(table.search_dialog.is_some(), "{name} has no search dialog");
    }
}

#[test]
fn publish_and_reload_through_store() {
    let dir = tempfile::tempdir().unwrap();
    let config = sled::Config::new().path(dir.path());

    {
        let db = config.clone().open().unwrap();
        let store = CatalogStore::open(&db).unwrap();
        let version = store.publish(datamodel().clone()).unwrap();
        assert_eq!(version, 1);
        store.flush().unwrap();
    }

    {
        let db = config.open().unwrap();
        let store = CatalogStore::open(&db).unwrap();
        assert_eq!(store.current_version(), 1);

        let reloaded = store.current().unwrap();
        assert_eq!(reloaded.tables.len(), datamodel().tables.len());

        // Enrichment survives the round trip.
        let locality = reloaded.get_table("Locality").unwrap();
        assert!(locality.get_relationship("collectingEvents").is_some());
        assert!(reloaded.get_table("AppUser").unwrap().system);
    }
}
