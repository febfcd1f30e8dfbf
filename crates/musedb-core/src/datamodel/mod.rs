//! The built-in museum specimen-collection datamodel.
//!
//! The literal catalog lives in [`tables`]; three enrichment passes run
//! after assembly and before the bundle is handed out. The finished
//! bundle is built once per process and held read-only.

mod tables;

use crate::catalog::{RelationshipDef, SchemaBundle};
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Relationships whose rows are owned by their parent record and saved
/// with it, as `Table.relationship` pairs.
pub const DEPENDENT_FIELDS: &[&str] = &[
    "Accession.accessionAgents",
    "Agent.addresses",
    "CollectingEvent.collectors",
    "CollectionObject.determinations",
    "CollectionObject.preparations",
    "GeographyTreeDef.treeDefItems",
    "TaxonTreeDef.treeDefItems",
];

/// Tables that are framework bookkeeping rather than collection data,
/// beyond the `TreeDef`/`TreeDefItem` suffix rule.
const SYSTEM_TABLES: &[&str] = &["AppUser"];

static DATAMODEL: OnceLock<SchemaBundle> = OnceLock::new();

/// The process-wide datamodel: the literal catalog with all enrichment
/// passes applied.
pub fn datamodel() -> &'static SchemaBundle {
    DATAMODEL.get_or_init(build_datamodel)
}

/// Build a fresh enriched bundle. Prefer [`datamodel`] unless the
/// caller needs an owned copy to mutate.
pub fn build_datamodel() -> SchemaBundle {
    let mut bundle = tables::base_bundle();
    add_collecting_events_to_locality(&mut bundle);
    flag_dependent_fields(&mut bundle);
    flag_system_tables(&mut bundle);
    debug!(tables = bundle.tables.len(), "assembled datamodel");
    bundle
}

/// The base literal declares `CollectingEvent.locality` but not its
/// reverse; add the one-to-many onto Locality so reciprocity holds.
pub fn add_collecting_events_to_locality(bundle: &mut SchemaBundle) {
    match bundle.get_table_mut("Locality") {
        Some(locality) => {
            locality.relationships.push(
                RelationshipDef::one_to_many("collectingEvents", "CollectingEvent")
                    .with_other_side("locality"),
            );
        }
        None => warn!("datamodel has no Locality table; skipping enrichment"),
    }
}

/// Mark the relationships in [`DEPENDENT_FIELDS`] (and their reverse
/// sides) as dependent.
pub fn flag_dependent_fields(bundle: &mut SchemaBundle) {
    for entry in DEPENDENT_FIELDS {
        let Some((table_name, rel_name)) = entry.split_once('.') else {
            warn!(entry, "malformed dependent field entry");
            continue;
        };

        let reverse = match bundle.get_table_mut(table_name) {
            Some(table) => match table.get_relationship_mut(rel_name) {
                Some(relationship) => {
                    relationship.dependent = true;
                    relationship
                        .other_side
                        .clone()
                        .map(|other| (relationship.related_table.clone(), other))
                }
                None => {
                    warn!(entry, "dependent field names unknown relationship");
                    continue;
                }
            },
            None => {
                warn!(entry, "dependent field names unknown table");
                continue;
            }
        };

        if let Some((related_table, other_side)) = reverse {
            if let Some(reverse_rel) = bundle
                .get_table_mut(&related_table)
                .and_then(|t| t.get_relationship_mut(&other_side))
            {
                reverse_rel.dependent = true;
            }
        }
    }
}

/// Flag framework bookkeeping tables: the explicit list plus anything
/// named like a tree definition.
pub fn flag_system_tables(bundle: &mut SchemaBundle) {
    for table in bundle.tables.values_mut() {
        let listed = SYSTEM_TABLES.iter().any(|n| n.eq_ignore_ascii_case(&table.name));
        let tree_def = table.name.ends_with("TreeDef") || table.name.ends_with("TreeDefItem");
        if listed || tree_def {
            table.system = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Cardinality;
    use crate::validate::validate_bundle;

    #[test]
    fn test_datamodel_is_assembled_once() {
        let first = datamodel();
        let second = datamodel();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_datamodel_validates_clean() {
        let findings = validate_bundle(datamodel());
        assert!(findings.is_empty(), "datamodel findings: {findings:?}");
    }

    #[test]
    fn test_table_roster() {
        let bundle = datamodel();
        assert_eq!(bundle.tables.len(), 21);

        for name in ["CollectionObject", "Taxon", "Locality", "Accession", "Agent"] {
            assert!(bundle.get_table(name).is_some(), "missing {name}");
        }
    }

    #[test]
    fn test_locality_enrichment() {
        let bundle = datamodel();
        let locality = bundle.get_table("Locality").unwrap();

        let rel = locality.get_relationship("collectingEvents").unwrap();
        assert_eq!(rel.cardinality, Cardinality::OneToMany);
        assert_eq!(rel.related_table, "CollectingEvent");
        assert_eq!(rel.other_side.as_deref(), Some("locality"));
    }

    #[test]
    fn test_dependent_flags_both_sides() {
        let bundle = datamodel();

        let determinations = bundle
            .get_table("CollectionObject")
            .unwrap()
            .get_relationship("determinations")
            .unwrap();
        assert!(determinations.dependent);

        let reverse = bundle
            .get_table("Determination")
            .unwrap()
            .get_relationship("collectionObject")
            .unwrap();
        assert!(reverse.dependent);

        // Not everything is dependent.
        let accession = bundle
            .get_table("CollectionObject")
            .unwrap()
            .get_relationship("accession")
            .unwrap();
        assert!(!accession.dependent);
    }

    #[test]
    fn test_system_table_flags() {
        let bundle = datamodel();

        assert!(bundle.get_table("AppUser").unwrap().system);
        assert!(bundle.get_table("TaxonTreeDef").unwrap().system);
        assert!(bundle.get_table("GeographyTreeDefItem").unwrap().system);
        assert!(!bundle.get_table("CollectionObject").unwrap().system);
        assert!(!bundle.get_table("Locality").unwrap().system);
    }

    #[test]
    fn test_table_ids_are_stable() {
        let bundle = datamodel();

        assert_eq!(bundle.get_table("CollectionObject").unwrap().table_id, 1);
        assert_eq!(bundle.get_table("Locality").unwrap().table_id, 2);
        assert_eq!(bundle.get_table("Geography").unwrap().table_id, 3);
        assert_eq!(bundle.get_table("Taxon").unwrap().table_id, 4);
        assert_eq!(bundle.get_table("Agent").unwrap().table_id, 5);
        assert_eq!(bundle.get_table("Accession").unwrap().table_id, 7);
    }

    #[test]
    fn test_alias_on_taxon() {
        let taxon = datamodel().get_table("Taxon").unwrap();
        assert_eq!(taxon.resolve_alias("acceptedParent"), Some("acceptedTaxon"));
    }
}
