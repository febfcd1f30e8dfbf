//! Cross-table relationship checks.

use super::Finding;
use crate::catalog::{SchemaBundle, TableDef};

/// Check every relationship on a table against the rest of the bundle:
/// the related table must exist, and a declared other side must be a
/// same-named relationship on the related table that points back with a
/// compatible cardinality.
pub(super) fn check_relationships(
    bundle: &SchemaBundle,
    table: &TableDef,
    findings: &mut Vec<Finding>,
) {
    for relationship in &table.relationships {
        let related = match bundle.get_table(&relationship.related_table) {
            Some(related) => related,
            None => {
                findings.push(Finding::UnknownRelatedTable {
                    table: table.name.clone(),
                    relationship: relationship.name.clone(),
                    related_table: relationship.related_table.clone(),
                });
                continue;
            }
        };

        let other_side = match &relationship.other_side {
            Some(other_side) => other_side,
            None => continue,
        };

        let reverse = match related.get_relationship(other_side) {
            Some(reverse) => reverse,
            None => {
                findings.push(Finding::MissingOtherSide {
                    table: table.name.clone(),
                    relationship: relationship.name.clone(),
                    related_table: related.name.clone(),
                    other_side: other_side.clone(),
                });
                continue;
            }
        };

        // The reverse must point back at this table, and if it names an
        // other side of its own, that must be this relationship.
        let points_back = reverse.related_table.eq_ignore_ascii_case(&table.name);
        let names_match = reverse
            .other_side
            .as_ref()
            .map_or(true, |name| name.eq_ignore_ascii_case(&relationship.name));
        if !points_back || !names_match {
            findings.push(Finding::OtherSideMismatch {
                table: table.name.clone(),
                relationship: relationship.name.clone(),
                other_side: other_side.clone(),
                points_at: reverse.related_table.clone(),
            });
            continue;
        }

        if !relationship.cardinality.pairs_with(reverse.cardinality) {
            findings.push(Finding::CardinalityMismatch {
                table: table.name.clone(),
                relationship: relationship.name.clone(),
                related_table: related.name.clone(),
                other_side: other_side.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FieldDef, RelationshipDef};
    use crate::validate::validate_bundle;

    fn locality() -> TableDef {
        TableDef::new("Locality", "locality", 2, FieldDef::id("localityId", "LocalityID"))
            .with_timestamps()
    }

    fn collecting_event() -> TableDef {
        TableDef::new(
            "CollectingEvent",
            "collectingevent",
            10,
            FieldDef::id("collectingEventId", "CollectingEventID"),
        )
        .with_timestamps()
    }

    #[test]
    fn test_reciprocal_pair_is_clean() {
        let bundle = SchemaBundle::new(1)
            .with_table(locality().with_relationship(
                RelationshipDef::one_to_many("collectingEvents", "CollectingEvent")
                    .with_other_side("locality"),
            ))
            .with_table(collecting_event().with_relationship(
                RelationshipDef::many_to_one("locality", "Locality", "LocalityID")
                    .with_other_side("collectingEvents"),
            ));

        assert!(validate_bundle(&bundle).is_empty());
    }

    #[test]
    fn test_unknown_related_table() {
        let bundle = SchemaBundle::new(1).with_table(
            collecting_event()
                .with_relationship(RelationshipDef::many_to_one("locality", "Locality", "LocalityID")),
        );

        let findings = validate_bundle(&bundle);
        assert!(findings.iter().any(|f| matches!(
            f,
            Finding::UnknownRelatedTable { related_table, .. } if related_table == "Locality"
        )));
    }

    #[test]
    fn test_missing_other_side() {
        let bundle = SchemaBundle::new(1)
            .with_table(locality())
            .with_table(collecting_event().with_relationship(
                RelationshipDef::many_to_one("locality", "Locality", "LocalityID")
                    .with_other_side("collectingEvents"),
            ));

        let findings = validate_bundle(&bundle);
        assert!(findings.iter().any(|f| matches!(
            f,
            Finding::MissingOtherSide { other_side, .. } if other_side == "collectingEvents"
        )));
    }

    #[test]
    fn test_other_side_points_elsewhere() {
        let bundle = SchemaBundle::new(1)
            .with_table(locality().with_relationship(
                // Reverse side accidentally points at Geography.
                RelationshipDef::one_to_many("collectingEvents", "CollectingEvent")
                    .with_other_side("locality"),
            ))
            .with_table(
                TableDef::new("Geography", "geography", 3, FieldDef::id("geographyId", "GeographyID"))
                    .with_timestamps(),
            )
            .with_table(collecting_event().with_relationship(
                RelationshipDef::many_to_one("locality", "Geography", "LocalityID")
                    .with_other_side("collectingEvents"),
            ));

        let findings = validate_bundle(&bundle);
        assert!(findings
            .iter()
            .any(|f| matches!(f, Finding::OtherSideMismatch { .. })));
    }

    #[test]
    fn test_cardinality_mismatch() {
        let bundle = SchemaBundle::new(1)
            .with_table(locality().with_relationship(
                // Both sides claim to-many against a to-one reverse pair rule.
                RelationshipDef::one_to_many("collectingEvents", "CollectingEvent")
                    .with_other_side("locality"),
            ))
            .with_table(collecting_event().with_relationship(
                RelationshipDef::one_to_many("locality", "Locality")
                    .with_other_side("collectingEvents"),
            ));

        let findings = validate_bundle(&bundle);
        assert!(findings
            .iter()
            .any(|f| matches!(f, Finding::CardinalityMismatch { .. })));
    }
}
