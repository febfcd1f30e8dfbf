//! Consistency validation for schema bundles.
//!
//! Validation walks an assembled bundle and collects findings instead
//! of failing on the first problem, so a malformed datamodel reports
//! everything wrong with it at once.

mod relation;
mod table;

use crate::catalog::SchemaBundle;
use std::collections::HashMap;
use thiserror::Error;

/// A single consistency finding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Finding {
    /// Two tables share a numeric table identifier.
    #[error("tables {first} and {second} share table id {table_id}")]
    DuplicateTableId {
        /// The shared identifier.
        table_id: u32,
        /// First table with the id.
        first: String,
        /// Second table with the id.
        second: String,
    },

    /// The primary-key field has no storage column.
    #[error("{table}: primary key field {field} has an empty storage column")]
    IdColumnMissing {
        /// Table name.
        table: String,
        /// Primary-key field name.
        field: String,
    },

    /// A regular field reuses the primary key's name or column.
    #[error("{table}: field {field} clashes with the primary key")]
    IdMemberClash {
        /// Table name.
        table: String,
        /// Clashing field name.
        field: String,
    },

    /// Two fields on the same table share a name.
    #[error("{table}: duplicate field name {field}")]
    DuplicateField {
        /// Table name.
        table: String,
        /// Duplicated field name.
        field: String,
    },

    /// Two relationships on the same table share a name.
    #[error("{table}: duplicate relationship name {relationship}")]
    DuplicateRelationship {
        /// Table name.
        table: String,
        /// Duplicated relationship name.
        relationship: String,
    },

    /// A relationship names a table that is not in the bundle.
    #[error("{table}.{relationship}: unknown related table {related_table}")]
    UnknownRelatedTable {
        /// Table name.
        table: String,
        /// Relationship name.
        relationship: String,
        /// The unresolved table name.
        related_table: String,
    },

    /// A relationship's other side does not exist on the related table.
    #[error("{table}.{relationship}: related table {related_table} has no relationship {other_side}")]
    MissingOtherSide {
        /// Table name.
        table: String,
        /// Relationship name.
        relationship: String,
        /// Related table name.
        related_table: String,
        /// The reverse name that failed to resolve.
        other_side: String,
    },

    /// A relationship's other side does not point back at this table.
    #[error("{table}.{relationship}: other side {other_side} points at {points_at}, not back")]
    OtherSideMismatch {
        /// Table name.
        table: String,
        /// Relationship name.
        relationship: String,
        /// The reverse relationship name.
        other_side: String,
        /// Where the reverse actually points.
        points_at: String,
    },

    /// The cardinalities of the two sides of a relationship disagree.
    #[error("{table}.{relationship}: cardinality does not pair with {related_table}.{other_side}")]
    CardinalityMismatch {
        /// Table name.
        table: String,
        /// Relationship name.
        relationship: String,
        /// Related table name.
        related_table: String,
        /// The reverse relationship name.
        other_side: String,
    },

    /// An index covers a column no field declares.
    #[error("{table}: index {index} covers unknown column {column}")]
    UnknownIndexColumn {
        /// Table name.
        table: String,
        /// Index name.
        index: String,
        /// The unresolved column.
        column: String,
    },

    /// An alias points at a member that does not exist.
    #[error("{table}: alias {alias} targets unknown member {target}")]
    UnknownAliasTarget {
        /// Table name.
        table: String,
        /// Alias name.
        alias: String,
        /// The unresolved target.
        target: String,
    },
}

/// Run every consistency check against a bundle.
pub fn validate_bundle(bundle: &SchemaBundle) -> Vec<Finding> {
    let mut findings = Vec::new();

    check_table_ids(bundle, &mut findings);
    for table in bundle.sorted_tables() {
        table::check_table(table, &mut findings);
        relation::check_relationships(bundle, table, &mut findings);
    }

    findings
}

/// Validate a bundle, escalating findings into an error.
pub fn ensure_valid(bundle: &SchemaBundle) -> Result<(), crate::error::Error> {
    let findings = validate_bundle(bundle);
    if findings.is_empty() {
        return Ok(());
    }

    let summary = findings
        .iter()
        .take(3)
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    Err(crate::error::Error::Validation {
        count: findings.len(),
        summary,
    })
}

/// Numeric table ids must be unique bundle-wide.
fn check_table_ids(bundle: &SchemaBundle, findings: &mut Vec<Finding>) {
    let mut seen: HashMap<u32, &str> = HashMap::new();
    for table in bundle.sorted_tables() {
        if let Some(first) = seen.insert(table.table_id, &table.name) {
            findings.push(Finding::DuplicateTableId {
                table_id: table.table_id,
                first: first.to_string(),
                second: table.name.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FieldDef, TableDef};

    #[test]
    fn test_duplicate_table_id() {
        let bundle = SchemaBundle::new(1)
            .with_table(TableDef::new(
                "Taxon",
                "taxon",
                4,
                FieldDef::id("taxonId", "TaxonID"),
            ))
            .with_table(TableDef::new(
                "Agent",
                "agent",
                4,
                FieldDef::id("agentId", "AgentID"),
            ));

        let findings = validate_bundle(&bundle);
        assert!(findings
            .iter()
            .any(|f| matches!(f, Finding::DuplicateTableId { table_id: 4, .. })));
    }

    #[test]
    fn test_ensure_valid_escalates() {
        let bundle = SchemaBundle::new(1).with_table(TableDef::new(
            "Taxon",
            "taxon",
            4,
            FieldDef::id("taxonId", ""),
        ));

        let err = ensure_valid(&bundle).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("1 finding"));
        assert!(message.contains("primary key"));
    }

    #[test]
    fn test_clean_bundle() {
        let bundle = SchemaBundle::new(1).with_table(
            TableDef::new("Taxon", "taxon", 4, FieldDef::id("taxonId", "TaxonID"))
                .with_timestamps(),
        );

        assert!(validate_bundle(&bundle).is_empty());
        assert!(ensure_valid(&bundle).is_ok());
    }
}
