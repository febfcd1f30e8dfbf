//! Per-table consistency checks.

use super::Finding;
use crate::catalog::TableDef;
use std::collections::HashSet;

/// Check a single table in isolation: primary-key consistency, member
/// name uniqueness, index column resolution, alias resolution.
pub(super) fn check_table(table: &TableDef, findings: &mut Vec<Finding>) {
    check_primary_key(table, findings);
    check_member_names(table, findings);
    check_indexes(table, findings);
    check_aliases(table, findings);
}

fn check_primary_key(table: &TableDef, findings: &mut Vec<Finding>) {
    if table.id_field.column.is_empty() {
        findings.push(Finding::IdColumnMissing {
            table: table.name.clone(),
            field: table.id_field.name.clone(),
        });
    }

    for field in &table.fields {
        let name_clash = field.name.eq_ignore_ascii_case(&table.id_field.name);
        let column_clash = !table.id_field.column.is_empty()
            && field.column.eq_ignore_ascii_case(&table.id_field.column);
        if name_clash || column_clash {
            findings.push(Finding::IdMemberClash {
                table: table.name.clone(),
                field: field.name.clone(),
            });
        }
    }
}

fn check_member_names(table: &TableDef, findings: &mut Vec<Finding>) {
    let mut seen = HashSet::new();
    for field in &table.fields {
        if !seen.insert(field.name.to_lowercase()) {
            findings.push(Finding::DuplicateField {
                table: table.name.clone(),
                field: field.name.clone(),
            });
        }
    }

    let mut seen = HashSet::new();
    for relationship in &table.relationships {
        if !seen.insert(relationship.name.to_lowercase()) {
            findings.push(Finding::DuplicateRelationship {
                table: table.name.clone(),
                relationship: relationship.name.clone(),
            });
        }
    }
}

fn check_indexes(table: &TableDef, findings: &mut Vec<Finding>) {
    // Index columns may cover regular fields, the primary key, or a
    // to-one relationship's foreign key column.
    let mut columns: HashSet<String> = table
        .fields
        .iter()
        .map(|f| f.column.to_lowercase())
        .collect();
    columns.insert(table.id_field.column.to_lowercase());
    for relationship in &table.relationships {
        if let Some(column) = &relationship.column {
            columns.insert(column.to_lowercase());
        }
    }

    for index in &table.indexes {
        for column in &index.columns {
            if !columns.contains(&column.to_lowercase()) {
                findings.push(Finding::UnknownIndexColumn {
                    table: table.name.clone(),
                    index: index.name.clone(),
                    column: column.clone(),
                });
            }
        }
    }
}

fn check_aliases(table: &TableDef, findings: &mut Vec<Finding>) {
    for alias in &table.aliases {
        let resolves =
            table.get_field(&alias.field).is_some() || table.get_relationship(&alias.field).is_some();
        if !resolves {
            findings.push(Finding::UnknownAliasTarget {
                table: table.name.clone(),
                alias: alias.alias.clone(),
                target: alias.field.clone(),
            });
        }
    }
}
