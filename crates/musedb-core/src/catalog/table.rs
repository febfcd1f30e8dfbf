//! Table descriptors.

use super::field::FieldDef;
use super::index::{FieldAlias, IndexDef};
use super::relationship::RelationshipDef;
use rkyv::{Archive, Deserialize as RkyvDeserialize, Serialize as RkyvSerialize};
use serde::{Deserialize, Serialize};

/// A table descriptor: one entity type's storage mapping, fields,
/// relationships, indexes, and form bindings.
#[derive(
    Debug, Clone, PartialEq, Archive, RkyvSerialize, RkyvDeserialize, Serialize, Deserialize,
)]
pub struct TableDef {
    /// Entity name as seen by the ORM layer (e.g. `CollectionObject`).
    pub name: String,
    /// Storage table name (e.g. `collectionobject`).
    pub table: String,
    /// Stable numeric table identifier.
    pub table_id: u32,
    /// Primary-key field descriptor.
    pub id_field: FieldDef,
    /// Field descriptors.
    pub fields: Vec<FieldDef>,
    /// Index descriptors.
    pub indexes: Vec<IndexDef>,
    /// Relationship descriptors.
    pub relationships: Vec<RelationshipDef>,
    /// Field aliases kept for older form definitions.
    pub aliases: Vec<FieldAlias>,
    /// Default UI form view, if the table has one.
    pub view: Option<String>,
    /// Search dialog name, if the table is searchable from forms.
    pub search_dialog: Option<String>,
    /// Whether this is framework bookkeeping rather than collection
    /// data. Set by catalog enrichment, not at construction time.
    pub system: bool,
}

impl TableDef {
    /// Create a table descriptor with no members.
    pub fn new(
        name: impl Into<String>,
        table: impl Into<String>,
        table_id: u32,
        id_field: FieldDef,
    ) -> Self {
        Self {
            name: name.into(),
            table: table.into(),
            table_id,
            id_field,
            fields: Vec::new(),
            indexes: Vec::new(),
            relationships: Vec::new(),
            aliases: Vec::new(),
            view: None,
            search_dialog: None,
            system: false,
        }
    }

    /// Add a field.
    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Add multiple fields.
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = FieldDef>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Add the audit fields every table carries: `timestampCreated`
    /// (required), `timestampModified`, and the optimistic-lock
    /// `version` counter.
    pub fn with_timestamps(self) -> Self {
        self.with_fields([
            FieldDef::timestamp("timestampCreated", "TimestampCreated").required(),
            FieldDef::timestamp("timestampModified", "TimestampModified"),
            FieldDef::integer("version", "Version"),
        ])
    }

    /// Add an index.
    pub fn with_index(mut self, index: IndexDef) -> Self {
        self.indexes.push(index);
        self
    }

    /// Add a relationship.
    pub fn with_relationship(mut self, relationship: RelationshipDef) -> Self {
        self.relationships.push(relationship);
        self
    }

    /// Add a field alias.
    pub fn with_alias(mut self, alias: FieldAlias) -> Self {
        self.aliases.push(alias);
        self
    }

    /// Set the default form view.
    pub fn with_view(mut self, view: impl Into<String>) -> Self {
        self.view = Some(view.into());
        self
    }

    /// Set the search dialog name.
    pub fn with_search_dialog(mut self, dialog: impl Into<String>) -> Self {
        self.search_dialog = Some(dialog.into());
        self
    }

    /// Get a field by name, case-insensitively. The primary-key field
    /// is addressable like any other field.
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        if self.id_field.name.eq_ignore_ascii_case(name) {
            return Some(&self.id_field);
        }
        self.fields.iter().find(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// Get a relationship by name, case-insensitively.
    pub fn get_relationship(&self, name: &str) -> Option<&RelationshipDef> {
        self.relationships
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(name))
    }

    /// Get a mutable relationship by name, case-insensitively.
    /// Used by catalog enrichment.
    pub(crate) fn get_relationship_mut(&mut self, name: &str) -> Option<&mut RelationshipDef> {
        self.relationships
            .iter_mut()
            .find(|r| r.name.eq_ignore_ascii_case(name))
    }

    /// Resolve an alias to its target field or relationship name.
    pub fn resolve_alias(&self, alias: &str) -> Option<&str> {
        self.aliases
            .iter()
            .find(|a| a.alias.eq_ignore_ascii_case(alias))
            .map(|a| a.field.as_str())
    }

    /// Get all indexed fields.
    pub fn indexed_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| f.indexed)
    }

    /// Get all relationships whose related rows are saved with this
    /// record.
    pub fn dependent_relationships(&self) -> impl Iterator<Item = &RelationshipDef> {
        self.relationships.iter().filter(|r| r.dependent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RelationshipDef;

    fn sample_table() -> TableDef {
        TableDef::new(
            "Determination",
            "determination",
            9,
            FieldDef::id("determinationId", "DeterminationID"),
        )
        .with_timestamps()
        .with_field(FieldDef::boolean("isCurrent", "IsCurrent").required())
        .with_field(FieldDef::date("determinedDate", "DeterminedDate").with_index())
        .with_index(IndexDef::new("DeterminedDateIDX", ["DeterminedDate"]))
        .with_relationship(
            RelationshipDef::many_to_one("taxon", "Taxon", "TaxonID")
                .with_other_side("determinations"),
        )
        .with_alias(FieldAlias::new("current", "isCurrent"))
        .with_view("Determination")
    }

    #[test]
    fn test_get_field_case_insensitive() {
        let table = sample_table();

        assert!(table.get_field("isCurrent").is_some());
        assert!(table.get_field("iscurrent").is_some());
        assert!(table.get_field("ISCURRENT").is_some());
        assert!(table.get_field("missing").is_none());
    }

    #[test]
    fn test_get_field_finds_primary_key() {
        let table = sample_table();

        let id = table.get_field("determinationId").unwrap();
        assert_eq!(id.column, "DeterminationID");
    }

    #[test]
    fn test_get_relationship() {
        let table = sample_table();

        let taxon = table.get_relationship("Taxon").unwrap();
        assert_eq!(taxon.related_table, "Taxon");
        assert!(table.get_relationship("collector").is_none());
    }

    #[test]
    fn test_resolve_alias() {
        let table = sample_table();

        assert_eq!(table.resolve_alias("current"), Some("isCurrent"));
        assert_eq!(table.resolve_alias("CURRENT"), Some("isCurrent"));
        assert!(table.resolve_alias("isCurrent").is_none());
    }

    #[test]
    fn test_timestamps_helper() {
        let table = sample_table();

        let created = table.get_field("timestampCreated").unwrap();
        assert!(created.required);
        assert!(table.get_field("timestampModified").is_some());
        assert!(table.get_field("version").is_some());
    }

    #[test]
    fn test_indexed_fields() {
        let table = sample_table();

        let indexed: Vec<_> = table.indexed_fields().map(|f| f.name.as_str()).collect();
        assert_eq!(indexed, vec!["determinedDate"]);
    }
}
