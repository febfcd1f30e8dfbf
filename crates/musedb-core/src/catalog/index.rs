//! Index descriptors for catalog tables.

use rkyv::{Archive, Deserialize as RkyvDeserialize, Serialize as RkyvSerialize};
use serde::{Deserialize, Serialize};

/// An index descriptor: a named, ordered list of storage columns.
#[derive(
    Debug, Clone, PartialEq, Archive, RkyvSerialize, RkyvDeserialize, Serialize, Deserialize,
)]
pub struct IndexDef {
    /// Index name (unique within the storage schema).
    pub name: String,
    /// Storage columns covered by the index, in order.
    pub columns: Vec<String>,
}

impl IndexDef {
    /// Create an index over the given columns.
    pub fn new(
        name: impl Into<String>,
        columns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if this is a composite index.
    pub fn is_composite(&self) -> bool {
        self.columns.len() > 1
    }
}

/// An alternative name for a field or relationship, kept for forms that
/// predate a rename.
#[derive(
    Debug, Clone, PartialEq, Archive, RkyvSerialize, RkyvDeserialize, Serialize, Deserialize,
)]
pub struct FieldAlias {
    /// The alias as it appears in stored form definitions.
    pub alias: String,
    /// The current field or relationship name it resolves to.
    pub field: String,
}

impl FieldAlias {
    /// Create an alias.
    pub fn new(alias: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            field: field.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_column_index() {
        let index = IndexDef::new("TaxonNameIDX", ["Name"]);

        assert_eq!(index.name, "TaxonNameIDX");
        assert_eq!(index.columns, vec!["Name".to_string()]);
        assert!(!index.is_composite());
    }

    #[test]
    fn test_composite_index() {
        let index = IndexDef::new("AccessionAgentIDX", ["Role", "AgentID", "AccessionID"]);

        assert!(index.is_composite());
        assert_eq!(index.columns.len(), 3);
    }

    #[test]
    fn test_alias() {
        let alias = FieldAlias::new("acceptedParent", "acceptedTaxon");

        assert_eq!(alias.alias, "acceptedParent");
        assert_eq!(alias.field, "acceptedTaxon");
    }
}
