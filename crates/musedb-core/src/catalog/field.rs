//! Field descriptors for catalog tables.

use super::types::FieldKind;
use rkyv::{Archive, Deserialize as RkyvDeserialize, Serialize as RkyvSerialize};
use serde::{Deserialize, Serialize};

/// A field descriptor within a table.
#[derive(
    Debug, Clone, PartialEq, Archive, RkyvSerialize, RkyvDeserialize, Serialize, Deserialize,
)]
pub struct FieldDef {
    /// Field name as seen by the ORM layer and UI forms.
    pub name: String,
    /// Storage column name.
    pub column: String,
    /// Semantic type tag.
    pub kind: FieldKind,
    /// Maximum length for text fields.
    pub length: Option<u32>,
    /// Whether a value is required at the application level.
    pub required: bool,
    /// Whether values must be unique across the table.
    pub unique: bool,
    /// Whether the storage layer should index this field.
    pub indexed: bool,
}

impl FieldDef {
    /// Create a new optional field of the given kind.
    pub fn new(name: impl Into<String>, column: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            column: column.into(),
            kind,
            length: None,
            required: false,
            unique: false,
            indexed: false,
        }
    }

    /// Create a length-bounded text field.
    pub fn text(name: impl Into<String>, column: impl Into<String>, length: u32) -> Self {
        let mut field = Self::new(name, column, FieldKind::Text);
        field.length = Some(length);
        field
    }

    /// Create a primary-key field (long, required, unique).
    pub fn id(name: impl Into<String>, column: impl Into<String>) -> Self {
        let mut field = Self::new(name, column, FieldKind::Long);
        field.required = true;
        field.unique = true;
        field
    }

    /// Create an integer field.
    pub fn integer(name: impl Into<String>, column: impl Into<String>) -> Self {
        Self::new(name, column, FieldKind::Integer)
    }

    /// Create a short integer field.
    pub fn short(name: impl Into<String>, column: impl Into<String>) -> Self {
        Self::new(name, column, FieldKind::ShortInt)
    }

    /// Create a byte field.
    pub fn byte(name: impl Into<String>, column: impl Into<String>) -> Self {
        Self::new(name, column, FieldKind::Byte)
    }

    /// Create a long integer field.
    pub fn long(name: impl Into<String>, column: impl Into<String>) -> Self {
        Self::new(name, column, FieldKind::Long)
    }

    /// Create a double-precision field.
    pub fn double(name: impl Into<String>, column: impl Into<String>) -> Self {
        Self::new(name, column, FieldKind::Double)
    }

    /// Create a decimal field.
    pub fn decimal(name: impl Into<String>, column: impl Into<String>) -> Self {
        Self::new(name, column, FieldKind::Decimal)
    }

    /// Create a boolean field.
    pub fn boolean(name: impl Into<String>, column: impl Into<String>) -> Self {
        Self::new(name, column, FieldKind::Boolean)
    }

    /// Create a date field.
    pub fn date(name: impl Into<String>, column: impl Into<String>) -> Self {
        Self::new(name, column, FieldKind::Date)
    }

    /// Create a timestamp field.
    pub fn timestamp(name: impl Into<String>, column: impl Into<String>) -> Self {
        Self::new(name, column, FieldKind::Timestamp)
    }

    /// Create an unbounded text/binary field.
    pub fn blob(name: impl Into<String>, column: impl Into<String>) -> Self {
        Self::new(name, column, FieldKind::Blob)
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark the field as unique.
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Mark the field as indexed.
    pub fn with_index(mut self) -> Self {
        self.indexed = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_builder() {
        let field = FieldDef::text("catalogNumber", "CatalogNumber", 32)
            .required()
            .with_index();

        assert_eq!(field.name, "catalogNumber");
        assert_eq!(field.column, "CatalogNumber");
        assert_eq!(field.kind, FieldKind::Text);
        assert_eq!(field.length, Some(32));
        assert!(field.required);
        assert!(field.indexed);
        assert!(!field.unique);
    }

    #[test]
    fn test_id_field() {
        let field = FieldDef::id("taxonId", "TaxonID");

        assert_eq!(field.kind, FieldKind::Long);
        assert!(field.required);
        assert!(field.unique);
        assert!(field.length.is_none());
    }

    #[test]
    fn test_scalar_builders() {
        assert_eq!(FieldDef::integer("rankId", "RankID").kind, FieldKind::Integer);
        assert_eq!(FieldDef::long("legacyId", "LegacyID").kind, FieldKind::Long);
        assert_eq!(FieldDef::boolean("isCurrent", "IsCurrent").kind, FieldKind::Boolean);
        assert_eq!(FieldDef::date("startDate", "StartDate").kind, FieldKind::Date);
        assert_eq!(
            FieldDef::timestamp("timestampCreated", "TimestampCreated").kind,
            FieldKind::Timestamp
        );
    }
}
