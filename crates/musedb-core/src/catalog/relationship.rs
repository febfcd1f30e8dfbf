//! Relationship descriptors between catalog tables.

use rkyv::{Archive, Deserialize as RkyvDeserialize, Serialize as RkyvSerialize};
use serde::{Deserialize, Serialize};

/// Cardinality of a relationship.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Archive,
    RkyvSerialize,
    RkyvDeserialize,
    Serialize,
    Deserialize,
)]
pub enum Cardinality {
    /// One row here owns many rows on the related table.
    OneToMany,
    /// Many rows here reference one row on the related table
    /// (foreign key column on this side).
    ManyToOne,
    /// Many-to-many via a join table owned by the storage layer.
    ManyToMany,
    /// Exactly one row on each side.
    OneToOne,
    /// At most one row on the related table.
    ZeroToOne,
}

impl Cardinality {
    /// Check if the related side holds multiple rows.
    pub fn is_to_many(&self) -> bool {
        matches!(self, Cardinality::OneToMany | Cardinality::ManyToMany)
    }

    /// Check if the related side holds at most one row.
    pub fn is_to_one(&self) -> bool {
        !self.is_to_many()
    }

    /// Check if `other` is an acceptable cardinality for the reverse
    /// side of a relationship with this cardinality.
    pub fn pairs_with(&self, other: Cardinality) -> bool {
        match self {
            Cardinality::OneToMany => other == Cardinality::ManyToOne,
            Cardinality::ManyToOne => other == Cardinality::OneToMany,
            Cardinality::ManyToMany => other == Cardinality::ManyToMany,
            Cardinality::OneToOne => {
                matches!(other, Cardinality::OneToOne | Cardinality::ZeroToOne)
            }
            Cardinality::ZeroToOne => other == Cardinality::OneToOne,
        }
    }
}

/// A relationship descriptor on a table.
///
/// The related table is referenced by name; resolution happens when the
/// bundle is validated, not at construction time.
#[derive(
    Debug, Clone, PartialEq, Archive, RkyvSerialize, RkyvDeserialize, Serialize, Deserialize,
)]
pub struct RelationshipDef {
    /// Relationship name as seen by the ORM layer and UI forms.
    pub name: String,
    /// Relationship cardinality.
    pub cardinality: Cardinality,
    /// Whether the relationship must be populated.
    pub required: bool,
    /// Name of the related table.
    pub related_table: String,
    /// Foreign key column on this side, for to-one relationships.
    pub column: Option<String>,
    /// Name of the reverse relationship on the related table.
    pub other_side: Option<String>,
    /// Whether related rows are owned by this record and saved with it.
    /// Set by catalog enrichment, not at construction time.
    pub dependent: bool,
}

impl RelationshipDef {
    fn new(
        name: impl Into<String>,
        cardinality: Cardinality,
        related_table: impl Into<String>,
        column: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            cardinality,
            required: false,
            related_table: related_table.into(),
            column,
            other_side: None,
            dependent: false,
        }
    }

    /// Create a many-to-one relationship (foreign key on this side).
    pub fn many_to_one(
        name: impl Into<String>,
        related_table: impl Into<String>,
        column: impl Into<String>,
    ) -> Self {
        Self::new(
            name,
            Cardinality::ManyToOne,
            related_table,
            Some(column.into()),
        )
    }

    /// Create a one-to-many relationship (foreign key on the far side).
    pub fn one_to_many(name: impl Into<String>, related_table: impl Into<String>) -> Self {
        Self::new(name, Cardinality::OneToMany, related_table, None)
    }

    /// Create a one-to-one relationship; pass the foreign key column if
    /// this side carries it.
    pub fn one_to_one(
        name: impl Into<String>,
        related_table: impl Into<String>,
        column: Option<&str>,
    ) -> Self {
        Self::new(
            name,
            Cardinality::OneToOne,
            related_table,
            column.map(String::from),
        )
    }

    /// Create a zero-to-one relationship.
    pub fn zero_to_one(name: impl Into<String>, related_table: impl Into<String>) -> Self {
        Self::new(name, Cardinality::ZeroToOne, related_table, None)
    }

    /// Create a many-to-many relationship.
    pub fn many_to_many(name: impl Into<String>, related_table: impl Into<String>) -> Self {
        Self::new(name, Cardinality::ManyToMany, related_table, None)
    }

    /// Mark the relationship as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Name the reverse relationship on the related table.
    pub fn with_other_side(mut self, other_side: impl Into<String>) -> Self {
        self.other_side = Some(other_side.into());
        self
    }

    /// Check if the related side holds multiple rows.
    pub fn is_to_many(&self) -> bool {
        self.cardinality.is_to_many()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_many_to_one() {
        let rel = RelationshipDef::many_to_one("accession", "Accession", "AccessionID")
            .with_other_side("collectionObjects");

        assert_eq!(rel.cardinality, Cardinality::ManyToOne);
        assert_eq!(rel.column.as_deref(), Some("AccessionID"));
        assert_eq!(rel.other_side.as_deref(), Some("collectionObjects"));
        assert!(!rel.is_to_many());
        assert!(!rel.dependent);
    }

    #[test]
    fn test_one_to_many() {
        let rel = RelationshipDef::one_to_many("determinations", "Determination")
            .with_other_side("collectionObject");

        assert_eq!(rel.cardinality, Cardinality::OneToMany);
        assert!(rel.column.is_none());
        assert!(rel.is_to_many());
    }

    #[test]
    fn test_cardinality_pairing() {
        assert!(Cardinality::OneToMany.pairs_with(Cardinality::ManyToOne));
        assert!(Cardinality::ManyToOne.pairs_with(Cardinality::OneToMany));
        assert!(Cardinality::ManyToMany.pairs_with(Cardinality::ManyToMany));
        assert!(Cardinality::OneToOne.pairs_with(Cardinality::ZeroToOne));
        assert!(Cardinality::ZeroToOne.pairs_with(Cardinality::OneToOne));

        assert!(!Cardinality::OneToMany.pairs_with(Cardinality::OneToMany));
        assert!(!Cardinality::OneToOne.pairs_with(Cardinality::ManyToOne));
        assert!(!Cardinality::ZeroToOne.pairs_with(Cardinality::ZeroToOne));
    }

    #[test]
    fn test_required_one_to_one() {
        let rel = RelationshipDef::one_to_one("discipline", "Discipline", None).required();

        assert!(rel.required);
        assert!(rel.column.is_none());
    }
}
