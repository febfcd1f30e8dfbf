//! MuseDB Core - Schema catalog and museum datamodel.
//!
//! This crate provides the declarative schema catalog (table, field,
//! relationship, and index descriptors), the built-in museum
//! specimen-collection datamodel with its enrichment passes, bundle
//! consistency validation, and a sled-backed store for published
//! bundles.

pub mod catalog;
pub mod datamodel;
pub mod error;
pub mod validate;

pub use catalog::{
    Cardinality, CatalogStore, FieldAlias, FieldDef, FieldKind, IndexDef, RelationshipDef,
    SchemaBundle, TableDef,
};
pub use datamodel::{build_datamodel, datamodel, DEPENDENT_FIELDS};
pub use error::Error;
pub use validate::{ensure_valid, validate_bundle, Finding};
