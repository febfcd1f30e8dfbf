//! Schema catalog for MuseDB.
//!
//! The catalog holds declarative table descriptors (fields,
//! relationships, indexes, form bindings) and versioned schema bundles.

mod field;
mod index;
mod relationship;
mod schema;
mod store;
mod table;
mod types;

pub use field::FieldDef;
pub use index::{FieldAlias, IndexDef};
pub use relationship::{Cardinality, RelationshipDef};
pub use schema::SchemaBundle;
pub use store::CatalogStore;
pub use table::TableDef;
pub use types::FieldKind;
