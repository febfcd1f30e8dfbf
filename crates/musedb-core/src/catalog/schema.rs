//! Schema bundle - versioned snapshot of the entire catalog.

use super::table::TableDef;
use crate::error::Error;
use rkyv::{Archive, Deserialize as RkyvDeserialize, Serialize as RkyvSerialize};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

/// A versioned snapshot of the entire schema catalog.
///
/// Tables are keyed by lowercase entity name; lookups are
/// case-insensitive to match form definitions, which are not.
#[derive(
    Debug, Clone, PartialEq, Archive, RkyvSerialize, RkyvDeserialize, Serialize, Deserialize,
)]
pub struct SchemaBundle {
    /// Bundle version (monotonically increasing).
    pub version: u64,
    /// Creation timestamp (microseconds since Unix epoch).
    pub created_at: u64,
    /// Table descriptors keyed by lowercase entity name.
    pub tables: HashMap<String, TableDef>,
}

/// Current wall-clock time in microseconds since the Unix epoch.
fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_micros() as u64)
        .unwrap_or(0)
}

impl SchemaBundle {
    /// Create an empty schema bundle.
    pub fn new(version: u64) -> Self {
        Self {
            version,
            created_at: current_timestamp(),
            tables: HashMap::new(),
        }
    }

    /// Add a table to the bundle.
    pub fn with_table(mut self, table: TableDef) -> Self {
        self.tables.insert(table.name.to_lowercase(), table);
        self
    }

    /// Get a table by entity name, case-insensitively.
    pub fn get_table(&self, name: &str) -> Option<&TableDef> {
        self.tables.get(&name.to_lowercase())
    }

    /// Get a mutable table by entity name. Used by catalog enrichment.
    pub(crate) fn get_table_mut(&mut self, name: &str) -> Option<&mut TableDef> {
        self.tables.get_mut(&name.to_lowercase())
    }

    /// Get a table by its numeric table identifier.
    pub fn table_by_id(&self, table_id: u32) -> Option<&TableDef> {
        self.tables.values().find(|t| t.table_id == table_id)
    }

    /// List entity names, sorted.
    pub fn table_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tables.values().map(|t| t.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Iterate tables in entity-name order.
    pub fn sorted_tables(&self) -> Vec<&TableDef> {
        let mut tables: Vec<&TableDef> = self.tables.values().collect();
        tables.sort_unstable_by(|a, b| a.name.cmp(&b.name));
        tables
    }

    /// Tables flagged as framework bookkeeping.
    pub fn system_tables(&self) -> Vec<&TableDef> {
        let mut tables: Vec<&TableDef> = self.tables.values().filter(|t| t.system).collect();
        tables.sort_unstable_by(|a, b| a.name.cmp(&b.name));
        tables
    }

    /// Serialize the bundle to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        rkyv::to_bytes::<rkyv::rancor::Error>(self)
            .map(|v| v.to_vec())
            .map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Deserialize a bundle from bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        rkyv::from_bytes::<Self, rkyv::rancor::Error>(bytes)
            .map_err(|e| Error::Deserialization(e.to_string()))
    }
}

impl Default for SchemaBundle {
    fn default() -> Self {
        Self::new(0)
    }
}
