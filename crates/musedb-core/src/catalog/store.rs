//! Sled-backed store for published schema bundles.

use super::schema::SchemaBundle;
use super::table::TableDef;
use crate::error::Error;
use sled::{Db, Tree};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use tracing::info;

/// Tree name for schema bundles.
const BUNDLE_TREE: &str = "catalog:bundles";

/// Tree name for store metadata.
const META_TREE: &str = "catalog:meta";

/// Key for current bundle version in the meta tree.
const CURRENT_VERSION_KEY: &[u8] = b"current_version";

/// Versioned store of schema bundles.
///
/// Each published bundle is kept forever under its version number; the
/// current bundle is cached in memory for lookups.
pub struct CatalogStore {
    /// Bundle tree.
    bundle_tree: Tree,
    /// Metadata tree.
    meta_tree: Tree,
    /// Current bundle version (cached).
    current_version: AtomicU64,
    /// Current bundle (cached).
    current_bundle: RwLock<Option<SchemaBundle>>,
}

impl CatalogStore {
    /// Open or create a catalog store using the given sled database.
    pub fn open(db: &Db) -> Result<Self, Error> {
        let bundle_tree = db.open_tree(BUNDLE_TREE)?;
        let meta_tree = db.open_tree(META_TREE)?;

        let current_version = match meta_tree.get(CURRENT_VERSION_KEY)? {
            Some(bytes) => {
                let mut buf = [0u8; 8];
                buf.copy_from_slice(&bytes);
                u64::from_be_bytes(buf)
            }
            None => 0,
        };

        let store = Self {
            bundle_tree,
            meta_tree,
            current_version: AtomicU64::new(current_version),
            current_bundle: RwLock::new(None),
        };

        // Pre-load current bundle if one has been published
        if current_version > 0 {
            if let Some(bundle) = store.at_version(current_version)? {
                *store.current_bundle.write().unwrap() = Some(bundle);
            }
        }

        Ok(store)
    }

    /// Get the current bundle version. Zero means nothing published.
    pub fn current_version(&self) -> u64 {
        self.current_version.load(Ordering::SeqCst)
    }

    /// Get the current bundle.
    pub fn current(&self) -> Option<SchemaBundle> {
        self.current_bundle.read().unwrap().clone()
    }

    /// Get the bundle published at a specific version.
    pub fn at_version(&self, version: u64) -> Result<Option<SchemaBundle>, Error> {
        let key = version.to_be_bytes();
        match self.bundle_tree.get(key)? {
            Some(bytes) => Ok(Some(SchemaBundle::from_bytes(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Publish a bundle as the next version.
    ///
    /// The bundle's version field is overwritten with the allocated
    /// version. Returns the new version number.
    pub fn publish(&self, mut bundle: SchemaBundle) -> Result<u64, Error> {
        let new_version = self.current_version() + 1;
        bundle.version = new_version;

        let key = new_version.to_be_bytes();
        let value = bundle.to_bytes()?;
        self.bundle_tree.insert(key, value)?;
        self.meta_tree
            .insert(CURRENT_VERSION_KEY, &new_version.to_be_bytes())?;

        self.current_version.store(new_version, Ordering::SeqCst);
        info!(
            version = new_version,
            tables = bundle.tables.len(),
            "published schema bundle"
        );
        *self.current_bundle.write().unwrap() = Some(bundle);

        Ok(new_version)
    }

    /// Get a table from the current bundle.
    pub fn get_table(&self, name: &str) -> Option<TableDef> {
        let guard = self.current_bundle.read().unwrap();
        guard.as_ref().and_then(|b| b.get_table(name).cloned())
    }

    /// List entity names in the current bundle.
    pub fn list_tables(&self) -> Vec<String> {
        let guard = self.current_bundle.read().unwrap();
        guard
            .as_ref()
            .map(|b| b.table_names().into_iter().map(String::from).collect())
            .unwrap_or_default()
    }

    /// List all published versions.
    pub fn list_versions(&self) -> Result<Vec<u64>, Error> {
        let mut versions = Vec::new();
        for result in self.bundle_tree.iter() {
            let (key, _) = result?;
            if key.len() == 8 {
                let mut buf = [0u8; 8];
                buf.copy_from_slice(&key);
                versions.push(u64::from_be_bytes(buf));
            }
        }
        versions.sort_unstable();
        Ok(versions)
    }

    /// Flush pending writes to disk.
    pub fn flush(&self) -> Result<(), Error> {
        self.bundle_tree.flush()?;
        self.meta_tree.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FieldDef;

    fn sample_bundle() -> SchemaBundle {
        let taxon = TableDef::new("Taxon", "taxon", 4, FieldDef::id("taxonId", "TaxonID"))
            .with_timestamps()
            .with_field(FieldDef::text("name", "Name", 256).required());

        let agent = TableDef::new("Agent", "agent", 5, FieldDef::id("agentId", "AgentID"))
            .with_timestamps()
            .with_field(FieldDef::text("lastName", "LastName", 256));

        SchemaBundle::new(0).with_table(taxon).with_table(agent)
    }

    fn test_db() -> sled::Db {
        sled::Config::new().temporary(true).open().unwrap()
    }

    #[test]
    fn test_store_open_empty() {
        let db = test_db();
        let store = CatalogStore::open(&db).unwrap();

        assert_eq!(store.current_version(), 0);
        assert!(store.current().is_none());
        assert!(store.list_tables().is_empty());
    }

    #[test]
    fn test_publish() {
        let db = test_db();
        let store = CatalogStore::open(&db).unwrap();

        let version = store.publish(sample_bundle()).unwrap();

        assert_eq!(version, 1);
        assert_eq!(store.current_version(), 1);
        assert_eq!(store.current().unwrap().version, 1);
    }

    #[test]
    fn test_get_table() {
        let db = test_db();
        let store = CatalogStore::open(&db).unwrap();
        store.publish(sample_bundle()).unwrap();

        let taxon = store.get_table("taxon").unwrap();
        assert_eq!(taxon.name, "Taxon");
        assert!(store.get_table("Storage").is_none());
    }

    #[test]
    fn test_versioning() {
        let db = test_db();
        let store = CatalogStore::open(&db).unwrap();

        let v1 = store.publish(sample_bundle()).unwrap();
        assert_eq!(v1, 1);

        let extended = sample_bundle().with_table(TableDef::new(
            "Address",
            "address",
            8,
            FieldDef::id("addressId", "AddressID"),
        ));
        let v2 = store.publish(extended).unwrap();
        assert_eq!(v2, 2);

        assert_eq!(store.at_version(1).unwrap().unwrap().tables.len(), 2);
        assert_eq!(store.at_version(2).unwrap().unwrap().tables.len(), 3);
        assert_eq!(store.list_versions().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_persistence() {
        let dir = tempfile::tempdir().unwrap();
        let config = sled::Config::new().path(dir.path());

        {
            let db = config.clone().open().unwrap();
            let store = CatalogStore::open(&db).unwrap();
            store.publish(sample_bundle()).unwrap();
            store.flush().unwrap();
        }

        {
            let db = config.open().unwrap();
            let store = CatalogStore::open(&db).unwrap();

            assert_eq!(store.current_version(), 1);
            assert_eq!(store.list_tables(), vec!["Agent", "Taxon"]);
        }
    }
}
