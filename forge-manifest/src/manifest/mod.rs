//! Manifest types and parsing for forge.toml files.
//!
//! A manifest holds configuration rows exactly as the admin backend stores
//! them. Row order in the file is the storage order.
//!
//! ```toml
//! [[applications]]
//! id = "shop"
//! name = "Shop"
//! package = "com.example.shop"
//!
//! [[tables]]
//! id = "product"
//! application_id = "shop"
//! name = "product"
//! record_type = 3
//!
//! [[columns]]
//! id = "product.sku"
//! application_id = "shop"
//! table_id = "product"
//! name = "sku"
//! zero_value = "!NIL"
//! unique_check = 1
//! column_length = 64
//! ```

mod file;
mod parse;
mod validate;

pub use file::ForgeToml;
use serde::Deserialize;
use tableforge_core::{Application, ApplicationConfig, ColumnConfig, TableConfig};
use tableforge_store::{MemoryStore, StoreResult};

/// Root manifest for forge.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub applications: Vec<Application>,

    /// At most one per application.
    #[serde(default)]
    pub application_configs: Vec<ApplicationConfig>,

    #[serde(default)]
    pub tables: Vec<TableConfig>,

    #[serde(default)]
    pub columns: Vec<ColumnConfig>,
}

impl Manifest {
    /// Find an application by id.
    pub fn application(&self, id: &str) -> Option<&Application> {
        self.applications.iter().find(|a| a.id == id)
    }

    /// Load every row into a store, preserving file order.
    pub fn load_into(&self, store: &MemoryStore) -> StoreResult<()> {
        for application in &self.applications {
            store.insert_application(application.clone())?;
        }
        for config in &self.application_configs {
            store.upsert_application_config(config.clone())?;
        }
        for table in &self.tables {
            store.insert_table(table.clone())?;
        }
        for column in &self.columns {
            store.insert_column(column.clone())?;
        }
        Ok(())
    }

    /// Build a fresh in-memory store holding this manifest's rows.
    pub fn to_store(&self) -> StoreResult<MemoryStore> {
        let store = MemoryStore::new();
        self.load_into(&store)?;
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use tableforge_store::ConfigStore;

    use super::*;

    const SHOP: &str = r#"
        [[applications]]
        id = "shop"
        name = "Shop"
        package = "com.example.shop"

        [[tables]]
        id = "order"
        application_id = "shop"
        name = "order"

        [[tables]]
        id = "product"
        application_id = "shop"
        name = "product"

        [[columns]]
        id = "product.sku"
        application_id = "shop"
        table_id = "product"
        name = "sku"

        [[columns]]
        id = "order.number"
        application_id = "shop"
        table_id = "order"
        name = "number"

        [[columns]]
        id = "product.name"
        application_id = "shop"
        table_id = "product"
        name = "name"
    "#;

    #[test]
    fn test_application_lookup() {
        let manifest = Manifest::from_str(SHOP).unwrap();
        assert_eq!(manifest.application("shop").unwrap().package, "com.example.shop");
        assert!(manifest.application("blog").is_none());
    }

    #[test]
    fn test_to_store() {
        let manifest = Manifest::from_str(SHOP).unwrap();
        let store = manifest.to_store().unwrap();

        assert!(store.fetch_application("shop").unwrap().is_some());
        assert_eq!(store.fetch_tables("shop").unwrap().len(), 2);

        let columns: Vec<_> = store
            .fetch_columns("product")
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(columns, vec!["sku", "name"]);
    }
}
