//! Core operations.
//!
//! This module contains the business logic for forge commands,
//! separated from CLI argument parsing and output rendering.

pub mod bake;
pub mod check;
pub mod explain;
pub mod history;

pub use bake::bake;
pub use check::check;
pub use explain::explain;
pub use history::history;

#[cfg(test)]
pub(crate) mod fixtures {
    use std::str::FromStr;

    use tableforge_manifest::Manifest;
    use tableforge_store::MemoryStore;

    pub const SHOP: &str = r#"
        [[applications]]
        id = "shop"
        name = "Shop"
        package = "com.example.shop"

        [[application_configs]]
        application_id = "shop"
        page_type = 5
        token_expire_hours = 48

        [[tables]]
        id = "product"
        application_id = "shop"
        name = "product"

        [[tables]]
        id = "audit"
        application_id = "shop"
        name = "audit"

        [[columns]]
        id = "product.sku"
        application_id = "shop"
        table_id = "product"
        name = "sku"
        zero_value = "!NIL"
        unique_check = 1
        column_length = 64
    "#;

    pub fn store() -> MemoryStore {
        Manifest::from_str(SHOP).unwrap().to_store().unwrap()
    }
}
