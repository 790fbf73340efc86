//! Code generator capability.

use eyre::{Result, WrapErr};
use tableforge_ir::AppSchema;

/// A code generator backend.
///
/// Generators receive the compiled schema and return an opaque byte artifact.
/// An empty artifact means the generator legitimately produced nothing.
pub trait Generator: Send + Sync {
    /// Backend name, used in error reports and logs.
    fn name(&self) -> &'static str;

    fn emit(&self, schema: &AppSchema) -> Result<Vec<u8>>;
}

/// Emits the schema as pretty-printed JSON, the hand-off format for
/// generator processes that run outside this workspace.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonGenerator;

impl Generator for JsonGenerator {
    fn name(&self) -> &'static str {
        "json"
    }

    fn emit(&self, schema: &AppSchema) -> Result<Vec<u8>> {
        let mut bytes = serde_json::to_vec_pretty(schema)
            .wrap_err_with(|| format!("failed to serialize schema of '{}'", schema.meta.id))?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use tableforge_ir::AppMeta;

    use super::*;

    #[test]
    fn test_json_generator() {
        let schema = AppSchema {
            meta: AppMeta {
                id: "shop".into(),
                name: "Shop".into(),
                package: "com.example.shop".into(),
                description: None,
                owner: None,
            },
            options: None,
            tables: vec![],
        };

        let bytes = JsonGenerator.emit(&schema).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value["meta"]["package"], "com.example.shop");
        assert_eq!(value["tables"], serde_json::json!([]));
        assert!(bytes.ends_with(b"}\n"));
    }
}
