//! Row-level validation applied after parsing.
//!
//! These are the rules the admin backend enforces when rows are created:
//! required identifiers and names, resolvable references, and uniqueness of
//! application names, table names per application and column names per table.

use std::collections::HashSet;

use super::Manifest;
use crate::{Result, error::SourceContext};

pub(super) fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    validate_applications(manifest, ctx)?;
    validate_application_configs(manifest, ctx)?;
    validate_tables(manifest, ctx)?;
    validate_columns(manifest, ctx)?;
    Ok(())
}

fn validate_applications(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    let mut ids = HashSet::new();
    let mut names = HashSet::new();

    for app in &manifest.applications {
        require(ctx, "application", "id", &app.id, &app.name)?;
        require(ctx, "application", "name", &app.name, &app.id)?;
        require(ctx, "application", "package", &app.package, &app.id)?;

        if !ids.insert(app.id.as_str()) {
            return Err(ctx.duplicate_error("application id", &app.id));
        }
        if !names.insert(app.name.as_str()) {
            return Err(ctx.duplicate_error("application name", &app.name));
        }
    }
    Ok(())
}

fn validate_application_configs(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    let mut seen = HashSet::new();

    for config in &manifest.application_configs {
        require(
            ctx,
            "application config",
            "application_id",
            &config.application_id,
            &config.id,
        )?;
        if manifest.application(&config.application_id).is_none() {
            return Err(ctx.unknown_reference_error(
                "application config",
                "application",
                &config.application_id,
            ));
        }
        if !seen.insert(config.application_id.as_str()) {
            return Err(ctx.duplicate_error("application config for", &config.application_id));
        }
    }
    Ok(())
}

fn validate_tables(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    let mut ids = HashSet::new();
    let mut names = HashSet::new();

    for table in &manifest.tables {
        require(ctx, "table", "id", &table.id, &table.name)?;
        require(ctx, "table", "application_id", &table.application_id, &table.id)?;
        require(ctx, "table", "name", &table.name, &table.id)?;

        if manifest.application(&table.application_id).is_none() {
            return Err(ctx.unknown_reference_error(
                "table",
                "application",
                &table.application_id,
            ));
        }
        if !ids.insert(table.id.as_str()) {
            return Err(ctx.duplicate_error("table id", &table.id));
        }
        if !names.insert((table.application_id.as_str(), table.name.as_str())) {
            return Err(ctx.duplicate_error("table name", &table.name));
        }
    }
    Ok(())
}

fn validate_columns(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    let table_ids: HashSet<_> = manifest.tables.iter().map(|t| t.id.as_str()).collect();
    let mut ids = HashSet::new();
    let mut names = HashSet::new();

    for column in &manifest.columns {
        require(ctx, "column", "id", &column.id, &column.name)?;
        require(ctx, "column", "application_id", &column.application_id, &column.id)?;
        require(ctx, "column", "table_id", &column.table_id, &column.id)?;
        require(ctx, "column", "name", &column.name, &column.id)?;

        if manifest.application(&column.application_id).is_none() {
            return Err(ctx.unknown_reference_error(
                "column",
                "application",
                &column.application_id,
            ));
        }
        if !table_ids.contains(column.table_id.as_str()) {
            return Err(ctx.unknown_reference_error("column", "table", &column.table_id));
        }
        if !ids.insert(column.id.as_str()) {
            return Err(ctx.duplicate_error("column id", &column.id));
        }
        if !names.insert((column.table_id.as_str(), column.name.as_str())) {
            return Err(ctx.duplicate_error("column name", &column.name));
        }
    }
    Ok(())
}

/// Fail if a required field is empty. `row` identifies the row in the error.
fn require(
    ctx: &SourceContext,
    entity: &'static str,
    field: &'static str,
    value: &str,
    row: &str,
) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ctx.missing_field_error(entity, field, row));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::{Error, Manifest};

    const APP: &str = r#"
        [[applications]]
        id = "shop"
        name = "Shop"
        package = "com.example.shop"
    "#;

    fn parse(rows: &str) -> crate::Result<Manifest> {
        Manifest::from_str(&format!("{APP}\n{rows}"))
    }

    #[test]
    fn test_valid_manifest() {
        let manifest = parse(
            r#"
            [[tables]]
            id = "t1"
            application_id = "shop"
            name = "product"

            [[columns]]
            id = "c1"
            application_id = "shop"
            table_id = "t1"
            name = "sku"
        "#,
        )
        .unwrap();
        assert_eq!(manifest.columns.len(), 1);
    }

    #[test]
    fn test_application_requires_package() {
        let err = Manifest::from_str(
            r#"
            [[applications]]
            id = "shop"
            name = "Shop"
        "#,
        )
        .unwrap_err();
        assert!(matches!(
            *err,
            Error::MissingField {
                field: "package",
                ..
            }
        ));
    }

    #[test]
    fn test_table_requires_name() {
        let err = parse(
            r#"
            [[tables]]
            id = "t1"
            application_id = "shop"
        "#,
        )
        .unwrap_err();
        match *err {
            Error::MissingField {
                entity, field, span, ..
            } => {
                assert_eq!(entity, "table");
                assert_eq!(field, "name");
                assert!(span.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_table_unknown_application() {
        let err = parse(
            r#"
            [[tables]]
            id = "t1"
            application_id = "blog"
            name = "post"
        "#,
        )
        .unwrap_err();
        assert!(matches!(
            *err,
            Error::UnknownReference {
                field: "application",
                ..
            }
        ));
    }

    #[test]
    fn test_duplicate_table_name_per_application() {
        let err = parse(
            r#"
            [[tables]]
            id = "t1"
            application_id = "shop"
            name = "product"

            [[tables]]
            id = "t2"
            application_id = "shop"
            name = "product"
        "#,
        )
        .unwrap_err();
        assert!(matches!(
            *err,
            Error::Duplicate {
                entity: "table name",
                ..
            }
        ));
    }

    #[test]
    fn test_column_unknown_table() {
        let err = parse(
            r#"
            [[columns]]
            id = "c1"
            application_id = "shop"
            table_id = "missing"
            name = "sku"
        "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::UnknownReference { field: "table", .. }));
    }

    #[test]
    fn test_duplicate_column_name_per_table() {
        let err = parse(
            r#"
            [[tables]]
            id = "t1"
            application_id = "shop"
            name = "product"

            [[columns]]
            id = "c1"
            application_id = "shop"
            table_id = "t1"
            name = "sku"

            [[columns]]
            id = "c2"
            application_id = "shop"
            table_id = "t1"
            name = "sku"
        "#,
        )
        .unwrap_err();
        assert!(matches!(
            *err,
            Error::Duplicate {
                entity: "column name",
                ..
            }
        ));
    }

    #[test]
    fn test_one_config_per_application() {
        let err = parse(
            r#"
            [[application_configs]]
            application_id = "shop"
            page_type = 1

            [[application_configs]]
            application_id = "shop"
            page_type = 2
        "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Duplicate { .. }));
    }
}
