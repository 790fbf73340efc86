//! Check operation - compile applications and collect diagnostics.

use std::path::Path;

use tableforge_codegen::pipeline::{Diagnostic, Pipeline, Severity};
use tableforge_store::ConfigStore;

use crate::reports::{ApplicationCheck, CheckReport};

/// Execute the check operation over the given applications.
///
/// Compilation failures are recorded in the report instead of aborting, so
/// every application is checked.
pub fn check(
    store: &dyn ConfigStore,
    application_ids: &[String],
    config_path: &Path,
) -> CheckReport {
    let pipeline = Pipeline::new();
    let applications = application_ids
        .iter()
        .map(|id| check_application(&pipeline, store, id))
        .collect();

    CheckReport {
        config_path: config_path.to_path_buf(),
        applications,
    }
}

fn check_application(pipeline: &Pipeline, store: &dyn ConfigStore, id: &str) -> ApplicationCheck {
    let mut check = ApplicationCheck {
        application_id: id.to_string(),
        ..Default::default()
    };

    match pipeline.run(id, store) {
        Ok(ctx) => {
            collect(&mut check, &ctx.diagnostics);
            if let Some(ir) = &ctx.ir {
                check.compiled = Some((ir.tables.len(), ir.column_count()));
            }
        }
        Err(err) => {
            collect(&mut check, err.diagnostics());
            if check.errors.is_empty() {
                check.errors.push(err.to_string());
            }
        }
    }
    check
}

fn collect(check: &mut ApplicationCheck, diagnostics: &[Diagnostic]) {
    for diag in diagnostics {
        let msg = match &diag.location {
            Some(loc) => format!("{}\n  --> {loc}", diag.message),
            None => diag.message.clone(),
        };
        match diag.severity {
            Severity::Error => check.errors.push(msg),
            Severity::Warning => check.warnings.push(msg),
            Severity::Info => check.infos.push(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use tableforge_core::ColumnConfig;

    use super::*;
    use crate::ops::fixtures;

    #[test]
    fn test_valid_manifest() {
        let store = fixtures::store();
        let report = check(&store, &["shop".to_string()], Path::new("forge.toml"));

        assert!(report.is_valid());
        let shop = &report.applications[0];
        assert_eq!(shop.compiled, Some((2, 1)));
        assert_eq!(shop.warnings.len(), 1);
        assert!(shop.warnings[0].starts_with("table 'audit' has no columns"));
        assert!(!shop.infos.is_empty());
    }

    #[test]
    fn test_duplicate_column_is_reported() {
        let store = fixtures::store();
        store
            .insert_column(ColumnConfig {
                id: "product.sku2".into(),
                application_id: "shop".into(),
                table_id: "product".into(),
                name: "sku".into(),
                ..Default::default()
            })
            .unwrap();

        let report = check(&store, &["shop".to_string()], Path::new("forge.toml"));

        assert!(report.is_valid());
        let shop = &report.applications[0];
        assert_eq!(shop.compiled, Some((2, 2)));
        assert!(
            shop.warnings
                .iter()
                .any(|w| w.starts_with("duplicate column 'sku'"))
        );
    }

    #[test]
    fn test_unknown_application() {
        let store = fixtures::store();
        let report = check(&store, &["blog".to_string()], Path::new("forge.toml"));

        let blog = &report.applications[0];
        assert_eq!(blog.errors, vec!["application 'blog' not found"]);
    }
}
