//! Explain operation - describe the pipeline and the compiled schema.

use std::path::Path;

use tableforge_codegen::{
    CompileError,
    pipeline::Pipeline,
    schema::{DisplayStyle, SchemaDisplay},
};
use tableforge_ir::AppOptions;
use tableforge_store::ConfigStore;

use crate::reports::{ExplainReport, LintInfo, PhaseInfo};

/// Execute the explain operation for one application.
pub fn explain(
    store: &dyn ConfigStore,
    application_id: &str,
    config_path: &Path,
) -> Result<ExplainReport, CompileError> {
    let pipeline = Pipeline::new();
    let phases = pipeline
        .phase_info()
        .into_iter()
        .map(|p| PhaseInfo {
            name: p.name,
            description: p.description,
        })
        .collect();
    let lints = pipeline
        .validate_phase()
        .lint_info()
        .into_iter()
        .map(|l| LintInfo {
            name: l.name,
            description: l.description,
        })
        .collect();

    let schema = pipeline.run(application_id, store)?.into_ir()?;

    Ok(ExplainReport {
        config_path: config_path.to_path_buf(),
        application_id: schema.meta.id.clone(),
        application_name: schema.meta.name.clone(),
        package: schema.meta.package.clone(),
        phases,
        lints,
        options: schema.options.as_ref().map(describe_options).unwrap_or_default(),
        schema_tree: SchemaDisplay::new(&schema)
            .style(DisplayStyle::TreeBox)
            .render(),
    })
}

fn describe_options(options: &AppOptions) -> Vec<(String, String)> {
    let pages: Vec<_> = [
        ("pc", options.pages.pc),
        ("mobile", options.pages.mobile),
        ("dashboard", options.pages.dashboard),
    ]
    .into_iter()
    .filter_map(|(name, enabled)| enabled.then_some(name))
    .collect();

    let pages = if pages.is_empty() {
        "none".to_string()
    } else {
        pages.join(", ")
    };
    let token = options
        .token_expire_hours
        .map(|hours| format!("{hours}h"))
        .unwrap_or_else(|| "generator default".to_string());

    vec![
        ("Pages".to_string(), pages),
        ("Token lifetime".to_string(), token),
    ]
}
