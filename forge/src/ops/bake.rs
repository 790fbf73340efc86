//! Bake operation - compile, generate and store one application.

use std::path::Path;

use tableforge_codegen::{
    GenerateError, GenerateOutcome, GenerationGateway, Generator,
    pipeline::{Pipeline, SnapshotPlugin},
    schema::{DisplayStyle, SchemaDisplay},
};
use tableforge_store::{ArtifactStore, ConfigStore};

use crate::reports::{BakeReport, BakeResult};

/// Options for the bake operation.
pub struct BakeOptions<'a> {
    pub application_id: &'a str,
    /// Root directory of the artifact store.
    pub output_dir: &'a Path,
    /// Whether to preview without storing anything.
    pub dry_run: bool,
    /// Whether to write phase snapshots.
    pub visualize: bool,
}

/// Execute the bake operation.
pub fn bake(
    config: &dyn ConfigStore,
    artifacts: &dyn ArtifactStore,
    generator: &dyn Generator,
    opts: BakeOptions<'_>,
) -> Result<BakeReport, GenerateError> {
    let debug_dir = opts.output_dir.join(".debug").join(opts.application_id);
    let mut pipeline = Pipeline::new();
    if opts.visualize {
        pipeline = pipeline.plugin(SnapshotPlugin::with_output_dir(&debug_dir));
    }

    let gateway = GenerationGateway::new(config, artifacts, generator).with_pipeline(pipeline);
    let schema = gateway.compile(opts.application_id)?;

    let result = if opts.dry_run {
        let source = gateway.generate(&schema)?;
        BakeResult::Preview {
            content: String::from_utf8_lossy(&source).into_owned(),
        }
    } else {
        match gateway.deliver(opts.application_id, &schema)? {
            GenerateOutcome::Persisted { artifact_id, bytes } => BakeResult::Stored {
                artifact_id,
                bytes,
                output_dir: opts.output_dir.to_path_buf(),
            },
            GenerateOutcome::Empty => BakeResult::Empty,
        }
    };

    Ok(BakeReport {
        application_id: schema.meta.id.clone(),
        package: schema.meta.package.clone(),
        table_count: schema.tables.len(),
        column_count: schema.column_count(),
        schema_tree: SchemaDisplay::new(&schema)
            .style(DisplayStyle::WithTypes)
            .indent("    ")
            .to_string(),
        result,
        debug_dir: opts.visualize.then_some(debug_dir),
    })
}
