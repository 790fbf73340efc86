use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use tableforge_codegen::{GenerateError, JsonGenerator};
use tableforge_store::DirArtifactStore;

use super::{open_store, select_application};
use crate::{
    ops::{self, bake::BakeOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BakeCommand {
    /// Path to forge.toml (defaults to ./forge.toml)
    #[arg(short, long, default_value = "forge.toml")]
    pub config: PathBuf,

    /// Application to bake (defaults to the only application)
    #[arg(short, long)]
    pub app: Option<String>,

    /// Artifact store directory
    #[arg(short, long, default_value = ".forge/artifacts")]
    pub output: PathBuf,

    /// Preview the generated artifact without storing it
    #[arg(long)]
    pub dry_run: bool,

    /// Write a JSON snapshot of every pipeline phase
    #[arg(long)]
    pub visualize: bool,
}

impl BakeCommand {
    /// Run the bake command
    pub fn run(&self) -> Result<()> {
        let (forge_toml, store) = open_store(&self.config)?;
        let app = select_application(forge_toml.manifest(), self.app.as_deref())?;
        let artifacts = DirArtifactStore::new(&self.output);

        let report = ops::bake(
            &store,
            &artifacts,
            &JsonGenerator,
            BakeOptions {
                application_id: &app,
                output_dir: &self.output,
                dry_run: self.dry_run,
                visualize: self.visualize,
            },
        )
        .inspect_err(print_rejection)
        .wrap_err_with(|| format!("Failed to bake application '{app}'"))?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}

fn print_rejection(err: &GenerateError) {
    if let GenerateError::Compile(err) = err {
        for diag in err.diagnostics() {
            eprintln!("{}: {}", diag.severity, diag.message);
            if let Some(loc) = &diag.location {
                eprintln!("  --> {loc}");
            }
        }
    }
}
