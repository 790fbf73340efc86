use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};

use super::{open_store, select_application};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ExplainCommand {
    /// Path to forge.toml (defaults to ./forge.toml)
    #[arg(short, long, default_value = "forge.toml")]
    pub config: PathBuf,

    /// Application to explain (defaults to the only application)
    #[arg(short, long)]
    pub app: Option<String>,
}

impl ExplainCommand {
    pub fn run(&self) -> Result<()> {
        let (forge_toml, store) = open_store(&self.config)?;
        let app = select_application(forge_toml.manifest(), self.app.as_deref())?;

        let report = ops::explain(&store, &app, &self.config)
            .wrap_err_with(|| format!("Failed to compile application '{app}'"))?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
