use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use tableforge_store::DirArtifactStore;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct HistoryCommand {
    /// Application whose artifacts to list
    #[arg(short, long)]
    pub app: String,

    /// Artifact store directory
    #[arg(short, long, default_value = ".forge/artifacts")]
    pub output: PathBuf,
}

impl HistoryCommand {
    pub fn run(&self) -> Result<()> {
        let artifacts = DirArtifactStore::new(&self.output);
        let report = ops::history(&artifacts, &self.app, &self.output)
            .wrap_err("Failed to read artifact history")?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
