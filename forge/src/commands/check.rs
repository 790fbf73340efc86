use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::open_store;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to forge.toml (defaults to ./forge.toml)
    #[arg(short, long, default_value = "forge.toml")]
    pub config: PathBuf,

    /// Only check this application
    #[arg(short, long)]
    pub app: Option<String>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let (forge_toml, store) = open_store(&self.config)?;
        let applications: Vec<String> = match &self.app {
            Some(app) => vec![app.clone()],
            None => forge_toml
                .manifest()
                .applications
                .iter()
                .map(|a| a.id.clone())
                .collect(),
        };

        let report = ops::check(&store, &applications, &self.config);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
