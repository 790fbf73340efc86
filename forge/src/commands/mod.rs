mod bake;
mod check;
mod completions;
mod explain;
mod history;

use std::path::Path;

use bake::BakeCommand;
use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::{Result, WrapErr, bail};
use explain::ExplainCommand;
use history::HistoryCommand;
use tableforge_manifest::{ForgeToml, Manifest};
use tableforge_store::MemoryStore;
use tracing::debug;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for tableforge_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Open a manifest and load its rows into a fresh store.
pub(crate) fn open_store(config: &Path) -> Result<(ForgeToml, MemoryStore)> {
    let forge_toml = ForgeToml::open(config).unwrap_or_exit();
    let store = forge_toml
        .manifest()
        .to_store()
        .wrap_err_with(|| format!("failed to load rows from {}", config.display()))?;
    debug!(
        path = %config.display(),
        applications = forge_toml.manifest().applications.len(),
        "loaded manifest"
    );
    Ok((forge_toml, store))
}

/// Pick the application to work on: the one named on the command line, or
/// the only application of the manifest.
pub(crate) fn select_application(manifest: &Manifest, app: Option<&str>) -> Result<String> {
    if let Some(app) = app {
        return Ok(app.to_string());
    }
    match manifest.applications.as_slice() {
        [only] => Ok(only.id.clone()),
        [] => bail!("manifest defines no applications"),
        apps => {
            let ids: Vec<_> = apps.iter().map(|a| a.id.as_str()).collect();
            bail!("manifest defines several applications ({}); pass --app", ids.join(", "))
        }
    }
}

#[derive(Parser)]
#[command(name = "forge")]
#[command(version)]
#[command(about = "Compile table and column configuration into generated sources")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Bake(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Explain(cmd) => cmd.run(),
            Commands::History(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compile an application and store the generated artifact
    Bake(BakeCommand),

    /// Validate forge.toml without generating anything
    Check(CheckCommand),

    /// Show the compilation pipeline and the compiled schema
    Explain(ExplainCommand),

    /// List stored artifacts of an application
    History(HistoryCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
