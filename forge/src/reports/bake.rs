//! Bake command report data structures.

use std::path::PathBuf;

use tableforge_core::ArtifactId;

use super::output::{Output, Report};

/// Report data from a bake run.
#[derive(Debug)]
pub struct BakeReport {
    pub application_id: String,
    pub package: String,
    pub table_count: usize,
    pub column_count: usize,
    /// Schema tree display string.
    pub schema_tree: String,
    pub result: BakeResult,
    /// Path to phase snapshots, if visualization was enabled.
    pub debug_dir: Option<PathBuf>,
}

/// What happened to the generated artifact.
#[derive(Debug)]
pub enum BakeResult {
    Stored {
        artifact_id: ArtifactId,
        bytes: usize,
        output_dir: PathBuf,
    },
    /// The generator produced nothing, so nothing was stored.
    Empty,
    /// Dry run: the artifact that would have been stored.
    Preview { content: String },
}

impl Report for BakeReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("{} ({})", self.application_id, self.package));
        out.newline();

        out.section(&format!(
            "Tables ({}, {} column{})",
            self.table_count,
            self.column_count,
            if self.column_count == 1 { "" } else { "s" }
        ));
        if !self.schema_tree.is_empty() {
            out.preformatted(self.schema_tree.trim_end());
        }
        out.newline();

        match &self.result {
            BakeResult::Stored {
                artifact_id,
                bytes,
                output_dir,
            } => {
                out.section("Stored");
                out.added_item(&format!(
                    "{artifact_id} ({bytes} bytes) in {}",
                    output_dir.display()
                ));
            }
            BakeResult::Empty => {
                out.preformatted("Generator produced no output; nothing stored");
            }
            BakeResult::Preview { content } => {
                out.divider("artifact");
                out.preformatted(content.trim_end());
                out.divider("Summary");
                out.preformatted(&format!("{} bytes would be stored", content.len()));
            }
        }

        if let Some(dir) = &self.debug_dir {
            out.newline();
            out.key_value("Snapshots", &dir.display().to_string());
        }
    }
}
