//! History command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Stored artifacts of one application, oldest first.
#[derive(Debug)]
pub struct HistoryReport {
    pub application_id: String,
    pub output_dir: PathBuf,
    pub artifacts: Vec<ArtifactEntry>,
}

#[derive(Debug)]
pub struct ArtifactEntry {
    pub id: String,
    /// Creation time, formatted for display.
    pub created_at: String,
    pub bytes: usize,
}

impl Report for HistoryReport {
    fn render(&self, out: &mut dyn Output) {
        if self.artifacts.is_empty() {
            out.preformatted(&format!(
                "No artifacts for '{}' in {}",
                self.application_id,
                self.output_dir.display()
            ));
            return;
        }

        out.section(&format!(
            "Artifacts for '{}' ({})",
            self.application_id,
            self.artifacts.len()
        ));
        for entry in &self.artifacts {
            out.list_item(&format!(
                "{}  {}  {} bytes",
                entry.created_at, entry.id, entry.bytes
            ));
        }
    }
}
