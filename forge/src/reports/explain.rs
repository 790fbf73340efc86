//! Explain command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report describing how an application is compiled.
#[derive(Debug)]
pub struct ExplainReport {
    pub config_path: PathBuf,
    pub application_id: String,
    pub application_name: String,
    pub package: String,
    pub phases: Vec<PhaseInfo>,
    pub lints: Vec<LintInfo>,
    /// Page families and token lifetime, when the application has settings.
    pub options: Vec<(String, String)>,
    pub schema_tree: String,
}

#[derive(Debug)]
pub struct PhaseInfo {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}

impl Report for ExplainReport {
    fn render(&self, out: &mut dyn Output) {
        out.title("Forge Pipeline Explanation");
        out.newline();

        out.section(&format!("Input: {}", self.config_path.display()));
        out.key_value("Application", &self.application_id);
        out.key_value("Name", &self.application_name);
        out.key_value("Package", &self.package);
        out.newline();

        out.section("Pipeline Phases");
        for (i, phase) in self.phases.iter().enumerate() {
            out.numbered_item(i + 1, &format!("{} - {}", phase.name, phase.description));
        }
        out.newline();

        out.section("Validation Lints");
        for lint in &self.lints {
            out.list_item(&format!("{}: {}", lint.name, lint.description));
        }
        out.newline();

        if !self.options.is_empty() {
            out.section("Options");
            for (key, value) in &self.options {
                out.key_value(key, value);
            }
            out.newline();
        }

        out.section("Compiled Schema");
        out.preformatted(self.schema_tree.trim_end());
    }
}
