//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from validating every application of a manifest.
#[derive(Debug)]
pub struct CheckReport {
    pub config_path: PathBuf,
    pub applications: Vec<ApplicationCheck>,
}

/// Check result for one application.
#[derive(Debug, Default)]
pub struct ApplicationCheck {
    pub application_id: String,
    /// Rendered diagnostics, by severity.
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
    /// Compiled table and column counts, when compilation succeeded.
    pub compiled: Option<(usize, usize)>,
}

impl ApplicationCheck {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl CheckReport {
    /// Whether every application compiled without errors.
    pub fn is_valid(&self) -> bool {
        self.applications.iter().all(ApplicationCheck::is_valid)
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for app in &self.applications {
            for error in &app.errors {
                out.diagnostic(&format!("error: {error}"));
            }
            for warning in &app.warnings {
                out.diagnostic(&format!("warning: {warning}"));
            }
            for info in &app.infos {
                out.preformatted(&format!("info: {info}"));
            }

            match app.compiled {
                Some((tables, columns)) => out.preformatted(&format!(
                    "✓ {}: {tables} table{}, {columns} column{}",
                    app.application_id,
                    if tables == 1 { "" } else { "s" },
                    if columns == 1 { "" } else { "s" }
                )),
                None => out.preformatted(&format!("✗ {}", app.application_id)),
            }
        }

        if self.is_valid() {
            out.newline();
            out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        }
    }
}
