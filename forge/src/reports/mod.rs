//! Report data structures for commands.
//!
//! Operations build reports; commands render them to an [`Output`] target.

mod bake;
mod check;
mod explain;
mod history;
mod output;

pub use bake::{BakeReport, BakeResult};
pub use check::{ApplicationCheck, CheckReport};
pub use explain::{ExplainReport, LintInfo, PhaseInfo};
pub use history::{ArtifactEntry, HistoryReport};
#[cfg(test)]
pub use output::BufferOutput;
pub use output::{Output, Report, TerminalOutput};
