//! Compilation pipeline for application schemas.
//!
//! This module provides a [`Pipeline`] orchestrator that turns one
//! application's configuration rows into an [`AppSchema`]. The pipeline
//! provides:
//!
//! - Explicit phase boundaries (load → normalize → validate → lower)
//! - Plugin hooks for extensibility (before/after each phase)
//! - Unified diagnostics collection
//! - Shared state via [`CompilationContext`]
//!
//! # Example
//!
//! ```ignore
//! use tableforge_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run("shop", &store)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("warning: {}", diag.message);
//! }
//! let schema = ctx.into_ir()?;
//! ```
//!
//! [`AppSchema`]: tableforge_ir::AppSchema

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;

pub use context::{CompilationContext, SourceConfig, SourceTable};
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};
