//! forge.toml parsing for tableforge.
//!
//! A manifest is a file-based stand-in for the admin backend's configuration
//! tables. Parsing enforces the same row rules the backend applies on insert,
//! so a manifest that parses can be loaded into a store and compiled.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{ForgeToml, Manifest};
