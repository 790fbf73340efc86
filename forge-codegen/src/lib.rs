//! Schema compiler and generation gateway for tableforge.
//!
//! This crate turns an application's stored table and column configuration
//! into an [`AppSchema`](tableforge_ir::AppSchema), hands it to a
//! [`Generator`], and appends the resulting artifact to the application's
//! history.
//!
//! # Modules
//!
//! - [`resolve`] - storage type, unique group and enum value resolution
//! - [`pipeline`] - phase-based compiler with plugins and diagnostics
//! - [`schema`] - human-readable schema views
//! - [`GenerationGateway`] - compile → generate → persist

mod error;
mod gateway;
mod generator;
pub mod pipeline;
pub mod resolve;
pub mod schema;

pub use error::{BoxError, CompileError, ErrorKind, GenerateError};
pub use gateway::{GenerateOutcome, GenerationGateway};
pub use generator::{Generator, JsonGenerator};
