//! Built-in pipeline phases.
//!
//! - [`LoadPhase`] - reads configuration rows from the store
//! - [`NormalizePhase`] - applies the defaulting policy
//! - [`ValidatePhase`] - runs lints and rejects invalid configurations
//! - [`LowerPhase`] - resolves rows into the application schema

mod load;
mod lower;
mod normalize;
mod validate;

pub use load::LoadPhase;
pub use lower::LowerPhase;
pub use normalize::NormalizePhase;
pub use validate::{
    DecimalWithoutLengthLint, DuplicateColumnLint, EmptyTableLint, Lint, LintInfo,
    OwnerMismatchLint, UnknownColumnTypeLint, ValidatePhase,
};
