//! Human-readable views of a compiled schema.
//!
//! - [`SchemaDisplay`] - declarative table/column tree formatting

mod display;

pub use display::{DisplayStyle, SchemaDisplay};
