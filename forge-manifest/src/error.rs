use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Locate the first quoted occurrence of a value, e.g. `"product"`.
    pub fn find_value(&self, value: &str) -> Option<SourceSpan> {
        if value.is_empty() {
            return None;
        }
        let needle = format!("\"{value}\"");
        self.src
            .find(&needle)
            .map(|offset| SourceSpan::from((offset + 1, value.len())))
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a missing field error, pointing at the owning row when possible.
    pub fn missing_field_error(
        &self,
        entity: &'static str,
        field: &'static str,
        row: &str,
    ) -> Box<Error> {
        Box::new(Error::MissingField {
            src: self.named_source(),
            span: self.find_value(row),
            entity,
            field,
            row: row.to_string(),
        })
    }

    /// Create a duplicate entry error.
    pub fn duplicate_error(&self, entity: &'static str, key: impl Into<String>) -> Box<Error> {
        let key = key.into();
        Box::new(Error::Duplicate {
            src: self.named_source(),
            span: self.find_value(&key),
            entity,
            key,
        })
    }

    /// Create an unknown reference error.
    pub fn unknown_reference_error(
        &self,
        entity: &'static str,
        field: &'static str,
        reference: impl Into<String>,
    ) -> Box<Error> {
        let reference = reference.into();
        Box::new(Error::UnknownReference {
            src: self.named_source(),
            span: self.find_value(&reference),
            entity,
            field,
            reference,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the manifest location with --config"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse forge.toml")]
    #[diagnostic(code(forge::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{entity} is missing '{field}'")]
    #[diagnostic(code(forge::missing_field), help("every {entity} row needs a non-empty '{field}'"))]
    MissingField {
        #[source_code]
        src: NamedSource<String>,
        #[label("in this row")]
        span: Option<SourceSpan>,
        entity: &'static str,
        field: &'static str,
        row: String,
    },

    #[error("duplicate {entity} '{key}'")]
    #[diagnostic(code(forge::duplicate))]
    Duplicate {
        #[source_code]
        src: NamedSource<String>,
        #[label("already defined")]
        span: Option<SourceSpan>,
        entity: &'static str,
        key: String,
    },

    #[error("{entity} refers to unknown {field} '{reference}'")]
    #[diagnostic(code(forge::unknown_reference))]
    UnknownReference {
        #[source_code]
        src: NamedSource<String>,
        #[label("not defined in this manifest")]
        span: Option<SourceSpan>,
        entity: &'static str,
        field: &'static str,
        reference: String,
    },
}
