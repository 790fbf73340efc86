//! Error types for compilation and generation.

use tableforge_store::StoreError;
use thiserror::Error;

use crate::pipeline::Diagnostic;

/// Boxed error used to carry generator and plugin failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Classification of a failure, for callers that only need the class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required identifier is missing or the configuration was rejected.
    Validation,
    /// The referenced application does not exist.
    NotFound,
    /// The configuration store failed or timed out.
    StoreUnavailable,
    /// The generator rejected or failed to produce the artifact.
    GenerationFailure,
    /// The artifact was generated but could not be stored.
    PersistenceFailure,
    /// The pipeline itself was misused or a plugin failed.
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::NotFound => "not-found",
            ErrorKind::StoreUnavailable => "store-unavailable",
            ErrorKind::GenerationFailure => "generation-failure",
            ErrorKind::PersistenceFailure => "persistence-failure",
            ErrorKind::Internal => "internal",
        }
    }
}

/// Errors raised while compiling an application schema.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("invalid configuration: {message}")]
    Validation { message: String },

    #[error("application '{application_id}' not found")]
    NotFound { application_id: String },

    #[error("configuration store unavailable while loading application '{application_id}'")]
    StoreUnavailable {
        application_id: String,
        #[source]
        source: StoreError,
    },

    #[error(
        "application '{application_id}' was rejected with {} error(s)",
        count_errors(.diagnostics)
    )]
    Rejected {
        application_id: String,
        diagnostics: Vec<Diagnostic>,
    },

    #[error("phase '{phase}' failed: {message}")]
    Phase { phase: &'static str, message: String },

    #[error("plugin '{plugin}' failed during phase '{phase}'")]
    Plugin {
        plugin: &'static str,
        phase: &'static str,
        #[source]
        source: BoxError,
    },
}

impl CompileError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        CompileError::Validation {
            message: message.into(),
        }
    }

    pub(crate) fn store(application_id: &str, source: StoreError) -> Self {
        CompileError::StoreUnavailable {
            application_id: application_id.to_string(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CompileError::Validation { .. } | CompileError::Rejected { .. } => ErrorKind::Validation,
            CompileError::NotFound { .. } => ErrorKind::NotFound,
            CompileError::StoreUnavailable { .. } => ErrorKind::StoreUnavailable,
            CompileError::Phase { .. } | CompileError::Plugin { .. } => ErrorKind::Internal,
        }
    }

    /// Diagnostics attached to a rejected compilation.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            CompileError::Rejected { diagnostics, .. } => diagnostics,
            _ => &[],
        }
    }
}

fn count_errors(diagnostics: &[Diagnostic]) -> usize {
    diagnostics.iter().filter(|d| d.severity.is_error()).count()
}

/// Errors raised by the generation gateway.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error("generator '{generator}' failed for application '{application_id}'")]
    Generation {
        application_id: String,
        generator: &'static str,
        #[source]
        source: BoxError,
    },

    #[error("generated {bytes} bytes for application '{application_id}' but could not store them")]
    Persistence {
        application_id: String,
        bytes: usize,
        #[source]
        source: StoreError,
    },
}

impl GenerateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerateError::Compile(err) => err.kind(),
            GenerateError::Generation { .. } => ErrorKind::GenerationFailure,
            GenerateError::Persistence { .. } => ErrorKind::PersistenceFailure,
        }
    }
}
