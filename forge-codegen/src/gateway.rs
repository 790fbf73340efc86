//! Generation gateway: compile, generate, persist.
//!
//! The gateway is the single entry point for "generate code for application
//! X". Each call runs synchronously end to end and is stateless; concurrent
//! calls for the same application are not coordinated and may each append
//! an artifact.

use tableforge_core::ArtifactId;
use tableforge_ir::AppSchema;
use tableforge_store::{ArtifactStore, ConfigStore};
use tracing::{debug, error, info, warn};

use crate::{CompileError, GenerateError, Generator, pipeline::Pipeline};

/// Result of a successful generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// An artifact was produced and durably stored.
    Persisted { artifact_id: ArtifactId, bytes: usize },
    /// The generator produced nothing; nothing was stored.
    Empty,
}

impl GenerateOutcome {
    pub fn artifact_id(&self) -> Option<ArtifactId> {
        match self {
            GenerateOutcome::Persisted { artifact_id, .. } => Some(*artifact_id),
            GenerateOutcome::Empty => None,
        }
    }
}

/// Drives compilation, generation and persistence for one application.
pub struct GenerationGateway<'a> {
    config: &'a dyn ConfigStore,
    artifacts: &'a dyn ArtifactStore,
    generator: &'a dyn Generator,
    pipeline: Pipeline,
}

impl<'a> GenerationGateway<'a> {
    pub fn new(
        config: &'a dyn ConfigStore,
        artifacts: &'a dyn ArtifactStore,
        generator: &'a dyn Generator,
    ) -> Self {
        Self {
            config,
            artifacts,
            generator,
            pipeline: Pipeline::new(),
        }
    }

    /// Use a custom pipeline, e.g. one carrying plugins.
    pub fn with_pipeline(mut self, pipeline: Pipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Compile an application's configuration into its schema.
    pub fn compile(&self, application_id: &str) -> Result<AppSchema, CompileError> {
        let ctx = self.pipeline.run(application_id, self.config)?;
        for diagnostic in ctx.warnings() {
            warn!(application_id, %diagnostic, "compilation warning");
        }
        ctx.into_ir()
    }

    /// Run the generator over a compiled schema.
    pub fn generate(&self, schema: &AppSchema) -> Result<Vec<u8>, GenerateError> {
        self.generator
            .emit(schema)
            .map_err(|err| GenerateError::Generation {
                application_id: schema.meta.id.clone(),
                generator: self.generator.name(),
                source: err.into(),
            })
    }

    /// Append an artifact to the application's history.
    pub fn persist(&self, application_id: &str, source: Vec<u8>) -> Result<ArtifactId, GenerateError> {
        let bytes = source.len();
        self.artifacts
            .insert_artifact(application_id, source)
            .map_err(|err| {
                error!(application_id, bytes, error = %err, "failed to store artifact");
                GenerateError::Persistence {
                    application_id: application_id.to_string(),
                    bytes,
                    source: err,
                }
            })
    }

    /// Generate an artifact from a compiled schema and store it.
    ///
    /// An empty artifact is accepted and nothing is stored. Persistence is
    /// attempted once, only after generation succeeds.
    pub fn deliver(
        &self,
        application_id: &str,
        schema: &AppSchema,
    ) -> Result<GenerateOutcome, GenerateError> {
        let source = self.generate(schema)?;
        if source.is_empty() {
            info!(application_id, "generator produced no output; nothing stored");
            return Ok(GenerateOutcome::Empty);
        }

        let bytes = source.len();
        let artifact_id = self.persist(application_id, source)?;
        info!(application_id, %artifact_id, bytes, "stored artifact");
        Ok(GenerateOutcome::Persisted { artifact_id, bytes })
    }

    /// Compile, generate and persist.
    ///
    /// # Errors
    ///
    /// Compilation errors are returned before the generator runs. Generator
    /// and store failures are reported as distinct [`GenerateError`] variants.
    pub fn generate_code(&self, application_id: &str) -> Result<GenerateOutcome, GenerateError> {
        let schema = self.compile(application_id)?;
        debug!(
            application_id,
            tables = schema.tables.len(),
            generator = self.generator.name(),
            "compiled schema"
        );
        self.deliver(application_id, &schema)
    }
}
