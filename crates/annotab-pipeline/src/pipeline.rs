//! End-to-end pipeline: annotate a batch, then render the report artifact

use crate::coordinator::BatchCoordinator;
use annotab_classifiers::AnnotatorConfig;
use annotab_core::{Record, Result};
use annotab_report::{CsvRenderer, ReportRenderer};
use std::sync::Arc;

/// Composition of a [`BatchCoordinator`] and a [`ReportRenderer`].
///
/// Render failures surface here, to the caller of the whole pipeline.
pub struct AnnotationPipeline {
    coordinator: BatchCoordinator,
    renderer: Arc<dyn ReportRenderer>,
}

impl AnnotationPipeline {
    /// Create a pipeline from an assembled coordinator and renderer
    pub fn new(coordinator: BatchCoordinator, renderer: Arc<dyn ReportRenderer>) -> Self {
        Self {
            coordinator,
            renderer,
        }
    }

    /// Assemble the default pipeline from configuration: reference lexicon
    /// classifiers and the CSV renderer
    pub fn from_config(config: &AnnotatorConfig) -> Result<Self> {
        Ok(Self::new(
            BatchCoordinator::from_config(config)?,
            Arc::new(CsvRenderer::new()),
        ))
    }

    /// The underlying coordinator
    pub fn coordinator(&self) -> &BatchCoordinator {
        &self.coordinator
    }

    /// Annotate a batch and return the collected records
    pub async fn annotate(&self, source: &str, texts: &[String]) -> Result<Vec<Record>> {
        self.coordinator.run(source, texts).await
    }

    /// Annotate a batch and render the tabular report artifact
    pub async fn report(&self, source: &str, texts: &[String]) -> Result<Vec<u8>> {
        let records = self.coordinator.run(source, texts).await?;
        self.renderer.render(&records)
    }
}
