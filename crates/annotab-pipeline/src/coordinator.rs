//! Batch coordinator: fan out one task per text, barrier-join, collect
//!
//! The coordinator owns the only cross-task synchronization in the system:
//! every spawned task must reach a terminal state before the sink is read.

use crate::aggregator::RecordSink;
use crate::task::AnnotationTask;
use annotab_classifiers::{
    AnnotatorConfig, CategoryClassifier, FailurePolicySpec, SentimentClassifier,
};
use annotab_core::{Error, Record, Result, Taxonomy};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// How a classifier failure affects the rest of the batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// The first task failure aborts the batch; partial results are discarded
    #[default]
    FailFast,

    /// A failing item becomes an error-marked row and the batch completes
    BestEffort,
}

impl From<FailurePolicySpec> for FailurePolicy {
    fn from(spec: FailurePolicySpec) -> Self {
        match spec {
            FailurePolicySpec::FailFast => Self::FailFast,
            FailurePolicySpec::BestEffort => Self::BestEffort,
        }
    }
}

/// Runs annotation batches: spawns one task per input text, bounded by a
/// semaphore, and returns the collected records once every task has finished.
pub struct BatchCoordinator {
    sentiment: Arc<dyn SentimentClassifier>,
    category: Arc<dyn CategoryClassifier>,
    taxonomy: Arc<Taxonomy>,
    limit: Arc<Semaphore>,
    policy: FailurePolicy,
    deadline: Option<Duration>,
}

impl BatchCoordinator {
    /// Create a coordinator with default concurrency (one permit per CPU),
    /// fail-fast policy, and no deadline
    pub fn new(
        sentiment: Arc<dyn SentimentClassifier>,
        category: Arc<dyn CategoryClassifier>,
        taxonomy: Taxonomy,
    ) -> Self {
        Self {
            sentiment,
            category,
            taxonomy: Arc::new(taxonomy),
            limit: Arc::new(Semaphore::new(num_cpus::get().max(1))),
            policy: FailurePolicy::default(),
            deadline: None,
        }
    }

    /// Assemble a coordinator with the reference classifiers from configuration
    pub fn from_config(config: &AnnotatorConfig) -> Result<Self> {
        let sentiment = Arc::new(config.build_sentiment()?);
        let category = Arc::new(config.build_category()?);

        let mut coordinator = Self::new(sentiment, category, config.build_taxonomy()?)
            .with_failure_policy(config.failure_policy.into());
        if let Some(limit) = config.concurrency {
            coordinator = coordinator.with_concurrency(limit);
        }
        if let Some(ms) = config.deadline_ms {
            coordinator = coordinator.with_deadline(Duration::from_millis(ms));
        }
        Ok(coordinator)
    }

    /// Cap the number of annotation tasks running at once
    pub fn with_concurrency(mut self, limit: usize) -> Self {
        self.limit = Arc::new(Semaphore::new(limit.max(1)));
        self
    }

    /// Set how classifier failures affect the batch
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Fail the batch with [`Error::Timeout`] instead of waiting past the
    /// deadline; outstanding tasks are aborted on expiry
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// The taxonomy annotations are drawn from
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Annotate a batch of texts from one source.
    ///
    /// Spawns one annotation task per text, waits for all of them, and
    /// returns the collected records in completion order. A fresh sink is
    /// created per call, so records never leak between batches. An empty
    /// input yields an empty collection with no tasks spawned.
    pub async fn run(&self, source: &str, texts: &[String]) -> Result<Vec<Record>> {
        let sink = RecordSink::new();
        if texts.is_empty() {
            return sink.into_records();
        }

        let start = Instant::now();
        tracing::debug!(source, batch = texts.len(), "spawning annotation tasks");

        let mut tasks: JoinSet<Result<()>> = JoinSet::new();
        for text in texts {
            let task = AnnotationTask {
                source: source.to_string(),
                text: text.clone(),
                sentiment: Arc::clone(&self.sentiment),
                category: Arc::clone(&self.category),
                taxonomy: Arc::clone(&self.taxonomy),
                sink: sink.clone(),
                policy: self.policy,
            };
            let limit = Arc::clone(&self.limit);
            tasks.spawn(async move {
                let _permit = limit
                    .acquire_owned()
                    .await
                    .map_err(|e| Error::internal(format!("concurrency gate closed: {e}")))?;
                task.run().await
            });
        }

        // Barrier: every task reaches a terminal state before the sink is read.
        let first_error = match self.deadline {
            Some(deadline) => match tokio::time::timeout(deadline, drain(&mut tasks)).await {
                Ok(first_error) => first_error,
                Err(_) => {
                    tasks.abort_all();
                    tracing::warn!(
                        source,
                        elapsed_ms = start.elapsed().as_millis() as u64,
                        "batch deadline exceeded, aborting outstanding tasks"
                    );
                    return Err(Error::Timeout);
                }
            },
            None => drain(&mut tasks).await,
        };

        tracing::debug!(
            source,
            collected = sink.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "annotation barrier released"
        );

        if let Some(err) = first_error {
            return Err(err);
        }
        sink.into_records()
    }
}

/// Join every spawned task, keeping the first observed error
async fn drain(tasks: &mut JoinSet<Result<()>>) -> Option<Error> {
    let mut first_error = None;
    while let Some(joined) = tasks.join_next().await {
        let outcome = match joined {
            Ok(outcome) => outcome,
            Err(e) => Err(Error::internal(format!("annotation task panicked: {e}"))),
        };
        if let Err(err) = outcome {
            if first_error.is_none() {
                first_error = Some(err);
            }
        }
    }
    first_error
}
