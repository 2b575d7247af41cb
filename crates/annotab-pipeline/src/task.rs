//! Unit of concurrent work producing one record from one input text

use crate::aggregator::RecordSink;
use crate::coordinator::FailurePolicy;
use annotab_classifiers::{CategoryClassifier, SentimentClassifier};
use annotab_core::{Record, Result, Taxonomy};
use std::sync::Arc;

/// One annotation task: classify a single text and hand the resulting record
/// to the sink. Tasks share nothing but the sink and the read-only classifier
/// handles, so any number of siblings may run at once.
pub(crate) struct AnnotationTask {
    pub(crate) source: String,
    pub(crate) text: String,
    pub(crate) sentiment: Arc<dyn SentimentClassifier>,
    pub(crate) category: Arc<dyn CategoryClassifier>,
    pub(crate) taxonomy: Arc<Taxonomy>,
    pub(crate) sink: RecordSink,
    pub(crate) policy: FailurePolicy,
}

impl AnnotationTask {
    pub(crate) async fn run(self) -> Result<()> {
        match self.annotate().await {
            Ok(record) => self.sink.insert(record),
            Err(err) => match self.policy {
                FailurePolicy::FailFast => Err(err),
                FailurePolicy::BestEffort => {
                    tracing::warn!(
                        error = %err,
                        text = %self.text,
                        "annotation failed, recording error marker"
                    );
                    self.sink
                        .insert(Record::error_marker(&self.source, &self.text))
                }
            },
        }
    }

    async fn annotate(&self) -> Result<Record> {
        let sentiment = self.sentiment.sentiment(&self.text).await?;
        let category = self.category.category(&self.text, &self.taxonomy).await?;
        Ok(Record::new(&self.source, &self.text, sentiment, category))
    }
}
