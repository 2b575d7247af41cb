//! Classifier adapter traits and common label constants

use annotab_core::{Result, Taxonomy};
use async_trait::async_trait;

/// Label for text with dominant positive polarity
pub const SENTIMENT_POSITIVE: &str = "positive";

/// Label for text with dominant negative polarity
pub const SENTIMENT_NEGATIVE: &str = "negative";

/// Label for text with no clear polarity
pub const SENTIMENT_NEUTRAL: &str = "neutral";

/// Adapter producing a sentiment label for a text.
///
/// Implementations must be stateless with respect to the batch: the pipeline
/// calls `sentiment` once per item from arbitrarily many concurrent tasks.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Classify the sentiment of the given text
    async fn sentiment(&self, text: &str) -> Result<String>;

    /// Get the classifier name
    fn name(&self) -> &str;
}

/// Adapter assigning a text to one label of a taxonomy.
///
/// Implementations must return a member of `taxonomy`, falling back to
/// `taxonomy.fallback()` when no other label applies.
#[async_trait]
pub trait CategoryClassifier: Send + Sync {
    /// Classify the given text into one of the taxonomy's labels
    async fn category(&self, text: &str, taxonomy: &Taxonomy) -> Result<String>;

    /// Get the classifier name
    fn name(&self) -> &str;
}
