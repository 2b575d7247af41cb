//! Lexicon-based sentiment classifier
//!
//! Maps the polarity sign of matched lexicon hits onto the discrete
//! positive/neutral/negative labels the report schema expects.

use crate::classifier::{
    SentimentClassifier, SENTIMENT_NEGATIVE, SENTIMENT_NEUTRAL, SENTIMENT_POSITIVE,
};
use aho_corasick::AhoCorasick;
use annotab_core::{Error, Result};
use async_trait::async_trait;

const DEFAULT_POSITIVE: &[&str] = &[
    "good", "great", "excellent", "love", "amazing", "wonderful", "happy", "fantastic", "awesome",
    "best", "welcoming", "delighted",
];

const DEFAULT_NEGATIVE: &[&str] = &[
    "bad", "terrible", "awful", "hate", "horrible", "worst", "sad", "angry", "disappointed",
    "poor", "racist", "misconduct",
];

pub struct LexiconSentimentClassifier {
    name: String,
    positive: AhoCorasick,
    negative: AhoCorasick,
}

impl LexiconSentimentClassifier {
    /// Create a classifier with the built-in lexicons
    pub fn new() -> Result<Self> {
        Self::with_lexicons(DEFAULT_POSITIVE, DEFAULT_NEGATIVE)
    }

    /// Create a classifier with caller-supplied lexicons
    pub fn with_lexicons<P, N>(positive: P, negative: N) -> Result<Self>
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        let positive: Vec<_> = positive.into_iter().collect();
        let negative: Vec<_> = negative.into_iter().collect();

        let positive = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(positive.iter().map(|word| word.as_ref()))
            .map_err(|e| {
                Error::classifier(format!("failed to build positive sentiment matcher: {e}"))
            })?;

        let negative = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(negative.iter().map(|word| word.as_ref()))
            .map_err(|e| {
                Error::classifier(format!("failed to build negative sentiment matcher: {e}"))
            })?;

        Ok(Self {
            name: "sentiment-lexicon".to_string(),
            positive,
            negative,
        })
    }
}

#[async_trait]
impl SentimentClassifier for LexiconSentimentClassifier {
    async fn sentiment(&self, text: &str) -> Result<String> {
        let positive_hits = self.positive.find_iter(text).count();
        let negative_hits = self.negative.find_iter(text).count();

        let label = match positive_hits.cmp(&negative_hits) {
            std::cmp::Ordering::Greater => SENTIMENT_POSITIVE,
            std::cmp::Ordering::Less => SENTIMENT_NEGATIVE,
            std::cmp::Ordering::Equal => SENTIMENT_NEUTRAL,
        };

        Ok(label.to_string())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
