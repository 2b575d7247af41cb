//! Annotab Classifiers
//!
//! Sentiment and category adapters consumed by the annotation pipeline.
//!
//! The pipeline treats classifiers as external collaborators behind the
//! [`SentimentClassifier`] and [`CategoryClassifier`] traits; this crate ships
//! lightweight lexicon- and keyword-based reference implementations plus the
//! YAML configuration used to assemble them.

pub mod category;
pub mod classifier;
pub mod config;
pub mod sentiment;

pub use category::KeywordCategoryClassifier;
pub use classifier::{
    CategoryClassifier, SentimentClassifier, SENTIMENT_NEGATIVE, SENTIMENT_NEUTRAL,
    SENTIMENT_POSITIVE,
};
pub use config::{
    load_config, AnnotatorConfig, FailurePolicySpec, SentimentLexiconSpec, TaxonomySpec,
};
pub use sentiment::LexiconSentimentClassifier;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::category::KeywordCategoryClassifier;
    pub use crate::classifier::{CategoryClassifier, SentimentClassifier};
    pub use crate::config::AnnotatorConfig;
    pub use crate::sentiment::LexiconSentimentClassifier;
}
