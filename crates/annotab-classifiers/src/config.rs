//! Configuration for the annotator and its classifiers
//!
//! The taxonomy and lexicons ship as defaults matching the original
//! deployment but can be overridden from a YAML file.

use crate::category::KeywordCategoryClassifier;
use crate::sentiment::LexiconSentimentClassifier;
use annotab_core::{Error, Result, Taxonomy, FALLBACK_CATEGORY};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Top-level annotator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatorConfig {
    /// Category taxonomy
    #[serde(default)]
    pub taxonomy: TaxonomySpec,

    /// Sentiment lexicons
    #[serde(default)]
    pub sentiment: SentimentLexiconSpec,

    /// Per-category keyword sets, keyed by taxonomy label
    #[serde(default)]
    pub category_keywords: BTreeMap<String, Vec<String>>,

    /// Maximum number of annotation tasks running at once (defaults to the
    /// number of CPUs when unset)
    #[serde(default)]
    pub concurrency: Option<usize>,

    /// How a classifier failure affects the batch
    #[serde(default)]
    pub failure_policy: FailurePolicySpec,

    /// Batch deadline in milliseconds (no deadline when unset)
    #[serde(default)]
    pub deadline_ms: Option<u64>,
}

/// Taxonomy specification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomySpec {
    /// Ordered category labels
    pub labels: Vec<String>,

    /// Fallback label, must appear in `labels`
    #[serde(default = "default_fallback")]
    pub fallback: String,
}

/// Sentiment lexicon specification
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SentimentLexiconSpec {
    /// Words indicating positive polarity (built-in lexicon when empty)
    #[serde(default)]
    pub positive: Vec<String>,

    /// Words indicating negative polarity (built-in lexicon when empty)
    #[serde(default)]
    pub negative: Vec<String>,
}

/// Failure policy specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicySpec {
    /// First classifier error aborts the batch
    #[default]
    FailFast,

    /// Failing items become error-marked rows, the batch completes
    BestEffort,
}

fn default_fallback() -> String {
    FALLBACK_CATEGORY.to_string()
}

impl Default for TaxonomySpec {
    fn default() -> Self {
        let taxonomy = Taxonomy::default();
        Self {
            labels: taxonomy.labels().to_vec(),
            fallback: taxonomy.fallback().to_string(),
        }
    }
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            taxonomy: TaxonomySpec::default(),
            sentiment: SentimentLexiconSpec::default(),
            category_keywords: BTreeMap::new(),
            concurrency: None,
            failure_policy: FailurePolicySpec::default(),
            deadline_ms: None,
        }
    }
}

impl AnnotatorConfig {
    /// Build the taxonomy from this configuration
    pub fn build_taxonomy(&self) -> Result<Taxonomy> {
        Taxonomy::new(self.taxonomy.labels.clone(), self.taxonomy.fallback.clone())
    }

    /// Build the sentiment classifier from this configuration
    pub fn build_sentiment(&self) -> Result<LexiconSentimentClassifier> {
        if self.sentiment.positive.is_empty() && self.sentiment.negative.is_empty() {
            return LexiconSentimentClassifier::new();
        }
        if self.sentiment.positive.is_empty() || self.sentiment.negative.is_empty() {
            return Err(Error::config(
                "sentiment lexicons must configure both positive and negative word lists",
            ));
        }
        LexiconSentimentClassifier::with_lexicons(&self.sentiment.positive, &self.sentiment.negative)
    }

    /// Build the category classifier from this configuration
    pub fn build_category(&self) -> Result<KeywordCategoryClassifier> {
        if self.category_keywords.is_empty() {
            return KeywordCategoryClassifier::new();
        }

        let taxonomy = self.build_taxonomy()?;
        for label in self.category_keywords.keys() {
            if !taxonomy.contains(label) {
                return Err(Error::config(format!(
                    "category keywords reference unknown taxonomy label {label:?}"
                )));
            }
        }

        KeywordCategoryClassifier::with_keywords(
            self.category_keywords
                .iter()
                .map(|(label, words)| (label.clone(), words.clone())),
        )
    }
}

/// Load an annotator configuration from a YAML file
pub fn load_config(path: impl AsRef<Path>) -> Result<AnnotatorConfig> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    let config: AnnotatorConfig = serde_yaml::from_str(&raw)
        .map_err(|e| Error::config(format!("failed to parse {}: {e}", path.display())))?;

    // Reject an inconsistent taxonomy at load time rather than at batch time.
    config.build_taxonomy()?;

    tracing::debug!(path = %path.display(), "loaded annotator configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_builds_default_taxonomy() {
        let config = AnnotatorConfig::default();
        let taxonomy = config.build_taxonomy().unwrap();
        assert_eq!(taxonomy, Taxonomy::default());
        assert!(config.build_sentiment().is_ok());
        assert!(config.build_category().is_ok());
    }

    #[test]
    fn loads_yaml_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "taxonomy:\n  labels: [Other, Football, Politics]\n  fallback: Other\nconcurrency: 4\nfailure_policy: best_effort\n"
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.taxonomy.labels.len(), 3);
        assert_eq!(config.concurrency, Some(4));
        assert_eq!(config.failure_policy, FailurePolicySpec::BestEffort);
    }

    #[test]
    fn rejects_fallback_missing_from_labels() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "taxonomy:\n  labels: [Football, Politics]\n  fallback: Other\n").unwrap();
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn rejects_keywords_for_unknown_label() {
        let mut config = AnnotatorConfig::default();
        config
            .category_keywords
            .insert("UNLISTED".to_string(), vec!["goal".to_string()]);
        assert!(config.build_category().is_err());
    }

    #[test]
    fn half_configured_lexicon_is_rejected() {
        let mut config = AnnotatorConfig::default();
        config.sentiment.positive = vec!["great".to_string()];
        assert!(config.build_sentiment().is_err());
    }
}
