//! Keyword-based category classifier
//!
//! Assigns a text to the taxonomy label whose keyword set matches most often,
//! falling back to the taxonomy's fallback label when nothing matches.

use crate::classifier::CategoryClassifier;
use aho_corasick::AhoCorasick;
use annotab_core::{Error, Result, Taxonomy};
use async_trait::async_trait;

/// Built-in keyword sets for the default vascular-device taxonomy
const DEFAULT_KEYWORDS: &[(&str, &[&str])] = &[
    ("ACCESS PRODUCTS", &["access", "sheath", "introducer"]),
    ("CLOSURE PRODUCTS", &["closure", "suture", "seal"]),
    ("GUIDEWIRE PRODUCTS", &["guidewire", "guide wire"]),
    ("CATHETERS PRODUCTS", &["catheter", "balloon"]),
    ("EMBOLICS PRODUCTS", &["embolic", "embolization", "coil"]),
    (
        "PERIPHERAL INTERVENTION DEVICES",
        &["peripheral", "atherectomy"],
    ),
    (
        "CORONARY INTERVENTION DEVICES",
        &["coronary", "angioplasty", "stent"],
    ),
];

pub struct KeywordCategoryClassifier {
    name: String,
    matchers: Vec<(String, AhoCorasick)>,
}

impl KeywordCategoryClassifier {
    /// Create a classifier with the built-in keyword sets
    pub fn new() -> Result<Self> {
        Self::with_keywords(
            DEFAULT_KEYWORDS
                .iter()
                .map(|(label, keywords)| (label.to_string(), keywords.to_vec())),
        )
    }

    /// Create a classifier from per-label keyword sets.
    ///
    /// Labels are tried in iteration order; ties in match count resolve to
    /// the earlier label.
    pub fn with_keywords<I, S>(keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Vec<S>)>,
        S: AsRef<str>,
    {
        let mut matchers = Vec::new();
        for (label, words) in keywords {
            if words.is_empty() {
                continue;
            }
            let matcher = AhoCorasick::builder()
                .ascii_case_insensitive(true)
                .build(words.iter().map(|word| word.as_ref()))
                .map_err(|e| {
                    Error::classifier(format!("failed to build matcher for {label:?}: {e}"))
                })?;
            matchers.push((label, matcher));
        }

        Ok(Self {
            name: "category-keywords".to_string(),
            matchers,
        })
    }
}

#[async_trait]
impl CategoryClassifier for KeywordCategoryClassifier {
    async fn category(&self, text: &str, taxonomy: &Taxonomy) -> Result<String> {
        let mut best: Option<(&str, usize)> = None;

        // Only labels present in the caller's taxonomy are eligible, so the
        // returned label is a taxonomy member by construction.
        for (label, matcher) in &self.matchers {
            if !taxonomy.contains(label) {
                continue;
            }
            let hits = matcher.find_iter(text).count();
            if hits > 0 && best.map_or(true, |(_, top)| hits > top) {
                best = Some((label, hits));
            }
        }

        let label = best.map_or_else(|| taxonomy.fallback(), |(label, _)| label);
        Ok(label.to_string())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
