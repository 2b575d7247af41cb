//! Fixed category taxonomy

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// The distinguished fallback label used when no other category applies
pub const FALLBACK_CATEGORY: &str = "Other";

/// An ordered, immutable sequence of category labels with a distinguished
/// fallback. Built once at startup and shared read-only across tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    labels: Vec<String>,
    fallback: String,
}

impl Taxonomy {
    /// Create a taxonomy from an ordered label list and a fallback label.
    ///
    /// The fallback must be one of the labels.
    pub fn new(
        labels: impl IntoIterator<Item = impl Into<String>>,
        fallback: impl Into<String>,
    ) -> Result<Self> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let fallback = fallback.into();

        if labels.is_empty() {
            return Err(Error::config("taxonomy must contain at least one label"));
        }
        if !labels.iter().any(|label| label == &fallback) {
            return Err(Error::config(format!(
                "taxonomy fallback {fallback:?} is not one of the labels"
            )));
        }

        Ok(Self { labels, fallback })
    }

    /// Get the ordered label list
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Get the fallback label
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Check whether a label belongs to the taxonomy
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Labels other than the fallback, in taxonomy order
    pub fn candidates(&self) -> impl Iterator<Item = &str> {
        self.labels
            .iter()
            .map(String::as_str)
            .filter(move |label| *label != self.fallback)
    }

    /// Number of labels
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the taxonomy has no labels (never true for a constructed value)
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for Taxonomy {
    /// The vascular-device taxonomy the system originally shipped with
    fn default() -> Self {
        Self::new(
            [
                FALLBACK_CATEGORY,
                "ACCESS PRODUCTS",
                "CLOSURE PRODUCTS",
                "GUIDEWIRE PRODUCTS",
                "CATHETERS PRODUCTS",
                "EMBOLICS PRODUCTS",
                "PERIPHERAL INTERVENTION DEVICES",
                "CORONARY INTERVENTION DEVICES",
            ],
            FALLBACK_CATEGORY,
        )
        .expect("default taxonomy is valid")
    }
}
