//! Output row type for the annotation pipeline

use serde::{Deserialize, Serialize};

/// Placeholder value for the reserved emotion column.
///
/// The column is part of the persisted artifact schema for forward
/// compatibility; no classifier fills it yet.
pub const EMOTION_PLACEHOLDER: &str = "emotion";

/// Marker label written in place of sentiment and category when an
/// annotation task fails under the best-effort policy.
pub const ERROR_MARKER: &str = "<error>";

/// One annotated row of the output dataset.
///
/// Serde field renames match the persisted artifact's column names exactly;
/// changing them breaks report compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Identifier of the text's origin (e.g., a platform name)
    #[serde(rename = "Platform")]
    pub source: String,

    /// The original input text, unmodified
    #[serde(rename = "Text")]
    pub text: String,

    /// Sentiment label produced by the classifier adapter
    #[serde(rename = "Sentiment")]
    pub sentiment: String,

    /// One label from the configured taxonomy
    #[serde(rename = "Category")]
    pub category: String,

    /// Reserved field, always [`EMOTION_PLACEHOLDER`]
    #[serde(rename = "Emotion")]
    pub emotion: String,
}

impl Record {
    /// Create a new annotated record
    pub fn new(
        source: impl Into<String>,
        text: impl Into<String>,
        sentiment: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
            sentiment: sentiment.into(),
            category: category.into(),
            emotion: EMOTION_PLACEHOLDER.to_string(),
        }
    }

    /// Create an error-marked record for a text whose annotation failed
    pub fn error_marker(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(source, text, ERROR_MARKER, ERROR_MARKER)
    }

    /// Check whether this record is an error marker rather than a real annotation
    pub fn is_error_marker(&self) -> bool {
        self.sentiment == ERROR_MARKER && self.category == ERROR_MARKER
    }
}
