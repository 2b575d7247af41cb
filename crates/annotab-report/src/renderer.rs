//! Report renderer trait and CSV implementation

use annotab_core::{Error, Record, Result};
use std::path::Path;

/// Column names of the persisted artifact, in schema order.
///
/// This order is part of the artifact's compatibility contract.
pub const REPORT_COLUMNS: [&str; 5] = ["Platform", "Text", "Sentiment", "Category", "Emotion"];

/// Sink converting an ordered collection of records into artifact bytes
pub trait ReportRenderer: Send + Sync {
    /// Render the rows into the bytes of a tabular artifact
    fn render(&self, rows: &[Record]) -> Result<Vec<u8>>;

    /// Get the renderer name
    fn name(&self) -> &str;
}

/// CSV renderer producing one header row plus one data row per record
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvRenderer;

impl CsvRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ReportRenderer for CsvRenderer {
    fn render(&self, rows: &[Record]) -> Result<Vec<u8>> {
        // The header is written explicitly so an empty batch still yields it.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());

        writer
            .write_record(REPORT_COLUMNS)
            .map_err(|e| Error::render(format!("failed to write header: {e}")))?;

        for row in rows {
            writer
                .serialize(row)
                .map_err(|e| Error::render(format!("failed to write row: {e}")))?;
        }

        writer
            .into_inner()
            .map_err(|e| Error::render(format!("failed to finish report: {e}")))
    }

    fn name(&self) -> &str {
        "csv"
    }
}

/// Persist rendered artifact bytes to a file
pub fn write_report(path: impl AsRef<Path>, bytes: &[u8]) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, bytes)?;
    tracing::info!(path = %path.display(), size = bytes.len(), "report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(count: usize) -> Vec<Record> {
        (0..count)
            .map(|i| Record::new("Twitter", format!("text {i}"), "positive", "Other"))
            .collect()
    }

    #[test]
    fn header_matches_schema_exactly() {
        let bytes = CsvRenderer::new().render(&rows(1)).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text.lines().next().unwrap(),
            "Platform,Text,Sentiment,Category,Emotion"
        );
    }

    #[test]
    fn renders_one_data_row_per_record() {
        let bytes = CsvRenderer::new().render(&rows(5)).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn empty_batch_renders_header_only() {
        let bytes = CsvRenderer::new().render(&[]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.trim_end(), "Platform,Text,Sentiment,Category,Emotion");
    }

    #[test]
    fn quotes_fields_containing_delimiters() {
        let record = Record::new("Twitter", "goals, goals, goals", "positive", "Other");
        let bytes = CsvRenderer::new().render(&[record]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("\"goals, goals, goals\""));
    }

    #[test]
    fn write_report_persists_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        let bytes = CsvRenderer::new().render(&rows(2)).unwrap();

        write_report(&path, &bytes).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), bytes);
    }
}
