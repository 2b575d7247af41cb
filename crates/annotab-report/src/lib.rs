//! Annotab Report
//!
//! Serializes an ordered collection of annotated records into the bytes of a
//! tabular report artifact. The column schema is fixed; see
//! [`renderer::REPORT_COLUMNS`].

pub mod renderer;

pub use renderer::{write_report, CsvRenderer, ReportRenderer, REPORT_COLUMNS};
