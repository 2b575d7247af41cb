//! Annotab Pipeline
//!
//! The concurrent annotation-and-aggregation core:
//! - One annotation task per input text, bounded by a semaphore
//! - A race-free shared sink accumulating the produced records
//! - A barrier guaranteeing every task terminated before results are read
//!
//! [`BatchCoordinator::run`] is the public entry point; [`AnnotationPipeline`]
//! additionally renders the collected records into the report artifact.

pub mod aggregator;
pub mod coordinator;
pub mod pipeline;

mod task;

pub use aggregator::RecordSink;
pub use coordinator::{BatchCoordinator, FailurePolicy};
pub use pipeline::AnnotationPipeline;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::coordinator::{BatchCoordinator, FailurePolicy};
    pub use crate::pipeline::AnnotationPipeline;
    pub use annotab_classifiers::prelude::*;
    pub use annotab_core::prelude::*;
    pub use annotab_report::{CsvRenderer, ReportRenderer};
}
