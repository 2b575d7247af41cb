//! Annotab Core
//!
//! Core types, traits, and utilities shared across annotab components.
//!
//! This crate provides:
//! - The `Record` output row type with the persisted artifact's column schema
//! - The immutable category `Taxonomy`
//! - Error types and result handling

pub mod error;
pub mod record;
pub mod taxonomy;

pub use error::{Error, Result};
pub use record::{Record, EMOTION_PLACEHOLDER, ERROR_MARKER};
pub use taxonomy::{Taxonomy, FALLBACK_CATEGORY};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::record::Record;
    pub use crate::taxonomy::Taxonomy;
}
