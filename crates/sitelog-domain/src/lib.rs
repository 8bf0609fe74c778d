//! Sitelog Domain Layer
//!
//! The structured record produced from a construction-site daily log, and the
//! trait boundaries the extraction engine consumes.
//!
//! ## Key Concepts
//!
//! - **Completed Task**: a piece of work reported as done, with optional location and crew
//! - **Blocker**: an issue holding up progress, with an optional cause category
//! - **Incident**: a safety, quality or environmental event with a severity
//! - **Extraction Result**: header metadata plus the three lists and their counts
//! - **Sentence / Entity Span**: what the language backend hands to the classifiers
//!
//! ## Architecture
//!
//! This crate holds no extraction logic. Pattern tables, classifiers and the
//! rule-based language backend live in `sitelog-extractor`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod blocker;
pub mod incident;
pub mod result;
pub mod sentence;
pub mod task;
pub mod traits;

// Re-exports for convenience
pub use blocker::{Blocker, BlockerCause};
pub use incident::{Incident, IncidentType, Severity};
pub use result::{ExtractionResult, LogMetadata};
pub use sentence::{EntityLabel, EntitySpan, Sentence};
pub use task::CompletedTask;
