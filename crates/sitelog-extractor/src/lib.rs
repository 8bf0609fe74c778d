//! Sitelog Extractor
//!
//! Converts free-text construction-site daily logs into a fixed structured
//! record: header metadata plus completed tasks, blockers and incidents.
//!
//! # Overview
//!
//! The engine is a deterministic rule pipeline. A document is split into
//! sentences once, then each classifier walks the sentences with its own
//! ordered keyword tables and patterns.
//!
//! # Architecture
//!
//! ```text
//!                    ┌→ Incident Detector ─┐ (claimed sentences)
//! Text → Segmenter ──┼─────────────────────┴→ Blocker Classifier ─┐
//!    │               └→ Task Classifier ───────────────────────────┼→ ExtractionResult
//!    └→ Metadata Parser ───────────────────────────────────────────┘
//! ```
//!
//! # Example Usage
//!
//! ```
//! use sitelog_extractor::{Extractor, ExtractorConfig};
//!
//! let extractor = Extractor::new(ExtractorConfig::default()).unwrap();
//! let result = extractor.extract(
//!     "Daily Site Log - SEDRA Residential\n\
//!      Date: 15/10/2025\n\
//!      - Concrete pour for Tower A slab completed - 250 cubic meters\n",
//! );
//!
//! assert_eq!(result.site_name(), Some("SEDRA"));
//! // The bullet and its completion keyword each count
//! assert_eq!(result.total_tasks_completed(), 2);
//! assert_eq!(result.completed_tasks()[0].location.as_deref(), Some("Tower A"));
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod extractor;

pub mod blockers;
pub mod gazetteer;
pub mod incidents;
pub mod lexicon;
pub mod metadata;
pub mod segmenter;
pub mod tasks;


pub use error::ExtractorError;
pub use config::ExtractorConfig;
pub use extractor::Extractor;
pub use gazetteer::{GazetteerEntry, GazetteerTagger};
pub use incidents::IncidentScan;
pub use segmenter::RuleSegmenter;
