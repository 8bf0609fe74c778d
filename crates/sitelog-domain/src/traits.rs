//! Trait definitions for the language backend
//!
//! The extraction engine only needs sentence boundaries and location-like
//! entity tags. Implementations live in `sitelog-extractor`.

use crate::{EntitySpan, Sentence};

/// Splits a document into ordered sentence-like spans
///
/// Implementations are built once and shared read-only across extraction
/// calls, so they must be `Send + Sync`.
pub trait SentenceSegmenter: Send + Sync {
    /// Segment `text`. Every returned sentence is a trimmed slice of `text`,
    /// in document order, carrying the entities found inside it.
    fn segment(&self, text: &str) -> Vec<Sentence>;
}

/// Finds named-entity spans in a piece of text
pub trait EntityTagger: Send + Sync {
    /// Tag `text`. Spans are non-overlapping and sorted by start offset,
    /// with offsets relative to `text`.
    fn tag(&self, text: &str) -> Vec<EntitySpan>;
}
