//! Core Extractor implementation

use crate::blockers::classify_blockers;
use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::gazetteer::GazetteerTagger;
use crate::incidents::detect_incidents;
use crate::metadata::parse_metadata;
use crate::segmenter::RuleSegmenter;
use crate::tasks::classify_tasks;
use sitelog_domain::traits::SentenceSegmenter;
use sitelog_domain::ExtractionResult;
use tracing::{debug, info};

/// The Extractor turns a daily log into an [`ExtractionResult`]
///
/// Build it once; it holds no per-document state and can be shared across
/// threads behind an `Arc`.
#[derive(Debug)]
pub struct Extractor<S = RuleSegmenter>
where
    S: SentenceSegmenter,
{
    segmenter: S,
    config: ExtractorConfig,
}

impl Extractor<RuleSegmenter> {
    /// Create an Extractor with the rule-based segmenter and gazetteer tagger
    ///
    /// Fails if the configuration is invalid or the gazetteer file cannot be
    /// loaded.
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        let tagger = GazetteerTagger::load(config.gazetteer_path.as_deref())?;
        info!("Extractor initialized with {} gazetteer entries", tagger.len());
        Ok(Self {
            segmenter: RuleSegmenter::new(tagger),
            config,
        })
    }

    /// Create an Extractor with the default configuration
    pub fn default_config() -> Result<Self, ExtractorError> {
        Self::new(ExtractorConfig::default())
    }
}

impl<S> Extractor<S>
where
    S: SentenceSegmenter,
{
    /// Create an Extractor over a custom segmenter
    pub fn with_segmenter(segmenter: S, config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self { segmenter, config })
    }

    /// The active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract the structured record from one document
    ///
    /// Never fails: missing fields are `None` and empty lists are a valid
    /// outcome.
    pub fn extract(&self, text: &str) -> ExtractionResult {
        let metadata = parse_metadata(text, &self.config);

        let sentences = self.segmenter.segment(text);
        debug!("Segmented {} chars into {} sentences", text.len(), sentences.len());

        // Incidents first: their claimed sentences are excluded from blockers
        let incidents = detect_incidents(&sentences, text, &self.config);
        let tasks = classify_tasks(&sentences, &self.config);
        let blockers = classify_blockers(&sentences, &incidents);

        let result = ExtractionResult::new(metadata, tasks, blockers, incidents.incidents);
        info!(
            tasks = result.total_tasks_completed(),
            blockers = result.total_blockers(),
            incidents = result.total_incidents(),
            "Extraction complete"
        );
        result
    }
}
