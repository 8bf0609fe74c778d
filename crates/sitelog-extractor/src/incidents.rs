//! Incident detection
//!
//! Two passes:
//!
//! 1. **Header blocks**: a `SAFETY INCIDENT` marker (optionally followed by a
//!    severity word) and everything after it up to a blank line that opens an
//!    `Additionally` or `Crew count` section, or the end of the document.
//! 2. **Sentence fallback**: every sentence not already inside a block is
//!    tested against the incident category tables.
//!
//! The descriptions of everything found here form the claimed set that keeps
//! the blocker classifier from reporting the same text again.

use regex::Regex;
use sitelog_domain::{Incident, IncidentType, Sentence, Severity};
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

use crate::config::ExtractorConfig;
use crate::lexicon::{
    contains_any, INCIDENT_BOILERPLATE, INCIDENT_CATEGORIES, INCIDENT_HEADER_MARKERS,
    INCIDENT_SECTION_HEADERS, MAJOR_SEVERITY_WORDS, MODERATE_SEVERITY_WORDS,
};

/// Separator between several action phrases
pub const ACTION_SEPARATOR: &str = "; ";

// Group 1: severity word after the marker. Group 2: the body, matched lazily
// up to the section boundary, which is consumed but left out of the block.
static INCIDENT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)\bSAFETY\s+INCIDENT\b[\s\-:]*(\w+)?:?\s*(.+?)(?:\n\n(?:Additionally|Crew count)|\z)",
    )
    .expect("Invalid incident block regex pattern")
});

static ACTION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        pattern(r"(?i)(?:Ambulance|First aid|treatment|medical attention)\s+(.+?)(?:\.|$)"),
        pattern(r"(?i)(?:action|response):\s*(.+?)(?:\.|$)"),
        pattern(r"(?i)worker\s+(?:transported|taken)\s+to\s+[\w\s]+(?:Hospital|Medical|Clinic)"),
        pattern(r"(?i)(?:suspended|stopped|halted)\s+(?:all|the)?\s*[\w\s]+(?:operations|work|activities)"),
        pattern(r"(?i)(?:investigation|team|manager|officer)\s+(?:formed|notified|dispatched|en route)"),
    ]
});

fn pattern(regex_str: &str) -> Regex {
    Regex::new(regex_str).expect("Invalid action regex pattern")
}

/// Output of the incident detector
#[derive(Debug, Clone, Default)]
pub struct IncidentScan {
    /// Header-block incidents first, then sentence-level incidents
    pub incidents: Vec<Incident>,

    /// Descriptions of every incident, trimmed
    pub claimed: HashSet<String>,
}

impl IncidentScan {
    /// Whether a sentence's trimmed text was claimed as an incident
    pub fn is_claimed(&self, sentence_text: &str) -> bool {
        self.claimed.contains(sentence_text.trim())
    }
}

/// A header-block match before severity and action extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BlockCandidate {
    pub text: String,
    pub severity_label: Option<String>,
}

/// Run both passes over the document
pub fn detect_incidents(sentences: &[Sentence], text: &str, config: &ExtractorConfig) -> IncidentScan {
    let mut incidents: Vec<Incident> = detect_blocks(text, config.min_incident_block_chars)
        .into_iter()
        .map(block_incident)
        .collect();
    let block_count = incidents.len();

    for sentence in sentences {
        let trimmed = sentence.text.trim();
        if incidents[..block_count]
            .iter()
            .any(|inc| inc.description.contains(trimmed))
        {
            continue;
        }
        if let Some(incident) = classify_sentence(&sentence.text) {
            incidents.push(incident);
        }
    }

    debug!(
        "Incident scan: {} header blocks, {} sentence-level",
        block_count,
        incidents.len() - block_count
    );

    let claimed = incidents.iter().map(|inc| inc.description.clone()).collect();
    IncidentScan { incidents, claimed }
}

/// Pass 1: header blocks long enough to carry a description, minus blocks
/// contained in a longer one
pub(crate) fn detect_blocks(text: &str, min_chars: usize) -> Vec<BlockCandidate> {
    let mut candidates = Vec::new();
    for caps in INCIDENT_BLOCK.captures_iter(text) {
        let (Some(whole), Some(body)) = (caps.get(0), caps.get(2)) else {
            continue;
        };
        let block = text[whole.start()..body.end()].trim();
        if block.chars().count() < min_chars {
            debug!("Discarding bare incident header ({} chars)", block.chars().count());
            continue;
        }
        candidates.push(BlockCandidate {
            text: block.to_string(),
            severity_label: caps.get(1).map(|m| m.as_str().to_string()),
        });
    }
    retain_longest(candidates)
}

/// Drop every candidate whose text sits inside a strictly longer candidate
pub(crate) fn retain_longest(candidates: Vec<BlockCandidate>) -> Vec<BlockCandidate> {
    let keep: Vec<bool> = candidates
        .iter()
        .enumerate()
        .map(|(i, candidate)| {
            !candidates.iter().enumerate().any(|(j, other)| {
                i != j && other.text.len() > candidate.text.len() && other.text.contains(&candidate.text)
            })
        })
        .collect();

    let before = candidates.len();
    let kept: Vec<BlockCandidate> = candidates
        .into_iter()
        .zip(keep)
        .filter_map(|(candidate, keep)| keep.then_some(candidate))
        .collect();
    if kept.len() < before {
        debug!("Dropped {} contained incident blocks", before - kept.len());
    }
    kept
}

fn block_incident(block: BlockCandidate) -> Incident {
    let severity = match block.severity_label.as_deref() {
        Some(label) if label.eq_ignore_ascii_case("major") => Severity::Major,
        _ => severity_from_keywords(&block.text.to_lowercase()),
    };
    Incident {
        incident_type: IncidentType::Safety,
        action_taken: extract_action_taken(&block.text),
        description: block.text,
        severity,
    }
}

/// Pass 2 for one sentence
fn classify_sentence(sentence: &str) -> Option<Incident> {
    let lower = sentence.to_lowercase();
    let lower_trimmed = lower.trim();

    if INCIDENT_SECTION_HEADERS.contains(&lower_trimmed)
        || contains_any(&lower, INCIDENT_BOILERPLATE)
        || contains_any(&lower, INCIDENT_HEADER_MARKERS)
    {
        return None;
    }

    let (incident_type, _) = INCIDENT_CATEGORIES
        .iter()
        .find(|(_, keywords)| contains_any(&lower, keywords))?;

    Some(Incident {
        incident_type: *incident_type,
        description: sentence.trim().to_string(),
        severity: severity_from_keywords(&lower),
        action_taken: extract_action_taken(sentence),
    })
}

/// Major and moderate indicator words, in that order of precedence
pub fn severity_from_keywords(lowercase_text: &str) -> Severity {
    if contains_any(lowercase_text, MAJOR_SEVERITY_WORDS) {
        Severity::Major
    } else if contains_any(lowercase_text, MODERATE_SEVERITY_WORDS) {
        Severity::Moderate
    } else {
        Severity::Minor
    }
}

/// Every action phrase in `text`, by pattern then position
pub fn extract_action_taken(text: &str) -> Option<String> {
    let actions: Vec<&str> = ACTION_PATTERNS
        .iter()
        .flat_map(|regex| regex.find_iter(text).map(|m| m.as_str().trim()))
        .collect();

    if actions.is_empty() {
        None
    } else {
        Some(actions.join(ACTION_SEPARATOR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gazetteer::GazetteerTagger;
    use crate::segmenter::RuleSegmenter;
    use sitelog_domain::traits::SentenceSegmenter;

    const MAJOR_BLOCK: &str = "SAFETY INCIDENT - MAJOR:\n\
At 10:30, a scissor lift tipped over in Tower B Level 3 while two workers were on the platform. \
One worker fell approximately 3 meters and sustained a suspected fractured arm. \
Ambulance called and arrived within 12 minutes. Worker transported to King Fahd Hospital.";

    fn scan(text: &str) -> IncidentScan {
        let segmenter = RuleSegmenter::new(GazetteerTagger::builtin().unwrap());
        let sentences = segmenter.segment(text);
        detect_incidents(&sentences, text, &ExtractorConfig::default())
    }

    fn candidate(text: &str) -> BlockCandidate {
        BlockCandidate {
            text: text.to_string(),
            severity_label: None,
        }
    }

    #[test]
    fn test_major_header_block() {
        let result = scan(MAJOR_BLOCK);
        assert_eq!(result.incidents.len(), 1);

        let incident = &result.incidents[0];
        assert_eq!(incident.incident_type, IncidentType::Safety);
        assert_eq!(incident.severity, Severity::Major);
        assert_eq!(incident.description, MAJOR_BLOCK);
        assert_eq!(
            incident.action_taken.as_deref(),
            Some("Ambulance called and arrived within 12 minutes.; Worker transported to King Fahd Hospital")
        );
        assert!(result.is_claimed(MAJOR_BLOCK));
    }

    #[test]
    fn test_block_stops_at_section_boundary() {
        let text = format!("{}\n\nAdditionally, rebar delivery is delayed until Thursday.", MAJOR_BLOCK);
        let result = scan(&text);

        assert_eq!(result.incidents.len(), 1);
        assert_eq!(result.incidents[0].description, MAJOR_BLOCK);
    }

    #[test]
    fn test_short_header_is_not_a_block() {
        let blocks = detect_blocks("Safety incident: none today.", 80);
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_block_severity_from_content() {
        let text = "Safety incident reported near the hoist: a significant amount of debris dropped \
from the third floor onto the walkway below, nobody was hurt.";
        let blocks = detect_blocks(text, 80);
        assert_eq!(blocks.len(), 1);
        assert_eq!(block_incident(blocks[0].clone()).severity, Severity::Moderate);
    }

    #[test]
    fn test_contained_candidates_are_dropped() {
        let long = "SAFETY INCIDENT: worker slipped on wet formwork at Level 2 and twisted an ankle";
        let short = "worker slipped on wet formwork at Level 2";
        let kept = retain_longest(vec![candidate(short), candidate(long)]);
        assert_eq!(kept, vec![candidate(long)]);
    }

    #[test]
    fn test_identical_candidates_are_both_kept() {
        let text = "SAFETY INCIDENT: worker slipped on wet formwork at Level 2";
        let kept = retain_longest(vec![candidate(text), candidate(text)]);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_sentence_fallback_categories() {
        let text = "Quality issue identified: misaligned blockwork in Block B, rework required.\n\
Diesel spill near the generator was contained.\n\
Near miss: unsecured plank dropped from scaffold.";
        let result = scan(text);
        let types: Vec<IncidentType> = result.incidents.iter().map(|i| i.incident_type).collect();
        assert_eq!(
            types,
            vec![IncidentType::Quality, IncidentType::Environmental, IncidentType::Safety]
        );
        assert!(result.is_claimed("Diesel spill near the generator was contained."));
    }

    #[test]
    fn test_safety_outranks_quality() {
        let result = scan("Rework ordered after the accident at the east stair.");
        assert_eq!(result.incidents.len(), 1);
        assert_eq!(result.incidents[0].incident_type, IncidentType::Safety);
    }

    #[test]
    fn test_fallback_skips_headers_and_boilerplate() {
        let text = "Incidents:\nCrew count: 85, no injury reported.\nOperations continue as normal despite the hazard.";
        assert!(scan(text).incidents.is_empty());
    }

    #[test]
    fn test_fallback_skips_block_sentences() {
        let text = format!("{}\n\nCrew count: 120", MAJOR_BLOCK);
        let result = scan(&text);
        // The hospital and fall sentences live inside the block
        assert_eq!(result.incidents.len(), 1);
    }

    #[test]
    fn test_fallback_severity() {
        let result = scan("Serious injury avoided after worker slipped on oil.");
        assert_eq!(result.incidents[0].severity, Severity::Major);
    }

    #[test]
    fn test_action_taken_join() {
        let text = "Response: area barricaded. All crane operations suspended the lifting work. Safety officer notified.";
        assert_eq!(
            extract_action_taken(text).as_deref(),
            Some("Response: area barricaded.; suspended the lifting work; officer notified")
        );
    }

    #[test]
    fn test_no_action_taken() {
        assert_eq!(extract_action_taken("Worker slipped on wet surface"), None);
    }
}
