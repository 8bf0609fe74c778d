//! Blocker classification

use sitelog_domain::{Blocker, BlockerCause, Sentence};

use crate::incidents::IncidentScan;
use crate::lexicon::{
    contains_any, BLOCKER_KEYWORDS, CAUSE_GROUPS, INCIDENT_INDICATORS, INSPECTION_CONTEXT,
    INSPECTION_WORDS,
};

/// Classify blockers, skipping every sentence the incident detector claimed
pub fn classify_blockers(sentences: &[Sentence], incidents: &IncidentScan) -> Vec<Blocker> {
    sentences
        .iter()
        .filter(|sentence| !incidents.is_claimed(&sentence.text))
        .filter_map(|sentence| classify_sentence(&sentence.text))
        .collect()
}

fn classify_sentence(sentence: &str) -> Option<Blocker> {
    let lower = sentence.to_lowercase();

    // Incident wording the header block did not cover
    if contains_any(&lower, INCIDENT_INDICATORS) {
        return None;
    }
    // Incident follow-up narration ("platform inspected, hydraulics failed")
    if contains_any(&lower, INSPECTION_WORDS) && contains_any(&lower, INSPECTION_CONTEXT) {
        return None;
    }
    if !contains_any(&lower, BLOCKER_KEYWORDS) {
        return None;
    }

    Some(Blocker::new(sentence.trim(), cause_of(&lower)))
}

/// First cause group with a word in the sentence
pub fn cause_of(lowercase_text: &str) -> Option<BlockerCause> {
    CAUSE_GROUPS
        .iter()
        .find(|(_, words)| contains_any(lowercase_text, words))
        .map(|(cause, _)| *cause)
}
