//! Completed-task classification
//!
//! Runs on every sentence; it does not consult the incident or blocker
//! results, so a sentence can be both a task and an incident.

use regex::Regex;
use sitelog_domain::{CompletedTask, Sentence};
use std::sync::LazyLock;

use crate::config::ExtractorConfig;
use crate::lexicon::{contains_any, SUMMARY_PREFIXES, TASK_COMPLETION_KEYWORDS, TASK_SECTION_HEADERS};

/// Bullet markers that make a line task-like on its own
const BULLET_MARKERS: &[char] = &['-', '\u{2022}'];

static LOCATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        pattern(r"(?i)tower\s+[A-Z]"),
        pattern(r"(?i)level\s+\d+"),
        pattern(r"(?i)floor\s+\d+"),
        pattern(r"(?i)block\s+[A-Z0-9]+"),
        pattern(r"(?i)zone\s+[A-Z0-9\-]+"),
        pattern(r"(?i)building\s+[A-Z0-9]+"),
        // Area codes such as CS-12, BD-02, ST-1
        pattern(r"[A-Z]{2,3}-[0-9]+"),
        pattern(r"(?i)section\s+[A-Z0-9\-]+"),
        pattern(r"(?i)station\s+[A-Z0-9\-]+"),
    ]
});

static CREW_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        pattern(r"(?:by|from|contractor)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z-]+)*)\s+(?:crew|team|contractor)"),
        pattern(r"([A-Z][a-z]+(?:\s+[A-Z][a-z-]+)*)\s+(?:crew|team|contractor)"),
    ]
});

static QUANTITY_SUMMARY: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^(?:completed|total|only)\s+\d+"));

fn pattern(regex_str: &str) -> Regex {
    Regex::new(regex_str).expect("Invalid task regex pattern")
}

/// Classify completed tasks in document order
///
/// The keyword rule and the bullet rule emit independently, so a bullet that
/// also carries a completion keyword is reported twice.
pub fn classify_tasks(sentences: &[Sentence], config: &ExtractorConfig) -> Vec<CompletedTask> {
    sentences
        .iter()
        .flat_map(|sentence| match emission_count(&sentence.text, config) {
            0 => Vec::new(),
            count => vec![build_task(sentence); count],
        })
        .collect()
}

/// How many task entries a sentence produces (0, 1 or 2)
fn emission_count(sentence: &str, config: &ExtractorConfig) -> usize {
    let trimmed = sentence.trim();
    if trimmed.chars().count() < config.min_task_chars {
        return 0;
    }

    let lower = trimmed.to_lowercase();
    if TASK_SECTION_HEADERS.contains(&lower.as_str()) {
        return 0;
    }

    let mut count = 0;
    if contains_any(&lower, TASK_COMPLETION_KEYWORDS) {
        // Noise ends the sentence outright, bullet or not
        if is_metadata_noise(&lower) {
            return 0;
        }
        count += 1;
    }
    if is_bullet_item(&lower, config.min_bullet_chars) {
        count += 1;
    }
    count
}

/// Quantity summaries and crew-count lines
fn is_metadata_noise(lower: &str) -> bool {
    SUMMARY_PREFIXES.iter().any(|prefix| lower.starts_with(prefix))
        || QUANTITY_SUMMARY.is_match(lower)
        || lower.contains("crew count")
}

fn is_bullet_item(lower: &str, min_chars: usize) -> bool {
    if !lower.starts_with(BULLET_MARKERS) {
        return false;
    }
    let content = lower.trim_start_matches(BULLET_MARKERS).trim();
    content.chars().count() > min_chars
}

fn build_task(sentence: &Sentence) -> CompletedTask {
    CompletedTask::new(sentence.text.trim())
        .with_location(extract_location(sentence))
        .with_crew(extract_crew(&sentence.text))
}

/// First structural location, else the first location-like entity
pub fn extract_location(sentence: &Sentence) -> Option<String> {
    LOCATION_PATTERNS
        .iter()
        .find_map(|regex| regex.find(&sentence.text))
        .map(|m| m.as_str().to_string())
        .or_else(|| sentence.first_location_entity().map(|e| e.text.clone()))
}

/// Capitalized name directly before "crew", "team" or "contractor"
pub fn extract_crew(text: &str) -> Option<String> {
    CREW_PATTERNS
        .iter()
        .find_map(|regex| regex.captures(text))
        .map(|caps| caps[1].to_string())
}
