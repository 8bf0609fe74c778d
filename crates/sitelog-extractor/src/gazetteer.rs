//! Gazetteer-based named-entity tagger
//!
//! Stands in for a statistical NER model: a phrase list of known places and
//! facilities, plus one structural pattern for named facilities such as
//! "King Fahd Hospital" or "Eastern Batching Plant".

use crate::error::ExtractorError;
use regex::Regex;
use serde::Deserialize;
use sitelog_domain::traits::EntityTagger;
use sitelog_domain::{EntityLabel, EntitySpan};
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Built-in entries, loaded before any configured gazetteer file
const BUILTIN_ENTRIES: &[(&str, EntityLabel)] = &[
    ("Saudi Arabia", EntityLabel::Gpe),
    ("Riyadh", EntityLabel::Gpe),
    ("Jeddah", EntityLabel::Gpe),
    ("Dammam", EntityLabel::Gpe),
    ("Al Khobar", EntityLabel::Gpe),
    ("Khobar", EntityLabel::Gpe),
    ("Dhahran", EntityLabel::Gpe),
    ("Jubail", EntityLabel::Gpe),
    ("Yanbu", EntityLabel::Gpe),
    ("Makkah", EntityLabel::Gpe),
    ("Mecca", EntityLabel::Gpe),
    ("Madinah", EntityLabel::Gpe),
    ("Medina", EntityLabel::Gpe),
    ("Abha", EntityLabel::Gpe),
    ("Tabuk", EntityLabel::Gpe),
    ("Eastern Province", EntityLabel::Gpe),
    ("Red Sea", EntityLabel::Loc),
    ("Arabian Gulf", EntityLabel::Loc),
    ("Wadi Hanifa", EntityLabel::Loc),
    ("Canal District", EntityLabel::Loc),
    ("Main Gate", EntityLabel::Fac),
    ("Site Office", EntityLabel::Fac),
    ("Laydown Area", EntityLabel::Fac),
    ("Batching Plant", EntityLabel::Fac),
    ("Basement B1", EntityLabel::Fac),
];

static FACILITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b[A-Z][A-Za-z'-]+(?:[ \t]+[A-Z][A-Za-z'-]+)*[ \t]+(?:Hospital|Clinic|Medical Center|Warehouse|Depot|Yard|Plant|Gate|Camp)\b",
    )
    .expect("Invalid facility regex pattern")
});

/// One gazetteer entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GazetteerEntry {
    /// Surface text, matched case-sensitively on word boundaries
    pub text: String,

    /// Tag assigned to matches
    pub label: EntityLabel,
}

#[derive(Debug, Deserialize)]
struct GazetteerFile {
    #[serde(default)]
    entity: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    text: String,
    label: String,
}

/// Phrase-list entity tagger
#[derive(Debug, Clone)]
pub struct GazetteerTagger {
    labels: HashMap<String, EntityLabel>,
    phrases: Option<Regex>,
}

impl GazetteerTagger {
    /// Tagger over the built-in entries only
    pub fn builtin() -> Result<Self, ExtractorError> {
        Self::with_entries(std::iter::empty())
    }

    /// Tagger over the built-in entries plus `extra`. Extra entries override
    /// built-in labels for the same text.
    pub fn with_entries(extra: impl IntoIterator<Item = GazetteerEntry>) -> Result<Self, ExtractorError> {
        let mut labels = HashMap::new();
        for (text, label) in BUILTIN_ENTRIES {
            labels.insert(text.to_string(), *label);
        }
        for entry in extra {
            let text = entry.text.trim();
            if text.is_empty() {
                warn!("Skipping gazetteer entry with empty text");
                continue;
            }
            labels.insert(text.to_string(), entry.label);
        }

        let phrases = Self::compile(&labels)?;
        debug!("Gazetteer ready with {} entries", labels.len());
        Ok(Self { labels, phrases })
    }

    /// Built-in entries plus the file at `path`, if given
    pub fn load(path: Option<&Path>) -> Result<Self, ExtractorError> {
        match path {
            Some(path) => Self::with_entries(read_entries(path)?),
            None => Self::builtin(),
        }
    }

    /// Number of phrases known to the tagger
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the tagger knows no phrases
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Longest phrases first so the alternation prefers "Al Khobar" over "Khobar"
    fn compile(labels: &HashMap<String, EntityLabel>) -> Result<Option<Regex>, ExtractorError> {
        if labels.is_empty() {
            return Ok(None);
        }
        let mut phrases: Vec<&str> = labels.keys().map(String::as_str).collect();
        phrases.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let alternation = phrases
            .iter()
            .map(|p| regex::escape(p))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"\b(?:{})\b", alternation))
            .map(Some)
            .map_err(|e| ExtractorError::Gazetteer(format!("Failed to compile phrase list: {}", e)))
    }
}

impl EntityTagger for GazetteerTagger {
    fn tag(&self, text: &str) -> Vec<EntitySpan> {
        let mut spans = Vec::new();

        if let Some(phrases) = &self.phrases {
            for mat in phrases.find_iter(text) {
                if let Some(label) = self.labels.get(mat.as_str()) {
                    spans.push(EntitySpan {
                        text: mat.as_str().to_string(),
                        label: *label,
                        start: mat.start(),
                        end: mat.end(),
                    });
                }
            }
        }

        for mat in FACILITY_PATTERN.find_iter(text) {
            spans.push(EntitySpan {
                text: mat.as_str().to_string(),
                label: EntityLabel::Fac,
                start: mat.start(),
                end: mat.end(),
            });
        }

        remove_overlaps(&mut spans);
        spans
    }
}

/// Sort by position and drop spans overlapping an earlier (or longer) one
fn remove_overlaps(spans: &mut Vec<EntitySpan>) {
    spans.sort_by_key(|s| (s.start, std::cmp::Reverse(s.end - s.start)));
    let mut kept: Vec<EntitySpan> = Vec::with_capacity(spans.len());
    for span in spans.drain(..) {
        if kept.last().is_some_and(|last| span.start < last.end) {
            continue;
        }
        kept.push(span);
    }
    *spans = kept;
}

/// Read `[[entity]]` tables from a gazetteer file
pub fn read_entries(path: &Path) -> Result<Vec<GazetteerEntry>, ExtractorError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        ExtractorError::Gazetteer(format!("Cannot read {}: {}", path.display(), e))
    })?;
    let file: GazetteerFile = toml::from_str(&contents)?;

    file.entity
        .into_iter()
        .map(|raw| {
            let label = EntityLabel::parse(&raw.label).ok_or_else(|| {
                ExtractorError::Gazetteer(format!(
                    "Unknown label '{}' for entry '{}' in {}",
                    raw.label,
                    raw.text,
                    path.display()
                ))
            })?;
            Ok(GazetteerEntry { text: raw.text, label })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn labels_of(spans: &[EntitySpan]) -> Vec<(&str, EntityLabel)> {
        spans.iter().map(|s| (s.text.as_str(), s.label)).collect()
    }

    #[test]
    fn test_builtin_places() {
        let tagger = GazetteerTagger::builtin().unwrap();
        let spans = tagger.tag("Trucks left Dammam for the Red Sea corridor");
        assert_eq!(
            labels_of(&spans),
            vec![("Dammam", EntityLabel::Gpe), ("Red Sea", EntityLabel::Loc)]
        );
        assert_eq!(spans[0].start, 12);
        assert_eq!(spans[0].end, 18);
    }

    #[test]
    fn test_longest_phrase_wins() {
        let tagger = GazetteerTagger::builtin().unwrap();
        let spans = tagger.tag("Materials staged in Al Khobar");
        assert_eq!(labels_of(&spans), vec![("Al Khobar", EntityLabel::Gpe)]);
    }

    #[test]
    fn test_matching_is_case_sensitive_and_word_bounded() {
        let tagger = GazetteerTagger::builtin().unwrap();
        assert!(tagger.tag("the riyadh office").is_empty());
        assert!(tagger.tag("Riyadhs").is_empty());
    }

    #[test]
    fn test_facility_pattern() {
        let tagger = GazetteerTagger::builtin().unwrap();
        let spans = tagger.tag("Worker transported to King Fahd Hospital");
        assert_eq!(labels_of(&spans), vec![("King Fahd Hospital", EntityLabel::Fac)]);
    }

    #[test]
    fn test_overlapping_spans_keep_longest() {
        let tagger = GazetteerTagger::builtin().unwrap();
        // "Batching Plant" is a phrase; "North Batching Plant" is the longer facility match
        let spans = tagger.tag("Forms moved to North Batching Plant today");
        assert_eq!(labels_of(&spans), vec![("North Batching Plant", EntityLabel::Fac)]);
    }

    #[test]
    fn test_extra_entries_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[[entity]]\ntext = \"Diriyah\"\nlabel = \"gpe\"\n\n[[entity]]\ntext = \"Nesma\"\nlabel = \"org\""
        )
        .unwrap();

        let tagger = GazetteerTagger::load(Some(file.path())).unwrap();
        let spans = tagger.tag("Nesma crews arrived in Diriyah");
        assert_eq!(
            labels_of(&spans),
            vec![("Nesma", EntityLabel::Org), ("Diriyah", EntityLabel::Gpe)]
        );
    }

    #[test]
    fn test_unknown_label_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[entity]]\ntext = \"Diriyah\"\nlabel = \"city\"").unwrap();

        let result = GazetteerTagger::load(Some(file.path()));
        assert!(matches!(result, Err(ExtractorError::Gazetteer(_))));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = GazetteerTagger::load(Some(Path::new("/nonexistent/places.toml")));
        assert!(matches!(result, Err(ExtractorError::Gazetteer(_))));
    }

    #[test]
    fn test_empty_entries_are_skipped() {
        let entries = vec![GazetteerEntry {
            text: "  ".to_string(),
            label: EntityLabel::Loc,
        }];
        let tagger = GazetteerTagger::with_entries(entries).unwrap();
        assert_eq!(tagger.len(), BUILTIN_ENTRIES.len());
    }
}
