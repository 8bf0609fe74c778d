//! Keyword tables used by the classifiers
//!
//! Every table is an ordered slice. Several rules pick the first matching
//! entry, so the order here is part of the behavior.

use sitelog_domain::{BlockerCause, IncidentType};

/// Words that mark a sentence as describing finished work
pub const TASK_COMPLETION_KEYWORDS: &[&str] = &[
    "completed",
    "finished",
    "done",
    "installed",
    "poured",
    "erected",
    "built",
    "constructed",
    "laid",
    "placed",
    "achieved",
    "delivered",
    "accomplished",
    "continued",
    "installation",
    "welding",
    "approved",
];

/// Section header lines that are never tasks
pub const TASK_SECTION_HEADERS: &[&str] = &["progress achieved:", "incidents and issues:"];

/// Prefixes of pure quantity summaries ("Total 40 panels fixed")
pub const SUMMARY_PREFIXES: &[&str] = &["total ", "only "];

/// Words that mark a sentence as describing a blocker
pub const BLOCKER_KEYWORDS: &[&str] = &[
    "delayed",
    "blocked",
    "waiting",
    "shortage",
    "issue",
    "problem",
    "challenge",
    "obstacle",
    "pending",
    "hold",
    "unable",
    "cannot",
    "failed",
    "missing",
    "unavailable",
];

/// Words that keep a sentence out of the blocker list even when the incident
/// detector did not claim it
pub const INCIDENT_INDICATORS: &[&str] = &[
    "incident",
    "safety incident",
    "accident",
    "injury",
    "injured",
    "tipped over",
    "fall",
    "fell",
];

/// Inspection verbs that, next to [`INSPECTION_CONTEXT`], narrate an incident follow-up
pub const INSPECTION_WORDS: &[&str] = &["inspected", "inspection"];

/// Terms that turn an inspection sentence into incident narration
pub const INSPECTION_CONTEXT: &[&str] = &["lift", "platform", "failed", "ground"];

/// Blocker cause groups, highest priority first
pub const CAUSE_GROUPS: &[(BlockerCause, &[&str])] = &[
    (
        BlockerCause::MaterialDelay,
        &["material", "supply", "delivery", "shortage", "steel", "concrete", "rebar"],
    ),
    (BlockerCause::EquipmentFailure, &["equipment", "crane", "machine"]),
    (BlockerCause::Weather, &["weather", "rain", "wind", "storm"]),
    (BlockerCause::ApprovalDelay, &["approval", "permit"]),
];

/// Incident categories, highest priority first
pub const INCIDENT_CATEGORIES: &[(IncidentType, &[&str])] = &[
    (
        IncidentType::Safety,
        &[
            "injury",
            "accident",
            "unsafe",
            "hazard",
            "ppe violation",
            "near miss",
            "first aid",
            "safety alert",
            "incident",
            "safety incident",
            "fall",
            "tipped over",
            "ambulance",
            "hospital",
            "injured",
        ],
    ),
    (
        IncidentType::Quality,
        &[
            "defect",
            "rework",
            "non-conformance",
            "quality issue",
            "failed inspection",
            "substandard",
        ],
    ),
    (
        IncidentType::Environmental,
        &["spill", "pollution", "environmental", "waste", "contamination"],
    ),
];

/// Words that make an incident major
pub const MAJOR_SEVERITY_WORDS: &[&str] = &["major", "serious", "severe", "critical"];

/// Words that make an incident moderate
pub const MODERATE_SEVERITY_WORDS: &[&str] = &["moderate", "significant"];

/// Section header lines skipped by the sentence-level incident pass
pub const INCIDENT_SECTION_HEADERS: &[&str] =
    &["incidents and issues:", "incidents:", "incident and issues"];

/// Boilerplate that is never an incident on its own
pub const INCIDENT_BOILERPLATE: &[&str] = &["crew count", "operations continue"];

/// Header markers owned by the block pass
pub const INCIDENT_HEADER_MARKERS: &[&str] = &["safety incident", "incident -"];

/// Known project sites, matched case-insensitively before any header heuristic
pub const DEFAULT_KNOWN_SITES: &[&str] = &[
    "SEDRA",
    "ALAROUS",
    "ALFULWA",
    "MARAFY",
    "MARAFY Waterfront",
    "Marina East",
    "Residential",
    "Coastal Development",
];

/// First keyword from `keywords` that occurs in `haystack`.
///
/// `haystack` is expected to be lowercased already; matching is plain
/// substring containment.
pub fn first_keyword<'a>(haystack: &str, keywords: &[&'a str]) -> Option<&'a str> {
    keywords.iter().copied().find(|kw| haystack.contains(kw))
}

/// Whether any keyword occurs in `haystack`
pub fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    first_keyword(haystack, keywords).is_some()
}
