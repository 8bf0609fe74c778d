//! Incident records, categories and severities

use serde::{Deserialize, Serialize};
use std::fmt;

/// Incident category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentType {
    /// Injuries, near misses, unsafe conditions
    Safety,

    /// Defects, rework, failed inspections
    Quality,

    /// Spills, contamination, waste
    Environmental,

    /// Anything else worth recording
    Other,
}

impl IncidentType {
    /// Get the category name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentType::Safety => "safety",
            IncidentType::Quality => "quality",
            IncidentType::Environmental => "environmental",
            IncidentType::Other => "other",
        }
    }

    /// Parse a category from its wire name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "safety" => Some(IncidentType::Safety),
            "quality" => Some(IncidentType::Quality),
            "environmental" => Some(IncidentType::Environmental),
            "other" => Some(IncidentType::Other),
            _ => None,
        }
    }
}

impl fmt::Display for IncidentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for IncidentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid incident type: {}", s))
    }
}

/// How serious an incident is
///
/// Ordered so that `Minor < Moderate < Major`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// No indicator words found
    #[default]
    Minor,

    /// "moderate", "significant"
    Moderate,

    /// "major", "serious", "severe", "critical", or an explicit MAJOR header
    Major,
}

impl Severity {
    /// Get the severity name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Minor => "minor",
            Severity::Moderate => "moderate",
            Severity::Major => "major",
        }
    }

    /// Parse a severity from its wire name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "minor" => Some(Severity::Minor),
            "moderate" => Some(Severity::Moderate),
            "major" => Some(Severity::Major),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid severity: {}", s))
    }
}

/// A safety, quality or environmental event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    /// Category
    pub incident_type: IncidentType,

    /// What happened. Header-block incidents span several sentences.
    pub description: String,

    /// Severity, `Minor` unless an indicator word says otherwise
    pub severity: Severity,

    /// Response phrases found in the description, joined with `"; "`
    pub action_taken: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Minor < Severity::Moderate);
        assert!(Severity::Moderate < Severity::Major);
        assert_eq!(Severity::default(), Severity::Minor);
    }

    #[test]
    fn test_incident_type_parse_is_case_insensitive() {
        assert_eq!(IncidentType::parse("Safety"), Some(IncidentType::Safety));
        assert_eq!("ENVIRONMENTAL".parse::<IncidentType>(), Ok(IncidentType::Environmental));
        assert!(IncidentType::parse("fire").is_none());
    }

    #[test]
    fn test_incident_serializes_wire_names() {
        let incident = Incident {
            incident_type: IncidentType::Quality,
            description: "Rework required on Level 2 blockwork".to_string(),
            severity: Severity::Moderate,
            action_taken: None,
        };
        let json = serde_json::to_value(&incident).unwrap();
        assert_eq!(json["incident_type"], "quality");
        assert_eq!(json["severity"], "moderate");
        assert!(json["action_taken"].is_null());
    }
}
