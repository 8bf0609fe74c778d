//! Sentence spans and named-entity spans produced by the language backend

/// Named-entity tag vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityLabel {
    /// A person
    Person,

    /// Companies, agencies, contractors
    Org,

    /// Countries, cities, provinces
    Gpe,

    /// Non-political locations: seas, valleys, named areas
    Loc,

    /// Buildings, hospitals, gates, yards
    Fac,
}

impl EntityLabel {
    /// Get the label name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityLabel::Person => "person",
            EntityLabel::Org => "org",
            EntityLabel::Gpe => "gpe",
            EntityLabel::Loc => "loc",
            EntityLabel::Fac => "fac",
        }
    }

    /// Parse a label from its name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "person" => Some(EntityLabel::Person),
            "org" => Some(EntityLabel::Org),
            "gpe" => Some(EntityLabel::Gpe),
            "loc" => Some(EntityLabel::Loc),
            "fac" => Some(EntityLabel::Fac),
            _ => None,
        }
    }

    /// Whether the label names a place a task can happen at
    pub fn is_location_like(&self) -> bool {
        matches!(self, EntityLabel::Gpe | EntityLabel::Loc | EntityLabel::Fac)
    }
}

impl std::str::FromStr for EntityLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid entity label: {}", s))
    }
}

/// A labeled sub-range of a sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpan {
    /// The covered text
    pub text: String,

    /// Tag
    pub label: EntityLabel,

    /// Byte offset of the span start, relative to the tagged text
    pub start: usize,

    /// Byte offset one past the span end, relative to the tagged text
    pub end: usize,
}

/// A sentence-like span of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// The sentence text, a trimmed verbatim slice of the document
    pub text: String,

    /// Byte offset of the sentence in the document
    pub start: usize,

    /// Byte offset one past the sentence end in the document
    pub end: usize,

    /// Entities found inside the sentence, in order of position
    pub entities: Vec<EntitySpan>,
}

impl Sentence {
    /// First entity whose label is location-like
    pub fn first_location_entity(&self) -> Option<&EntitySpan> {
        self.entities.iter().find(|e| e.label.is_location_like())
    }
}
