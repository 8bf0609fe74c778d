//! Blocker records and cause categories

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a blocker exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockerCause {
    /// Late or short material supply
    MaterialDelay,

    /// Broken or unavailable plant and machinery
    EquipmentFailure,

    /// Rain, wind, storms
    Weather,

    /// Waiting on a permit or sign-off
    ApprovalDelay,
}

impl BlockerCause {
    /// Get the cause name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockerCause::MaterialDelay => "material_delay",
            BlockerCause::EquipmentFailure => "equipment_failure",
            BlockerCause::Weather => "weather",
            BlockerCause::ApprovalDelay => "approval_delay",
        }
    }

    /// Parse a cause from its wire name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "material_delay" => Some(BlockerCause::MaterialDelay),
            "equipment_failure" => Some(BlockerCause::EquipmentFailure),
            "weather" => Some(BlockerCause::Weather),
            "approval_delay" => Some(BlockerCause::ApprovalDelay),
            _ => None,
        }
    }
}

impl fmt::Display for BlockerCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BlockerCause {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid blocker cause: {}", s))
    }
}

/// An issue holding up progress on site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blocker {
    /// The sentence describing the issue, trimmed
    pub issue: String,

    /// Task held up by this issue.
    ///
    /// Reserved: the classifier never links blockers to tasks, so this is
    /// always `None` today.
    pub affected_task: Option<String>,

    /// Cause category, if one of the cause groups matched
    pub cause: Option<BlockerCause>,
}

impl Blocker {
    /// Create a blocker with the given cause
    pub fn new(issue: impl Into<String>, cause: Option<BlockerCause>) -> Self {
        Self {
            issue: issue.into(),
            affected_task: None,
            cause,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cause_round_trips_through_str() {
        for cause in [
            BlockerCause::MaterialDelay,
            BlockerCause::EquipmentFailure,
            BlockerCause::Weather,
            BlockerCause::ApprovalDelay,
        ] {
            assert_eq!(BlockerCause::parse(cause.as_str()), Some(cause));
        }
        assert!("traffic".parse::<BlockerCause>().is_err());
    }

    #[test]
    fn test_new_blocker_has_no_affected_task() {
        let blocker = Blocker::new("Crane waiting on repair", Some(BlockerCause::EquipmentFailure));
        assert!(blocker.affected_task.is_none());
    }

    #[test]
    fn test_cause_serializes_snake_case() {
        let json = serde_json::to_string(&BlockerCause::MaterialDelay).unwrap();
        assert_eq!(json, "\"material_delay\"");
    }
}
