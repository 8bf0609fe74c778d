//! The structured record produced for one daily log

use crate::{Blocker, CompletedTask, Incident};
use chrono::NaiveDate;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde::Deserialize;

/// Header metadata of a daily log
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, Deserialize)]
pub struct LogMetadata {
    /// Date the log covers
    pub log_date: Option<NaiveDate>,

    /// Construction site or project name
    pub site_name: Option<String>,

    /// Site manager who submitted the log
    pub submitted_by: Option<String>,
}

/// Everything extracted from one daily log
///
/// The lists are only reachable through slices so the counts always equal
/// the list lengths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    metadata: LogMetadata,
    completed_tasks: Vec<CompletedTask>,
    blockers: Vec<Blocker>,
    incidents: Vec<Incident>,
}

impl ExtractionResult {
    /// Assemble a result from the metadata and the three classified lists
    pub fn new(
        metadata: LogMetadata,
        completed_tasks: Vec<CompletedTask>,
        blockers: Vec<Blocker>,
        incidents: Vec<Incident>,
    ) -> Self {
        Self {
            metadata,
            completed_tasks,
            blockers,
            incidents,
        }
    }

    /// A result with no metadata and empty lists
    pub fn empty() -> Self {
        Self::new(LogMetadata::default(), Vec::new(), Vec::new(), Vec::new())
    }

    /// Header metadata
    pub fn metadata(&self) -> &LogMetadata {
        &self.metadata
    }

    /// Date the log covers
    pub fn log_date(&self) -> Option<NaiveDate> {
        self.metadata.log_date
    }

    /// Site name
    pub fn site_name(&self) -> Option<&str> {
        self.metadata.site_name.as_deref()
    }

    /// Submitter
    pub fn submitted_by(&self) -> Option<&str> {
        self.metadata.submitted_by.as_deref()
    }

    /// Completed tasks in document order
    pub fn completed_tasks(&self) -> &[CompletedTask] {
        &self.completed_tasks
    }

    /// Blockers in document order
    pub fn blockers(&self) -> &[Blocker] {
        &self.blockers
    }

    /// Incidents: header blocks first, then sentence-level incidents
    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    /// Number of completed tasks
    pub fn total_tasks_completed(&self) -> usize {
        self.completed_tasks.len()
    }

    /// Number of blockers
    pub fn total_blockers(&self) -> usize {
        self.blockers.len()
    }

    /// Number of incidents
    pub fn total_incidents(&self) -> usize {
        self.incidents.len()
    }

    /// True when no task, blocker or incident was found
    pub fn is_empty(&self) -> bool {
        self.completed_tasks.is_empty() && self.blockers.is_empty() && self.incidents.is_empty()
    }
}

impl Serialize for ExtractionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ExtractionResult", 9)?;
        state.serialize_field("log_date", &self.metadata.log_date)?;
        state.serialize_field("site_name", &self.metadata.site_name)?;
        state.serialize_field("submitted_by", &self.metadata.submitted_by)?;
        state.serialize_field("completed_tasks", &self.completed_tasks)?;
        state.serialize_field("blockers", &self.blockers)?;
        state.serialize_field("incidents", &self.incidents)?;
        state.serialize_field("total_tasks_completed", &self.total_tasks_completed())?;
        state.serialize_field("total_blockers", &self.total_blockers())?;
        state.serialize_field("total_incidents", &self.total_incidents())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BlockerCause, IncidentType, Severity};

    fn sample() -> ExtractionResult {
        ExtractionResult::new(
            LogMetadata {
                log_date: NaiveDate::from_ymd_opt(2025, 10, 15),
                site_name: Some("SEDRA".to_string()),
                submitted_by: Some("Ahmed Al-Rashid".to_string()),
            },
            vec![CompletedTask::new("Concrete pour for Tower A slab completed")],
            vec![
                Blocker::new("Rebar delivery delayed until Friday", Some(BlockerCause::MaterialDelay)),
                Blocker::new("Waiting on municipality sign-off", None),
            ],
            vec![Incident {
                incident_type: IncidentType::Environmental,
                description: "Diesel spill near the batching area".to_string(),
                severity: Severity::Minor,
                action_taken: None,
            }],
        )
    }

    #[test]
    fn test_counts_follow_lists() {
        let result = sample();
        assert_eq!(result.total_tasks_completed(), result.completed_tasks().len());
        assert_eq!(result.total_blockers(), 2);
        assert_eq!(result.total_incidents(), 1);
        assert!(!result.is_empty());
    }

    #[test]
    fn test_empty_result() {
        let result = ExtractionResult::empty();
        assert!(result.is_empty());
        assert_eq!(result.total_tasks_completed(), 0);
        assert!(result.log_date().is_none());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["log_date"], "2025-10-15");
        assert_eq!(json["site_name"], "SEDRA");
        assert_eq!(json["total_blockers"], 2);
        assert_eq!(json["blockers"][0]["cause"], "material_delay");
        assert!(json["blockers"][1]["cause"].is_null());
        assert_eq!(json["incidents"][0]["incident_type"], "environmental");
    }
}
