//! Completed task records

use serde::{Deserialize, Serialize};

/// A task reported as finished in a daily log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedTask {
    /// The sentence describing the work, trimmed
    pub task_name: String,

    /// Where the work happened (e.g. "Tower B", "Level 4", "CS-12")
    pub location: Option<String>,

    /// Crew or contractor credited with the work
    pub crew: Option<String>,
}

impl CompletedTask {
    /// Create a task with no location or crew
    pub fn new(task_name: impl Into<String>) -> Self {
        Self {
            task_name: task_name.into(),
            location: None,
            crew: None,
        }
    }

    /// Set the location
    pub fn with_location(mut self, location: Option<String>) -> Self {
        self.location = location;
        self
    }

    /// Set the crew
    pub fn with_crew(mut self, crew: Option<String>) -> Self {
        self.crew = crew;
        self
    }
}
