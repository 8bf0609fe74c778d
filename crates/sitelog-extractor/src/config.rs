//! Configuration for the Extractor

use crate::error::ExtractorError;
use crate::lexicon::DEFAULT_KNOWN_SITES;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Known site names, checked in order before any header pattern
    pub known_sites: Vec<String>,

    /// A site name from a header pattern must be longer than this (characters)
    pub min_site_name_chars: usize,

    /// Incident header blocks shorter than this are bare headers (characters)
    pub min_incident_block_chars: usize,

    /// Sentences shorter than this are never tasks (characters)
    pub min_task_chars: usize,

    /// Bullet content must be longer than this to count as a task (characters)
    pub min_bullet_chars: usize,

    /// Extra named-entity entries, loaded once at startup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gazetteer_path: Option<PathBuf>,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.known_sites.iter().any(|s| s.trim().is_empty()) {
            return Err("known_sites cannot contain empty names".to_string());
        }
        if self.min_incident_block_chars == 0 {
            return Err("min_incident_block_chars must be greater than 0".to_string());
        }
        if self.min_task_chars == 0 {
            return Err("min_task_chars must be greater than 0".to_string());
        }
        if self.min_bullet_chars == 0 {
            return Err("min_bullet_chars must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Use an extra gazetteer file
    pub fn with_gazetteer(mut self, path: impl Into<PathBuf>) -> Self {
        self.gazetteer_path = Some(path.into());
        self
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ExtractorError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            known_sites: DEFAULT_KNOWN_SITES.iter().map(|s| s.to_string()).collect(),
            min_site_name_chars: 3,
            min_incident_block_chars: 80,
            min_task_chars: 25,
            min_bullet_chars: 10,
            gazetteer_path: None,
        }
    }
}
