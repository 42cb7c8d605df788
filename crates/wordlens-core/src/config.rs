//! Configuration for keyword extraction and the application layer

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::KeywordCount;

/// Pre-filled text area contents that count as "no input"
pub const DEFAULT_PLACEHOLDERS: [&str; 3] = [
    "Enter a text in English...",
    "Write something to be translated...",
    "Write something to be analyzed...",
];

/// Workbench configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Keywords selected per extraction
    pub keyword_count: KeywordCount,

    /// Minimum trimmed characters accepted for translation
    pub min_translation_chars: usize,

    /// Max entries held by the linguistic analysis cache
    pub analysis_cache_capacity: usize,

    /// Inputs rejected as if empty
    pub placeholders: Vec<String>,
}

impl Config {
    pub fn new() -> Self {
        Self {
            keyword_count: KeywordCount::default(),
            min_translation_chars: 3,
            analysis_cache_capacity: 128,
            placeholders: DEFAULT_PLACEHOLDERS.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Read a JSON config file; absent fields keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `path` when given and present, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) if p.exists() => Self::load(p),
            _ => Ok(Self::new()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.analysis_cache_capacity == 0 {
            return Err(Error::config("analysis_cache_capacity must be at least 1"));
        }
        Ok(())
    }

    pub fn is_placeholder(&self, text: &str) -> bool {
        let trimmed = text.trim();
        self.placeholders.iter().any(|p| p.trim() == trimmed)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
