//! Core types for keyword extraction

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of keywords returned when the caller does not ask for a count
pub const DEFAULT_KEYWORD_COUNT: usize = 3;

/// Validated, non-negative number of keywords to select
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordCount(usize);

impl KeywordCount {
    pub fn new(count: usize) -> Self {
        Self(count)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for KeywordCount {
    fn default() -> Self {
        Self(DEFAULT_KEYWORD_COUNT)
    }
}

impl From<usize> for KeywordCount {
    fn from(count: usize) -> Self {
        Self(count)
    }
}

impl TryFrom<i64> for KeywordCount {
    type Error = Error;

    fn try_from(count: i64) -> Result<Self> {
        usize::try_from(count)
            .map(Self)
            .map_err(|_| Error::NegativeCount(count))
    }
}

/// A distinct token with its occurrence count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedKeyword {
    pub token: String,
    pub count: usize,
}

impl RankedKeyword {
    pub fn new(token: impl Into<String>, count: usize) -> Self {
        Self {
            token: token.into(),
            count,
        }
    }
}
