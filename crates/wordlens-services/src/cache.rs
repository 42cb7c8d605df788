//! Bounded LRU cache for linguistic analysis results
//!
//! Entries are keyed by the SHA-256 digest of the exact input text. When
//! the cache is full, the entry with the oldest access stamp is evicted.

use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use tracing::debug;

use crate::collaborator::{LinguisticAnalyzer, LinguisticReport};
use crate::error::Result;

type Key = [u8; 32];

fn cache_key(text: &str) -> Key {
    let mut key = [0u8; 32];
    key.copy_from_slice(&Sha256::digest(text.as_bytes()));
    key
}

#[derive(Debug)]
struct Entry {
    report: LinguisticReport,
    last_used: u64,
}

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<Key, Entry>,
    clock: u64,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl CacheState {
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }
}

/// Hit/miss counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub len: usize,
}

#[derive(Debug)]
pub struct AnalysisCache {
    capacity: usize,
    state: RwLock<CacheState>,
}

impl AnalysisCache {
    /// `capacity` is raised to 1 if zero
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            state: RwLock::new(CacheState::default()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, text: &str) -> Option<LinguisticReport> {
        let key = cache_key(text);
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let now = state.tick();

        let found = state.entries.get_mut(&key).map(|entry| {
            entry.last_used = now;
            entry.report.clone()
        });

        if found.is_some() {
            state.hits += 1;
        } else {
            state.misses += 1;
        }
        found
    }

    pub fn insert(&self, text: &str, report: LinguisticReport) {
        let key = cache_key(text);
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let now = state.tick();

        if !state.entries.contains_key(&key) && state.entries.len() >= self.capacity {
            let oldest = state
                .entries
                .iter()
                .min_by_key(|(_, e)| e.last_used)
                .map(|(k, _)| *k);
            if let Some(oldest) = oldest {
                state.entries.remove(&oldest);
                state.evictions += 1;
                debug!(capacity = self.capacity, "evicted least recently used analysis");
            }
        }

        state.entries.insert(
            key,
            Entry {
                report,
                last_used: now,
            },
        );
    }

    pub fn contains(&self, text: &str) -> bool {
        let key = cache_key(text);
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.entries.clear();
    }

    pub fn stats(&self) -> CacheStats {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        CacheStats {
            hits: state.hits,
            misses: state.misses,
            evictions: state.evictions,
            len: state.entries.len(),
        }
    }
}

/// Analyzer wrapper that consults an [`AnalysisCache`] first
///
/// Failed analyses are not cached.
pub struct CachedAnalyzer<A> {
    inner: A,
    cache: AnalysisCache,
}

impl<A: LinguisticAnalyzer> CachedAnalyzer<A> {
    pub fn new(inner: A, capacity: usize) -> Self {
        Self {
            inner,
            cache: AnalysisCache::new(capacity),
        }
    }

    pub fn cache(&self) -> &AnalysisCache {
        &self.cache
    }
}

impl<A: LinguisticAnalyzer> LinguisticAnalyzer for CachedAnalyzer<A> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn analyze(&self, text: &str) -> Result<LinguisticReport> {
        if let Some(report) = self.cache.get(text) {
            debug!(analyzer = self.inner.name(), "analysis cache hit");
            return Ok(report);
        }

        debug!(analyzer = self.inner.name(), "analysis cache miss");
        let report = self.inner.analyze(text)?;
        self.cache.insert(text, report.clone());
        Ok(report)
    }
}
