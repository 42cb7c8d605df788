//! Frequency-ranked keyword extraction
//!
//! Tokens are maximal runs of ASCII letters, digits and `.`. Every other
//! character is replaced by one space before lower-casing and splitting.
//! Ranking is by descending count; equal counts keep first-appearance order.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::types::{KeywordCount, RankedKeyword};

static NON_TOKEN_RE: OnceLock<Regex> = OnceLock::new();

/// Replace each non-token character with a space and lower-case the result
pub fn normalize(text: &str) -> String {
    let re = NON_TOKEN_RE.get_or_init(|| Regex::new(r"[^a-zA-Z0-9.]").unwrap());
    re.replace_all(text, " ").to_ascii_lowercase()
}

/// Normalized tokens in input order
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Count each distinct token, keeping the order in which tokens first appear
pub fn frequency_table(tokens: &[String]) -> Vec<RankedKeyword> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut table: Vec<RankedKeyword> = Vec::new();

    for token in tokens {
        match slots.get(token.as_str()) {
            Some(&idx) => table[idx].count += 1,
            None => {
                slots.insert(token.as_str(), table.len());
                table.push(RankedKeyword::new(token.as_str(), 1));
            }
        }
    }

    table
}

/// All distinct tokens, most frequent first
pub fn rank_keywords(text: &str) -> Vec<RankedKeyword> {
    let tokens = tokenize(text);
    let mut table = frequency_table(&tokens);
    // `sort_by` is stable: ties stay in first-appearance order
    table.sort_by(|a, b| b.count.cmp(&a.count));
    table
}

/// Top `count` keywords joined by single spaces
///
/// Returns an empty string for empty input, for input without token
/// characters, and for a count of zero. Counts above the number of distinct
/// tokens return every distinct token.
pub fn extract_top_keywords(text: &str, count: KeywordCount) -> String {
    if count.get() == 0 {
        return String::new();
    }

    rank_keywords(text)
        .into_iter()
        .take(count.get())
        .map(|kw| kw.token)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extractor bound to a configured keyword count
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordExtractor {
    count: KeywordCount,
}

impl KeywordExtractor {
    pub fn new(count: KeywordCount) -> Self {
        Self { count }
    }

    pub fn count(&self) -> KeywordCount {
        self.count
    }

    pub fn extract(&self, text: &str) -> String {
        extract_top_keywords(text, self.count)
    }

    /// Ranked keywords truncated to the configured count
    pub fn top(&self, text: &str) -> Vec<RankedKeyword> {
        let mut ranked = rank_keywords(text);
        ranked.truncate(self.count.get());
        ranked
    }
}
