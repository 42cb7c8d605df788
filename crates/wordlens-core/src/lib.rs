//! Keyword frequency extraction and shared configuration

mod config;
mod error;
mod keywords;
mod types;

pub use config::{Config, DEFAULT_PLACEHOLDERS};
pub use error::{Error, Result};
pub use keywords::{
    extract_top_keywords, frequency_table, normalize, rank_keywords, tokenize, KeywordExtractor,
};
pub use types::{KeywordCount, RankedKeyword, DEFAULT_KEYWORD_COUNT};
