//! Application layer: collaborator boundaries, input validation and caching

pub mod cache;
pub mod collaborator;
mod error;
pub mod language;
pub mod validate;
pub mod workbench;

pub use cache::{AnalysisCache, CacheStats, CachedAnalyzer};
pub use collaborator::{
    LinguisticAnalyzer, LinguisticReport, Sentiment, SentimentAnalyzer, TokenLemma, Translator,
    WordCloudRenderer,
};
pub use error::{Result, ServiceError};
pub use language::{Activity, TargetLanguage};
pub use workbench::{SentimentOutcome, TextAnalysis, TranslationOutcome, Warning, Workbench};
