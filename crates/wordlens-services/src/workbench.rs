//! Request handling for each menu activity
//!
//! Input problems are returned as errors. Collaborator failures are logged
//! and turned into [`Warning`]s so a front end can still show partial results.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};
use wordlens_core::{Config, KeywordExtractor, RankedKeyword};

use crate::cache::{CacheStats, CachedAnalyzer};
use crate::collaborator::{
    LinguisticAnalyzer, LinguisticReport, Sentiment, SentimentAnalyzer, Translator,
    WordCloudRenderer,
};
use crate::error::{Result, ServiceError};
use crate::language::TargetLanguage;
use crate::validate::{validate_analysis_input, validate_translation_input};

/// A collaborator failure reported to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub service: String,
    pub message: String,
}

impl Warning {
    fn from_error(service: &str, err: &ServiceError) -> Self {
        warn!(service, error = %err, "collaborator failed");
        Self {
            service: service.to_string(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.service, self.message)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TextAnalysis {
    /// Top keywords joined by spaces
    pub summary: String,
    pub keywords: Vec<RankedKeyword>,
    pub report: Option<LinguisticReport>,
    #[serde(skip)]
    pub word_cloud: Option<Vec<u8>>,
    pub warnings: Vec<Warning>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TranslationOutcome {
    pub target: TargetLanguage,
    pub translated: Option<String>,
    pub warnings: Vec<Warning>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SentimentOutcome {
    pub sentiment: Option<Sentiment>,
    pub warnings: Vec<Warning>,
}

pub struct Workbench {
    config: Config,
    extractor: KeywordExtractor,
    analyzer: Option<CachedAnalyzer<Box<dyn LinguisticAnalyzer>>>,
    sentiment: Option<Box<dyn SentimentAnalyzer>>,
    translator: Option<Box<dyn Translator>>,
    word_cloud: Option<Box<dyn WordCloudRenderer>>,
}

impl Workbench {
    /// Workbench with no collaborators attached
    pub fn new(config: Config) -> Self {
        Self {
            extractor: KeywordExtractor::new(config.keyword_count),
            config,
            analyzer: None,
            sentiment: None,
            translator: None,
            word_cloud: None,
        }
    }

    /// Attach a linguistic analyzer behind the bounded analysis cache
    pub fn with_analyzer(mut self, analyzer: impl LinguisticAnalyzer + 'static) -> Self {
        let boxed: Box<dyn LinguisticAnalyzer> = Box::new(analyzer);
        self.analyzer = Some(CachedAnalyzer::new(
            boxed,
            self.config.analysis_cache_capacity,
        ));
        self
    }

    pub fn with_sentiment(mut self, analyzer: impl SentimentAnalyzer + 'static) -> Self {
        self.sentiment = Some(Box::new(analyzer));
        self
    }

    pub fn with_translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Some(Box::new(translator));
        self
    }

    pub fn with_word_cloud(mut self, renderer: impl WordCloudRenderer + 'static) -> Self {
        self.word_cloud = Some(Box::new(renderer));
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Analysis cache counters, if an analyzer is attached
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.analyzer.as_ref().map(|a| a.cache().stats())
    }

    /// Keywords, linguistic report and word cloud for `text`
    pub fn text_analysis(&self, text: &str) -> Result<TextAnalysis> {
        validate_analysis_input(text, &self.config)?;

        let keywords = self.extractor.top(text);
        let summary = self.extractor.extract(text);
        debug!(keywords = keywords.len(), "extracted keywords");

        let mut outcome = TextAnalysis {
            summary,
            keywords,
            ..Default::default()
        };

        if let Some(analyzer) = &self.analyzer {
            match analyzer.analyze(text) {
                Ok(report) => outcome.report = Some(report),
                Err(e) => outcome.warnings.push(Warning::from_error(analyzer.name(), &e)),
            }
        }

        if let Some(renderer) = &self.word_cloud {
            match renderer.render(text) {
                Ok(image) => outcome.word_cloud = Some(image),
                Err(e) => outcome.warnings.push(Warning::from_error(renderer.name(), &e)),
            }
        }

        Ok(outcome)
    }

    /// Translate `text`; backend failures become a warning, never a retry
    pub fn translation(&self, text: &str, target: TargetLanguage) -> Result<TranslationOutcome> {
        validate_translation_input(text, &self.config)?;

        let mut outcome = TranslationOutcome {
            target,
            translated: None,
            warnings: Vec::new(),
        };

        if let Some(translator) = &self.translator {
            match translator.translate(text, target) {
                Ok(translated) => outcome.translated = Some(translated),
                Err(e) => outcome
                    .warnings
                    .push(Warning::from_error(translator.name(), &e)),
            }
        }

        Ok(outcome)
    }

    pub fn sentiment(&self, text: &str) -> Result<SentimentOutcome> {
        validate_analysis_input(text, &self.config)?;

        let mut outcome = SentimentOutcome::default();
        if let Some(analyzer) = &self.sentiment {
            match analyzer.sentiment(text) {
                Ok(s) => outcome.sentiment = Some(s.clamped()),
                Err(e) => outcome
                    .warnings
                    .push(Warning::from_error(analyzer.name(), &e)),
            }
        }

        Ok(outcome)
    }
}

impl Default for Workbench {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingTranslator;

    impl Translator for FailingTranslator {
        fn translate(&self, _text: &str, _target: TargetLanguage) -> Result<String> {
            Err(ServiceError::Translation("service unavailable".into()))
        }
    }

    struct EchoTranslator;

    impl Translator for EchoTranslator {
        fn translate(&self, text: &str, target: TargetLanguage) -> Result<String> {
            Ok(format!("[{}] {}", target.code(), text))
        }
    }

    #[test]
    fn test_text_analysis_without_collaborators() {
        let bench = Workbench::default();
        let outcome = bench
            .text_analysis("The cat sat on the mat. The cat ran.")
            .unwrap();

        assert_eq!(outcome.summary, "the cat sat");
        assert_eq!(outcome.keywords.len(), 3);
        assert!(outcome.report.is_none());
        assert!(outcome.word_cloud.is_none());
        assert!(outcome.warnings.is_empty());
        assert!(bench.cache_stats().is_none());
    }

    #[test]
    fn test_text_analysis_rejects_placeholder() {
        let bench = Workbench::default();
        let err = bench.text_analysis("Enter a text in English...").unwrap_err();
        assert!(matches!(err, ServiceError::EmptyInput));
    }

    #[test]
    fn test_translation_failure_becomes_warning() {
        let bench = Workbench::default().with_translator(FailingTranslator);
        let outcome = bench
            .translation("good morning", TargetLanguage::Spanish)
            .unwrap();

        assert!(outcome.translated.is_none());
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.warnings[0].service, "translator");
        assert!(outcome.warnings[0].message.contains("service unavailable"));
    }

    #[test]
    fn test_translation_success() {
        let bench = Workbench::default().with_translator(EchoTranslator);
        let outcome = bench
            .translation("good morning", TargetLanguage::Japanese)
            .unwrap();
        assert_eq!(outcome.translated.as_deref(), Some("[ja] good morning"));
    }

    #[test]
    fn test_translation_too_short() {
        let bench = Workbench::default().with_translator(EchoTranslator);
        assert!(matches!(
            bench.translation(" a ", TargetLanguage::Japanese),
            Err(ServiceError::TooShort { .. })
        ));
    }

    #[test]
    fn test_warning_display() {
        let w = Warning {
            service: "translator".into(),
            message: "down".into(),
        };
        assert_eq!(w.to_string(), "translator: down");
    }
}
