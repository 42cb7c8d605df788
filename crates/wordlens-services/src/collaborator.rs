//! Traits for the external services the workbench delegates to
//!
//! None of these are implemented here. Front ends plug in whatever
//! NLP, translation or rendering backend they have.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::language::TargetLanguage;

/// A surface token paired with its lemma
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenLemma {
    pub token: String,
    pub lemma: String,
}

/// Output of a linguistic analysis backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinguisticReport {
    #[serde(default)]
    pub tokens: Vec<TokenLemma>,
    pub text_length: usize,
    pub vowels: usize,
    pub consonants: usize,
    pub stopword_count: usize,
    #[serde(default)]
    pub stopwords: Vec<String>,
    /// Input text with stopwords removed
    #[serde(default)]
    pub without_stopwords: String,
}

/// Polarity in [-1, 1], subjectivity in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl Sentiment {
    /// Clamp both scores into their documented ranges
    pub fn clamped(self) -> Self {
        Self {
            polarity: self.polarity.clamp(-1.0, 1.0),
            subjectivity: self.subjectivity.clamp(0.0, 1.0),
        }
    }
}

/// Token, lemma, character and stopword statistics
pub trait LinguisticAnalyzer: Send + Sync {
    /// Backend name, used in logs and warnings
    fn name(&self) -> &str {
        "linguistic-analyzer"
    }

    fn analyze(&self, text: &str) -> Result<LinguisticReport>;
}

pub trait SentimentAnalyzer: Send + Sync {
    fn name(&self) -> &str {
        "sentiment-analyzer"
    }

    fn sentiment(&self, text: &str) -> Result<Sentiment>;
}

/// Machine translation from an auto-detected source language
pub trait Translator: Send + Sync {
    fn name(&self) -> &str {
        "translator"
    }

    /// Failures are reported once; callers do not retry
    fn translate(&self, text: &str, target: TargetLanguage) -> Result<String>;
}

/// Rasterized word-cloud layout
pub trait WordCloudRenderer: Send + Sync {
    fn name(&self) -> &str {
        "word-cloud"
    }

    fn render(&self, text: &str) -> Result<Vec<u8>>;
}

impl<T: LinguisticAnalyzer + ?Sized> LinguisticAnalyzer for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn analyze(&self, text: &str) -> Result<LinguisticReport> {
        (**self).analyze(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;

    struct MockAnalyzer;

    impl LinguisticAnalyzer for MockAnalyzer {
        fn analyze(&self, text: &str) -> Result<LinguisticReport> {
            Ok(LinguisticReport {
                text_length: text.chars().count(),
                ..Default::default()
            })
        }
    }

    struct MockTranslator;

    impl Translator for MockTranslator {
        fn name(&self) -> &str {
            "mock"
        }

        fn translate(&self, _text: &str, target: TargetLanguage) -> Result<String> {
            Err(ServiceError::Translation(format!(
                "no route to {}",
                target.code()
            )))
        }
    }

    #[test]
    fn test_default_names() {
        assert_eq!(MockAnalyzer.name(), "linguistic-analyzer");
        assert_eq!(MockTranslator.name(), "mock");
    }

    #[test]
    fn test_boxed_analyzer_delegates() {
        let boxed: Box<dyn LinguisticAnalyzer> = Box::new(MockAnalyzer);
        assert_eq!(boxed.analyze("héllo").unwrap().text_length, 5);
    }

    #[test]
    fn test_translator_error_passthrough() {
        let err = MockTranslator
            .translate("hola", TargetLanguage::SimplifiedChinese)
            .unwrap_err();
        assert_eq!(err.to_string(), "translation failed: no route to zh-CN");
    }

    #[test]
    fn test_sentiment_clamped() {
        let s = Sentiment {
            polarity: 1.7,
            subjectivity: -0.2,
        }
        .clamped();
        assert_eq!(s.polarity, 1.0);
        assert_eq!(s.subjectivity, 0.0);
    }
}
