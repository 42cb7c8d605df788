#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use wordlens_services::{
    LinguisticAnalyzer, LinguisticReport, Result, Sentiment, SentimentAnalyzer, ServiceError,
    TargetLanguage, TokenLemma, Translator, WordCloudRenderer,
};

const STOPWORDS: [&str; 6] = ["the", "a", "on", "of", "and", "is"];

/// Counts vowels/consonants over ASCII letters and flags a few stopwords
pub struct FakeAnalyzer {
    pub calls: Arc<AtomicUsize>,
}

impl FakeAnalyzer {
    pub fn new() -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

impl LinguisticAnalyzer for FakeAnalyzer {
    fn name(&self) -> &str {
        "fake-nlp"
    }

    fn analyze(&self, text: &str) -> Result<LinguisticReport> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let words: Vec<&str> = text.split_whitespace().collect();
        let stopwords: Vec<String> = words
            .iter()
            .filter(|w| STOPWORDS.contains(&w.to_lowercase().as_str()))
            .map(|w| w.to_string())
            .collect();
        let kept: Vec<&str> = words
            .iter()
            .copied()
            .filter(|w| !STOPWORDS.contains(&w.to_lowercase().as_str()))
            .collect();
        let vowels = text
            .chars()
            .filter(|c| "aeiouAEIOU".contains(*c))
            .count();
        let letters = text.chars().filter(|c| c.is_ascii_alphabetic()).count();

        Ok(LinguisticReport {
            tokens: words
                .iter()
                .map(|w| TokenLemma {
                    token: w.to_string(),
                    lemma: w.to_lowercase(),
                })
                .collect(),
            text_length: text.chars().count(),
            vowels,
            consonants: letters - vowels,
            stopword_count: stopwords.len(),
            stopwords,
            without_stopwords: kept.join(" "),
        })
    }
}

pub struct FixedSentiment(pub f64, pub f64);

impl SentimentAnalyzer for FixedSentiment {
    fn sentiment(&self, _text: &str) -> Result<Sentiment> {
        Ok(Sentiment {
            polarity: self.0,
            subjectivity: self.1,
        })
    }
}

pub struct UpperTranslator;

impl Translator for UpperTranslator {
    fn name(&self) -> &str {
        "upper"
    }

    fn translate(&self, text: &str, target: TargetLanguage) -> Result<String> {
        Ok(format!("{}:{}", target.code(), text.to_uppercase()))
    }
}

pub struct OfflineTranslator;

impl Translator for OfflineTranslator {
    fn name(&self) -> &str {
        "offline"
    }

    fn translate(&self, _text: &str, _target: TargetLanguage) -> Result<String> {
        Err(ServiceError::Translation("connection refused".to_string()))
    }
}

pub struct ByteRenderer;

impl WordCloudRenderer for ByteRenderer {
    fn render(&self, text: &str) -> Result<Vec<u8>> {
        if text.len() > 10_000 {
            return Err(ServiceError::Rendering("canvas too large".to_string()));
        }
        Ok(text.as_bytes().to_vec())
    }
}
