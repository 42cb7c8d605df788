//! Translation targets and menu activities

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages offered as translation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetLanguage {
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "zh-CN")]
    SimplifiedChinese,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 3] = [
        TargetLanguage::Japanese,
        TargetLanguage::Spanish,
        TargetLanguage::SimplifiedChinese,
    ];

    /// Language code sent to the translation backend
    pub fn code(self) -> &'static str {
        match self {
            TargetLanguage::Japanese => "ja",
            TargetLanguage::Spanish => "es",
            TargetLanguage::SimplifiedChinese => "zh-CN",
        }
    }

    /// Label shown in the language picker
    pub fn label(self) -> &'static str {
        match self {
            TargetLanguage::Japanese => "日本語",
            TargetLanguage::Spanish => "espanōl",
            TargetLanguage::SimplifiedChinese => "简体中文",
        }
    }

    /// Map a picker label to a language; unknown labels select Japanese
    pub fn from_label(label: &str) -> Self {
        match label {
            "espanōl" => TargetLanguage::Spanish,
            "简体中文" => TargetLanguage::SimplifiedChinese,
            _ => TargetLanguage::Japanese,
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TargetLanguage {
    type Err = String;

    /// Accepts a language code (case-insensitive) or a picker label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(lang) = Self::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(s) || l.label() == s)
        {
            return Ok(lang);
        }
        let known: Vec<_> = Self::ALL.iter().map(|l| l.code()).collect();
        Err(format!(
            "unsupported target language '{}', expected one of: {}",
            s,
            known.join(", ")
        ))
    }
}

/// Entries of the application menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activity {
    TextAnalysis,
    Translation,
    SentimentAnalysis,
    About,
}

impl Activity {
    pub const ALL: [Activity; 4] = [
        Activity::TextAnalysis,
        Activity::Translation,
        Activity::SentimentAnalysis,
        Activity::About,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Activity::TextAnalysis => "Text Analysis",
            Activity::Translation => "Translation",
            Activity::SentimentAnalysis => "Sentiment Analysis",
            Activity::About => "About",
        }
    }
}
