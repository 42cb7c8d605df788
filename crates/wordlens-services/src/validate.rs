//! Input checks applied before any collaborator is called

use wordlens_core::Config;

use crate::error::{Result, ServiceError};

/// Reject empty, whitespace-only and placeholder text
pub fn validate_analysis_input(text: &str, config: &Config) -> Result<()> {
    if text.trim().is_empty() || config.is_placeholder(text) {
        return Err(ServiceError::EmptyInput);
    }
    Ok(())
}

/// Reject text shorter than `min_translation_chars` once trimmed
pub fn validate_translation_input(text: &str, config: &Config) -> Result<()> {
    if config.is_placeholder(text) {
        return Err(ServiceError::EmptyInput);
    }
    let actual = text.trim().chars().count();
    if actual < config.min_translation_chars {
        return Err(ServiceError::TooShort {
            min: config.min_translation_chars,
            actual,
        });
    }
    Ok(())
}
