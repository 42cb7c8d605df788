use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Please enter a text")]
    EmptyInput,

    #[error("Please provide a text with at least {min} characters...")]
    TooShort { min: usize, actual: usize },

    #[error("linguistic analysis failed: {0}")]
    Analysis(String),

    #[error("sentiment analysis failed: {0}")]
    Sentiment(String),

    #[error("translation failed: {0}")]
    Translation(String),

    #[error("word cloud rendering failed: {0}")]
    Rendering(String),

    #[error(transparent)]
    Core(#[from] wordlens_core::Error),
}

impl ServiceError {
    /// True for errors caused by the user's input rather than a collaborator
    pub fn is_input_error(&self) -> bool {
        matches!(self, ServiceError::EmptyInput | ServiceError::TooShort { .. })
    }
}
