use thiserror::Error;

/// Prompt enhancer error types
#[derive(Error, Debug)]
pub enum EnhancerError {
    #[error("Please provide your OpenAI API key.")]
    MissingApiKey,

    #[error("Please provide Role, Context, or Task.")]
    EmptyInputs,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("OpenAI API error: {0}")]
    OpenAi(#[from] async_openai::error::OpenAIError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EnhancerError {
    /// True for failures caught before the remote call is made
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EnhancerError::MissingApiKey | EnhancerError::EmptyInputs | EnhancerError::Config(_)
        )
    }
}

/// Result type alias for enhancer operations
pub type Result<T> = std::result::Result<T, EnhancerError>;
