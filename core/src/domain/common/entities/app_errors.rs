use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("LLM client is not configured")]
    LlmNotConfigured,

    #[error("LLM service error: {0}")]
    ExternalServiceError(String),

    #[error("menu dataset is not loaded or empty")]
    MenuUnavailable,
}
