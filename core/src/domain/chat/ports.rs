use std::future::Future;

use crate::domain::{chat::entities::ChatOutcome, common::entities::app_errors::CoreError};

/// LLM client trait for JSON-mode chat completions.
#[cfg_attr(test, mockall::automock)]
pub trait LlmClient: Send + Sync {
    /// Sends one system + user message pair and returns the raw completion
    /// text. Returns [`CoreError::LlmNotConfigured`] without any network
    /// I/O when no credential is available.
    fn chat_completion(
        &self,
        system_prompt: String,
        user_message: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the chat orchestrator.
pub trait ChatService: Send + Sync {
    fn handle_message(
        &self,
        user_message: String,
    ) -> impl Future<Output = ChatOutcome> + Send;
}
