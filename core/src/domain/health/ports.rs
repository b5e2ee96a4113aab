use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// Service trait for connectivity diagnostics.
pub trait HealthService: Send + Sync {
    /// One round-trip through the configured LLM endpoint, returning the raw
    /// completion text.
    fn check_llm(&self) -> impl Future<Output = Result<String, CoreError>> + Send;
}
