use crate::domain::{
    chat::ports::LlmClient,
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthService,
    menu::ports::MenuCatalog,
};

const PROBE_PROMPT: &str = r#"Reply with a JSON object containing a single "greeting" field."#;

impl<M, L> HealthService for Service<M, L>
where
    M: MenuCatalog,
    L: LlmClient,
{
    async fn check_llm(&self) -> Result<String, CoreError> {
        self.llm_client
            .chat_completion(PROBE_PROMPT.to_string(), "Hello!".to_string())
            .await
    }
}
