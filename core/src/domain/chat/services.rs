use crate::domain::{
    chat::{
        entities::{ChatOutcome, ChatReply, ChatStatus},
        extraction::{parse_completion, IntentExtraction},
        ports::{ChatService, LlmClient},
        prompt::build_system_prompt,
    },
    common::{entities::app_errors::CoreError, generate_uuid_v7, services::Service},
    menu::{
        filter::filter_dishes,
        ports::MenuCatalog,
        value_objects::{DishPreferences, Recommendation},
    },
};

pub const MISSING_INPUT_REPLY: &str = "Please send a message!";
pub const NOT_CONFIGURED_REPLY: &str =
    "I'm sorry, my brain isn't connected right now. Please try again later!";
pub const AI_FAILURE_REPLY: &str =
    "Sorry, something went wrong with the AI. Please try again later.";
pub const NO_MATCH_SUFFIX: &str = "\n\nI couldn't find any dishes matching those specific preferences. Can I suggest something else, or would you like to refine your choice?";

const MAX_RECOMMENDATIONS: usize = 3;

impl<M, L> ChatService for Service<M, L>
where
    M: MenuCatalog,
    L: LlmClient,
{
    async fn handle_message(&self, user_message: String) -> ChatOutcome {
        if user_message.is_empty() {
            return ChatOutcome {
                status: ChatStatus::MissingInput,
                reply: ChatReply::text(MISSING_INPUT_REPLY),
            };
        }

        let request_id = generate_uuid_v7();
        let system_prompt = build_system_prompt(&self.restaurant_name);

        let completion = match self
            .llm_client
            .chat_completion(system_prompt, user_message)
            .await
        {
            Ok(completion) => completion,
            Err(CoreError::LlmNotConfigured) => {
                tracing::warn!(%request_id, "chat rejected: LLM client is not configured");
                return ChatOutcome {
                    status: ChatStatus::LlmNotConfigured,
                    reply: ChatReply::text(NOT_CONFIGURED_REPLY),
                };
            }
            Err(err) => {
                tracing::error!(%request_id, "LLM chat call failed: {err}");
                return ChatOutcome {
                    status: ChatStatus::LlmFailed,
                    reply: ChatReply::text(AI_FAILURE_REPLY),
                };
            }
        };

        let (mut bot_response, preferences) = match parse_completion(&completion) {
            IntentExtraction::Structured { reply, preferences } => {
                tracing::debug!(%request_id, ?preferences, "extracted preferences");
                (reply, preferences)
            }
            IntentExtraction::Unstructured(raw) => {
                tracing::debug!(%request_id, "completion was not structured JSON, passing through");
                (raw, DishPreferences::default())
            }
        };

        let mut recommended_dishes = Vec::new();
        if !preferences.is_empty() {
            let dishes = self.menu_catalog.dishes();
            let matches = filter_dishes(&preferences, &dishes);
            if matches.is_empty() {
                bot_response.push_str(NO_MATCH_SUFFIX);
            } else {
                recommended_dishes = matches
                    .into_iter()
                    .take(MAX_RECOMMENDATIONS)
                    .map(Recommendation::from)
                    .collect();
            }
        }

        ChatOutcome::ok(ChatReply {
            bot_response,
            recommended_dishes,
        })
    }
}
