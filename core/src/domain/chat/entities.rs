use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::menu::value_objects::Recommendation;

/// Client-facing chat turn: the assistant's prose plus at most three
/// recommendations. Error outcomes keep this exact shape with an empty
/// dish list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChatReply {
    pub bot_response: String,
    pub recommended_dishes: Vec<Recommendation>,
}

impl ChatReply {
    pub fn text(bot_response: impl Into<String>) -> Self {
        Self {
            bot_response: bot_response.into(),
            recommended_dishes: Vec::new(),
        }
    }
}

/// How a chat turn terminated. The transport layer maps this to an HTTP
/// status; the orchestrator itself never raises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatStatus {
    Ok,
    MissingInput,
    LlmNotConfigured,
    LlmFailed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatOutcome {
    pub status: ChatStatus,
    pub reply: ChatReply,
}

impl ChatOutcome {
    pub fn ok(reply: ChatReply) -> Self {
        Self {
            status: ChatStatus::Ok,
            reply,
        }
    }
}
