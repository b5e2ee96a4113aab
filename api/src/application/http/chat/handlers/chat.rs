use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use menubot_core::domain::chat::{
    entities::{ChatReply, ChatStatus},
    ports::ChatService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatRequest {
    /// Free-text user message. Missing or empty yields a 400 with a
    /// prompt-for-input body.
    #[serde(default)]
    pub message: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/chat",
    tag = "chat",
    summary = "Converse with the menu assistant",
    description = "Extracts dish preferences from the message via the LLM and returns a reply plus up to three recommendations. Error responses keep the same body shape with an empty dish list.",
    request_body = ChatRequest,
    responses(
        (status = 200, body = ChatReply),
        (status = 400, body = ChatReply, description = "Missing or empty message"),
        (status = 503, body = ChatReply, description = "LLM client not configured"),
        (status = 500, body = ChatReply, description = "LLM call or processing failed"),
    )
)]
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> impl IntoResponse {
    let outcome = state
        .service
        .handle_message(payload.message.unwrap_or_default())
        .await;

    let status = match outcome.status {
        ChatStatus::Ok => StatusCode::OK,
        ChatStatus::MissingInput => StatusCode::BAD_REQUEST,
        ChatStatus::LlmNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        ChatStatus::LlmFailed => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(outcome.reply))
}
