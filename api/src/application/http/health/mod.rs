use axum::{extract::State, routing::get, Router};
use menubot_core::domain::health::ports::HealthService;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LlmCheckResponse {
    pub status: String,
    pub llm_response: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    summary = "Liveness probe",
    responses((status = 200, body = String))
)]
pub async fn home() -> &'static str {
    "Menu-Bot Backend is running!"
}

#[utoipa::path(
    get,
    path = "/api/test-llm",
    tag = "health",
    summary = "LLM connectivity probe",
    responses(
        (status = 200, body = LlmCheckResponse),
        (status = 503, description = "LLM client not configured"),
        (status = 500, description = "LLM call failed"),
    )
)]
pub async fn test_llm(State(state): State<AppState>) -> Result<Response<LlmCheckResponse>, ApiError> {
    let llm_response = state.service.check_llm().await.map_err(ApiError::from)?;

    Ok(Response::OK(LlmCheckResponse {
        status: "success".to_string(),
        llm_response,
    }))
}

#[derive(OpenApi)]
#[openapi(paths(home, test_llm))]
pub struct HealthApiDoc;

pub fn health_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;
    let home_path = if root_path.is_empty() {
        "/".to_string()
    } else {
        root_path.clone()
    };

    Router::new()
        .route(&home_path, get(home))
        .route(&format!("{root_path}/api/test-llm"), get(test_llm))
}
