use axum::{extract::State, Json};
use menubot_core::domain::order::{entities::OrderAck, ports::OrderService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    post,
    path = "/api/order/confirm",
    tag = "order",
    summary = "Acknowledge an order",
    description = "Accepts an arbitrary order payload and acknowledges it. No validation or persistence.",
    responses(
        (status = 200, body = OrderAck),
    )
)]
pub async fn confirm_order(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Response<OrderAck>, ApiError> {
    Ok(Response::OK(state.service.confirm_order(payload)))
}
