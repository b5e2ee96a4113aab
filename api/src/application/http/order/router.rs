use axum::{routing::post, Router};
use utoipa::OpenApi;

use super::handlers::confirm_order::{__path_confirm_order, confirm_order};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(confirm_order))]
pub struct OrderApiDoc;

pub fn order_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/order/confirm", state.args.server.root_path),
        post(confirm_order),
    )
}
