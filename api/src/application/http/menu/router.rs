use axum::{routing::get, Router};
use utoipa::OpenApi;

use super::handlers::get_menu_sample::{__path_get_menu_sample, get_menu_sample};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_menu_sample))]
pub struct MenuApiDoc;

pub fn menu_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/menu/test", state.args.server.root_path),
        get(get_menu_sample),
    )
}
