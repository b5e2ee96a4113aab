use axum::extract::State;
use menubot_core::domain::menu::{entities::Dish, ports::MenuService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

const SAMPLE_SIZE: usize = 3;

#[utoipa::path(
    get,
    path = "/api/menu/test",
    tag = "menu",
    summary = "Sample the loaded menu dataset",
    responses(
        (status = 200, body = Vec<Dish>),
        (status = 500, description = "Menu data not loaded or empty"),
    )
)]
pub async fn get_menu_sample(State(state): State<AppState>) -> Result<Response<Vec<Dish>>, ApiError> {
    let dishes = state.service.sample(SAMPLE_SIZE).map_err(ApiError::from)?;

    Ok(Response::OK(dishes))
}
