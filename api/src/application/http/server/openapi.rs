use menubot_core::domain::{
    chat::entities::ChatReply,
    menu::{
        entities::Dish,
        value_objects::{DishPreferences, Recommendation},
    },
    order::entities::OrderAck,
};
use utoipa::OpenApi;

use crate::application::http::{
    chat::{handlers::chat::ChatRequest, router::ChatApiDoc},
    health::{HealthApiDoc, LlmCheckResponse},
    menu::router::MenuApiDoc,
    order::router::OrderApiDoc,
    server::api_entities::api_error::ApiErrorBody,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "MenuBot API",
        description = "Conversational restaurant-menu assistant",
    ),
    tags(
        (name = "chat", description = "Conversation endpoints"),
        (name = "menu", description = "Menu dataset diagnostics"),
        (name = "order", description = "Order acknowledgement"),
        (name = "health", description = "Liveness and connectivity probes"),
    ),
    components(schemas(
        ChatRequest,
        ChatReply,
        Dish,
        DishPreferences,
        Recommendation,
        OrderAck,
        LlmCheckResponse,
        ApiErrorBody,
    ))
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Full document with every router's paths merged in.
    pub fn build() -> utoipa::openapi::OpenApi {
        let mut doc = ApiDoc::openapi();
        doc.merge(ChatApiDoc::openapi());
        doc.merge(MenuApiDoc::openapi());
        doc.merge(OrderApiDoc::openapi());
        doc.merge(HealthApiDoc::openapi());
        doc
    }
}
