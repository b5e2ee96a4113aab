use std::sync::Arc;

use axum_test::TestServer;
use clap::Parser;
use menubot_api::{
    application::http::server::{app_state::AppState, http_server::router},
    args::Args,
};
use menubot_core::{
    domain::common::{services::Service, LlmConfig},
    infrastructure::{llm::OpenAiLlmClient, menu::CsvMenuCatalog},
};
use axum::http::StatusCode;
use serde_json::{json, Value};

const MENU_CSV: &str = "\
dish_id,dish_name,price,description,spice_level,is_vegetarian,cuisine_origin,dish_type
1,Chicken Curry,12.50,Rich and creamy,hot,no,Indian,Main Course
2,Paneer Tikka,9.00,Char-grilled cottage cheese,medium,yes,Indian,Appetizer
3,Gulab Jamun,5.00,Syrup-soaked dumplings,mild,yes,Indian,Dessert
4,Lemonade,3.50,Fresh squeezed,mild,yes,Continental,Beverage
";

/// Full stack with a real (but unconfigured) LLM client: no network I/O.
fn test_server() -> TestServer {
    let args = Args::parse_from([
        "menubot-api",
        "--root-path",
        "",
        "--allowed-origins",
        "http://localhost:3000",
    ]);

    let menu_catalog = CsvMenuCatalog::from_reader(MENU_CSV.as_bytes());
    let llm_client = OpenAiLlmClient::new(LlmConfig {
        api_key: None,
        model: "gpt-3.5-turbo".to_string(),
        base_url: "https://api.openai.com/v1".to_string(),
    });
    let service = Service::new(menu_catalog, llm_client, "Social Menu".to_string());

    let state = AppState::new(Arc::new(args), service);
    TestServer::new(router(state).expect("router")).expect("test server")
}

/// Same stack, but with a catalog that failed to load.
fn test_server_with_empty_menu() -> TestServer {
    let args = Args::parse_from([
        "menubot-api",
        "--root-path",
        "",
        "--allowed-origins",
        "http://localhost:3000",
    ]);

    let menu_catalog = CsvMenuCatalog::default();
    let llm_client = OpenAiLlmClient::new(LlmConfig {
        api_key: None,
        model: "gpt-3.5-turbo".to_string(),
        base_url: "https://api.openai.com/v1".to_string(),
    });
    let service = Service::new(menu_catalog, llm_client, "Social Menu".to_string());

    let state = AppState::new(Arc::new(args), service);
    TestServer::new(router(state).expect("router")).expect("test server")
}

#[tokio::test]
async fn home_reports_liveness() {
    let server = test_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    response.assert_text("Menu-Bot Backend is running!");
}

#[tokio::test]
async fn chat_without_a_message_is_a_bad_request_with_the_chat_body_shape() {
    let server = test_server();

    let response = server.post("/api/chat").json(&json!({})).await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["bot_response"], "Please send a message!");
    assert_eq!(body["recommended_dishes"], json!([]));
}

#[tokio::test]
async fn chat_with_an_empty_message_is_a_bad_request() {
    let server = test_server();

    let response = server.post("/api/chat").json(&json!({"message": ""})).await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["recommended_dishes"], json!([]));
}

#[tokio::test]
async fn chat_with_an_unconfigured_llm_is_service_unavailable() {
    let server = test_server();

    let response = server
        .post("/api/chat")
        .json(&json!({"message": "anything spicy?"}))
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(
        body["bot_response"],
        "I'm sorry, my brain isn't connected right now. Please try again later!"
    );
    assert_eq!(body["recommended_dishes"], json!([]));
}

#[tokio::test]
async fn menu_sample_returns_the_first_three_dishes() {
    let server = test_server();

    let response = server.get("/api/menu/test").await;

    response.assert_status_ok();
    let body: Value = response.json();
    let names: Vec<&str> = body
        .as_array()
        .expect("array body")
        .iter()
        .map(|d| d["dish_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Chicken Curry", "Paneer Tikka", "Gulab Jamun"]);
}

#[tokio::test]
async fn menu_sample_with_an_empty_dataset_is_an_internal_error() {
    let server = test_server_with_empty_menu();

    let response = server.get("/api/menu/test").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Menu data not loaded or empty.");
}

#[tokio::test]
async fn order_confirm_acknowledges_any_payload() {
    let server = test_server();

    let response = server
        .post("/api/order/confirm")
        .json(&json!({"items": [{"dish_id": "1", "quantity": 2}]}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body["message"],
        "Order received! (Not yet integrated with accounting)"
    );
}

#[tokio::test]
async fn llm_probe_reports_unconfigured_client_as_service_unavailable() {
    let server = test_server();

    let response = server.get("/api/test-llm").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["status"], "error");
}
