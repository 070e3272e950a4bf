use std::sync::Arc;
use async_trait::async_trait;
use serde_json::{json, Value};
use hookmenu::enums::http_method::HttpMethod;
use hookmenu::enums::transport_error::TransportError;
use hookmenu::structs::transport::http_request::HttpRequest;
use hookmenu::structs::transport::transport_response::TransportResponse;
use hookmenu::structs::webhook::http_action_template::HttpActionTemplate;
use hookmenu::structs::webhook::webhook_definition::WebhookDefinition;
use hookmenu::traits::transport::Transport;
use hookmenu::ui::bridge_server::routes;
use hookmenu::workers::background::Background;
use crate::common::background_with;

struct AcceptingTransport;

#[async_trait]
impl Transport for AcceptingTransport {
    async fn send(&self, _request: HttpRequest) -> Result<TransportResponse, TransportError> {
        Ok(TransportResponse::with_status(200))
    }
}

async fn background() -> Arc<Background> {
    let background = background_with(Arc::new(AcceptingTransport));
    background
        .store
        .save(&[WebhookDefinition::new("Slack", HttpActionTemplate::new(HttpMethod::Post, "https://hooks.example.com"))])
        .await
        .unwrap();
    Arc::new(background)
}

fn json_body(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap()
}

#[tokio::test]
async fn lifecycle_installed_builds_menus() {
    let background = background().await;
    let api = routes(Arc::clone(&background));

    let res = warp::test::request().method("POST").path("/lifecycle/installed").reply(&api).await;
    assert_eq!(res.status(), 200);
    assert_eq!(json_body(res.body()), json!({ "menus": 1 }));

    let res = warp::test::request().method("GET").path("/menus").reply(&api).await;
    let menus = json_body(res.body());
    assert_eq!(menus[0]["id"], "Slack");
    assert_eq!(menus[0]["contexts"], json!(["selection"]));
}

#[tokio::test]
async fn unknown_lifecycle_event_is_not_found() {
    let api = routes(background().await);
    let res = warp::test::request().method("POST").path("/lifecycle/uninstalled").reply(&api).await;
    assert_eq!(res.status(), 404);
}

#[tokio::test]
async fn menu_click_dispatches() {
    let api = routes(background().await);

    let res = warp::test::request()
        .method("POST")
        .path("/menus/clicked")
        .json(&json!({ "menuItemId": "Slack", "selectionText": "hello" }))
        .reply(&api)
        .await;
    assert_eq!(res.status(), 200);
    assert_eq!(json_body(res.body()), json!({ "outcome": "sent", "status_code": 200 }));
}

#[tokio::test]
async fn click_on_unknown_entry_is_ignored() {
    let api = routes(background().await);

    let res = warp::test::request()
        .method("POST")
        .path("/menus/clicked")
        .json(&json!({ "menuItemId": "Nope" }))
        .reply(&api)
        .await;
    assert_eq!(json_body(res.body()), json!({ "handled": false }));
}

#[tokio::test]
async fn icon_click_without_webhook_opens_options() {
    let api = routes(background().await);

    let res = warp::test::request().method("POST").path("/action/clicked").json(&json!({})).reply(&api).await;
    assert_eq!(res.status(), 200);
    assert!(json_body(res.body())["options"].as_str().unwrap().ends_with("config.toml"));

    let res = warp::test::request()
        .method("POST")
        .path("/action/clicked")
        .json(&json!({ "webhook": "Unknown" }))
        .reply(&api)
        .await;
    assert_eq!(res.status(), 404);
}

#[tokio::test]
async fn set_browser_icon_message_updates_indicator() {
    let background = background().await;
    let api = routes(Arc::clone(&background));

    let res = warp::test::request()
        .method("POST")
        .path("/messages")
        .json(&json!({ "type": "SET_BROWSER_ICON", "status": "Error", "title": "Options invalid" }))
        .reply(&api)
        .await;
    assert_eq!(json_body(res.body()), json!({ "handled": true }));

    let res = warp::test::request().method("GET").path("/indicator").reply(&api).await;
    let body = json_body(res.body());
    assert_eq!(body["indicator"]["badge_text"], "!");
    assert_eq!(body["indicator"]["title"], "Options invalid");
    assert_eq!(body["detail"], "Options invalid");

    let res = warp::test::request()
        .method("POST")
        .path("/messages")
        .json(&json!({ "type": "SOMETHING_ELSE" }))
        .reply(&api)
        .await;
    assert_eq!(json_body(res.body()), json!({ "handled": false }));
}

#[tokio::test]
async fn options_edits_are_saved_after_the_debounce() {
    let background = background().await;
    let api = routes(Arc::clone(&background));

    let res = warp::test::request().method("GET").path("/options").reply(&api).await;
    assert_eq!(res.status(), 200);
    assert_eq!(json_body(res.body())["webhooks"][0]["heading"], "Webhook 1: Slack");

    let res = warp::test::request()
        .method("POST")
        .path("/options/edit")
        .json(&json!({ "op": "add_webhook" }))
        .reply(&api)
        .await;
    assert_eq!(json_body(res.body())["result"], json!({ "index": 1 }));

    for edit in [
        json!({ "op": "set_name", "index": 1, "name": "Notes" }),
        json!({ "op": "set_url", "index": 1, "url": "https://notes.example/api" }),
        json!({ "op": "set_target_patterns", "index": 1, "text": "https://*/*.png\n" }),
    ] {
        let res = warp::test::request().method("POST").path("/options/edit").json(&edit).reply(&api).await;
        assert_eq!(res.status(), 200);
    }

    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    let saved = background.store.load().await.unwrap();
    assert_eq!(saved.len(), 2);
    assert_eq!(saved[1].name, "Notes");
    assert_eq!(saved[1].action.url, "https://notes.example/api");
    assert_eq!(saved[1].target_url_patterns, vec!["https://*/*.png".to_string()]);
}

#[tokio::test]
async fn bad_options_edit_is_a_client_error() {
    let api = routes(background().await);

    let res = warp::test::request()
        .method("POST")
        .path("/options/edit")
        .json(&json!({ "op": "set_url", "index": 9, "url": "https://x" }))
        .reply(&api)
        .await;
    assert_eq!(res.status(), 400);
}
