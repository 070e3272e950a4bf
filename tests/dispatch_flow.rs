use serde_json::json;
use tokio_test::assert_ok;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use hookmenu::enums::dispatch_outcome::DispatchOutcome;
use hookmenu::enums::dispatch_status::DispatchStatus;
use hookmenu::enums::http_method::HttpMethod;
use hookmenu::enums::menu_context::MenuContext;
use hookmenu::structs::menu::menu_click::MenuClick;
use hookmenu::structs::webhook::http_action_template::HttpActionTemplate;
use hookmenu::structs::webhook::webhook_definition::WebhookDefinition;
use crate::common::http_background;

#[tokio::test]
async fn stored_webhooks_become_menu_entries() {
    let background = http_background();
    background
        .store
        .save(&[
            WebhookDefinition::new("Slack", HttpActionTemplate::new(HttpMethod::Post, "https://hooks.example.com/a")),
            WebhookDefinition::new("Archive", HttpActionTemplate::new(HttpMethod::Get, "https://archive.example.com"))
                .with_target_patterns(vec!["*://*/*.png".to_string()]),
        ])
        .await
        .unwrap();

    assert_eq!(assert_ok!(background.menu_sync.sync().await), 2);

    let entries = background.menus.entries().await;
    assert_eq!(entries[0].id, "Slack");
    assert_eq!(entries[0].contexts, vec![MenuContext::Selection]);
    assert_eq!(entries[1].contexts, vec![MenuContext::Link, MenuContext::Image]);
    assert_eq!(entries[1].target_url_patterns, Some(vec!["*://*/*.png".to_string()]));
}

#[tokio::test]
async fn menu_click_posts_rendered_payload_with_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hook"))
        .and(header("X-Token", "abc"))
        .and(body_string(r#"{"text":"say \"hi\""}"#))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let background = http_background();
    let action = HttpActionTemplate::new(HttpMethod::Post, format!("{}/hook", server.uri()))
        .with_payload(json!({ "text": "{{content}}" }))
        .with_header("X-Token", "abc");
    background.store.save(&[WebhookDefinition::new("Slack", action)]).await.unwrap();

    let mut click = MenuClick::new("Slack");
    click.selection_text = Some("say \"hi\"".to_string());

    let outcome = assert_ok!(background.engine.handle_menu_click(&click).await);
    assert_eq!(outcome, Some(DispatchOutcome::Sent { status_code: Some(200) }));
    assert_eq!(background.reporter().current(), DispatchStatus::Default);
}

#[tokio::test]
async fn body_without_content_type_gets_text_plain() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("Content-Type", "text/plain;charset=UTF-8"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let background = http_background();
    let action = HttpActionTemplate::new(HttpMethod::Post, server.uri()).with_payload(json!("{{content}}"));
    background.store.save(&[WebhookDefinition::new("Plain", action)]).await.unwrap();

    let outcome = background.engine.dispatch_by_name("Plain", "x").await.unwrap();
    assert!(outcome.is_sent());
}

#[tokio::test]
async fn error_status_leaves_indicator_in_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let background = http_background();
    background
        .store
        .save(&[WebhookDefinition::new("Missing", HttpActionTemplate::new(HttpMethod::Post, server.uri()))])
        .await
        .unwrap();

    let outcome = background.engine.dispatch_by_name("Missing", "").await.unwrap();
    assert_eq!(outcome, DispatchOutcome::Failed { message: "Error: 404".to_string() });
    assert_eq!(background.reporter().current(), DispatchStatus::Error("Error: 404".to_string()));

    let state = background.indicator.state();
    assert_eq!(state.badge_text, "!");
    assert_eq!(state.title, "Error: 404");
}

#[tokio::test]
async fn unreachable_endpoint_reports_transport_error() {
    let background = http_background();
    background
        .store
        .save(&[WebhookDefinition::new("Down", HttpActionTemplate::new(HttpMethod::Get, "http://127.0.0.1:9/"))])
        .await
        .unwrap();

    let outcome = background.engine.dispatch_by_name("Down", "").await.unwrap();
    match outcome {
        DispatchOutcome::Failed { message } => assert!(message.starts_with("Error: ")),
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn get_with_payload_fails_without_reaching_the_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let background = http_background();
    let action = HttpActionTemplate::new(HttpMethod::Get, server.uri()).with_payload(json!({ "q": "{{content}}" }));
    background.store.save(&[WebhookDefinition::new("Search", action)]).await.unwrap();

    let outcome = background.engine.dispatch_by_name("Search", "rust").await.unwrap();
    assert_eq!(
        outcome,
        DispatchOutcome::Failed {
            message: "Error: invalid request: Request with GET/HEAD method cannot have body".to_string()
        }
    );
    assert!(matches!(background.reporter().current(), DispatchStatus::Error(_)));
}
