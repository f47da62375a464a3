//! Tests running the app against the HTTP client and a mock backend

use crate::common::{move_to, settle};
use agora::App;
use agora::api::ApiClient;
use agora::app::{NoticeLevel, Worker};
use agora::config::Config;
use mockito::Matcher;
use std::sync::Arc;
use std::time::Duration;

const MODELS: &str = r#"{
    "predefined_models": [
        {"name": "Personal Trainer", "description": "Builds workout plans"},
        {"name": "Scientist", "description": "Explains experiments"}
    ],
    "custom_models": [
        {"name": "Pastry Chef", "description": "Bakes", "goal": "Croissants"}
    ]
}"#;

fn config_for(server: &mockito::Server) -> Config {
    Config {
        api_url: server.url(),
        request_timeout_secs: 3,
        ..Config::default()
    }
}

#[test]
fn test_catalog_then_single_chat() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let models = server
        .mock("GET", "/models")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(MODELS)
        .create();

    let config = config_for(&server);
    let (worker, messages) = Worker::new(Arc::new(ApiClient::from_config(&config)));
    let mut app = App::new(config);
    let tasks = app.startup();
    settle(&mut app, &worker, &messages, tasks)?;
    models.assert();

    assert_eq!(app.catalog.len(), 3);
    move_to(&mut app, "Pastry Chef")?;
    app.activate_cursor();
    app.submit_dialog();
    assert_eq!(
        app.navigation.as_ref().map(|r| r.to_url("https://chat.example.com/")),
        Some("https://chat.example.com/chat/pastry_chef".to_string())
    );
    Ok(())
}

#[test]
fn test_create_posts_draft_and_launches() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let create = server
        .mock("POST", "/create_model")
        .match_body(Matcher::Json(serde_json::json!({
            "name": "Chess Coach",
            "description": "Teaches openings",
            "goal": "",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "Custom model 'Chess Coach' created successfully!"}"#)
        .create();
    let models = server
        .mock("GET", "/models")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"predefined_models": [], "custom_models": [{"name": "Chess Coach", "description": "Teaches openings"}]}"#)
        .create();

    let config = config_for(&server);
    let (worker, messages) = Worker::new(Arc::new(ApiClient::from_config(&config)));
    let mut app = App::new(config);

    app.open_create_dialog();
    for c in "Chess Coach".chars() {
        app.dialog_input(c);
    }
    app.dialog_next_field();
    for c in "Teaches openings".chars() {
        app.dialog_input(c);
    }
    let task = app.submit_dialog().ok_or("expected a create task")?;
    settle(&mut app, &worker, &messages, vec![task])?;

    create.assert();
    models.assert();
    assert_eq!(
        app.navigation.as_ref().map(ToString::to_string),
        Some("chat/chess_coach".to_string())
    );
    assert!(app.catalog.find("Chess Coach").is_some());
    Ok(())
}

#[test]
fn test_unreachable_backend_reports_error() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let models = server
        .mock("GET", "/models")
        .with_status(502)
        .with_body("bad gateway")
        .create();

    let config = config_for(&server);
    let client = ApiClient::new(server.url(), Duration::from_secs(3));
    let (worker, messages) = Worker::new(Arc::new(client));
    let mut app = App::new(config);
    let tasks = app.startup();
    settle(&mut app, &worker, &messages, tasks)?;
    models.assert();

    assert!(app.catalog.is_empty());
    let notice = app.notices.current().ok_or("expected an error notice")?;
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.text.contains("502"));
    Ok(())
}
