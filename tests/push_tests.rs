use gotify_push::{Configuration, Error, PushArgs, push};
use httpmock::prelude::*;
use serde_json::json;
use std::net::TcpListener;

fn config(url: &str) -> Result<Configuration, Error> {
    Ok(Configuration::new("app-token", url, 1))
}

#[tokio::test]
async fn push_sends_bearer_token_and_payload() {
    let server = MockServer::start_async().await;
    let create_mock = server.mock(|when, then| {
        when.method(POST).path("/message").header("authorization", "Bearer app-token").json_body(json!({
            "message": "hi",
            "title": "",
            "priority": 1,
            "extras": { "client::display": { "contentType": "text/markdown" } }
        }));
        then.status(200).json_body(json!({
            "id": 7, "appid": 2, "message": "hi", "title": "", "priority": 1, "date": "2024-01-01T00:00:00Z"
        }));
    });
    let args = PushArgs {
        args: vec!["hi".to_string()],
        content_type: "text/markdown".to_string(),
        ..Default::default()
    };
    let request = args.resolve("", &config(&server.base_url())).unwrap();

    let created = push(&request).await.unwrap();

    assert_eq!(created.id, 7);
    create_mock.assert_calls(1);
}

#[tokio::test]
async fn push_unescapes_stdin_text() {
    let server = MockServer::start_async().await;
    let create_mock = server.mock(|when, then| {
        when.method(POST).path("/message").json_body(json!({
            "message": "line one\nline two\tend",
            "title": "Backup",
            "priority": 1,
            "extras": {}
        }));
        then.status(200).json_body(json!({}));
    });
    let request = PushArgs { title: "Backup".to_string(), ..Default::default() }
        .resolve(r"line one\nline two\tend", &config(&server.base_url()))
        .unwrap();

    push(&request).await.unwrap();

    create_mock.assert_calls(1);
}

#[tokio::test]
async fn push_keeps_literal_backslashes_when_disabled() {
    let server = MockServer::start_async().await;
    let create_mock = server.mock(|when, then| {
        when.method(POST).path("/message").json_body(json!({
            "message": r"a\nb",
            "title": "",
            "priority": 9,
            "extras": { "client::notification": { "click": { "url": "https://gotify.net" } } }
        }));
        then.status(200).json_body(json!({}));
    });
    let request = PushArgs {
        args: vec![r"a\nb".to_string()],
        priority: Some(9),
        click_url: "https://gotify.net".to_string(),
        disable_unescape: true,
        ..Default::default()
    }
    .resolve("", &config(&server.base_url()))
    .unwrap();

    push(&request).await.unwrap();

    create_mock.assert_calls(1);
}

#[tokio::test]
async fn push_keeps_server_sub_path() {
    let server = MockServer::start_async().await;
    let create_mock = server.mock(|when, then| {
        when.method(POST).path("/gotify/message");
        then.status(200).json_body(json!({ "id": 1 }));
    });
    let request = PushArgs { args: vec!["hi".to_string()], ..Default::default() }
        .resolve("", &config(&server.url("/gotify")))
        .unwrap();

    push(&request).await.unwrap();

    create_mock.assert_calls(1);
}

#[tokio::test]
async fn push_reports_server_error() {
    let server = MockServer::start_async().await;
    let create_mock = server.mock(|when, then| {
        when.method(POST).path("/message");
        then.status(401).json_body(json!({
            "error": "Unauthorized",
            "errorCode": 401,
            "errorDescription": "you need to provide a valid access token or user credentials to access this api"
        }));
    });
    let request = PushArgs { args: vec!["hi".to_string()], ..Default::default() }
        .resolve("", &config(&server.base_url()))
        .unwrap();

    let error = push(&request).await.unwrap_err();

    assert!(error.is_delivery_error());
    match error {
        Error::Delivery { status, description } => {
            assert_eq!(status, 401);
            assert!(description.starts_with("Unauthorized: you need to provide"));
        }
        other => panic!("unexpected {:?}", other),
    }
    create_mock.assert_calls(1);
}

#[tokio::test]
async fn push_reports_status_without_error_body() {
    let server = MockServer::start_async().await;
    let create_mock = server.mock(|when, then| {
        when.method(POST).path("/message");
        then.status(500).body("boom");
    });
    let request = PushArgs { args: vec!["hi".to_string()], ..Default::default() }
        .resolve("", &config(&server.base_url()))
        .unwrap();

    let error = push(&request).await.unwrap_err();

    assert_eq!(error.to_string(), "server responded with 500: Internal Server Error");
    create_mock.assert_calls(1);
}

#[tokio::test]
async fn push_connection_refused() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let request = PushArgs { args: vec!["hi".to_string()], ..Default::default() }.resolve("", &config(&url)).unwrap();

    let error = push(&request).await.unwrap_err();

    assert!(error.is_delivery_error());
}

#[test]
fn invalid_url_fails_before_delivery() {
    let args = PushArgs { args: vec!["hi".to_string()], url: "http://exa mple.com".to_string(), ..Default::default() };

    match args.resolve("", &config("http://localhost")) {
        Err(Error::InvalidUrl(url)) => assert_eq!(url, "http://exa mple.com"),
        other => panic!("unexpected {:?}", other),
    }
}
