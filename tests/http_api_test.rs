//! HTTP API Integration Tests
//!
//! ルーター全体をインメモリリポジトリで組み立て、`oneshot` でリクエストを流す

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use conference_rest::adapter::config::Config;
use conference_rest::adapter::repositories::InMemoryRepository;
use conference_rest::domain::entities::conference::Conference;
use conference_rest::driver::server::create_app;
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

const CONFERENCE_JSON: &str = "application/vnd.ced+json; type=conference";
const CONFERENCE_XML: &str = "application/vnd.ced+xml; type=conference";
const SESSION_JSON: &str = "application/vnd.ced+json; type=session";
const SESSION_XML: &str = "application/vnd.ced+xml; type=session";
const BASE_JSON: &str = "application/vnd.ced+json";
const BASE_XML: &str = "application/vnd.ced+xml";

fn app() -> Router {
    create_app(
        &Config::default(),
        Arc::new(InMemoryRepository::<Conference>::new()),
    )
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

fn get(uri: &str, accept: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(accept) = accept {
        builder = builder.header(header::ACCEPT, accept);
    }
    builder.body(Body::empty()).unwrap()
}

fn with_body(method: &str, uri: &str, content_type: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn location(response: &Response) -> String {
    response.headers()[header::LOCATION]
        .to_str()
        .unwrap()
        .to_string()
}

fn content_type(response: &Response) -> String {
    response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .to_string()
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_conference_and_session_lifecycle() {
    let app = app();

    let response = send(&app, with_body("POST", "/conference", BASE_JSON, "{}")).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let conference_uri = location(&response);
    assert!(conference_uri.starts_with("/conference/"));

    let response = send(&app, get(&conference_uri, Some(CONFERENCE_JSON))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["link"].is_array());
    assert_eq!(json["link"][0]["rel"], "self");
    assert_eq!(json["link"][0]["href"], conference_uri.as_str());

    let response = send(
        &app,
        with_body(
            "POST",
            &format!("{}/session", conference_uri),
            BASE_JSON,
            r#"{"title":"Ownership in practice"}"#,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let session_uri = location(&response);
    assert!(session_uri.starts_with(&format!("{}/session/", conference_uri)));

    let response = send(&app, get(&session_uri, Some(SESSION_JSON))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Ownership in practice");

    let response = send(&app, delete(&session_uri)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, get(&session_uri, None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_then_get_matches_submitted_fields() {
    let app = app();
    let body = r#"{
        "id": "rustconf",
        "name": "RustConf",
        "tag_line": "Fearless",
        "start": "2026-09-08T09:00:00Z",
        "end": "2026-09-10T18:00:00Z"
    }"#;

    let response = send(&app, with_body("POST", "/conference", BASE_JSON, body)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(location(&response), "/conference/rustconf");

    let response = send(&app, get("/conference/rustconf", Some(CONFERENCE_JSON))).await;
    assert_eq!(content_type(&response), CONFERENCE_JSON);
    let json = body_json(response).await;
    assert_eq!(json["id"], "rustconf");
    assert_eq!(json["name"], "RustConf");
    assert_eq!(json["tag_line"], "Fearless");
    assert_eq!(json["start"], "2026-09-08T09:00:00Z");
    assert_eq!(json["end"], "2026-09-10T18:00:00Z");
}

#[tokio::test]
async fn test_accept_negotiation_per_resource_family() {
    let app = app();
    send(&app, with_body("POST", "/conference", BASE_JSON, r#"{"id":"c1"}"#)).await;
    send(
        &app,
        with_body("POST", "/conference/c1/session", BASE_JSON, r#"{"id":"s1"}"#),
    )
    .await;

    let response = send(&app, get("/conference/c1", None)).await;
    assert_eq!(content_type(&response), CONFERENCE_XML);

    let response = send(&app, get("/conference/c1", Some("text/html, application/*"))).await;
    assert_eq!(content_type(&response), CONFERENCE_JSON);

    let response = send(&app, get("/conference/c1", Some("text/html"))).await;
    assert_eq!(content_type(&response), CONFERENCE_XML);

    let response = send(&app, get("/conference/c1/session/s1", Some(BASE_JSON))).await;
    assert_eq!(content_type(&response), SESSION_JSON);

    let response = send(&app, get("/conference/c1/session/s1", Some("text/plain"))).await;
    assert_eq!(content_type(&response), SESSION_XML);

    let response = send(&app, get("/conference/c1/session", Some("*/*"))).await;
    assert_eq!(content_type(&response), SESSION_JSON);
}

#[tokio::test]
async fn test_missing_conference_statuses() {
    let app = app();

    let response = send(&app, get("/conference/nope", None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, delete("/conference/nope")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(
        &app,
        with_body("PUT", "/conference/nope", BASE_JSON, r#"{"name":"x"}"#),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(&app, get("/conference/nope/session", None)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(&app, get("/conference/nope/session/s1", None)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(
        &app,
        with_body("POST", "/conference/nope/session", BASE_JSON, "{}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_conference_then_get_is_not_found() {
    let app = app();
    send(&app, with_body("POST", "/conference", BASE_JSON, r#"{"id":"c1"}"#)).await;

    let response = send(&app, delete("/conference/c1")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, get("/conference/c1", None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_sessions_contains_each_session_once() {
    let app = app();
    send(&app, with_body("POST", "/conference", BASE_JSON, r#"{"id":"c1"}"#)).await;
    for id in ["s1", "s2"] {
        let body = format!(r#"{{"id":"{}"}}"#, id);
        send(&app, with_body("POST", "/conference/c1/session", BASE_JSON, &body)).await;
    }

    let response = send(
        &app,
        with_body("POST", "/conference/c1/session", BASE_JSON, r#"{"id":"s1"}"#),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(&app, get("/conference/c1/session", Some(BASE_JSON))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let mut ids: Vec<&str> = json["item"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap())
        .collect();
    ids.sort();
    assert_eq!(ids, vec!["s1", "s2"]);
    assert!(json["link"].is_array());

    send(&app, delete("/conference/c1/session/s1")).await;

    let response = send(&app, get("/conference/c1/session", Some(BASE_JSON))).await;
    let json = body_json(response).await;
    assert_eq!(json["item"].as_array().unwrap().len(), 1);
    assert_eq!(json["item"][0]["id"], "s2");
}

#[tokio::test]
async fn test_update_session_overwrites_only_present_fields() {
    let app = app();
    send(&app, with_body("POST", "/conference", BASE_JSON, r#"{"id":"c1"}"#)).await;
    send(
        &app,
        with_body(
            "POST",
            "/conference/c1/session",
            BASE_JSON,
            r#"{"id":"s1","title":"Traits","outline":"Static and dynamic dispatch"}"#,
        ),
    )
    .await;

    let response = send(
        &app,
        with_body(
            "PUT",
            "/conference/c1/session/s1",
            BASE_JSON,
            r#"{"id":"ignored","title":"Traits, revisited"}"#,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, get("/conference/c1/session/s1", Some(BASE_JSON))).await;
    let json = body_json(response).await;
    assert_eq!(json["id"], "s1");
    assert_eq!(json["title"], "Traits, revisited");
    assert_eq!(json["outline"], "Static and dynamic dispatch");

    let response = send(
        &app,
        with_body("PUT", "/conference/c1/session/s9", BASE_JSON, "{}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_xml_body_round_trip() {
    let app = app();
    let body = "<conference><id>xmlconf</id><name>XML Days</name></conference>";

    let response = send(&app, with_body("POST", "/conference", BASE_XML, body)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send(&app, get("/conference/xmlconf", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), CONFERENCE_XML);
    let xml = body_text(response).await;
    assert!(xml.starts_with("<conference>"));
    assert!(xml.contains("<name>XML Days</name>"));
    assert!(xml.contains("<link>"));
}

#[tokio::test]
async fn test_body_media_type_and_decoding_errors() {
    let app = app();

    let response = send(&app, with_body("POST", "/conference", "text/plain", "{}")).await;
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

    let response = send(&app, with_body("POST", "/conference", "*/*", "{}")).await;
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

    let response = send(&app, with_body("POST", "/conference", BASE_JSON, "{not json")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(
        &app,
        with_body("POST", "/conference", BASE_JSON, r#"{"id":"has space"}"#),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(
        &app,
        with_body(
            "POST",
            "/conference",
            BASE_JSON,
            r#"{"start":"2026-09-10T00:00:00Z","end":"2026-09-08T00:00:00Z"}"#,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unroutable_ids_are_rejected() {
    let app = app();

    for id in ["a%2Fb", "x%41", ".", ".."] {
        let body = format!(r#"{{"id":"{}"}}"#, id);
        let response = send(&app, with_body("POST", "/conference", BASE_JSON, &body)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "id {}", id);
    }

    send(&app, with_body("POST", "/conference", BASE_JSON, r#"{"id":"c1"}"#)).await;
    let response = send(
        &app,
        with_body("POST", "/conference/c1/session", BASE_JSON, r#"{"id":"s%201"}"#),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_created_location_routes_back() {
    let app = app();

    let response = send(
        &app,
        with_body("POST", "/conference", BASE_JSON, r#"{"id":"rust.conf-2026_v1"}"#),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let conference_uri = location(&response);

    let response = send(&app, get(&conference_uri, None)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(
        &app,
        with_body(
            "POST",
            &format!("{}/session", conference_uri),
            BASE_JSON,
            r#"{"id":"opening.keynote"}"#,
        ),
    )
    .await;
    let session_uri = location(&response);

    let response = send(&app, get(&session_uri, None)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_index_lists_resources() {
    let app = app();

    let response = send(&app, get("/", Some(BASE_JSON))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), BASE_JSON);
    let json = body_json(response).await;
    assert_eq!(json["link"][0]["rel"], "conference");
    assert_eq!(json["link"][0]["href"], "/conference");
    assert_eq!(json["link"][0]["media_type"], CONFERENCE_XML);

    let response = send(&app, get("/", None)).await;
    assert_eq!(content_type(&response), BASE_XML);
    assert!(body_text(response).await.starts_with("<resources>"));
}

#[tokio::test]
async fn test_base_uri_prefixes_locations() {
    let config = Config {
        base_uri: "http://api.example.com/".to_string(),
        ..Config::default()
    };
    let app = create_app(&config, Arc::new(InMemoryRepository::<Conference>::new()));

    let response = send(&app, with_body("POST", "/conference", BASE_JSON, r#"{"id":"c1"}"#)).await;

    assert_eq!(location(&response), "http://api.example.com/conference/c1");
}
