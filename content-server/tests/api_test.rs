//! Router-level tests for the content API

use axum::body::Body;
use content_server::{Config, Seed, Server, ServerState};
use http::{Request, StatusCode};
use serde_json::{Value, json};
use shared::{JourneyEntry, Project};
use tower::ServiceExt;

fn project(id: &str, order: u32) -> Project {
    serde_json::from_value(json!({ "id": id, "title": format!("Project {}", id), "order": order }))
        .unwrap()
}

fn server() -> Server {
    let seed = Seed {
        projects: vec![project("b", 1), project("a", 0), project("c", 2)],
        journey: vec![],
    };
    let config = Config::with_port(0);
    Server::new(config.clone(), ServerState::with_seed(config, seed))
}

async fn call(server: &Server, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    call_raw(server, method, uri, body.map(|body| body.to_string())).await
}

async fn call_raw(
    server: &Server,
    method: &str,
    uri: &str,
    body: Option<String>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = server.router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn ids(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_list_is_sorted_by_order() {
    let server = server();
    let (status, body) = call(&server, "GET", "/api/projects", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(ids(&body), vec!["a", "b", "c"]);
}

#[tokio::test]
async fn test_reorder_then_list() {
    let server = server();
    let batch = json!({ "items": [{ "id": "a", "order": 1 }, { "id": "b", "order": 0 }] });
    let (status, body) = call(&server, "POST", "/api/projects/reorder", Some(batch)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["updated"], 2);

    let (_, body) = call(&server, "GET", "/api/projects", None).await;
    assert_eq!(ids(&body), vec!["b", "a", "c"]);
}

#[tokio::test]
async fn test_reorder_unknown_id_is_404_without_partial_write() {
    let server = server();
    let batch = json!({ "items": [{ "id": "c", "order": 0 }, { "id": "ghost", "order": 1 }] });
    let (status, body) = call(&server, "POST", "/api/projects/reorder", Some(batch)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], 6003);
    assert!(body["error"].as_str().unwrap().contains("ghost"));

    let (_, body) = call(&server, "GET", "/api/projects", None).await;
    assert_eq!(ids(&body), vec!["a", "b", "c"]);
}

#[tokio::test]
async fn test_crud_round_trip() {
    let server = server();

    let (status, body) = call(
        &server,
        "POST",
        "/api/projects",
        Some(json!({ "title": "Fresh", "category": "web" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let created: Project = serde_json::from_value(body["data"].clone()).unwrap();
    assert_eq!(created.order, 3);
    let id = created.id.unwrap();

    let (status, body) = call(
        &server,
        "PUT",
        &format!("/api/projects?id={}", id),
        Some(json!({ "featured": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["featured"], true);
    assert_eq!(body["data"]["title"], "Fresh");

    let (status, body) = call(&server, "DELETE", &format!("/api/projects?id={}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, body) = call(&server, "DELETE", &format!("/api/projects?id={}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 6001);
}

#[tokio::test]
async fn test_create_requires_title() {
    let server = server();
    let (status, body) = call(
        &server,
        "POST",
        "/api/journey",
        Some(json!({ "title": "  ", "kind": "education" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_journey_collection_is_separate() {
    let server = server();
    let (status, body) = call(
        &server,
        "POST",
        "/api/journey",
        Some(json!({ "title": "BSc", "kind": "education", "period": "2015 - 2019" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let entry: JourneyEntry = serde_json::from_value(body["data"].clone()).unwrap();
    assert_eq!(entry.order, 0);

    let (_, body) = call(&server, "GET", "/api/journey", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    let (_, body) = call(&server, "GET", "/api/projects", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_malformed_json_is_invalid_request() {
    let server = server();
    let (status, body) = call_raw(
        &server,
        "POST",
        "/api/projects",
        Some(r#"{"title": "#.to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], 5);
}

#[tokio::test]
async fn test_wrong_field_type_is_validation_failure() {
    let server = server();
    let (status, body) = call(&server, "POST", "/api/projects", Some(json!({ "title": 5 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);

    let (status, body) = call(
        &server,
        "POST",
        "/api/projects/reorder",
        Some(json!({ "items": [{ "id": "a" }] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);
}

#[tokio::test]
async fn test_missing_id_query_is_invalid_request() {
    let server = server();
    let (status, body) = call(&server, "PUT", "/api/projects", Some(json!({ "title": "X" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5);

    let (status, body) = call(&server, "DELETE", "/api/projects", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5);

    let (_, body) = call(&server, "GET", "/api/projects", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_unknown_route_is_not_found_envelope() {
    let server = server();
    let (status, body) = call(&server, "GET", "/api/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], 3);
    assert_eq!(body["error"], "Route /api/nope not found");
}
