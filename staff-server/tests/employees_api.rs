//! Employee REST API tests against an in-memory store

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use staff_server::{Config, ServerState, build_app};

async fn app() -> Router {
    let state = ServerState::initialize(&Config::in_memory()).await.unwrap();
    build_app(state)
}

async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: Body,
) -> (StatusCode, http::HeaderMap, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header(header::CONTENT_TYPE, ct);
    }
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, headers, value)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, _, value) = match body {
        Some(body) => {
            send_raw(
                app,
                method,
                uri,
                Some("application/json"),
                Body::from(body.to_string()),
            )
            .await
        }
        None => send_raw(app, method, uri, None, Body::empty()).await,
    };
    (status, value)
}

async fn create(app: &Router, name: &str, role: &str, salary: f64) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/employees",
        Some(json!({ "name": name, "role": role, "salary": salary })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body
}

async fn list_len(app: &Router) -> usize {
    let (status, body) = send(app, Method::GET, "/api/employees", None).await;
    assert_eq!(status, StatusCode::OK);
    body.as_array().unwrap().len()
}

#[tokio::test]
async fn test_crud_lifecycle() {
    let app = app().await;

    let created = create(&app, "Ada", "Engineer", 95000.0).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert!(!id.contains(':'), "wire id carries no table prefix: {id}");
    assert_eq!(created["name"], "Ada");
    assert_eq!(created["role"], "Engineer");
    assert_eq!(created["salary"], 95000.0);

    let (status, fetched) = send(&app, Method::GET, &format!("/api/employees/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/employees/{id}"),
        Some(json!({ "name": "Ada L.", "role": "Engineer", "salary": 100000 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["name"], "Ada L.");
    assert_eq!(updated["salary"], 100000.0);

    let (status, body) = send(&app, Method::DELETE, &format!("/api/employees/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Employee deleted");

    let (status, body) = send(&app, Method::GET, &format!("/api/employees/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 8001);
    assert_eq!(list_len(&app).await, 0);
}

#[tokio::test]
async fn test_list_in_creation_order_and_idempotent() {
    let app = app().await;
    assert_eq!(send(&app, Method::GET, "/api/employees", None).await.1, json!([]));

    for name in ["A", "B", "C"] {
        create(&app, name, "Role", 1.0).await;
    }

    let (_, first) = send(&app, Method::GET, "/api/employees", None).await;
    let (_, second) = send(&app, Method::GET, "/api/employees", None).await;
    assert_eq!(first, second);

    let names: Vec<_> = first
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[tokio::test]
async fn test_create_missing_name_is_rejected() {
    let app = app().await;
    create(&app, "Existing", "Role", 1.0).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/employees",
        Some(json!({ "role": "Engineer", "salary": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("name"), "{body}");
    assert_eq!(body["code"], 7);
    assert_eq!(list_len(&app).await, 1);
}

#[tokio::test]
async fn test_create_rejects_blank_and_negative() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/employees",
        Some(json!({ "name": "  ", "role": "Engineer", "salary": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("name"));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/employees",
        Some(json!({ "name": "Ada", "role": "Engineer", "salary": -5 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("salary"));
    assert_eq!(list_len(&app).await, 0);
}

#[tokio::test]
async fn test_salary_numeric_string_is_accepted() {
    let app = app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/employees",
        Some(json!({ "name": "Ada", "role": "Engineer", "salary": "95000" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["salary"], 95000.0);
}

#[tokio::test]
async fn test_bad_bodies_get_json_400() {
    let app = app().await;

    // Wrong field type
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/employees",
        Some(json!({ "name": "Ada", "role": "Engineer", "salary": "lots" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6);

    // Malformed JSON
    let (status, _, body) = send_raw(
        &app,
        Method::POST,
        "/api/employees",
        Some("application/json"),
        Body::from("{not json"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6);

    // No content type
    let (status, _, body) = send_raw(
        &app,
        Method::POST,
        "/api/employees",
        None,
        Body::from(r#"{"name":"Ada"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());

    assert_eq!(list_len(&app).await, 0);
}

#[tokio::test]
async fn test_update_validates_and_ignores_client_id() {
    let app = app().await;
    let created = create(&app, "Ada", "Engineer", 95000.0).await;
    let id = created["id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/api/employees/{id}"),
        Some(json!({ "name": "Ada", "salary": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/employees/{id}"),
        Some(json!({ "id": "forged", "name": "Ada", "role": "CTO", "salary": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["role"], "CTO");
}

#[tokio::test]
async fn test_unknown_ids_are_404() {
    let app = app().await;
    let payload = json!({ "name": "Ada", "role": "Engineer", "salary": 1 });

    let (status, body) = send(&app, Method::GET, "/api/employees/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].as_str().unwrap().contains("nope"));

    let (status, _) = send(&app, Method::PUT, "/api/employees/nope", Some(payload)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, "/api/employees/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(list_len(&app).await, 0);
}

#[tokio::test]
async fn test_delete_twice() {
    let app = app().await;
    let created = create(&app, "Ada", "Engineer", 1.0).await;
    let uri = format!("/api/employees/{}", created["id"].as_str().unwrap());

    assert_eq!(send(&app, Method::DELETE, &uri, None).await.0, StatusCode::OK);
    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 8001);
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/api/nothing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3);
}

#[tokio::test]
async fn test_health_and_request_id() {
    let app = app().await;

    let (status, headers, body) = send_raw(&app, Method::GET, "/health", None, Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
    assert!(headers.contains_key("x-request-id"));

    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "req-42")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "req-42");
}
