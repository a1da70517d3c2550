use std::sync::Arc;

use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use todo_core::{StoreError, Todo, TodoRepresentation, TodoStore};
use todo_server::{app, router};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

fn rep(id: &str, title: &str, content: &str) -> TodoRepresentation {
    TodoRepresentation::new(id, title, content)
}

/// Store that is always down.
struct UnavailableStore;

impl TodoStore for UnavailableStore {
    fn list_all(&self) -> Result<Vec<Todo>, StoreError> {
        Err(StoreError::Unavailable("maintenance".to_string()))
    }
    fn find(&self, _id: &str) -> Result<Option<Todo>, StoreError> {
        Err(StoreError::Unavailable("maintenance".to_string()))
    }
    fn save(&self, _todo: Todo) -> Result<Todo, StoreError> {
        Err(StoreError::Unavailable("maintenance".to_string()))
    }
    fn delete(&self, _id: &str) -> Result<Todo, StoreError> {
        Err(StoreError::Unavailable("maintenance".to_string()))
    }
}

// --- list ---

#[tokio::test]
async fn list_todos_empty() {
    let resp = app().oneshot(empty_request("GET", "/api/todo")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<TodoRepresentation> = body_json(resp).await;
    assert!(todos.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_todo_returns_201_with_caller_id() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/todo",
            r#"{"id":"1","title":"Buy milk","content":"2%"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let todo: TodoRepresentation = body_json(resp).await;
    assert_eq!(todo, rep("1", "Buy milk", "2%"));
}

#[tokio::test]
async fn create_todo_without_id_gets_one_assigned() {
    let resp = app()
        .oneshot(json_request("POST", "/api/todo", r#"{"title":"Nameless"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let json: serde_json::Value = body_json(resp).await;
    assert!(!json["id"].as_str().unwrap().is_empty());
    assert_eq!(json["title"], "Nameless");
    assert_eq!(json["content"], "");
}

#[tokio::test]
async fn create_todo_missing_title_returns_400() {
    let resp = app()
        .oneshot(json_request("POST", "/api/todo", r#"{"content":"no title"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json: serde_json::Value = body_json(resp).await;
    assert_eq!(json["field"], "title");
}

#[tokio::test]
async fn create_todo_title_too_long_returns_400() {
    let body = serde_json::json!({ "title": "t".repeat(151) }).to_string();
    let resp = app().oneshot(json_request("POST", "/api/todo", &body)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_todo_content_too_long_returns_400() {
    let body = serde_json::json!({ "title": "ok", "content": "c".repeat(10_001) }).to_string();
    let resp = app().oneshot(json_request("POST", "/api/todo", &body)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json: serde_json::Value = body_json(resp).await;
    assert_eq!(json["field"], "content");
}

#[tokio::test]
async fn create_todo_malformed_json_is_rejected() {
    let resp = app()
        .oneshot(json_request("POST", "/api/todo", r#"{"title":"#))
        .await
        .unwrap();

    assert!(resp.status().is_client_error());
}

// --- get ---

#[tokio::test]
async fn get_todo_not_found_has_empty_body() {
    let resp = app().oneshot(empty_request("GET", "/api/todo/missing")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());
}

// --- update ---

#[tokio::test]
async fn update_todo_mismatched_id_returns_400_with_empty_body() {
    let resp = app()
        .oneshot(json_request(
            "PUT",
            "/api/todo/A",
            r#"{"id":"B","title":"Wrong","content":""}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn update_todo_null_id_uses_path_id() {
    let resp = app()
        .oneshot(json_request(
            "PUT",
            "/api/todo/p1",
            r#"{"id":null,"title":"From path","content":null}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let todo: TodoRepresentation = body_json(resp).await;
    assert_eq!(todo, rep("p1", "From path", ""));
}

#[tokio::test]
async fn update_todo_validates_before_reconciling() {
    let resp = app()
        .oneshot(json_request("PUT", "/api/todo/A", r#"{"id":"B","title":""}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json: serde_json::Value = body_json(resp).await;
    assert_eq!(json["field"], "title");
}

// --- delete ---

#[tokio::test]
async fn delete_todo_not_found() {
    let resp = app().oneshot(empty_request("DELETE", "/api/todo/missing")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());
}

// --- store failures ---

#[tokio::test]
async fn store_failure_returns_500() {
    let app = router(Arc::new(UnavailableStore));
    let resp = app.oneshot(empty_request("GET", "/api/todo")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_bytes(resp).await.is_empty());
}

// --- full lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/api/todo",
            r#"{"id":"1","title":"Buy milk","content":"2%"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: TodoRepresentation = body_json(resp).await;
    assert_eq!(created, rep("1", "Buy milk", "2%"));

    // list
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/api/todo"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<TodoRepresentation> = body_json(resp).await;
    assert_eq!(todos, vec![rep("1", "Buy milk", "2%")]);

    // update without a body id
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            "/api/todo/1",
            r#"{"title":"Buy oat milk","content":"2%"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: TodoRepresentation = body_json(resp).await;
    assert_eq!(updated, rep("1", "Buy oat milk", "2%"));

    // get
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/api/todo/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: TodoRepresentation = body_json(resp).await;
    assert_eq!(fetched, updated);

    // delete returns the removed todo
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", "/api/todo/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let removed: TodoRepresentation = body_json(resp).await;
    assert_eq!(removed, updated);

    // get after delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/api/todo/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // delete again
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", "/api/todo/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // list after delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/api/todo"))
        .await
        .unwrap();
    let todos: Vec<TodoRepresentation> = body_json(resp).await;
    assert!(todos.is_empty());
}
