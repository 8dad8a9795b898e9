//! Todo リソースの HTTP API（axum）
//!
//! ルーティングと共有状態を定義します。ストアは `AppState` 経由で注入します。

use axum::{
    routing::get,
    Router,
};
use domain::TodoStore;
use infrastructure::InMemoryTodoStore;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod handlers;
pub mod response;

pub use error::ApiError;
pub use response::Outcome;

/// InMemory ストアでルータを構築して返します。
pub fn app() -> Router {
    app_with_state(AppState::default())
}

/// 外部から状態を注入できる版
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/todos", get(handlers::get_todos).post(handlers::create_todo))
        .route(
            "/todos/:id",
            get(handlers::get_todo_by_id).put(handlers::update_todo),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// アプリケーションの共有状態
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn TodoStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryTodoStore::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{self, Body},
        http::{Request, StatusCode},
    };
    use domain::Todo;
    use tower::ServiceExt; // for `oneshot`

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn get_health_returns_ok() {
        let app = app();

        let request = Request::builder()
            .method("GET")
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let (status, bytes) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn create_get_update_round_trip_with_in_memory_store() {
        let app = app();

        // 作成
        let body = serde_json::json!({"description": "buy milk", "done": false});
        let (status, bytes) = send(&app, json_request("POST", "/todos", body)).await;
        assert_eq!(status, StatusCode::CREATED);
        let created: Todo = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(created.description, "buy milk");

        // 取得
        let req = Request::builder()
            .uri(format!("/todos/{}", created.id))
            .body(Body::empty())
            .unwrap();
        let (status, bytes) = send(&app, req).await;
        assert_eq!(status, StatusCode::OK);
        let fetched: Todo = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(fetched, created);

        // 更新（done のみ）
        let patch = serde_json::json!({"done": true});
        let uri = format!("/todos/{}", created.id);
        let (status, bytes) = send(&app, json_request("PUT", &uri, patch)).await;
        assert_eq!(status, StatusCode::OK);
        let updated: Todo = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(updated.description, "buy milk");
        assert!(updated.done);

        // 一覧
        let req = Request::builder().uri("/todos").body(Body::empty()).unwrap();
        let (status, bytes) = send(&app, req).await;
        assert_eq!(status, StatusCode::OK);
        let all: Vec<Todo> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(all, vec![updated]);
    }

    #[tokio::test]
    async fn seeded_store_is_served_in_order() {
        let seeded = vec![
            Todo {
                id: domain::TodoId::from("65a7cfdbfa5eba9bcd3e1325"),
                description: "buy milk".to_string(),
                done: false,
            },
            Todo {
                id: domain::TodoId::from("65a7cfdbfa5eba9bcd3e1326"),
                description: "walk dog".to_string(),
                done: true,
            },
        ];
        let store = Arc::new(InMemoryTodoStore::with_todos(seeded.clone()));
        let app = app_with_state(AppState::new(store));

        let req = Request::builder().uri("/todos").body(Body::empty()).unwrap();
        let (status, bytes) = send(&app, req).await;
        assert_eq!(status, StatusCode::OK);
        let all: Vec<Todo> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(all, seeded);

        let req = Request::builder()
            .uri("/todos/65a7cfdbfa5eba9bcd3e1326")
            .body(Body::empty())
            .unwrap();
        let (status, bytes) = send(&app, req).await;
        assert_eq!(status, StatusCode::OK);
        let fetched: Todo = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(fetched, seeded[1]);

        // 存在しない ID は空ボディの 404
        let req = Request::builder()
            .uri("/todos/65a7cfdbfa5eba9bcd3e1399")
            .body(Body::empty())
            .unwrap();
        let (status, bytes) = send(&app, req).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let app = app();
        let req = Request::builder().uri("/nope").body(Body::empty()).unwrap();
        let (status, _) = send(&app, req).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
