//! Todo リソースのリクエストハンドラ
//!
//! 各ハンドラはストアを 1 回だけ呼び出し、結果を `Outcome` として返します。
//! 失敗は `ApiError` として転送し、HTTP への変換は境界で一括して行います。

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use domain::{NewTodo, Todo, TodoId, TodoPatch};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::response::Outcome;
use crate::AppState;

pub type HandlerResult<T> = Result<Outcome<T>, ApiError>;

#[derive(Debug, Serialize)]
struct HealthBody {
    /// サービスの簡易ステータス
    status: &'static str,
}

/// ヘルスチェック用ハンドラ
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthBody { status: "ok" }))
}

/// POST /todos
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<NewTodo>, JsonRejection>,
) -> HandlerResult<Todo> {
    let Json(new_todo) = payload?;
    new_todo.validate()?;

    let todo = state.store.create(new_todo).await?;
    info!(todo_id = %todo.id, "todo created");
    Ok(Outcome::Created(todo))
}

/// GET /todos
pub async fn get_todos(State(state): State<AppState>) -> HandlerResult<Vec<Todo>> {
    let todos = state.store.find_all().await?;
    debug!(count = todos.len(), "todos listed");
    Ok(Outcome::Ok(todos))
}

/// GET /todos/:id
pub async fn get_todo_by_id(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> HandlerResult<Todo> {
    let id = TodoId::from_string(id);
    let found = state.store.find_by_id(&id).await?;
    if found.is_none() {
        debug!(todo_id = %id, "todo not found");
    }
    Ok(found.into())
}

/// PUT /todos/:id
pub async fn update_todo(
    Path(id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<TodoPatch>, JsonRejection>,
) -> HandlerResult<Todo> {
    let Json(patch) = payload?;
    patch.validate()?;

    let id = TodoId::from_string(id);
    let updated = state.store.update_by_id(&id, patch).await?;
    match &updated {
        Some(todo) => info!(todo_id = %todo.id, "todo updated"),
        None => debug!(todo_id = %id, "update target not found"),
    }
    Ok(updated.into())
}
