use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Todo の識別子
///
/// 生成時は ULID 文字列（26 文字、作成時刻順にソート可能）を採用します。
/// パスパラメータから受け取った値は検証せずそのまま保持し、
/// 存在判定はストアに委ねます。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    pub fn new() -> Self {
        Self(ulid::Ulid::new().to_string())
    }

    pub fn from_string(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TodoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for TodoId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// 永続化された Todo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub description: String,
    pub done: bool,
}

impl Todo {
    /// 新規作成用の値からストアが採番した ID で Todo を組み立てます。
    pub fn create(id: TodoId, new_todo: NewTodo) -> Self {
        Self {
            id,
            description: new_todo.description,
            done: new_todo.done,
        }
    }

    /// パッチを適用します。指定のないフィールドは現在値を維持します。
    pub fn apply(&mut self, patch: &TodoPatch) {
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(done) = patch.done {
            self.done = done;
        }
    }
}

/// POST /todos のリクエストボディ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewTodo {
    pub description: String,
    #[serde(default)]
    pub done: bool,
}

impl NewTodo {
    pub fn new(description: impl Into<String>, done: bool) -> Self {
        Self {
            description: description.into(),
            done,
        }
    }

    /// 境界で一度だけ実行するバリデーション
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_description(&self.description)
    }
}

/// PUT /todos/:id のリクエストボディ（部分更新）
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TodoPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
}

impl TodoPatch {
    /// 空のパッチは有効（現在値をそのまま返す no-op）
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.done.is_none()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        match &self.description {
            Some(description) => validate_description(description),
            None => Ok(()),
        }
    }
}

fn validate_description(description: &str) -> Result<(), DomainError> {
    if description.trim().is_empty() {
        return Err(DomainError::Validation(
            "description cannot be empty".to_string(),
        ));
    }
    Ok(())
}
