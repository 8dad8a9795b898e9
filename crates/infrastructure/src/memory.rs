use async_trait::async_trait;
use domain::{NewTodo, StoreError, Todo, TodoId, TodoPatch, TodoStore};
use std::sync::{Mutex, MutexGuard};

/// 簡易な InMemory 実装（開発/テスト用）
///
/// 作成順を保持するため `Vec` で管理します。
#[derive(Debug, Default)]
pub struct InMemoryTodoStore {
    todos: Mutex<Vec<Todo>>,
}

impl InMemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存データを投入した状態で生成
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos: Mutex::new(todos),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Todo>>, StoreError> {
        self.todos
            .lock()
            .map_err(|_| StoreError::Backend("in-memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl TodoStore for InMemoryTodoStore {
    async fn create(&self, new_todo: NewTodo) -> Result<Todo, StoreError> {
        let todo = Todo::create(TodoId::new(), new_todo);
        self.lock()?.push(todo.clone());
        Ok(todo)
    }

    async fn find_all(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.lock()?.clone())
    }

    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, StoreError> {
        Ok(self.lock()?.iter().find(|todo| &todo.id == id).cloned())
    }

    async fn update_by_id(
        &self,
        id: &TodoId,
        patch: TodoPatch,
    ) -> Result<Option<Todo>, StoreError> {
        let mut todos = self.lock()?;
        Ok(todos.iter_mut().find(|todo| &todo.id == id).map(|todo| {
            todo.apply(&patch);
            todo.clone()
        }))
    }
}
