use crate::errors::StoreError;
use crate::todo::{NewTodo, Todo, TodoId, TodoPatch};
use async_trait::async_trait;

/// Todo コレクションに対するデータアクセスの抽象
///
/// ハンドラは `Arc<dyn TodoStore>` として注入された実装のみを利用します。
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// 新規作成。ID はストアが採番する
    async fn create(&self, new_todo: NewTodo) -> Result<Todo, StoreError>;

    /// 全件取得（作成順）
    async fn find_all(&self) -> Result<Vec<Todo>, StoreError>;

    /// ID 指定で取得。存在しなければ `None`
    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, StoreError>;

    /// 部分更新して更新後の値を返す。存在しなければ `None`
    async fn update_by_id(&self, id: &TodoId, patch: TodoPatch)
        -> Result<Option<Todo>, StoreError>;
}
