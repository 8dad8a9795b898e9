use crate::models::{item_to_todo, todo_to_item, TodoKeys, TODO_PARTITION, TODO_SK_PREFIX};
use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;
use domain::{NewTodo, StoreError, Todo, TodoId, TodoPatch, TodoStore};
use shared::Config;
use tracing::debug;

#[derive(Clone)]
pub struct DynamoDbClient {
    client: Client,
    table_name: String,
}

impl DynamoDbClient {
    pub async fn new(config: &Config) -> Self {
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

        // DynamoDB Local 向けにエンドポイントを上書き
        let mut builder = aws_sdk_dynamodb::config::Builder::from(&aws_config);
        if let Some(endpoint) = &config.dynamodb_endpoint {
            builder = builder.endpoint_url(endpoint);
        }

        Self {
            client: Client::from_conf(builder.build()),
            table_name: config.dynamodb_table.clone(),
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

fn backend_error<E>(err: E) -> StoreError
where
    E: std::error::Error,
{
    StoreError::Backend(DisplayErrorContext(err).to_string())
}

/// DynamoDB をドキュメントストアとして使う `TodoStore` 実装
#[derive(Clone)]
pub struct DynamoTodoStore {
    db: DynamoDbClient,
}

impl DynamoTodoStore {
    pub fn new(db: DynamoDbClient) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TodoStore for DynamoTodoStore {
    async fn create(&self, new_todo: NewTodo) -> Result<Todo, StoreError> {
        let todo = Todo::create(TodoId::new(), new_todo);

        self.db
            .client()
            .put_item()
            .table_name(self.db.table_name())
            .set_item(Some(todo_to_item(&todo)))
            .condition_expression("attribute_not_exists(PK)")
            .send()
            .await
            .map_err(backend_error)?;

        debug!(todo_id = %todo.id, "todo item stored");
        Ok(todo)
    }

    async fn find_all(&self) -> Result<Vec<Todo>, StoreError> {
        let mut todos = Vec::new();
        let mut exclusive_start_key = None;

        // LastEvaluatedKey がなくなるまでページを辿る
        loop {
            let result = self
                .db
                .client()
                .query()
                .table_name(self.db.table_name())
                .key_condition_expression("PK = :pk AND begins_with(SK, :sk_prefix)")
                .expression_attribute_values(":pk", AttributeValue::S(TODO_PARTITION.to_string()))
                .expression_attribute_values(
                    ":sk_prefix",
                    AttributeValue::S(TODO_SK_PREFIX.to_string()),
                )
                .set_exclusive_start_key(exclusive_start_key)
                .send()
                .await
                .map_err(backend_error)?;

            for item in result.items() {
                todos.push(item_to_todo(item)?);
            }

            match result.last_evaluated_key() {
                Some(key) if !key.is_empty() => exclusive_start_key = Some(key.clone()),
                _ => break,
            }
        }

        Ok(todos)
    }

    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, StoreError> {
        let result = self
            .db
            .client()
            .get_item()
            .table_name(self.db.table_name())
            .set_key(Some(TodoKeys::for_todo(id).to_key_map()))
            .send()
            .await
            .map_err(backend_error)?;

        result.item().map(item_to_todo).transpose()
    }

    async fn update_by_id(
        &self,
        id: &TodoId,
        patch: TodoPatch,
    ) -> Result<Option<Todo>, StoreError> {
        // 空の更新式は DynamoDB が受け付けないため現在値を返す
        if patch.is_empty() {
            return self.find_by_id(id).await;
        }

        let mut update_parts = Vec::new();
        let mut builder = self
            .db
            .client()
            .update_item()
            .table_name(self.db.table_name())
            .set_key(Some(TodoKeys::for_todo(id).to_key_map()))
            .condition_expression("attribute_exists(PK)")
            .return_values(ReturnValue::AllNew);

        if let Some(description) = patch.description {
            update_parts.push("description = :description");
            builder =
                builder.expression_attribute_values(":description", AttributeValue::S(description));
        }

        if let Some(done) = patch.done {
            update_parts.push("done = :done");
            builder = builder.expression_attribute_values(":done", AttributeValue::Bool(done));
        }

        let expression = format!("SET {}", update_parts.join(", "));
        let result = builder.update_expression(expression).send().await;

        match result {
            Ok(output) => output.attributes().map(item_to_todo).transpose(),
            Err(err)
                if err
                    .as_service_error()
                    .is_some_and(|e| e.is_conditional_check_failed_exception()) =>
            {
                debug!(todo_id = %id, "update target does not exist");
                Ok(None)
            }
            Err(err) => Err(backend_error(err)),
        }
    }
}
