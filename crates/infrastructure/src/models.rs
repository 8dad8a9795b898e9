use aws_sdk_dynamodb::types::AttributeValue;
use domain::{StoreError, Todo, TodoId};
use std::collections::HashMap;

/// Todo アイテムを束ねるパーティションキー
pub const TODO_PARTITION: &str = "TODO";
/// ソートキーの接頭辞
pub const TODO_SK_PREFIX: &str = "TODO#";

/// DynamoDB Single Table Design のキー構造
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoKeys {
    pub pk: String,
    pub sk: String,
}

impl TodoKeys {
    pub fn for_todo(id: &TodoId) -> Self {
        Self {
            pk: TODO_PARTITION.to_string(),
            sk: format!("{}{}", TODO_SK_PREFIX, id.as_str()),
        }
    }

    /// GetItem / UpdateItem 用のキーマップ
    pub fn to_key_map(&self) -> HashMap<String, AttributeValue> {
        HashMap::from([
            ("PK".to_string(), AttributeValue::S(self.pk.clone())),
            ("SK".to_string(), AttributeValue::S(self.sk.clone())),
        ])
    }
}

/// Todo を DynamoDB アイテムに変換
pub fn todo_to_item(todo: &Todo) -> HashMap<String, AttributeValue> {
    let mut item = TodoKeys::for_todo(&todo.id).to_key_map();
    item.insert("id".to_string(), AttributeValue::S(todo.id.as_str().to_string()));
    item.insert(
        "description".to_string(),
        AttributeValue::S(todo.description.clone()),
    );
    item.insert("done".to_string(), AttributeValue::Bool(todo.done));
    item
}

/// DynamoDB アイテムから Todo を復元
pub fn item_to_todo(item: &HashMap<String, AttributeValue>) -> Result<Todo, StoreError> {
    let id = item
        .get("id")
        .and_then(|v| v.as_s().ok())
        .ok_or_else(|| StoreError::Corrupted("missing id".to_string()))?;

    let description = item
        .get("description")
        .and_then(|v| v.as_s().ok())
        .ok_or_else(|| StoreError::Corrupted(format!("missing description on {id}")))?;

    let done = item
        .get("done")
        .and_then(|v| v.as_bool().ok())
        .ok_or_else(|| StoreError::Corrupted(format!("missing done on {id}")))?;

    Ok(Todo {
        id: TodoId::from_string(id.clone()),
        description: description.clone(),
        done: *done,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_todo() -> Todo {
        Todo {
            id: TodoId::from("01HMZ0000000000000000000AA"),
            description: "buy milk".to_string(),
            done: true,
        }
    }

    #[test]
    fn test_keys_for_todo() {
        let keys = TodoKeys::for_todo(&TodoId::from("abc"));
        assert_eq!(keys.pk, "TODO");
        assert_eq!(keys.sk, "TODO#abc");
    }

    #[test]
    fn test_item_carries_keys_and_fields() {
        let item = todo_to_item(&sample_todo());

        assert_eq!(item.get("PK"), Some(&AttributeValue::S("TODO".to_string())));
        assert_eq!(
            item.get("SK"),
            Some(&AttributeValue::S("TODO#01HMZ0000000000000000000AA".to_string()))
        );
        assert_eq!(item.get("done"), Some(&AttributeValue::Bool(true)));
        assert_eq!(item_to_todo(&item).unwrap(), sample_todo());
    }

    #[test]
    fn test_item_without_done_is_corrupted() {
        let mut item = todo_to_item(&sample_todo());
        item.remove("done");

        let err = item_to_todo(&item).unwrap_err();
        assert!(matches!(err, StoreError::Corrupted(msg) if msg.contains("done")));
    }

    #[test]
    fn test_item_with_wrong_type_is_corrupted() {
        let mut item = todo_to_item(&sample_todo());
        item.insert("description".to_string(), AttributeValue::N("1".to_string()));

        assert!(matches!(item_to_todo(&item), Err(StoreError::Corrupted(_))));
    }
}
