use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// ハンドラの正常系の結果
///
/// 「存在しない」はエラーではなく通常の結果として扱い、空ボディの 404 にします。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Created(T),
    Ok(T),
    NotFound,
}

impl<T> From<Option<T>> for Outcome<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Outcome::Ok(v),
            None => Outcome::NotFound,
        }
    }
}

impl<T: Serialize> IntoResponse for Outcome<T> {
    fn into_response(self) -> Response {
        match self {
            Outcome::Created(body) => (StatusCode::CREATED, Json(body)).into_response(),
            Outcome::Ok(body) => (StatusCode::OK, Json(body)).into_response(),
            Outcome::NotFound => StatusCode::NOT_FOUND.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_maps_to_outcome() {
        assert_eq!(Outcome::from(Some(1)), Outcome::Ok(1));
        assert_eq!(Outcome::<i32>::from(None), Outcome::NotFound);
    }

    #[test]
    fn test_not_found_has_no_content_type() {
        let response = Outcome::<()>::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get("content-type").is_none());
    }
}
