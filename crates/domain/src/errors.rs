use thiserror::Error;

/// ドメイン層のエラー（境界でのバリデーション違反）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),
}

/// ストア層のエラー
///
/// 「存在しない」はエラーではなく `Option::None` で表現します。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{0}")]
    Backend(String),

    #[error("Corrupted item: {0}")]
    Corrupted(String),
}
