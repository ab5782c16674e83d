use thiserror::Error;

/// # Summary
/// 内容层错误枚举，处理响应数据不满足 Schema 契约的情况。
///
/// # Invariants
/// - 必须通过 `thiserror` 派生 `Error` trait。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// 数据结构违反 Schema 契约
    #[error("Validation error: {0}")]
    Validation(String),
}
