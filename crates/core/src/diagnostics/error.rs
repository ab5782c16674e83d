use thiserror::Error;

/// # Summary
/// 数据库协作方错误枚举。
///
/// # Invariants
/// - 只在诊断探针内部流转，探针负责将其降级为状态文案，绝不向调用方传播。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// 协作方模块未启用
    #[error("Database module not found")]
    ModuleNotFound,
    /// 建立连接或解析连接串失败
    #[error("Connection error: {0}")]
    Connection(String),
    /// 查询失败
    #[error("Query error: {0}")]
    Query(String),
}

impl ProbeError {
    /// 协作方给出的原始错误信息，不含本枚举的分类前缀。
    pub fn detail(&self) -> String {
        match self {
            ProbeError::ModuleNotFound => self.to_string(),
            ProbeError::Connection(msg) | ProbeError::Query(msg) => msg.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_strips_category() {
        let err = ProbeError::Query("no such table: watchlist".to_string());
        assert_eq!(err.to_string(), "Query error: no such table: watchlist");
        assert_eq!(err.detail(), "no such table: watchlist");
        assert_eq!(ProbeError::ModuleNotFound.detail(), "Database module not found");
    }
}
