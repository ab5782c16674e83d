use async_trait::async_trait;
use roqet_core::diagnostics::error::ProbeError;
use roqet_core::diagnostics::port::DatabaseHandle;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// DatabaseHandle 的 SQLite 实现。
///
/// # Summary
/// 将 SQLite 的表视为 "集合"，供诊断探针列举。
///
/// # Invariants
/// * 连接池惰性建立，构造时不触达数据库文件。
/// * 列举结果按表名排序，排除 `sqlite_` 开头的内部表。
pub struct SqliteDatabase {
    pool: SqlitePool,
    name: Option<String>,
}

impl SqliteDatabase {
    /// 使用已有连接池创建句柄。
    pub fn new(pool: SqlitePool, name: Option<String>) -> Self {
        Self { pool, name }
    }

    /// 根据连接串创建惰性连接的句柄。
    ///
    /// # Logic
    /// 1. 解析连接串并创建不立即连接的连接池。
    ///
    /// # Arguments
    /// * `url` - SQLite 连接串，如 `sqlite://data/roqet.db`。
    /// * `name` - 对外展示的数据库名称。
    ///
    /// # Returns
    /// * 连接串非法时返回 `ProbeError::Connection`。
    ///
    /// 需在 tokio 运行时内调用。
    pub fn connect_lazy(url: &str, name: Option<String>) -> Result<Self, ProbeError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_lazy(url)
            .map_err(|e| ProbeError::Connection(e.to_string()))?;
        Ok(Self::new(pool, name))
    }
}

#[async_trait]
impl DatabaseHandle for SqliteDatabase {
    fn name(&self) -> Option<String> {
        self.name.clone()
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, ProbeError> {
        sqlx::query_scalar::<_, String>(
            r#"
            SELECT name FROM sqlite_master
            WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ProbeError::Query(database_message(&e)))
    }
}

/// 优先取数据库驱动给出的原始信息，其余错误退回完整描述。
fn database_message(err: &sqlx::Error) -> String {
    err.as_database_error()
        .map(|d| d.message().to_string())
        .unwrap_or_else(|| err.to_string())
}
