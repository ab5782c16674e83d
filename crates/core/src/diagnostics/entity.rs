use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 诊断报告中使用的状态文案。客户端按字面值展示，不做解析。
pub mod status {
    pub const BACKEND_RUNNING: &str = "✅ Running";
    pub const DB_NOT_AVAILABLE: &str = "❌ Not Available";
    pub const DB_MODULE_NOT_FOUND: &str = "❌ Database module not found (run enable-database first)";
    pub const DB_NOT_INITIALIZED: &str = "⚠️  Available but not initialized";
    pub const DB_AVAILABLE: &str = "✅ Available";
    pub const DB_WORKING: &str = "✅ Connected & Working";
    pub const DB_CONNECTED_BUT_ERROR: &str = "⚠️  Connected but Error: ";
    pub const DB_ERROR: &str = "❌ Error: ";
    pub const CONFIGURED: &str = "✅ Configured";
    pub const CONNECTED_MARKER: &str = "✅ Connected";
    pub const CONNECTED: &str = "Connected";
    pub const NOT_CONNECTED: &str = "Not Connected";
    pub const VAR_SET: &str = "✅ Set";
    pub const VAR_NOT_SET: &str = "❌ Not Set";
}

/// # Summary
/// `/test` 端点返回的诊断报告。
///
/// # Invariants
/// - `backend` 恒为运行中 (能返回报告即说明进程存活)。
/// - `collections` 最多包含 10 个集合名。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusReport {
    /// 后端状态
    #[schema(example = "✅ Running")]
    pub backend: String,
    /// 数据库协作方状态
    #[schema(example = "❌ Database module not found (run enable-database first)")]
    pub database: String,
    /// 连接串环境变量是否设置
    #[schema(example = "❌ Not Set")]
    pub database_url: Option<String>,
    /// 库名环境变量是否设置
    #[schema(example = "❌ Not Set")]
    pub database_name: Option<String>,
    /// 连接状态
    #[schema(example = "Not Connected")]
    pub connection_status: String,
    /// 集合名 (前 10 个)
    pub collections: Vec<String>,
}

impl Default for StatusReport {
    fn default() -> Self {
        Self {
            backend: status::BACKEND_RUNNING.to_string(),
            database: status::DB_NOT_AVAILABLE.to_string(),
            database_url: None,
            database_name: None,
            connection_status: status::NOT_CONNECTED.to_string(),
            collections: Vec::new(),
        }
    }
}
