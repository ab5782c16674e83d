use serde::{Deserialize, Serialize};

/// 全局应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// 可选数据库协作方的配置。
///
/// `url_var` / `name_var` 是环境变量名而非取值，诊断探针只检查它们是否被设置。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// 是否启用数据库协作方 (未启用时探针报告模块缺失)
    pub enabled: bool,
    pub url_var: String,
    pub name_var: String,
}

impl ServerConfig {
    /// 监听地址，如 `"0.0.0.0:8000"`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            url_var: "DATABASE_URL".to_string(),
            name_var: "DATABASE_NAME".to_string(),
        }
    }
}
