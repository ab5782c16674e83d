use std::sync::Arc;

use async_trait::async_trait;
use roqet_core::config::DatabaseConfig;
use roqet_core::diagnostics::error::ProbeError;
use roqet_core::diagnostics::port::{DatabaseHandle, DatabaseLocator, EnvProbe};
use tracing::{info, warn};

use crate::sqlite::SqliteDatabase;

/// 协作方未启用时的定位器，永远报告模块缺失。
#[derive(Debug, Default, Clone, Copy)]
pub struct MissingDatabase;

#[async_trait]
impl DatabaseLocator for MissingDatabase {
    async fn resolve(&self) -> Result<Option<Arc<dyn DatabaseHandle>>, ProbeError> {
        Err(ProbeError::ModuleNotFound)
    }
}

/// 协作方已启用但缺少连接串时的定位器。
#[derive(Debug, Default, Clone, Copy)]
pub struct UninitializedDatabase;

#[async_trait]
impl DatabaseLocator for UninitializedDatabase {
    async fn resolve(&self) -> Result<Option<Arc<dyn DatabaseHandle>>, ProbeError> {
        Ok(None)
    }
}

/// 持有启动时建立结果的定位器。
///
/// 连接串非法时保存错误，每次定位都原样返回，由探针降级为状态文案。
pub struct SqliteLocator {
    handle: Result<Arc<SqliteDatabase>, ProbeError>,
}

impl SqliteLocator {
    pub fn new(url: &str, name: Option<String>) -> Self {
        Self {
            handle: SqliteDatabase::connect_lazy(url, name).map(Arc::new),
        }
    }
}

#[async_trait]
impl DatabaseLocator for SqliteLocator {
    async fn resolve(&self) -> Result<Option<Arc<dyn DatabaseHandle>>, ProbeError> {
        match &self.handle {
            Ok(db) => Ok(Some(db.clone() as Arc<dyn DatabaseHandle>)),
            Err(e) => Err(e.clone()),
        }
    }
}

/// # Summary
/// 根据配置选择数据库定位器。
///
/// # Logic
/// 1. 未启用协作方 -> `MissingDatabase`。
/// 2. 已启用但连接串变量未设置 -> `UninitializedDatabase`。
/// 3. 否则以连接串建立 `SqliteLocator`，库名变量 (若设置) 作为展示名称。
///
/// # Arguments
/// * `config` - 数据库配置。
/// * `env` - 环境变量读取接口。
///
/// # Returns
/// * 供诊断探针使用的定位器。
pub fn locator_from_config(config: &DatabaseConfig, env: &dyn EnvProbe) -> Arc<dyn DatabaseLocator> {
    if !config.enabled {
        info!("Database collaborator disabled");
        return Arc::new(MissingDatabase);
    }

    let url = env.get(&config.url_var).filter(|v| !v.is_empty());
    let Some(url) = url else {
        warn!("Database collaborator enabled but {} is not set", config.url_var);
        return Arc::new(UninitializedDatabase);
    };

    let name = env.get(&config.name_var).filter(|v| !v.is_empty());
    info!("Database collaborator enabled (name: {:?})", name);
    Arc::new(SqliteLocator::new(&url, name))
}
