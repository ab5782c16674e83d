#[cfg(any(test, feature = "test-utils"))]
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use super::error::ProbeError;

/// # Summary
/// 可选的外部数据库句柄。
///
/// # Invariants
/// - 实现者必须是线程安全的 (`Send + Sync`)。
#[async_trait]
pub trait DatabaseHandle: Send + Sync {
    /// # Summary
    /// 数据库名称能力检查。
    ///
    /// # Returns
    /// 句柄能提供名称时返回 `Some`，否则返回 `None`。
    fn name(&self) -> Option<String>;

    /// # Summary
    /// 列出库中的集合 (表) 名。
    ///
    /// # Returns
    /// 全部集合名；截取前若干个由调用方负责。
    async fn list_collection_names(&self) -> Result<Vec<String>, ProbeError>;
}

/// # Summary
/// 数据库句柄定位接口，对应 "按名称查找可选协作方" 的动作。
///
/// # Invariants
/// - `Err(ProbeError::ModuleNotFound)`: 协作方未安装/未启用。
/// - `Ok(None)`: 协作方存在但句柄尚未初始化。
/// - `Ok(Some(_))`: 句柄可用。
#[async_trait]
pub trait DatabaseLocator: Send + Sync {
    async fn resolve(&self) -> Result<Option<Arc<dyn DatabaseHandle>>, ProbeError>;
}

/// 环境变量读取接口，便于测试注入固定环境。
pub trait EnvProbe: Send + Sync {
    /// 读取变量值，未设置返回 `None`。
    fn get(&self, name: &str) -> Option<String>;

    /// 变量是否已设置。空字符串视为未设置。
    fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some_and(|v| !v.is_empty())
    }
}

/// 读取当前进程环境变量的实现，每次调用时读取。
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvProbe for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// 固定键值表的实现，供测试注入环境。
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Default, Clone)]
pub struct StaticEnv {
    vars: HashMap<String, String>,
}

#[cfg(any(test, feature = "test-utils"))]
impl StaticEnv {
    pub fn new<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl EnvProbe for StaticEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}
