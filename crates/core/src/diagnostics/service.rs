use std::sync::Arc;

use tracing::{debug, warn};

use super::entity::{StatusReport, status};
use super::error::ProbeError;
use super::port::{DatabaseLocator, EnvProbe};
use crate::common::text::truncate_chars;
use crate::config::DatabaseConfig;

/// 报告中最多列出的集合数
pub const MAX_COLLECTIONS: usize = 10;
/// 错误信息截断长度 (字符)
pub const ERROR_MESSAGE_LIMIT: usize = 50;

/// # Summary
/// 数据库诊断探针，汇总后端、数据库协作方与环境变量的可见状态。
///
/// # Invariants
/// - `test_database` 永不失败，所有异常路径都降级为状态文案。
/// - 不持有可变状态，可在请求间共享。
pub struct DiagnosticsService {
    locator: Arc<dyn DatabaseLocator>,
    env: Arc<dyn EnvProbe>,
    url_var: String,
    name_var: String,
}

impl DiagnosticsService {
    pub fn new(
        locator: Arc<dyn DatabaseLocator>,
        env: Arc<dyn EnvProbe>,
        config: &DatabaseConfig,
    ) -> Self {
        Self {
            locator,
            env,
            url_var: config.url_var.clone(),
            name_var: config.name_var.clone(),
        }
    }

    /// # Summary
    /// 执行一次诊断。
    ///
    /// # Logic
    /// 1. 以 "不可用" 默认值初始化报告，后端标记为运行中。
    /// 2. 定位数据库句柄：模块缺失、未初始化、定位失败分别写入对应文案后结束该分支。
    /// 3. 句柄可用时记录名称与连接状态，再尝试列出前 10 个集合；失败则记录截断后的错误。
    /// 4. 无论前述结果，最后独立写入两个环境变量的设置情况。
    ///
    /// # Returns
    /// 累积得到的 `StatusReport`。
    pub async fn test_database(&self) -> StatusReport {
        let mut report = StatusReport::default();

        match self.locator.resolve().await {
            Err(ProbeError::ModuleNotFound) => {
                debug!("Database collaborator not installed");
                report.database = status::DB_MODULE_NOT_FOUND.to_string();
            }
            Err(e) => {
                warn!("Database collaborator resolution failed: {}", e);
                report.database = format!(
                    "{}{}",
                    status::DB_ERROR,
                    truncate_chars(&e.detail(), ERROR_MESSAGE_LIMIT)
                );
            }
            Ok(None) => {
                report.database = status::DB_NOT_INITIALIZED.to_string();
            }
            Ok(Some(handle)) => {
                report.database = status::DB_AVAILABLE.to_string();
                report.database_url = Some(status::CONFIGURED.to_string());
                report.database_name =
                    Some(handle.name().unwrap_or_else(|| status::CONNECTED_MARKER.to_string()));
                report.connection_status = status::CONNECTED.to_string();

                match handle.list_collection_names().await {
                    Ok(mut collections) => {
                        collections.truncate(MAX_COLLECTIONS);
                        report.collections = collections;
                        report.database = status::DB_WORKING.to_string();
                    }
                    Err(e) => {
                        warn!("Listing collections failed: {}", e);
                        report.database = format!(
                            "{}{}",
                            status::DB_CONNECTED_BUT_ERROR,
                            truncate_chars(&e.detail(), ERROR_MESSAGE_LIMIT)
                        );
                    }
                }
            }
        }

        report.database_url = Some(self.presence(&self.url_var));
        report.database_name = Some(self.presence(&self.name_var));
        report
    }

    fn presence(&self, var: &str) -> String {
        if self.env.is_set(var) {
            status::VAR_SET.to_string()
        } else {
            status::VAR_NOT_SET.to_string()
        }
    }
}
