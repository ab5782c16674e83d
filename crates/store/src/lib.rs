//! # `roqet-store` - 可选数据库协作方
//!
//! 诊断探针所探测的外部数据库。当前实现基于 SQLite，
//! 按配置决定协作方是 "未安装"、"未初始化" 还是可用的连接池。

pub mod locator;
pub mod sqlite;
