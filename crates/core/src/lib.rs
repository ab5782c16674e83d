//! # `roqet-core` - 领域核心
//!
//! 声明内容实体 (Schema 契约)、诊断报告实体与各层端口 (Port)。
//! 具体实现由 `roqet-catalog`、`roqet-store` 等下游 crate 提供，
//! 本 crate 不依赖任何运行时或存储实现。

pub mod common;
pub mod config;

pub mod content {
    pub mod entity;
    pub mod error;
    pub mod port;
    pub mod schema;
}

pub mod diagnostics {
    pub mod entity;
    pub mod error;
    pub mod port;
    pub mod service;
}
