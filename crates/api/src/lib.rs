//! # `roqet-api` - HTTP API 层
//!
//! 本 crate 是 ROQET 后端的 HTTP/REST 服务入口。
//! 使用 `axum` 构建路由与控制器，通过 `utoipa` 自动生成 OpenAPI 3.0 Swagger 文档。
//!
//! ## 架构职责
//! - 接收来自客户端的 GET 请求并分发至内容、诊断等路由
//! - 调用 `ContentProvider` 与 `DiagnosticsService` 完成取数
//! - 在序列化前按 Schema 契约校验响应

pub mod error;
pub mod routes;
pub mod server;
pub mod types;
