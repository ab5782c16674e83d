//! # 问候路由控制器
//!
//! `/` 与 `/api/hello` 两个固定问候，供客户端确认后端可达。

use axum::Json;

use crate::types::MessageResponse;

pub const ROOT_GREETING: &str = "Hello from FastAPI Backend!";
pub const API_GREETING: &str = "Hello from the backend API!";

/// 根路径问候
#[utoipa::path(
    get,
    path = "/",
    tag = "基础 (Root)",
    responses(
        (status = 200, description = "问候语", body = MessageResponse)
    )
)]
pub async fn read_root() -> Json<MessageResponse> {
    Json(MessageResponse::new(ROOT_GREETING))
}

/// API 问候
#[utoipa::path(
    get,
    path = "/api/hello",
    tag = "基础 (Root)",
    responses(
        (status = 200, description = "问候语", body = MessageResponse)
    )
)]
pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse::new(API_GREETING))
}
