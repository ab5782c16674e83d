//! # DTO (Data Transfer Object) 层
//!
//! 内容实体本身即为响应 Schema (定义在 `roqet-core`)，
//! 这里只放 API 层自有的轻量响应结构。

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 单字段问候响应
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// 问候语
    #[schema(example = "Hello from FastAPI Backend!")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 失败响应
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    /// 固定为 false
    pub success: bool,
    /// 错误描述信息
    pub error: String,
}

impl ApiErrorResponse {
    /// 从错误信息构建
    pub fn from_msg(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: msg.into(),
        }
    }
}
