//! # 内容路由控制器
//!
//! 资讯、工具、课程地图三个只读端点。数据来自 `ContentProvider`，
//! 序列化前统一经过 Schema 契约校验。

use axum::Json;
use axum::extract::State;

use roqet_core::content::entity::{CourseStage, NewsItem, ToolItem};
use roqet_core::content::schema::{Keyed, Validate};

use crate::error::ApiError;
use crate::server::AppState;

/// 校验通过后包装为 JSON 响应
fn validated<T: Keyed + Validate>(items: Vec<T>) -> Result<Json<Vec<T>>, ApiError> {
    items.validate()?;
    Ok(Json(items))
}

/// 获取市场资讯
///
/// 返回固定的 3 条资讯，覆盖短线与长线两种时间跨度。
#[utoipa::path(
    get,
    path = "/api/news",
    tag = "内容 (Content)",
    responses(
        (status = 200, description = "资讯列表", body = [NewsItem]),
        (status = 500, description = "数据违反 Schema 契约")
    )
)]
pub async fn get_news(State(state): State<AppState>) -> Result<Json<Vec<NewsItem>>, ApiError> {
    tracing::debug!("Serving news");
    validated(state.content.get_news())
}

/// 获取交易工具说明
#[utoipa::path(
    get,
    path = "/api/tools",
    tag = "内容 (Content)",
    responses(
        (status = 200, description = "工具列表", body = [ToolItem]),
        (status = 500, description = "数据违反 Schema 契约")
    )
)]
pub async fn get_tools(State(state): State<AppState>) -> Result<Json<Vec<ToolItem>>, ApiError> {
    tracing::debug!("Serving tools");
    validated(state.content.get_tools())
}

/// 获取课程地图
///
/// 按 Launchpad → Pre-Launch → Ignition → Ascent → Orbit 的顺序返回 5 个阶段。
#[utoipa::path(
    get,
    path = "/api/course-map",
    tag = "内容 (Content)",
    responses(
        (status = 200, description = "课程阶段列表", body = [CourseStage]),
        (status = 500, description = "数据违反 Schema 契约")
    )
)]
pub async fn get_course_map(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseStage>>, ApiError> {
    tracing::debug!("Serving course map");
    validated(state.content.get_course_map())
}
