//! # 诊断路由控制器

use axum::Json;
use axum::extract::State;

use roqet_core::diagnostics::entity::StatusReport;

use crate::server::AppState;

/// 数据库连通性诊断
///
/// 报告后端、可选数据库协作方与相关环境变量的状态。
/// 任何协作方故障都体现为状态文案，本接口始终返回 200。
#[utoipa::path(
    get,
    path = "/test",
    tag = "诊断 (Diagnostics)",
    responses(
        (status = 200, description = "诊断报告", body = StatusReport)
    )
)]
pub async fn test_database(State(state): State<AppState>) -> Json<StatusReport> {
    let report = state.diagnostics.test_database().await;
    tracing::debug!("Diagnostics: database={}", report.database);
    Json(report)
}
