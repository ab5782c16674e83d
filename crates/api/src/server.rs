//! # API 服务启动器
//!
//! 组装 axum 路由、挂载 Swagger UI、配置 CORS 并绑定 TCP 端口对外提供服务。
//! 本模块不直接启动 `main()`, 而是由 `crates/app` 的 DI 容器持有并调用。

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_swagger_ui::SwaggerUi;

use roqet_core::content::port::ContentProvider;
use roqet_core::diagnostics::service::DiagnosticsService;

use crate::routes::{content, diagnostics, root};

// ============================================================
//  共享应用状态
// ============================================================

/// 全局应用状态，通过 axum 的 `State` 提取器注入到每个 Handler 中。
///
/// # Invariants
/// - 所有字段只读，生命周期与进程等同，由 DI 容器在服务启动前注入。
#[derive(Clone)]
pub struct AppState {
    /// 静态内容提供者
    pub content: Arc<dyn ContentProvider>,
    /// 数据库诊断探针
    pub diagnostics: Arc<DiagnosticsService>,
}

// ============================================================
//  OpenAPI 文档定义
// ============================================================

/// 全局 OpenAPI 文档结构
#[derive(OpenApi)]
#[openapi(
    info(
        title = "ROQET API",
        version = "1.0.0",
        description = "ROQET 学习平台后端：市场资讯、交易工具说明、课程地图与数据库诊断。",
        license(name = "MIT")
    ),
    tags(
        (name = "基础 (Root)", description = "问候与连通性确认"),
        (name = "内容 (Content)", description = "静态资讯、工具与课程数据"),
        (name = "诊断 (Diagnostics)", description = "后端与数据库协作方状态")
    )
)]
pub struct ApiDoc;

// ============================================================
//  服务构建与启动
// ============================================================

/// 跨域策略：放行任意来源、方法与请求头，并允许携带凭证。
///
/// CORS 协议禁止 `*` 与凭证同时出现，因此以回显请求值的方式实现 "任意"。
/// 仅适用于原型阶段。
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// 构建完整的 axum 应用路由树 (含 Swagger UI、CORS 与请求追踪)。
///
/// # Arguments
/// * `state` - 由外部 DI 容器注入的共享状态
pub fn build_router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(root::read_root))
        .routes(routes!(root::hello))
        .routes(routes!(content::get_news))
        .routes(routes!(content::get_tools))
        .routes(routes!(content::get_course_map))
        .routes(routes!(diagnostics::test_database))
        .with_state(state)
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/docs").url("/openapi.json", api))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// 启动 HTTP 监听。
///
/// # Arguments
/// * `state` - 由外部 DI 容器注入的共享状态
/// * `bind_addr` - 监听的地址与端口，如 `"0.0.0.0:8000"`
///
/// # Returns
/// 端口绑定或服务运行失败时返回错误。
pub async fn start_server(
    state: AppState,
    bind_addr: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(state);

    tracing::info!("🚀 ROQET API Server listening on {}", bind_addr);
    tracing::info!("📖 Swagger UI: http://{}/docs", bind_addr);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received. Exiting...");
}
