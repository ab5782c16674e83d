use std::sync::Arc;

use roqet_api::server::{AppState, start_server};
use roqet_catalog::static_catalog::StaticCatalog;
use roqet_core::config::AppConfig;
use roqet_core::diagnostics::port::ProcessEnv;
use roqet_core::diagnostics::service::DiagnosticsService;
use roqet_store::locator::locator_from_config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// # Summary
/// 加载分层配置。
///
/// # Logic
/// 1. 以 `AppConfig::default()` 作为最底层默认值。
/// 2. 叠加可选的 `config/roqet.toml` 文件。
/// 3. 叠加环境变量 `PORT` 与 `ROQET_DATABASE_ENABLED`。
fn load_config() -> Result<AppConfig, config::ConfigError> {
    let defaults = AppConfig::default();

    config::Config::builder()
        .set_default("server.host", defaults.server.host)?
        .set_default("server.port", i64::from(defaults.server.port))?
        .set_default("database.enabled", defaults.database.enabled)?
        .set_default("database.url_var", defaults.database.url_var)?
        .set_default("database.name_var", defaults.database.name_var)?
        .add_source(config::File::with_name("config/roqet").required(false))
        .set_override_option("server.port", std::env::var("PORT").ok())?
        .set_override_option(
            "database.enabled",
            std::env::var("ROQET_DATABASE_ENABLED").ok(),
        )?
        .build()?
        .try_deserialize()
}

/// # Summary
/// 应用启动入口，纯粹的 DI 容器。
/// 负责实例化所有具体实现组件并通过 Arc<dyn Trait> 注入到 API 层。
///
/// # Logic
/// 1. 初始化全局日志。
/// 2. 加载配置。
/// 3. 实例化内容目录与数据库协作方定位器。
/// 4. 构造诊断探针与共享状态。
/// 5. 启动 HTTP 服务，直到收到退出信号。
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    info!("ROQET backend starting...");

    // 2. 加载配置
    let config = load_config()?;
    info!("Configuration loaded: {:?}", config);

    // 3. 实例化内容与基础设施层
    let env = Arc::new(ProcessEnv);
    let content = Arc::new(StaticCatalog::new());
    let locator = locator_from_config(&config.database, env.as_ref());

    // 4. 构造诊断探针与共享状态
    let diagnostics = Arc::new(DiagnosticsService::new(locator, env, &config.database));
    let state = AppState {
        content,
        diagnostics,
    };

    // 5. 启动服务
    start_server(state, &config.server.bind_addr()).await?;
    info!("ROQET backend stopped");

    Ok(())
}
