use roqet_core::config::DatabaseConfig;
use roqet_core::diagnostics::error::ProbeError;
use roqet_core::diagnostics::port::{DatabaseHandle, StaticEnv};
use roqet_store::locator::locator_from_config;
use roqet_store::sqlite::SqliteDatabase;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

fn enabled() -> DatabaseConfig {
    DatabaseConfig {
        enabled: true,
        ..DatabaseConfig::default()
    }
}

#[tokio::test]
async fn test_disabled_collaborator_reports_module_not_found() {
    let env = StaticEnv::new([("DATABASE_URL", "sqlite::memory:")]);
    let locator = locator_from_config(&DatabaseConfig::default(), &env);
    assert!(matches!(locator.resolve().await, Err(ProbeError::ModuleNotFound)));
}

#[tokio::test]
async fn test_enabled_without_url_is_uninitialized() {
    let locator = locator_from_config(&enabled(), &StaticEnv::default());
    assert!(matches!(locator.resolve().await, Ok(None)));
}

#[tokio::test]
async fn test_sqlite_lists_tables_in_order() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let db_path = tmp_dir.path().join("roqet.db");

    // 预先建库建表
    let options = SqliteConnectOptions::new()
        .filename(&db_path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await.unwrap();
    for table in ["watchlist", "journal", "alerts"] {
        sqlx::query(&format!("CREATE TABLE {} (id TEXT PRIMARY KEY)", table))
            .execute(&pool)
            .await
            .unwrap();
    }
    pool.close().await;

    let url = format!("sqlite://{}", db_path.display());
    let env = StaticEnv::new([("DATABASE_URL", url.as_str()), ("DATABASE_NAME", "roqet")]);
    let locator = locator_from_config(&enabled(), &env);

    let handle = locator.resolve().await.unwrap().unwrap();
    assert_eq!(handle.name().as_deref(), Some("roqet"));
    let names = handle.list_collection_names().await.unwrap();
    assert_eq!(names, vec!["alerts", "journal", "watchlist"]);
}

#[tokio::test]
async fn test_sqlite_without_name_var() {
    let handle = SqliteDatabase::connect_lazy("sqlite::memory:", None).unwrap();
    assert_eq!(handle.name(), None);
    assert!(handle.list_collection_names().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_corrupt_file_surfaces_query_error() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let db_path = tmp_dir.path().join("broken.db");
    std::fs::write(&db_path, vec![0xAB_u8; 4096]).unwrap();

    let handle =
        SqliteDatabase::connect_lazy(&format!("sqlite://{}", db_path.display()), None).unwrap();
    let res = handle.list_collection_names().await;
    let msg = match res {
        Err(ProbeError::Query(msg)) => msg,
        other => panic!("expected query error, got {:?}", other),
    };
    assert!(msg.contains("not a database"), "{}", msg);
}

#[tokio::test]
async fn test_unreachable_file_reports_driver_message() {
    let handle =
        SqliteDatabase::connect_lazy("sqlite:///nonexistent/dir/roqet.db", None).unwrap();
    let Err(err) = handle.list_collection_names().await else {
        panic!("listing a missing directory must fail");
    };
    // 只保留驱动原始信息，不带 sqlx 的包装前缀
    assert!(!err.detail().starts_with("error returned from database"));
    assert!(err.detail().starts_with("unable to open database file"), "{}", err.detail());
}

#[tokio::test]
async fn test_invalid_url_surfaces_connection_error() {
    let env = StaticEnv::new([("DATABASE_URL", "sqlite://roqet.db?mode=bogus")]);
    let locator = locator_from_config(&enabled(), &env);
    assert!(matches!(locator.resolve().await, Err(ProbeError::Connection(_))));
}
