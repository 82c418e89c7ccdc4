//! Employee Gateway - 员工目录 HTTP 门面

use std::sync::Arc;

use employee_gateway::config::{load_config, print_config};
use employee_gateway::infrastructure::adapters::{HttpDirectoryClient, HttpDirectoryClientConfig};
use employee_gateway::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},employee_gateway={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Employee Gateway v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 创建上游目录客户端
    let directory_config = HttpDirectoryClientConfig::new(config.upstream.base_url.clone())
        .with_timeout(config.upstream.timeout_secs)
        .with_connect_timeout(config.upstream.connect_timeout_secs);
    let directory = Arc::new(HttpDirectoryClient::new(directory_config)?);

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, AppState::new(directory));

    tracing::info!("Starting HTTP server...");

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
