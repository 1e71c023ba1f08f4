use health_log::client::LogClient;
use health_log::interaction::Interaction;
use health_log::sink::LogSink;
use health_log::{AppState, Config, LogStore, router};
use std::net::SocketAddr;
use tokio::fs;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    if let Some(parent) = config.data_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    let store = LogStore::open(config.data_path.clone()).await;
    let sink = match &config.remote_endpoint {
        Some(endpoint) => {
            info!("forwarding confirmed actions to {endpoint}");
            LogSink::Remote(LogClient::new(endpoint.clone()))
        }
        None => LogSink::Local(store.clone()),
    };
    let state = AppState::new(store, Interaction::new(sink), config.page_endpoint());

    let app = router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
