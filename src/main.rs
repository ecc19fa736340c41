use std::sync::Arc;

use saavnlink::{
    common::{logger, types::AnyResult},
    configs::Config,
    server::AppState,
    transport,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> AnyResult<()> {
    let config = Config::load()?;
    logger::init(config.logging.as_ref());

    let shared_state = Arc::new(AppState::from_config(&config)?);

    if let Some(every) = config.cache.sweep_interval() {
        shared_state.cache.spawn_sweeper(every);
    }

    let app = transport::http_server::router(shared_state.clone());

    let address = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(
        "Saavnlink listening on {} (cache ttl {}s, upstream {})",
        address, config.cache.ttl_secs, config.jiosaavn.base_url
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(
        "Saavnlink stopped after {}ms with {} cached pages",
        shared_state.uptime_ms(),
        shared_state.cache.len()
    );
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
