use crate::app::{build_router, AppState};
use crate::config::AppConfig;
use crate::error::{AppError, Result};
use std::net::SocketAddr;
use tokio::net::TcpListener;

pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| AppError::Bind { addr, source })
}

/// Binds the configured address and serves until the process is killed
pub async fn run(config: AppConfig) -> Result<()> {
    let addr = config.bind_addr();
    let listener = bind(addr).await?;
    let app = build_router(AppState::from(&config));

    tracing::info!("Starting server on {} (version {})", addr, config.version);

    axum::serve(listener, app).await.map_err(AppError::Serve)?;
    Ok(())
}
