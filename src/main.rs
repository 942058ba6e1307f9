mod app;
mod config;
mod error;
mod handlers;
mod models;
mod server;

use config::AppConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    
    let config = AppConfig::from_env();
    
    if let Err(err) = server::run(config).await {
        tracing::error!(error = %err, "Server exited");
        std::process::exit(1);
    }
}
