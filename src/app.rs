use crate::config::AppConfig;
use crate::handlers::{health, root};
use axum::{routing::any, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Read-only state shared by every request
#[derive(Debug, Clone)]
pub struct AppState {
    pub version: Arc<str>,
}

impl From<&AppConfig> for AppState {
    fn from(config: &AppConfig) -> Self {
        Self {
            version: Arc::from(config.version.as_str()),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", any(health::health_check))
        
        // Greeting, also served for anything unmatched
        .route("/", any(root::index))
        .fallback(root::index)
        
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
