use crate::app::AppState;
use crate::models::HealthResponse;
use axum::{extract::State, response::Json as ResponseJson};

pub async fn health_check(State(state): State<AppState>) -> ResponseJson<HealthResponse> {
    ResponseJson(HealthResponse::healthy(&state.version))
}
