pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod routes;
pub mod swagger;

#[cfg(test)]
mod tests;

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use config::Config;
use db::Database;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Config,
}

/// Health check endpoint for monitoring
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let pool_health = state.db.get_pool_health();
    if pool_health.is_closed {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }

    Ok(Json(serde_json::json!({
        "status": "ok",
        "database": pool_health,
    })))
}
