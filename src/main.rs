use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use rolodex::{config::Config, db::Database, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let db = Database::new_with_pool_config(&config.database_url, config.max_db_connections, 2)
        .await?;

    info!("Running SQLx migrations...");
    sqlx::migrate!("./migrations").run(&db.pool).await?;
    info!("SQLx migrations completed successfully");

    let state = Arc::new(AppState {
        db,
        config: config.clone(),
    });

    let app = Router::new()
        .route("/api/health", get(rolodex::health_check))
        .nest("/contacts", rolodex::routes::contacts::router())
        .merge(rolodex::swagger::create_swagger_router())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.server_address).await?;
    info!("Server starting on {}", config.server_address);

    axum::serve(listener, app).await?;

    Ok(())
}
