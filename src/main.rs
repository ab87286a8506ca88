use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tracing_subscriber::EnvFilter;
use usuarios_service::{
    common_routes_with_ready, user_routes, AppState, PgUserStore, ServiceConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("usuarios_service=info")),
        )
        .init();

    let config = ServiceConfig::from_env();
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    let state = AppState {
        store: Arc::new(PgUserStore::new(pool)),
    };

    let app = Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(user_routes(state))
        .layer(RequestBodyLimitLayer::new(1024 * 1024));

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
