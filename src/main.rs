use std::sync::Arc;

use vitalcore_api::config::Config;
use vitalcore_api::db::{self, HealthStore, MemoryStore, PgStore};
use vitalcore_api::{build_router, AppState};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vitalcore_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Config::from_env();

    let store: Arc<dyn HealthStore> = match config.database_url.as_deref() {
        Some(url) => {
            let pool = db::pool::connect_and_migrate(url).await;
            Arc::new(PgStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; data is kept in memory only");
            Arc::new(MemoryStore::new())
        }
    };

    let app = build_router(AppState::new(store));

    let addr = config.listen_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
