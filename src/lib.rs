use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod clock;
pub mod config;
pub mod db;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

use clock::{Clock, SystemClock};
use db::HealthStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn HealthStore>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(store: Arc<dyn HealthStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: Arc<dyn HealthStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }
}

pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Profiles
        .route("/api/calculate", post(handlers::profiles::submit_survey))
        .route("/api/profile/:user_id", get(handlers::profiles::get_profile))
        // Diary
        .route(
            "/api/diary/:user_id",
            get(handlers::diary::list_entries).post(handlers::diary::add_entry),
        )
        .route(
            "/api/diary/entry/:entry_id",
            delete(handlers::diary::delete_entry),
        )
        // Streaks
        .route("/api/streak/:user_id", get(handlers::streaks::get_streak))
        .route(
            "/api/streak/:user_id/complete",
            post(handlers::streaks::complete_day),
        )
        // Daily tasks
        .route(
            "/api/tasks/:user_id",
            get(handlers::tasks::get_tasks).put(handlers::tasks::replace_tasks),
        )
        // Stats
        .route("/api/stats/:user_id", get(handlers::stats::get_stats));

    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz));

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
