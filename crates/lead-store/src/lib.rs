//! Lead Store Service
//!
//! Stores the leads captured by the healthcare and restaurant landing page
//! forms and exposes them to the back office.
//!
//! ## Endpoints
//!
//! - `POST /api/leads` - Submit a lead
//! - `GET /api/leads` - List all leads, oldest first
//! - `GET /api/leads/count` - Count leads
//! - `GET /health` - Health check

pub mod config;
pub mod handlers;
pub mod storage;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use handlers::AppState;
pub use storage::{LeadRepository, MemoryStorage, RedisStorage, StorageBackend};

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let shared_state = Arc::new(state);

    Router::new()
        .route("/health", get(handlers::health_handler))
        .route(
            "/api/leads",
            get(handlers::list_leads_handler).post(handlers::submit_lead_handler),
        )
        .route("/api/leads/count", get(handlers::count_leads_handler))
        .with_state(shared_state)
        // Landing pages are served from a different origin
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
