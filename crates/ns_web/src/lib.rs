use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/news", get(handlers::get_news))
        .route("/api/analyze", post(handlers::analyze))
        .route("/api/tts", post(handlers::tts))
        .route("/api/full_analysis", get(handlers::full_analysis))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use crate::AppState;
    pub use ns_core::{Article, Error, Result};
}
