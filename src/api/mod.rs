use axum::{Router, routing::post};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::answer::AnswerClient;
use crate::search::SearchClient;

pub mod error;
pub mod handlers;
pub mod models;

/// Shared handler state: the two backend clients, built once at startup
/// from the injected configuration.
#[derive(Clone)]
pub struct AppState {
    pub answer: Arc<AnswerClient>,
    pub search: Arc<SearchClient>,
}

impl AppState {
    pub fn new(answer: AnswerClient, search: SearchClient) -> AppState {
        AppState {
            answer: Arc::new(answer),
            search: Arc::new(search),
        }
    }
}

pub fn create_router(state: AppState, static_dir: &str) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // API routes
        .route("/ask", post(handlers::ask_handler))
        .with_state(state)
        // Static file serving for the UI
        .nest_service("/", ServeDir::new(static_dir))
        .layer(cors)
}
