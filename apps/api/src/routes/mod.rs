pub mod health;

use axum::{routing::get, routing::post, Router};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analysis/keywords", post(handlers::handle_keywords))
        .route("/api/v1/analysis/skills", post(handlers::handle_skills))
        .route(
            "/api/v1/analysis/skill-gaps",
            post(handlers::handle_skill_gaps),
        )
        .route("/api/v1/analysis/ats", post(handlers::handle_ats))
        .route("/api/v1/analysis/grammar", post(handlers::handle_grammar))
        .route("/api/v1/analysis/score", post(handlers::handle_score))
        .route("/api/v1/analysis/compare", post(handlers::handle_compare))
        .with_state(state)
}
