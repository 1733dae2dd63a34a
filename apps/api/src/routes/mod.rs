pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::account;
use crate::interests;
use crate::state::AppState;
use crate::suggestions::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/suggestions", post(handlers::handle_suggestions))
        .route("/api/v1/interests/extract", post(interests::handle_extract))
        .route("/api/v1/account", delete(account::handle_delete_account))
        .with_state(state)
}
