pub mod health;

use axum::{
    routing::{get, put},
    Router,
};

use crate::insights;
use crate::profile;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/insights",
            get(insights::handlers::handle_get_insights),
        )
        .route(
            "/api/v1/profile",
            put(profile::handlers::handle_update_profile),
        )
        .route(
            "/api/v1/profile/onboarding",
            get(profile::handlers::handle_onboarding_status),
        )
        .with_state(state)
}
