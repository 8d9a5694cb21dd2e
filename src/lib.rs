pub mod authenticator;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod store;

use axum::{middleware as axum_middleware, routing::get, Router};
use authenticator::Authenticator;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub authenticator: Arc<dyn Authenticator>,
}

fn player_api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/player_api.php", get(handlers::player_api::player_api))
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::credentials::require_credentials,
        ))
}

/// Build the full application router (used by main and tests).
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(player_api_routes(state.clone()))
        .with_state(state)
}
