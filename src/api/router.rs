use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::health;
use super::routes;
use super::state::AppState;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .nest("/auth", routes::auth::create_auth_router())
        .nest("/accounts", routes::accounts::create_accounts_router())
        .nest("/products", routes::products::create_products_router())
        .nest("/couriers", routes::couriers::create_couriers_router())
        .nest("/complaints", routes::complaints::create_complaints_router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
