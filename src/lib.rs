//! Delivery Forms API
//!
//! Validated input binding for a delivery web application:
//! - Form schemas with baseline required/length/choice checks
//! - Shared validators (phone, password strength, email, comments)
//! - Per-field error reports: a submission yields a validated record or
//!   a non-empty report, never both
//! - In-memory stores behind repository traits

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::complaint::InMemoryComplaintRepository;
use infrastructure::courier::InMemoryCourierRepository;
use infrastructure::password::Argon2Hasher;
use infrastructure::product::InMemoryProductRepository;
use infrastructure::recovery::RecoveryTokenStore;
use infrastructure::review::InMemoryReviewRepository;
use infrastructure::services::{AccountService, CatalogService, CourierService, FeedbackService};
use infrastructure::user::InMemoryUserRepository;

/// Wire the in-memory stores and services into an application state
pub fn create_app_state(config: &AppConfig) -> AppState {
    let users = Arc::new(InMemoryUserRepository::new());
    let products = Arc::new(InMemoryProductRepository::new());
    let couriers = Arc::new(InMemoryCourierRepository::new());
    let complaints = Arc::new(InMemoryComplaintRepository::new());
    let reviews = Arc::new(InMemoryReviewRepository::new());

    let hasher = Arc::new(Argon2Hasher::new());
    let recovery_tokens = Arc::new(RecoveryTokenStore::new(config.recovery.token_ttl_minutes));

    let account_service = Arc::new(AccountService::new(
        users.clone(),
        hasher.clone(),
        recovery_tokens,
    ));
    let catalog_service = Arc::new(CatalogService::new(products.clone()));
    let courier_service = Arc::new(CourierService::new(users, couriers, hasher));
    let feedback_service = Arc::new(FeedbackService::new(complaints, reviews, products));

    AppState::new(
        account_service,
        catalog_service,
        courier_service,
        feedback_service,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_app_state() {
        let state = create_app_state(&AppConfig::default());
        let _router = api::create_router(state);
    }
}
