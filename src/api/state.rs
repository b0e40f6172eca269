//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::services::{
    AccountService, CatalogService, CourierService, FeedbackService,
};

/// Application state containing the shared services
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService>,
    pub catalog_service: Arc<CatalogService>,
    pub courier_service: Arc<CourierService>,
    pub feedback_service: Arc<FeedbackService>,
}

impl AppState {
    pub fn new(
        account_service: Arc<AccountService>,
        catalog_service: Arc<CatalogService>,
        courier_service: Arc<CourierService>,
        feedback_service: Arc<FeedbackService>,
    ) -> Self {
        Self {
            account_service,
            catalog_service,
            courier_service,
            feedback_service,
        }
    }
}
