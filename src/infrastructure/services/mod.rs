//! Service layer wiring forms to the stores

mod account_service;
mod catalog_service;
mod courier_service;
mod feedback_service;

pub use account_service::AccountService;
pub use catalog_service::CatalogService;
pub use courier_service::CourierService;
pub use feedback_service::FeedbackService;
