//! HTTP route handlers grouped by resource

pub mod accounts;
pub mod auth;
pub mod complaints;
pub mod couriers;
pub mod products;
