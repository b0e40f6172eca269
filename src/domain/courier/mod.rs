//! Courier aggregate

mod entity;
mod repository;

pub use entity::CourierProfile;
pub use repository::CourierRepository;
