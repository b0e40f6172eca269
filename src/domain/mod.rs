//! Domain model: entities, repository traits, validators and forms

pub mod complaint;
pub mod courier;
pub mod error;
pub mod forms;
pub mod product;
pub mod review;
pub mod user;
pub mod validation;

pub use error::DomainError;
