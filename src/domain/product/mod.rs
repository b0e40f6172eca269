//! Product aggregate

mod entity;
mod repository;

pub use entity::{Product, ProductCategory};
pub use repository::ProductRepository;
