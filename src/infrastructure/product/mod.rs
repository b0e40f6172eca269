//! In-memory product storage

mod repository;

pub use repository::InMemoryProductRepository;
