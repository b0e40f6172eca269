//! In-memory courier storage

mod repository;

pub use repository::InMemoryCourierRepository;
