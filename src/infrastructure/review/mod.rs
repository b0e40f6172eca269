//! In-memory review storage

mod repository;

pub use repository::InMemoryReviewRepository;
