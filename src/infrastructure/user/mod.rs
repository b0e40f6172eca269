//! In-memory user storage

mod repository;

pub use repository::InMemoryUserRepository;
