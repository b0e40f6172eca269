//! In-memory complaint storage

mod repository;

pub use repository::InMemoryComplaintRepository;
