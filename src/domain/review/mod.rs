//! Review aggregate

mod entity;
mod repository;

pub use entity::{Review, RATING_CHOICES};
pub use repository::ReviewRepository;
