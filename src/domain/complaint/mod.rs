//! Complaint aggregate

mod entity;
mod repository;

pub use entity::{Complaint, ComplaintReason};
pub use repository::ComplaintRepository;
