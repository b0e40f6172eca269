//! Shared API types

pub mod error;
pub mod submission;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use submission::Submission;
