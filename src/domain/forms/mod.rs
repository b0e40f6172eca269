//! Form binding and validation
//!
//! Each form module declares a static schema, a validated record type and a
//! `validate` function. Validation aggregates every field failure into an
//! `ErrorReport`; a submission yields exactly one of a validated record or a
//! non-empty report.

pub mod report;
pub mod schema;
pub mod submission;

pub mod complaint;
pub mod courier;
pub mod login;
pub mod password_reset;
pub mod product;
pub mod profile;
pub mod registration;
pub mod review;

pub use report::ErrorReport;
pub use schema::{FieldKind, FieldSchema, FormSchema};
pub use submission::RawSubmission;

use thiserror::Error;

use crate::domain::DomainError;

/// Outcome of a form that consults the store during validation
#[derive(Debug, Error)]
pub enum FormError {
    /// One or more fields failed validation
    #[error("validation failed for {} field(s)", .0.len())]
    Invalid(ErrorReport),

    /// The store itself failed; not a user-correctable error
    #[error(transparent)]
    Storage(#[from] DomainError),
}

impl From<ErrorReport> for FormError {
    fn from(report: ErrorReport) -> Self {
        Self::Invalid(report)
    }
}

/// Trimmed optional field: empty input becomes `None`
pub(crate) fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
