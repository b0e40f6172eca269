//! Free-text comment validation

use thiserror::Error;

/// Errors that can occur during comment validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommentError {
    #[error("The comment must have at least {0} characters")]
    TooShort(usize),
}

pub const MIN_COMMENT_LENGTH: usize = 10;

/// Validate an optional free-text comment
///
/// Empty input is accepted (the field is optional); non-empty input must
/// have at least 10 characters.
pub fn validate_comment(comment: &str) -> Result<(), CommentError> {
    if !comment.is_empty() && comment.chars().count() < MIN_COMMENT_LENGTH {
        return Err(CommentError::TooShort(MIN_COMMENT_LENGTH));
    }

    Ok(())
}
