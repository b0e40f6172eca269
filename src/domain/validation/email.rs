//! Email format validation
//!
//! Uniqueness is checked against the user store by the forms that need it;
//! this module only covers syntax.

use thiserror::Error;
use validator::ValidateEmail;

/// Errors that can occur during email format validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("Enter a valid email address")]
    Invalid,
}

/// Validate email syntax
pub fn validate_email_format(email: &str) -> Result<(), EmailError> {
    if email.validate_email() {
        Ok(())
    } else {
        Err(EmailError::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(validate_email_format("a@b.com").is_ok());
        assert!(validate_email_format("user.name+tag@example.cl").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert_eq!(validate_email_format("not-an-email"), Err(EmailError::Invalid));
        assert_eq!(validate_email_format("@nodomain.com"), Err(EmailError::Invalid));
        assert_eq!(validate_email_format(""), Err(EmailError::Invalid));
    }
}
