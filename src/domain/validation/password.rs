//! Password strength validation

use thiserror::Error;

/// Errors that can occur during password strength validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PasswordError {
    #[error("The password must have at least {0} characters")]
    TooShort(usize),

    #[error("The password must contain at least one uppercase letter")]
    MissingUppercase,

    #[error("The password must contain at least one digit")]
    MissingDigit,
}

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validate password strength
///
/// Rules:
/// - Minimum 8 characters
/// - At least one uppercase letter
/// - At least one decimal digit
///
/// Confirmation matching is a cross-field concern handled by the forms.
pub fn validate_password_strength(password: &str) -> Result<(), PasswordError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(PasswordError::TooShort(MIN_PASSWORD_LENGTH));
    }

    if !password.chars().any(|c| c.is_uppercase()) {
        return Err(PasswordError::MissingUppercase);
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordError::MissingDigit);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_passwords() {
        assert!(validate_password_strength("Abcdefg1").is_ok());
        assert!(validate_password_strength("P4ssword!").is_ok());
    }

    #[test]
    fn test_too_short() {
        assert_eq!(
            validate_password_strength("Ab1"),
            Err(PasswordError::TooShort(8))
        );
    }

    #[test]
    fn test_missing_uppercase() {
        assert_eq!(
            validate_password_strength("abcdefgh"),
            Err(PasswordError::MissingUppercase)
        );
    }

    #[test]
    fn test_missing_digit() {
        assert_eq!(
            validate_password_strength("Abcdefgh"),
            Err(PasswordError::MissingDigit)
        );
    }

    #[test]
    fn test_length_checked_before_content() {
        // A short all-lowercase password reports length first
        assert_eq!(
            validate_password_strength("abc"),
            Err(PasswordError::TooShort(8))
        );
    }
}
