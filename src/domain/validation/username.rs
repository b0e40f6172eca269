//! Username validation

use thiserror::Error;

/// Errors that can occur during username validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username contains invalid character: '{0}'. Letters, digits and @/./+/-/_ only")]
    InvalidCharacter(char),
}

/// Validate a username
///
/// Letters, digits and the characters `@`, `.`, `+`, `-`, `_` are allowed.
/// Required/length limits are enforced by the form schema.
pub fn validate_username(username: &str) -> Result<(), UsernameError> {
    for c in username.chars() {
        if !c.is_alphanumeric() && !"@.+-_".contains(c) {
            return Err(UsernameError::InvalidCharacter(c));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        assert!(validate_username("maria_perez").is_ok());
        assert!(validate_username("user.name+tag").is_ok());
        assert!(validate_username("repartidor-1").is_ok());
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(
            validate_username("user name"),
            Err(UsernameError::InvalidCharacter(' '))
        );
        assert_eq!(
            validate_username("user!"),
            Err(UsernameError::InvalidCharacter('!'))
        );
    }
}
