//! Chilean mobile phone validation and storage-format handling
//!
//! Phones are stored as `"<country code> <digits>"`, e.g. `"+56 912345678"`.
//! The same validator backs customer registration, courier account editing
//! and courier account creation.

use thiserror::Error;

/// Errors that can occur during phone validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PhoneError {
    #[error("A phone number is required")]
    Required,

    #[error("The phone number must contain only digits")]
    Format,

    #[error("The phone number must have exactly {0} digits")]
    Length(usize),

    #[error("Mobile numbers must start with {0}")]
    Prefix(char),
}

/// The only country code currently supported
pub const DEFAULT_COUNTRY_CODE: &str = "+56";

/// All country codes the platform recognizes
pub const COUNTRY_CODES: &[&str] = &[DEFAULT_COUNTRY_CODE];

const PHONE_DIGITS: usize = 9;
const MOBILE_PREFIX: char = '9';

/// A phone number that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidPhone {
    display: String,
    digits: String,
}

impl ValidPhone {
    /// The trimmed input as the user typed it, separators preserved
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The normalized 9-digit number
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Render the storage form `"<code> <digits>"`
    pub fn storage(&self, country_code: &str) -> String {
        format!("{} {}", country_code, self.digits)
    }
}

/// Validate a raw phone number
///
/// Rules:
/// - Required (after trimming)
/// - Only digits once internal spaces and hyphens are removed
/// - Exactly 9 digits
/// - Must start with 9 (Chilean mobile numbers)
pub fn validate_phone(raw: &str) -> Result<ValidPhone, PhoneError> {
    let display = raw.trim();

    if display.is_empty() {
        return Err(PhoneError::Required);
    }

    let digits = strip_separators(display);

    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(PhoneError::Format);
    }

    if digits.chars().count() != PHONE_DIGITS {
        return Err(PhoneError::Length(PHONE_DIGITS));
    }

    if !digits.starts_with(MOBILE_PREFIX) {
        return Err(PhoneError::Prefix(MOBILE_PREFIX));
    }

    Ok(ValidPhone {
        display: display.to_string(),
        digits,
    })
}

/// Country code and number recovered from a stored phone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneParts {
    pub country_code: String,
    pub number: String,
}

/// Decompose a stored `"<code> <digits>"` value for edit-form prefill
///
/// Splits on the first space. Values that do not match the storage shape
/// fall back to stripping any known country-code prefix and treating the
/// remainder as the number. Never fails; this is prefill, not validation.
pub fn decompose_stored(stored: &str) -> PhoneParts {
    let stored = stored.trim();

    if let Some((code, rest)) = stored.split_once(' ') {
        return PhoneParts {
            country_code: code.to_string(),
            number: strip_separators(rest),
        };
    }

    // Legacy values without the expected shape
    let mut number = stored.to_string();
    for code in COUNTRY_CODES {
        number = number.replace(code, "");
    }

    PhoneParts {
        country_code: DEFAULT_COUNTRY_CODE.to_string(),
        number: strip_separators(&number),
    }
}

fn strip_separators(value: &str) -> String {
    value.chars().filter(|c| *c != ' ' && *c != '-').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_phone() {
        let phone = validate_phone("912345678").unwrap();
        assert_eq!(phone.digits(), "912345678");
        assert_eq!(phone.display(), "912345678");
    }

    #[test]
    fn test_valid_phone_with_separators() {
        let phone = validate_phone(" 9 1234 5678 ").unwrap();
        assert_eq!(phone.digits(), "912345678");
        assert_eq!(phone.display(), "9 1234 5678");

        let phone = validate_phone("9-1234-5678").unwrap();
        assert_eq!(phone.digits(), "912345678");
    }

    #[test]
    fn test_empty_phone() {
        assert_eq!(validate_phone(""), Err(PhoneError::Required));
        assert_eq!(validate_phone("   "), Err(PhoneError::Required));
    }

    #[test]
    fn test_non_digit_phone() {
        assert_eq!(validate_phone("91234567a"), Err(PhoneError::Format));
        assert_eq!(validate_phone("+56912345678"), Err(PhoneError::Format));
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(validate_phone("91234567"), Err(PhoneError::Length(9)));
        assert_eq!(validate_phone("9123456789"), Err(PhoneError::Length(9)));
    }

    #[test]
    fn test_wrong_prefix() {
        assert_eq!(validate_phone("812345678"), Err(PhoneError::Prefix('9')));
    }

    #[test]
    fn test_storage_form() {
        let phone = validate_phone("9 1234 5678").unwrap();
        assert_eq!(phone.storage("+56"), "+56 912345678");
    }

    #[test]
    fn test_decompose_round_trip() {
        let phone = validate_phone("912345678").unwrap();
        let stored = phone.storage(DEFAULT_COUNTRY_CODE);

        let parts = decompose_stored(&stored);
        assert_eq!(parts.country_code, "+56");
        assert_eq!(parts.number, "912345678");
    }

    #[test]
    fn test_decompose_with_separators_in_number() {
        let parts = decompose_stored("+56 9 1234 5678");
        assert_eq!(parts.country_code, "+56");
        assert_eq!(parts.number, "912345678");
    }

    #[test]
    fn test_decompose_legacy_bare_number() {
        let parts = decompose_stored("912345678");
        assert_eq!(parts.country_code, "+56");
        assert_eq!(parts.number, "912345678");
    }

    #[test]
    fn test_decompose_legacy_prefixed_number() {
        let parts = decompose_stored("+56912345678");
        assert_eq!(parts.country_code, "+56");
        assert_eq!(parts.number, "912345678");
    }

    #[test]
    fn test_decompose_legacy_hyphenated() {
        let parts = decompose_stored("9-1234-5678");
        assert_eq!(parts.country_code, "+56");
        assert_eq!(parts.number, "912345678");
    }
}
