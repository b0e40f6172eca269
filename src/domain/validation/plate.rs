//! Vehicle license plate validation

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Errors that can occur during license plate validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlateError {
    #[error("Enter a valid license plate (e.g. ABCD12 or AB1234)")]
    Format,
}

// Chilean plates: four letters + two digits (current) or two letters +
// four digits (older registrations).
static PLATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[A-Z]{4}[0-9]{2}|[A-Z]{2}[0-9]{4})$").expect("valid plate regex"));

/// Validate a license plate, case-insensitively
pub fn validate_plate(plate: &str) -> Result<(), PlateError> {
    let normalized = plate.trim().to_ascii_uppercase();

    if PLATE_PATTERN.is_match(&normalized) {
        Ok(())
    } else {
        Err(PlateError::Format)
    }
}
