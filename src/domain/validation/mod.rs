//! Shared field validators
//!
//! Each validator is a pure function from raw input to either an accepted
//! value or a tagged error. The forms render errors into field-attached
//! messages.

pub mod comment;
pub mod email;
pub mod password;
pub mod phone;
pub mod plate;
pub mod username;

pub use comment::{validate_comment, CommentError, MIN_COMMENT_LENGTH};
pub use email::{validate_email_format, EmailError};
pub use password::{validate_password_strength, PasswordError, MIN_PASSWORD_LENGTH};
pub use phone::{
    decompose_stored, validate_phone, PhoneError, PhoneParts, ValidPhone, COUNTRY_CODES,
    DEFAULT_COUNTRY_CODE,
};
pub use plate::{validate_plate, PlateError};
pub use username::{validate_username, UsernameError};
