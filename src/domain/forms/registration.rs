//! Customer registration form

use once_cell::sync::Lazy;

use super::schema::{FieldSchema, FormSchema};
use super::submission::RawSubmission;
use super::{optional, FormError};
use crate::domain::user::UserRepository;
use crate::domain::validation::{
    validate_email_format, validate_password_strength, validate_phone, validate_username,
    ValidPhone, COUNTRY_CODES, DEFAULT_COUNTRY_CODE,
};
use crate::domain::DomainError;

pub static SCHEMA: Lazy<FormSchema> = Lazy::new(|| {
    FormSchema::new(
        "registration",
        vec![
            FieldSchema::text("username").required().max_length(150),
            FieldSchema::email("email").required().max_length(254),
            FieldSchema::text("first_name").required().max_length(150),
            FieldSchema::text("last_name").required().max_length(150),
            FieldSchema::choice("country_code", COUNTRY_CODES.to_vec()).required(),
            FieldSchema::text("phone_number")
                .required()
                .max_length(15)
                .required_message("A phone number is required"),
            FieldSchema::text("address").max_length(255),
            FieldSchema::password("password1").required(),
            FieldSchema::password("password2").required(),
        ],
    )
});

/// Registration input that passed all checks
#[derive(Debug, Clone)]
pub struct ValidatedRegistration {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Canonical `"<code> <digits>"` form for storage
    pub phone: String,
    /// Phone as typed, for redisplay
    pub phone_display: String,
    pub address: Option<String>,
    pub password: String,
}

/// Validate a registration submission
///
/// Uniqueness of username and email is checked against the user store;
/// everything else is pure.
pub async fn validate(
    submission: &RawSubmission,
    users: &dyn UserRepository,
) -> Result<ValidatedRegistration, FormError> {
    let mut report = SCHEMA.check(submission);

    let username = submission.trimmed("username");
    if !report.has("username") {
        if let Err(e) = validate_username(username) {
            report.add("username", e.to_string());
        } else if users.find_by_username(username).await?.is_some() {
            report.add("username", "This username is already taken");
        }
    }

    let email = submission.trimmed("email");
    if !report.has("email") {
        if let Err(e) = validate_email_format(email) {
            report.add("email", e.to_string());
        } else if users.email_exists(email).await? {
            report.add("email", "This email address is already registered");
        }
    }

    let mut phone: Option<ValidPhone> = None;
    if !report.has("phone_number") {
        match validate_phone(submission.trimmed("phone_number")) {
            Ok(p) => phone = Some(p),
            Err(e) => report.add("phone_number", e.to_string()),
        }
    }

    let password1 = submission.value("password1").unwrap_or("");
    if !report.has("password1") {
        if let Err(e) = validate_password_strength(password1) {
            report.add("password1", e.to_string());
        }
    }

    let password2 = submission.value("password2").unwrap_or("");
    if !report.has("password2") && password1 != password2 {
        report.add("password2", "The two password fields didn't match");
    }

    if !report.is_empty() {
        return Err(FormError::Invalid(report));
    }

    let phone =
        phone.ok_or_else(|| DomainError::internal("phone missing after successful validation"))?;

    let country_code = match submission.trimmed("country_code") {
        "" => DEFAULT_COUNTRY_CODE,
        code => code,
    };

    Ok(ValidatedRegistration {
        username: username.to_string(),
        email: email.to_string(),
        first_name: submission.trimmed("first_name").to_string(),
        last_name: submission.trimmed("last_name").to_string(),
        phone: phone.storage(country_code),
        phone_display: phone.display().to_string(),
        address: optional(submission.trimmed("address")),
        password: password1.to_string(),
    })
}
