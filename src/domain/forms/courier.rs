//! Courier account and profile forms
//!
//! Three forms share the phone validator: account editing, account
//! creation and (indirectly, via prefill) the stored-phone decomposition
//! that seeds the edit form.

use once_cell::sync::Lazy;
use serde::Serialize;
use uuid::Uuid;

use super::schema::{FieldSchema, FormSchema};
use super::submission::RawSubmission;
use super::{report::ErrorReport, FormError};
use crate::domain::user::{User, UserRepository};
use crate::domain::validation::{
    decompose_stored, validate_email_format, validate_password_strength, validate_phone,
    validate_plate, validate_username, ValidPhone, COUNTRY_CODES, DEFAULT_COUNTRY_CODE,
};
use crate::domain::DomainError;

const PHONE_REQUIRED: &str = "A phone number is required for couriers";

fn account_fields() -> Vec<FieldSchema> {
    vec![
        FieldSchema::text("username").required().max_length(150),
        FieldSchema::email("email").required().max_length(254),
        FieldSchema::text("first_name").required().max_length(150),
        FieldSchema::text("last_name").required().max_length(150),
        FieldSchema::choice("country_code", COUNTRY_CODES.to_vec()).required(),
        FieldSchema::text("phone_number")
            .required()
            .max_length(15)
            .required_message(PHONE_REQUIRED),
    ]
}

pub static ACCOUNT_SCHEMA: Lazy<FormSchema> =
    Lazy::new(|| FormSchema::new("courier_account", account_fields()));

pub static CREATE_SCHEMA: Lazy<FormSchema> = Lazy::new(|| {
    let mut fields = account_fields();
    fields.push(FieldSchema::password("password1").required());
    fields.push(FieldSchema::password("password2").required());
    FormSchema::new("courier_create", fields)
});

pub static PROFILE_SCHEMA: Lazy<FormSchema> = Lazy::new(|| {
    FormSchema::new(
        "courier_profile",
        vec![
            FieldSchema::text("vehicle").required().max_length(100),
            FieldSchema::text("license_plate").required().max_length(10),
            FieldSchema::checkbox("available"),
        ],
    )
});

/// Courier account data that passed all checks
#[derive(Debug, Clone)]
pub struct ValidatedCourierAccount {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Canonical `"<code> <digits>"` form
    pub phone: String,
}

/// Courier creation adds the password to the account data
#[derive(Debug, Clone)]
pub struct ValidatedCourierCreate {
    pub account: ValidatedCourierAccount,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct ValidatedCourierProfile {
    pub vehicle: String,
    pub license_plate: String,
    pub available: bool,
}

/// Initial values for the account edit form, decomposed from the stored
/// phone (inverse of the storage form, with a legacy fallback)
#[derive(Debug, Clone, Serialize)]
pub struct CourierAccountPrefill {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub country_code: String,
    pub phone_number: String,
}

pub fn prefill(user: &User) -> CourierAccountPrefill {
    let parts = user
        .phone()
        .map(decompose_stored)
        .unwrap_or_else(|| crate::domain::validation::PhoneParts {
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            number: String::new(),
        });

    CourierAccountPrefill {
        username: user.username().to_string(),
        email: user.email().to_string(),
        first_name: user.first_name().to_string(),
        last_name: user.last_name().to_string(),
        country_code: parts.country_code,
        phone_number: parts.number,
    }
}

/// Validate an account edit for an existing courier
pub async fn validate_account(
    submission: &RawSubmission,
    current_user_id: Uuid,
    users: &dyn UserRepository,
) -> Result<ValidatedCourierAccount, FormError> {
    let mut report = ACCOUNT_SCHEMA.check(submission);
    let phone = check_account_fields(submission, Some(current_user_id), users, &mut report).await?;

    if !report.is_empty() {
        return Err(FormError::Invalid(report));
    }

    build_account(submission, phone)
}

/// Validate a new courier account, password included
pub async fn validate_create(
    submission: &RawSubmission,
    users: &dyn UserRepository,
) -> Result<ValidatedCourierCreate, FormError> {
    let mut report = CREATE_SCHEMA.check(submission);
    let phone = check_account_fields(submission, None, users, &mut report).await?;

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

    Ok(ValidatedCourierCreate {
        account: build_account(submission, phone)?,
        password: password1.to_string(),
    })
}

/// Validate the delivery-specific profile fields
pub fn validate_profile(
    submission: &RawSubmission,
) -> Result<ValidatedCourierProfile, ErrorReport> {
    let mut report = PROFILE_SCHEMA.check(submission);

    let plate = submission.trimmed("license_plate");
    if !report.has("license_plate") {
        if let Err(e) = validate_plate(plate) {
            report.add("license_plate", e.to_string());
        }
    }

    if !report.is_empty() {
        return Err(report);
    }

    Ok(ValidatedCourierProfile {
        vehicle: submission.trimmed("vehicle").to_string(),
        license_plate: plate.to_ascii_uppercase(),
        available: submission.flag("available"),
    })
}

/// Field checks shared by edit and create: username charset/uniqueness,
/// email format/uniqueness, phone. `current_user_id` exempts the user's
/// own records from the uniqueness checks.
async fn check_account_fields(
    submission: &RawSubmission,
    current_user_id: Option<Uuid>,
    users: &dyn UserRepository,
    report: &mut ErrorReport,
) -> Result<Option<ValidPhone>, DomainError> {
    let username = submission.trimmed("username");
    if !report.has("username") {
        if let Err(e) = validate_username(username) {
            report.add("username", e.to_string());
        } else if let Some(existing) = users.find_by_username(username).await? {
            if current_user_id != Some(existing.id()) {
                report.add("username", "This username is already taken");
            }
        }
    }

    let email = submission.trimmed("email");
    if !report.has("email") {
        if let Err(e) = validate_email_format(email) {
            report.add("email", e.to_string());
        } else if let Some(existing) = users.find_by_email(email).await? {
            if current_user_id != Some(existing.id()) {
                report.add("email", "This email address is already registered");
            }
        }
    }

    let mut phone = None;
    if !report.has("phone_number") {
        match validate_phone(submission.trimmed("phone_number")) {
            Ok(p) => phone = Some(p),
            Err(e) => report.add("phone_number", e.to_string()),
        }
    }

    Ok(phone)
}

fn build_account(
    submission: &RawSubmission,
    phone: Option<ValidPhone>,
) -> Result<ValidatedCourierAccount, FormError> {
    let phone =
        phone.ok_or_else(|| DomainError::internal("phone missing after successful validation"))?;

    let country_code = match submission.trimmed("country_code") {
        "" => DEFAULT_COUNTRY_CODE,
        code => code,
    };

    Ok(ValidatedCourierAccount {
        username: submission.trimmed("username").to_string(),
        email: submission.trimmed("email").to_string(),
        first_name: submission.trimmed("first_name").to_string(),
        last_name: submission.trimmed("last_name").to_string(),
        phone: phone.storage(country_code),
    })
}
