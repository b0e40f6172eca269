//! Password recovery and reset forms
//!
//! Recovery takes an email and never reveals whether an account exists;
//! reset takes the emailed token plus the new password pair. Token lookup
//! and consumption belong to the account service.

use once_cell::sync::Lazy;

use super::report::ErrorReport;
use super::schema::{FieldSchema, FormSchema};
use super::submission::RawSubmission;
use crate::domain::validation::{validate_email_format, validate_password_strength};

pub static RECOVERY_SCHEMA: Lazy<FormSchema> = Lazy::new(|| {
    FormSchema::new(
        "password_recovery",
        vec![FieldSchema::email("email").required().max_length(254)],
    )
});

pub static RESET_SCHEMA: Lazy<FormSchema> = Lazy::new(|| {
    FormSchema::new(
        "password_reset",
        vec![
            FieldSchema::text("token").required(),
            FieldSchema::password("password1").required(),
            FieldSchema::password("password2").required(),
        ],
    )
});

#[derive(Debug, Clone)]
pub struct ValidatedRecovery {
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct ValidatedPasswordReset {
    pub token: String,
    pub password: String,
}

pub fn validate_recovery(submission: &RawSubmission) -> Result<ValidatedRecovery, ErrorReport> {
    let mut report = RECOVERY_SCHEMA.check(submission);

    let email = submission.trimmed("email");
    if !report.has("email") {
        if let Err(e) = validate_email_format(email) {
            report.add("email", e.to_string());
        }
    }

    if !report.is_empty() {
        return Err(report);
    }

    Ok(ValidatedRecovery {
        email: email.to_string(),
    })
}

pub fn validate_reset(submission: &RawSubmission) -> Result<ValidatedPasswordReset, ErrorReport> {
    let mut report = RESET_SCHEMA.check(submission);

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
        return Err(report);
    }

    Ok(ValidatedPasswordReset {
        token: submission.trimmed("token").to_string(),
        password: password1.to_string(),
    })
}
