//! Login form
//!
//! Only presence is validated here; whether the credentials are correct is
//! answered by the account service against the user store.

use once_cell::sync::Lazy;

use super::report::ErrorReport;
use super::schema::{FieldSchema, FormSchema};
use super::submission::RawSubmission;

pub static SCHEMA: Lazy<FormSchema> = Lazy::new(|| {
    FormSchema::new(
        "login",
        vec![
            FieldSchema::text("username").required().max_length(150),
            FieldSchema::password("password").required(),
        ],
    )
});

#[derive(Debug, Clone)]
pub struct ValidatedLogin {
    pub username: String,
    pub password: String,
}

pub fn validate(submission: &RawSubmission) -> Result<ValidatedLogin, ErrorReport> {
    let report = SCHEMA.check(submission);

    if !report.is_empty() {
        return Err(report);
    }

    Ok(ValidatedLogin {
        username: submission.trimmed("username").to_string(),
        password: submission.value("password").unwrap_or("").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_login() {
        let mut submission = RawSubmission::new();
        submission.append("username", "maria");
        submission.append("password", "whatever");

        let login = validate(&submission).unwrap();
        assert_eq!(login.username, "maria");
        assert_eq!(login.password, "whatever");
    }

    #[test]
    fn test_missing_fields() {
        let report = validate(&RawSubmission::new()).unwrap_err();

        assert!(report.has("username"));
        assert!(report.has("password"));
    }

    #[test]
    fn test_password_not_trimmed() {
        let mut submission = RawSubmission::new();
        submission.append("username", "maria");
        submission.append("password", "  spaced  ");

        let login = validate(&submission).unwrap();
        assert_eq!(login.password, "  spaced  ");
    }
}
