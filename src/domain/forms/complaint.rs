//! Complaint submission form

use once_cell::sync::Lazy;

use super::report::ErrorReport;
use super::schema::{FieldSchema, FormSchema};
use super::submission::RawSubmission;
use crate::domain::complaint::ComplaintReason;
use crate::domain::validation::validate_comment;

pub static SCHEMA: Lazy<FormSchema> = Lazy::new(|| {
    FormSchema::new(
        "complaint",
        vec![
            FieldSchema::choice("reason", ComplaintReason::CHOICES.to_vec()).required(),
            FieldSchema::text("description").required(),
        ],
    )
});

#[derive(Debug, Clone)]
pub struct ValidatedComplaint {
    pub reason: ComplaintReason,
    pub description: String,
}

pub fn validate(submission: &RawSubmission) -> Result<ValidatedComplaint, ErrorReport> {
    let mut report = SCHEMA.check(submission);

    let description = submission.trimmed("description");
    if !report.has("description") {
        if let Err(e) = validate_comment(description) {
            report.add("description", e.to_string());
        }
    }

    let reason = ComplaintReason::parse(submission.trimmed("reason"));

    match reason {
        Some(reason) if report.is_empty() => Ok(ValidatedComplaint {
            reason,
            description: description.to_string(),
        }),
        _ => Err(report),
    }
}
