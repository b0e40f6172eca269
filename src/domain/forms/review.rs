//! Product review form

use once_cell::sync::Lazy;

use super::report::ErrorReport;
use super::schema::{FieldSchema, FormSchema};
use super::submission::RawSubmission;
use super::optional;
use crate::domain::review::RATING_CHOICES;
use crate::domain::validation::validate_comment;

pub static SCHEMA: Lazy<FormSchema> = Lazy::new(|| {
    FormSchema::new(
        "review",
        vec![
            FieldSchema::choice("rating", RATING_CHOICES.to_vec()).required(),
            FieldSchema::text("comment"),
        ],
    )
});

#[derive(Debug, Clone)]
pub struct ValidatedReview {
    pub rating: u8,
    pub comment: Option<String>,
}

pub fn validate(submission: &RawSubmission) -> Result<ValidatedReview, ErrorReport> {
    let mut report = SCHEMA.check(submission);

    let comment = submission.trimmed("comment");
    if !report.has("comment") {
        if let Err(e) = validate_comment(comment) {
            report.add("comment", e.to_string());
        }
    }

    let rating = submission.trimmed("rating").parse::<u8>().ok();

    match rating {
        Some(rating) if report.is_empty() => Ok(ValidatedReview {
            rating,
            comment: optional(comment),
        }),
        _ => Err(report),
    }
}
