//! Profile edit form
//!
//! Email duplicates are allowed only when the email belongs to the user
//! being edited. Phone is optional here; when present it is re-validated
//! and re-stored in canonical form.

use once_cell::sync::Lazy;
use uuid::Uuid;

use super::schema::{FieldSchema, FormSchema};
use super::submission::RawSubmission;
use super::{optional, FormError};
use crate::domain::user::UserRepository;
use crate::domain::validation::{
    validate_email_format, validate_phone, DEFAULT_COUNTRY_CODE,
};

pub static SCHEMA: Lazy<FormSchema> = Lazy::new(|| {
    FormSchema::new(
        "profile",
        vec![
            FieldSchema::text("first_name").required().max_length(150),
            FieldSchema::text("last_name").required().max_length(150),
            FieldSchema::email("email").required().max_length(254),
            FieldSchema::text("phone_number").max_length(15),
            FieldSchema::text("address").max_length(255),
        ],
    )
});

#[derive(Debug, Clone)]
pub struct ValidatedProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Canonical form, present only when a phone was submitted
    pub phone: Option<String>,
    pub address: Option<String>,
}

pub async fn validate(
    submission: &RawSubmission,
    current_user_id: Uuid,
    users: &dyn UserRepository,
) -> Result<ValidatedProfile, FormError> {
    let mut report = SCHEMA.check(submission);

    let email = submission.trimmed("email");
    if !report.has("email") {
        if let Err(e) = validate_email_format(email) {
            report.add("email", e.to_string());
        } else if let Some(existing) = users.find_by_email(email).await? {
            if existing.id() != current_user_id {
                report.add("email", "This email address is already registered");
            }
        }
    }

    let mut phone = None;
    let raw_phone = submission.trimmed("phone_number");
    if !raw_phone.is_empty() && !report.has("phone_number") {
        match validate_phone(raw_phone) {
            Ok(p) => phone = Some(p.storage(DEFAULT_COUNTRY_CODE)),
            Err(e) => report.add("phone_number", e.to_string()),
        }
    }

    if !report.is_empty() {
        return Err(FormError::Invalid(report));
    }

    Ok(ValidatedProfile {
        first_name: submission.trimmed("first_name").to_string(),
        last_name: submission.trimmed("last_name").to_string(),
        email: email.to_string(),
        phone,
        address: optional(submission.trimmed("address")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{MockUserRepository, User, UserRole};

    fn submission(pairs: &[(&str, &str)]) -> RawSubmission {
        RawSubmission::from_pairs(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())))
    }

    async fn seeded_user(users: &MockUserRepository) -> User {
        users
            .create(User::new(
                "maria",
                "maria@example.com",
                "Maria",
                "Perez",
                UserRole::Customer,
                "hash",
            ))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_keeping_own_email_is_allowed() {
        let users = MockUserRepository::new();
        let user = seeded_user(&users).await;

        let result = validate(
            &submission(&[
                ("first_name", "Maria"),
                ("last_name", "Perez"),
                ("email", "maria@example.com"),
            ]),
            user.id(),
            &users,
        )
        .await
        .unwrap();

        assert_eq!(result.email, "maria@example.com");
        assert!(result.phone.is_none());
    }

    #[tokio::test]
    async fn test_taking_someone_elses_email_fails() {
        let users = MockUserRepository::new();
        seeded_user(&users).await;
        let other = users
            .create(User::new(
                "pedro",
                "pedro@example.com",
                "Pedro",
                "Soto",
                UserRole::Customer,
                "hash",
            ))
            .await
            .unwrap();

        let result = validate(
            &submission(&[
                ("first_name", "Pedro"),
                ("last_name", "Soto"),
                ("email", "maria@example.com"),
            ]),
            other.id(),
            &users,
        )
        .await;

        match result {
            Err(FormError::Invalid(report)) => {
                assert!(report.has("email"));
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_optional_phone_revalidated() {
        let users = MockUserRepository::new();
        let user = seeded_user(&users).await;

        let result = validate(
            &submission(&[
                ("first_name", "Maria"),
                ("last_name", "Perez"),
                ("email", "maria@example.com"),
                ("phone_number", "9 1234 5678"),
            ]),
            user.id(),
            &users,
        )
        .await
        .unwrap();

        assert_eq!(result.phone.as_deref(), Some("+56 912345678"));
    }

    #[tokio::test]
    async fn test_bad_optional_phone_rejected() {
        let users = MockUserRepository::new();
        let user = seeded_user(&users).await;

        let result = validate(
            &submission(&[
                ("first_name", "Maria"),
                ("last_name", "Perez"),
                ("email", "maria@example.com"),
                ("phone_number", "12345"),
            ]),
            user.id(),
            &users,
        )
        .await;

        assert!(matches!(result, Err(FormError::Invalid(_))));
    }
}
