//! Account service: registration, login, profile and password flows

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::forms::{login, password_reset, profile, registration, FormError, RawSubmission};
use crate::domain::forms::report::ErrorReport;
use crate::domain::user::{User, UserRepository, UserRole};
use crate::domain::DomainError;
use crate::infrastructure::password::PasswordHasher;
use crate::infrastructure::recovery::RecoveryTokenStore;

/// Orchestrates user-facing account forms against the user store
#[derive(Debug)]
pub struct AccountService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    recovery_tokens: Arc<RecoveryTokenStore>,
}

impl AccountService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        recovery_tokens: Arc<RecoveryTokenStore>,
    ) -> Self {
        Self {
            users,
            hasher,
            recovery_tokens,
        }
    }

    /// Register a new customer
    pub async fn register(&self, submission: &RawSubmission) -> Result<User, FormError> {
        let record = registration::validate(submission, self.users.as_ref()).await?;

        let password_hash = self.hasher.hash(&record.password)?;

        let mut user = User::new(
            record.username,
            record.email,
            record.first_name,
            record.last_name,
            UserRole::Customer,
            password_hash,
        );
        user.set_phone(Some(record.phone));
        user.set_address(record.address);

        let user = self.users.create(user).await?;
        info!(user_id = %user.id(), "Registered new customer");

        Ok(user)
    }

    /// Validate a login submission and check the credentials
    ///
    /// `Ok(None)` means the form was fine but the credentials were not;
    /// callers should answer with a single invalid-credentials message
    /// rather than a field error.
    pub async fn login(&self, submission: &RawSubmission) -> Result<Option<User>, FormError> {
        let credentials = login::validate(submission)?;

        let user = match self.users.find_by_username(&credentials.username).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        if !self.hasher.verify(&credentials.password, user.password_hash()) {
            return Ok(None);
        }

        // Deactivated accounts get the same answer as bad credentials
        if !user.is_active() {
            return Ok(None);
        }

        self.users.record_login(user.id()).await?;
        debug!(user_id = %user.id(), "Login succeeded");

        Ok(self.users.get(user.id()).await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        self.users.get(id).await
    }

    /// Apply a validated profile edit
    pub async fn update_profile(
        &self,
        id: Uuid,
        submission: &RawSubmission,
    ) -> Result<User, FormError> {
        let mut user = self
            .users
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))?;

        let record = profile::validate(submission, id, self.users.as_ref()).await?;

        user.set_names(record.first_name, record.last_name);
        user.set_email(record.email);
        if record.phone.is_some() {
            user.set_phone(record.phone);
        }
        user.set_address(record.address);

        Ok(self.users.update(&user).await?)
    }

    /// Start password recovery for an email
    ///
    /// Returns the issued token when the email matches an account, `None`
    /// otherwise. The HTTP layer answers identically in both cases.
    pub async fn request_recovery(
        &self,
        submission: &RawSubmission,
    ) -> Result<Option<String>, FormError> {
        let recovery = password_reset::validate_recovery(submission)?;

        let user = match self.users.find_by_email(&recovery.email).await? {
            Some(user) => user,
            None => {
                debug!("Recovery requested for unknown email");
                return Ok(None);
            }
        };

        let token = self.recovery_tokens.issue(user.id()).await;
        info!(user_id = %user.id(), "Issued password recovery token");

        Ok(Some(token))
    }

    /// Complete a password reset with a previously issued token
    pub async fn reset_password(&self, submission: &RawSubmission) -> Result<(), FormError> {
        let reset = password_reset::validate_reset(submission)?;

        let user_id = match self.recovery_tokens.consume(&reset.token).await {
            Some(user_id) => user_id,
            None => {
                let mut report = ErrorReport::new();
                report.add("token", "This recovery link is invalid or has expired");
                return Err(FormError::Invalid(report));
            }
        };

        let mut user = self
            .users
            .get(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", user_id)))?;

        let password_hash = self.hasher.hash(&reset.password)?;
        user.set_password_hash(password_hash);
        self.users.update(&user).await?;

        info!(user_id = %user.id(), "Password reset completed");
        Ok(())
    }
}
