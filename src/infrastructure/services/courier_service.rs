//! Courier service: account management plus the delivery profile

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::courier::{CourierProfile, CourierRepository};
use crate::domain::forms::courier::{self, CourierAccountPrefill};
use crate::domain::forms::{FormError, RawSubmission};
use crate::domain::user::{User, UserRepository, UserRole};
use crate::domain::DomainError;
use crate::infrastructure::password::PasswordHasher;

/// Orchestrates the courier account and profile forms
#[derive(Debug)]
pub struct CourierService {
    users: Arc<dyn UserRepository>,
    couriers: Arc<dyn CourierRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl CourierService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        couriers: Arc<dyn CourierRepository>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            users,
            couriers,
            hasher,
        }
    }

    /// Create a new courier account
    pub async fn create(&self, submission: &RawSubmission) -> Result<User, FormError> {
        let record = courier::validate_create(submission, self.users.as_ref()).await?;

        let password_hash = self.hasher.hash(&record.password)?;

        let mut user = User::new(
            record.account.username,
            record.account.email,
            record.account.first_name,
            record.account.last_name,
            UserRole::Courier,
            password_hash,
        );
        user.set_phone(Some(record.account.phone));

        let user = self.users.create(user).await?;
        info!(user_id = %user.id(), "Created courier account");

        Ok(user)
    }

    /// Initial form values for editing a courier account
    pub async fn account_prefill(
        &self,
        user_id: Uuid,
    ) -> Result<CourierAccountPrefill, DomainError> {
        let user = self.courier(user_id).await?;
        Ok(courier::prefill(&user))
    }

    /// Apply a validated account edit
    pub async fn update_account(
        &self,
        user_id: Uuid,
        submission: &RawSubmission,
    ) -> Result<User, FormError> {
        let mut user = self.courier(user_id).await?;

        let record = courier::validate_account(submission, user_id, self.users.as_ref()).await?;

        user.set_username(record.username);
        user.set_email(record.email);
        user.set_names(record.first_name, record.last_name);
        user.set_phone(Some(record.phone));

        Ok(self.users.update(&user).await?)
    }

    /// Apply a validated vehicle/availability edit, creating the profile
    /// on first submission
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        submission: &RawSubmission,
    ) -> Result<CourierProfile, FormError> {
        let user = self.courier(user_id).await?;
        let record = courier::validate_profile(submission)?;

        let profile = match self.couriers.get(user.id()).await? {
            Some(mut profile) => {
                profile.apply(record.vehicle, record.license_plate, record.available);
                profile
            }
            None => CourierProfile::new(
                user.id(),
                record.vehicle,
                record.license_plate,
                record.available,
            ),
        };

        Ok(self.couriers.upsert(profile).await?)
    }

    pub async fn profile(&self, user_id: Uuid) -> Result<Option<CourierProfile>, DomainError> {
        self.couriers.get(user_id).await
    }

    pub async fn list_available(&self) -> Result<Vec<CourierProfile>, DomainError> {
        self.couriers.list_available().await
    }

    async fn courier(&self, user_id: Uuid) -> Result<User, DomainError> {
        let user = self
            .users
            .get(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", user_id)))?;

        if user.role() != UserRole::Courier {
            return Err(DomainError::not_found(format!(
                "User '{}' is not a courier",
                user_id
            )));
        }

        Ok(user)
    }
}
