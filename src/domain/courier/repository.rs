//! Courier profile repository trait

use async_trait::async_trait;
use std::fmt::Debug;
use uuid::Uuid;

use super::entity::CourierProfile;
use crate::domain::DomainError;

/// Repository trait for courier profiles, keyed by user id
#[async_trait]
pub trait CourierRepository: Send + Sync + Debug {
    async fn get(&self, user_id: Uuid) -> Result<Option<CourierProfile>, DomainError>;

    /// Insert or replace the profile for a user
    async fn upsert(&self, profile: CourierProfile) -> Result<CourierProfile, DomainError>;

    async fn delete(&self, user_id: Uuid) -> Result<bool, DomainError>;

    /// List profiles currently available for deliveries
    async fn list_available(&self) -> Result<Vec<CourierProfile>, DomainError>;
}
