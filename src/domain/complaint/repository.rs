//! Complaint repository trait

use async_trait::async_trait;
use std::fmt::Debug;
use uuid::Uuid;

use super::entity::Complaint;
use crate::domain::DomainError;

/// Repository trait for complaint storage
#[async_trait]
pub trait ComplaintRepository: Send + Sync + Debug {
    async fn create(&self, complaint: Complaint) -> Result<Complaint, DomainError>;

    async fn list(&self) -> Result<Vec<Complaint>, DomainError>;

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Complaint>, DomainError>;
}
