//! In-memory complaint repository implementation

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::complaint::{Complaint, ComplaintRepository};
use crate::domain::DomainError;

/// In-memory implementation of ComplaintRepository
#[derive(Debug, Default)]
pub struct InMemoryComplaintRepository {
    complaints: Arc<RwLock<Vec<Complaint>>>,
}

impl InMemoryComplaintRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ComplaintRepository for InMemoryComplaintRepository {
    async fn create(&self, complaint: Complaint) -> Result<Complaint, DomainError> {
        let mut complaints = self.complaints.write().await;
        complaints.push(complaint.clone());
        Ok(complaint)
    }

    async fn list(&self) -> Result<Vec<Complaint>, DomainError> {
        let complaints = self.complaints.read().await;
        Ok(complaints.clone())
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Complaint>, DomainError> {
        let complaints = self.complaints.read().await;
        Ok(complaints
            .iter()
            .filter(|c| c.user_id() == user_id)
            .cloned()
            .collect())
    }
}
