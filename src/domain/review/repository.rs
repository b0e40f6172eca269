//! Review repository trait

use async_trait::async_trait;
use std::fmt::Debug;
use uuid::Uuid;

use super::entity::Review;
use crate::domain::DomainError;

/// Repository trait for review storage
#[async_trait]
pub trait ReviewRepository: Send + Sync + Debug {
    async fn get(&self, id: Uuid) -> Result<Option<Review>, DomainError>;

    async fn create(&self, review: Review) -> Result<Review, DomainError>;

    async fn update(&self, review: &Review) -> Result<Review, DomainError>;

    async fn list_for_product(&self, product_id: Uuid) -> Result<Vec<Review>, DomainError>;

    /// A user reviews a product at most once
    async fn find_by_product_and_user(
        &self,
        product_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Review>, DomainError>;
}
