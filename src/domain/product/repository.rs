//! Product repository trait

use async_trait::async_trait;
use std::fmt::Debug;
use uuid::Uuid;

use super::entity::Product;
use crate::domain::DomainError;

/// Repository trait for product storage
#[async_trait]
pub trait ProductRepository: Send + Sync + Debug {
    async fn get(&self, id: Uuid) -> Result<Option<Product>, DomainError>;

    async fn create(&self, product: Product) -> Result<Product, DomainError>;

    async fn update(&self, product: &Product) -> Result<Product, DomainError>;

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// List all products
    async fn list(&self) -> Result<Vec<Product>, DomainError>;

    /// List products visible in the storefront
    async fn list_active(&self) -> Result<Vec<Product>, DomainError>;
}
