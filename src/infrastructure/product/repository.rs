//! In-memory product repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::product::{Product, ProductRepository};
use crate::domain::DomainError;

/// In-memory implementation of ProductRepository
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get(&self, id: Uuid) -> Result<Option<Product>, DomainError> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn create(&self, product: Product) -> Result<Product, DomainError> {
        let mut products = self.products.write().await;

        if let Some(sku) = product.sku() {
            if products.values().any(|p| p.sku() == Some(sku)) {
                return Err(DomainError::conflict(format!(
                    "Product with SKU '{}' already exists",
                    sku
                )));
            }
        }

        products.insert(product.id(), product.clone());
        Ok(product)
    }

    async fn update(&self, product: &Product) -> Result<Product, DomainError> {
        let mut products = self.products.write().await;

        if !products.contains_key(&product.id()) {
            return Err(DomainError::not_found(format!(
                "Product '{}' not found",
                product.id()
            )));
        }

        products.insert(product.id(), product.clone());
        Ok(product.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut products = self.products.write().await;
        Ok(products.remove(&id).is_some())
    }

    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        let products = self.products.read().await;
        Ok(products.values().cloned().collect())
    }

    async fn list_active(&self) -> Result<Vec<Product>, DomainError> {
        let products = self.products.read().await;
        Ok(products
            .values()
            .filter(|p| p.is_active())
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::ProductCategory;

    fn create_test_product(name: &str, sku: Option<&str>, active: bool) -> Product {
        Product::new(
            name,
            sku.map(String::from),
            "desc",
            1000,
            5,
            ProductCategory::Food,
            None,
            active,
            false,
        )
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryProductRepository::new();
        let product = repo
            .create(create_test_product("Empanada", None, true))
            .await
            .unwrap();

        let stored = repo.get(product.id()).await.unwrap();
        assert_eq!(stored.unwrap().name(), "Empanada");
    }

    #[tokio::test]
    async fn test_duplicate_sku_conflicts() {
        let repo = InMemoryProductRepository::new();
        repo.create(create_test_product("A", Some("SKU-1"), true))
            .await
            .unwrap();

        let result = repo
            .create(create_test_product("B", Some("SKU-1"), true))
            .await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_list_active_filters() {
        let repo = InMemoryProductRepository::new();
        repo.create(create_test_product("A", None, true)).await.unwrap();
        repo.create(create_test_product("B", None, false)).await.unwrap();

        assert_eq!(repo.list().await.unwrap().len(), 2);
        assert_eq!(repo.list_active().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_product() {
        let repo = InMemoryProductRepository::new();
        let product = create_test_product("A", None, true);

        let result = repo.update(&product).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }
}
