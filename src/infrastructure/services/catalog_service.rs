//! Catalog service: product create/edit over the validated product form

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::forms::{product, FormError, RawSubmission};
use crate::domain::product::{Product, ProductRepository};
use crate::domain::DomainError;

#[derive(Debug)]
pub struct CatalogService {
    products: Arc<dyn ProductRepository>,
}

impl CatalogService {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    pub async fn create(&self, submission: &RawSubmission) -> Result<Product, FormError> {
        let record = product::validate(submission)?;

        let product = Product::new(
            record.name,
            record.sku,
            record.description,
            record.price_cents,
            record.stock,
            record.category,
            record.image,
            record.active,
            record.on_promotion,
        );

        let product = self.products.create(product).await?;
        info!(product_id = %product.id(), "Created product");

        Ok(product)
    }

    pub async fn update(&self, id: Uuid, submission: &RawSubmission) -> Result<Product, FormError> {
        let mut product = self
            .products
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Product '{}' not found", id)))?;

        let record = product::validate(submission)?;

        product.apply(
            record.name,
            record.sku,
            record.description,
            record.price_cents,
            record.stock,
            record.category,
            record.image,
            record.active,
            record.on_promotion,
        );

        Ok(self.products.update(&product).await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Product>, DomainError> {
        self.products.get(id).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        self.products.delete(id).await
    }

    pub async fn list(&self) -> Result<Vec<Product>, DomainError> {
        self.products.list().await
    }

    pub async fn list_active(&self) -> Result<Vec<Product>, DomainError> {
        self.products.list_active().await
    }
}
