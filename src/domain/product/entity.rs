//! Product entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product category choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Food,
    Drink,
    Dessert,
    Grocery,
    Other,
}

impl ProductCategory {
    pub const CHOICES: &'static [&'static str] = &["food", "drink", "dessert", "grocery", "other"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Drink => "drink",
            Self::Dessert => "dessert",
            Self::Grocery => "grocery",
            Self::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "food" => Some(Self::Food),
            "drink" => Some(Self::Drink),
            "dessert" => Some(Self::Dessert),
            "grocery" => Some(Self::Grocery),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Catalog product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    id: Uuid,
    name: String,
    /// SKU / barcode, optional
    #[serde(skip_serializing_if = "Option::is_none")]
    sku: Option<String>,
    description: String,
    /// Price in cents to avoid floating point drift
    price_cents: i64,
    stock: u32,
    category: ProductCategory,
    /// Uploaded image filename
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    active: bool,
    on_promotion: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Product {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        sku: Option<String>,
        description: impl Into<String>,
        price_cents: i64,
        stock: u32,
        category: ProductCategory,
        image: Option<String>,
        active: bool,
        on_promotion: bool,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            sku,
            description: description.into(),
            price_cents,
            stock,
            category,
            image,
            active,
            on_promotion,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sku(&self) -> Option<&str> {
        self.sku.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price_cents(&self) -> i64 {
        self.price_cents
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn category(&self) -> ProductCategory {
        self.category
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_on_promotion(&self) -> bool {
        self.on_promotion
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Apply a validated edit over the existing record
    #[allow(clippy::too_many_arguments)]
    pub fn apply(
        &mut self,
        name: impl Into<String>,
        sku: Option<String>,
        description: impl Into<String>,
        price_cents: i64,
        stock: u32,
        category: ProductCategory,
        image: Option<String>,
        active: bool,
        on_promotion: bool,
    ) {
        self.name = name.into();
        self.sku = sku;
        self.description = description.into();
        self.price_cents = price_cents;
        self.stock = stock;
        self.category = category;
        if image.is_some() {
            self.image = image;
        }
        self.active = active;
        self.on_promotion = on_promotion;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_product() -> Product {
        Product::new(
            "Empanada de pino",
            Some("EMP-001".to_string()),
            "Classic beef empanada",
            2500,
            40,
            ProductCategory::Food,
            None,
            true,
            false,
        )
    }

    #[test]
    fn test_product_creation() {
        let product = create_test_product();

        assert_eq!(product.name(), "Empanada de pino");
        assert_eq!(product.price_cents(), 2500);
        assert_eq!(product.category(), ProductCategory::Food);
        assert!(product.is_active());
        assert!(!product.is_on_promotion());
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(ProductCategory::parse("food"), Some(ProductCategory::Food));
        assert_eq!(ProductCategory::parse("electronics"), None);
    }

    #[test]
    fn test_apply_keeps_image_when_not_resubmitted() {
        let mut product = create_test_product();
        product.apply(
            "Empanada",
            None,
            "desc",
            2600,
            35,
            ProductCategory::Food,
            None,
            true,
            true,
        );

        assert_eq!(product.price_cents(), 2600);
        assert!(product.image().is_none());

        product.apply(
            "Empanada",
            None,
            "desc",
            2600,
            35,
            ProductCategory::Food,
            Some("empanada.jpg".to_string()),
            true,
            true,
        );
        assert_eq!(product.image(), Some("empanada.jpg"));

        // A later edit without a new upload keeps the stored image
        product.apply(
            "Empanada",
            None,
            "desc",
            2700,
            30,
            ProductCategory::Food,
            None,
            true,
            false,
        );
        assert_eq!(product.image(), Some("empanada.jpg"));
    }
}
