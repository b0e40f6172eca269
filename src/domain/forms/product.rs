//! Product create/edit form

use once_cell::sync::Lazy;

use super::report::ErrorReport;
use super::schema::{FieldSchema, FormSchema};
use super::submission::RawSubmission;
use super::optional;
use crate::domain::product::ProductCategory;

pub static SCHEMA: Lazy<FormSchema> = Lazy::new(|| {
    FormSchema::new(
        "product",
        vec![
            FieldSchema::text("name").required().max_length(200),
            FieldSchema::text("sku").max_length(64),
            FieldSchema::text("description").required(),
            FieldSchema::number("price").required(),
            FieldSchema::number("stock").required(),
            FieldSchema::choice("category", ProductCategory::CHOICES.to_vec()).required(),
            FieldSchema::file("image"),
            FieldSchema::checkbox("active"),
            FieldSchema::checkbox("on_promotion"),
        ],
    )
});

#[derive(Debug, Clone)]
pub struct ValidatedProduct {
    pub name: String,
    pub sku: Option<String>,
    pub description: String,
    pub price_cents: i64,
    pub stock: u32,
    pub category: ProductCategory,
    /// Uploaded image filename, when a new file was submitted
    pub image: Option<String>,
    pub active: bool,
    pub on_promotion: bool,
}

pub fn validate(submission: &RawSubmission) -> Result<ValidatedProduct, ErrorReport> {
    let mut report = SCHEMA.check(submission);

    let mut price_cents = None;
    if !report.has("price") {
        match parse_price_cents(submission.trimmed("price")) {
            Some(cents) if cents > 0 => price_cents = Some(cents),
            Some(_) => report.add("price", "The price must be greater than zero"),
            None => report.add("price", "Enter a price with at most two decimals"),
        }
    }

    let mut stock = None;
    if !report.has("stock") {
        match submission.trimmed("stock").parse::<u32>() {
            Ok(value) => stock = Some(value),
            Err(_) => report.add("stock", "Enter a non-negative whole number"),
        }
    }

    let category = ProductCategory::parse(submission.trimmed("category"));

    match (price_cents, stock, category) {
        (Some(price_cents), Some(stock), Some(category)) if report.is_empty() => {
            Ok(ValidatedProduct {
                name: submission.trimmed("name").to_string(),
                sku: optional(submission.trimmed("sku")),
                description: submission.trimmed("description").to_string(),
                price_cents,
                stock,
                category,
                image: optional(submission.trimmed("image")),
                active: submission.flag("active"),
                on_promotion: submission.flag("on_promotion"),
            })
        }
        _ => Err(report),
    }
}

/// Parse a decimal price into cents; at most two decimal places
fn parse_price_cents(value: &str) -> Option<i64> {
    let (whole, frac) = match value.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (value, ""),
    };

    if whole.is_empty() && frac.is_empty() {
        return None;
    }

    if !whole.chars().all(|c| c.is_ascii_digit()) || frac.chars().count() > 2 {
        return None;
    }

    if !frac.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let whole_part: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let frac_part: i64 = match frac.chars().count() {
        0 => 0,
        1 => frac.parse::<i64>().ok()? * 10,
        _ => frac.parse().ok()?,
    };

    whole_part.checked_mul(100)?.checked_add(frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(pairs: &[(&str, &str)]) -> RawSubmission {
        RawSubmission::from_pairs(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())))
    }

    fn complete() -> RawSubmission {
        submission(&[
            ("name", "Empanada de pino"),
            ("sku", "EMP-001"),
            ("description", "Classic beef empanada"),
            ("price", "2.50"),
            ("stock", "40"),
            ("category", "food"),
            ("active", "on"),
        ])
    }

    #[test]
    fn test_valid_product() {
        let product = validate(&complete()).unwrap();

        assert_eq!(product.name, "Empanada de pino");
        assert_eq!(product.price_cents, 250);
        assert_eq!(product.stock, 40);
        assert_eq!(product.category, ProductCategory::Food);
        assert!(product.active);
        assert!(!product.on_promotion);
        assert!(product.image.is_none());
    }

    #[test]
    fn test_price_parsing() {
        assert_eq!(parse_price_cents("2.50"), Some(250));
        assert_eq!(parse_price_cents("2.5"), Some(250));
        assert_eq!(parse_price_cents("2"), Some(200));
        assert_eq!(parse_price_cents(".5"), Some(50));
        assert_eq!(parse_price_cents("0.05"), Some(5));
        assert_eq!(parse_price_cents("2.505"), None);
        assert_eq!(parse_price_cents("-1"), None);
        assert_eq!(parse_price_cents("abc"), None);
        assert_eq!(parse_price_cents(""), None);
    }

    #[test]
    fn test_zero_price_rejected() {
        let report = validate(&submission(&[
            ("name", "Free item"),
            ("description", "No such thing"),
            ("price", "0"),
            ("stock", "1"),
            ("category", "other"),
        ]))
        .unwrap_err();

        assert_eq!(
            report.messages("price"),
            &["The price must be greater than zero"]
        );
    }

    #[test]
    fn test_fractional_stock_rejected() {
        let report = validate(&submission(&[
            ("name", "Item"),
            ("description", "desc"),
            ("price", "1.00"),
            ("stock", "3.5"),
            ("category", "food"),
        ]))
        .unwrap_err();

        assert!(report.has("stock"));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let report = validate(&submission(&[
            ("name", "Item"),
            ("description", "desc"),
            ("price", "1.00"),
            ("stock", "3"),
            ("category", "electronics"),
        ]))
        .unwrap_err();

        assert_eq!(report.messages("category"), &["Select a valid choice"]);
    }

    #[test]
    fn test_missing_required_fields() {
        let report = validate(&RawSubmission::new()).unwrap_err();

        assert!(report.has("name"));
        assert!(report.has("description"));
        assert!(report.has("price"));
        assert!(report.has("stock"));
        assert!(report.has("category"));
        assert!(!report.has("sku"));
        assert!(!report.has("image"));
    }
}
