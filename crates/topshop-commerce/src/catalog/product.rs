//! Product types.

use crate::catalog::Category;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Highest score a rating can carry.
pub const MAX_RATING: f64 = 5.0;

/// Aggregate customer rating of a product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct Rating {
    /// Average score, 0.0 to 5.0.
    pub rate: f64,
    /// Number of ratings.
    pub count: u64,
}

impl Rating {
    /// Create a rating, clamping the score into range.
    pub fn new(rate: f64, count: u64) -> Self {
        let rate = if rate.is_finite() {
            rate.clamp(0.0, MAX_RATING)
        } else {
            0.0
        };
        Self { rate, count }
    }

    /// Number of whole stars to show (the score rounded half up).
    pub fn stars(&self) -> u8 {
        self.rate.round() as u8
    }
}

/// A product in the catalog.
///
/// Products are only built through `Product::new` or from a validated
/// `ProductRecord`, so there is no `Deserialize` impl.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price.
    pub price: Money,
    /// Catalog category.
    pub category: Category,
    /// Description text.
    pub description: String,
    /// Image URL.
    pub image: String,
    /// Customer rating.
    pub rating: Rating,
}

impl Product {
    /// Create a product with the required fields; the rest default to empty.
    pub fn new(id: ProductId, title: impl Into<String>, price: Money) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            category: Category::default(),
            description: String::new(),
            image: String::new(),
            rating: Rating::default(),
        }
    }

    /// Set the category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the rating.
    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = rating;
        self
    }
}

/// A product exactly as the catalog API sends it.
///
/// `id` and `price` are required. Other fields default when absent, and unknown
/// fields are ignored. Convert with `Product::try_from` to validate.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProductRecord {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: Option<RatingRecord>,
}

/// Rating as the catalog API sends it.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Default)]
pub struct RatingRecord {
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub count: u64,
}

impl TryFrom<ProductRecord> for Product {
    type Error = CommerceError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        if !record.price.is_finite() || record.price < 0.0 {
            return Err(CommerceError::InvalidPrice {
                id: record.id,
                price: record.price,
            });
        }
        let title = record.title.trim();
        if title.is_empty() {
            return Err(CommerceError::MissingTitle(record.id));
        }

        let rating = record
            .rating
            .map(|r| Rating::new(r.rate, r.count))
            .unwrap_or_default();

        Ok(Product {
            id: ProductId::new(record.id),
            title: title.to_string(),
            price: Money::from_decimal(record.price, Currency::USD),
            category: Category::from_label(&record.category),
            description: record.description,
            image: record.image,
            rating,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> ProductRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_full_record_converts() {
        let product = Product::try_from(record(
            r#"{
                "id": 1,
                "title": "Test Product 1",
                "price": 99.99,
                "category": "electronics",
                "description": "A test product",
                "image": "test-image-1.jpg",
                "rating": { "rate": 4.5, "count": 100 }
            }"#,
        ))
        .unwrap();

        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.title, "Test Product 1");
        assert_eq!(product.price.amount_cents, 9999);
        assert_eq!(product.category, Category::Electronics);
        assert_eq!(product.image, "test-image-1.jpg");
        assert_eq!(product.rating.count, 100);
        assert_eq!(product.rating.stars(), 5);
    }

    #[test]
    fn test_optional_fields_default() {
        let product =
            Product::try_from(record(r#"{"id": 2, "title": "Bare", "price": 10, "extra": true}"#))
                .unwrap();
        assert_eq!(product.description, "");
        assert_eq!(product.category, Category::default());
        assert_eq!(product.rating, Rating::default());
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = Product::try_from(record(r#"{"id": 3, "title": "Bad", "price": -1.0}"#))
            .unwrap_err();
        assert!(matches!(err, CommerceError::InvalidPrice { id: 3, .. }));
    }

    #[test]
    fn test_blank_title_rejected() {
        let err =
            Product::try_from(record(r#"{"id": 4, "title": "  ", "price": 1.0}"#)).unwrap_err();
        assert_eq!(err, CommerceError::MissingTitle(4));

        let err = Product::try_from(record(r#"{"id": 5, "price": 1.0}"#)).unwrap_err();
        assert_eq!(err, CommerceError::MissingTitle(5));
    }

    #[test]
    fn test_missing_price_fails_to_parse() {
        let result: Result<ProductRecord, _> = serde_json::from_str(r#"{"id": 6, "title": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_rating_clamped() {
        assert_eq!(Rating::new(7.2, 3).rate, MAX_RATING);
        assert_eq!(Rating::new(-1.0, 3).rate, 0.0);
        assert_eq!(Rating::new(f64::NAN, 3).rate, 0.0);
    }

    #[test]
    fn test_rating_stars_round_half_up() {
        assert_eq!(Rating::new(3.5, 1).stars(), 4);
        assert_eq!(Rating::new(3.4, 1).stars(), 3);
        assert_eq!(Rating::new(0.0, 0).stars(), 0);
    }
}
