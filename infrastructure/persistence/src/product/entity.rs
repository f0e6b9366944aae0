use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::{FromPrimitive, ToPrimitive};
use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price: BigDecimal,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub image_file_name: String,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.brand,
            self.category,
            self.price.to_f64().unwrap_or_default(),
            self.description,
            self.created_at,
            self.image_file_name,
        )
    }
}

/// Converts a validated price into the `NUMERIC(12,2)` column value.
pub fn price_to_column(price: f64) -> Result<BigDecimal, RepositoryError> {
    BigDecimal::from_f64(price)
        .map(|p| p.round(2))
        .ok_or(RepositoryError::Persistence)
}
