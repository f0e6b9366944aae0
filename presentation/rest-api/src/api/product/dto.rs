use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::model::Product;

use crate::images::image_url;

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product identifier
    pub id: i32,
    /// Product name
    pub name: String,
    /// Brand
    pub brand: String,
    /// Category
    pub category: String,
    /// Price (non-negative)
    pub price: f64,
    /// Free-text description
    pub description: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Stored image file name
    pub image_file_name: String,
    /// Path the image is served from
    pub image_url: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let image_url = image_url(&product.image_file_name);
        Self {
            id: product.id,
            name: product.name,
            brand: product.brand,
            category: product.category,
            price: product.price,
            description: product.description,
            created_at: product.created_at,
            image_file_name: product.image_file_name,
            image_url,
        }
    }
}
