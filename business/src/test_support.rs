use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;

use crate::domain::errors::{ImageStoreError, RepositoryError};
use crate::domain::logger::Logger;
use crate::domain::product::image_store::ImageStore;
use crate::domain::product::model::{NewProduct, Product, ProductDto};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::value_objects::ImageUpload;

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn get_by_id(&self, id: i32) -> Result<Product, RepositoryError>;
        async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
        async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
        async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Images {}

    #[async_trait]
    impl ImageStore for Images {
        async fn write(&self, file_name: &str, bytes: &[u8]) -> Result<(), ImageStoreError>;
        async fn delete(&self, file_name: &str) -> Result<(), ImageStoreError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn make_product(id: i32, image_file_name: &str) -> Product {
    Product::from_repository(
        id,
        "Phone".to_string(),
        "Acme".to_string(),
        "Electronics".to_string(),
        199.99,
        "x".to_string(),
        Utc::now(),
        image_file_name.to_string(),
    )
}

pub fn phone_dto(image: Option<ImageUpload>) -> ProductDto {
    ProductDto {
        name: "Phone".to_string(),
        brand: "Acme".to_string(),
        category: "Electronics".to_string(),
        price: Some(199.99),
        description: "x".to_string(),
        image,
    }
}

/// Turns a stored-on-insert `NewProduct` into the row the repository would return.
pub fn stored(id: i32, product: &NewProduct) -> Product {
    Product::from_repository(
        id,
        product.name.clone(),
        product.brand.clone(),
        product.category.clone(),
        product.price,
        product.description.clone(),
        product.created_at,
        product.image_file_name.clone(),
    )
}
