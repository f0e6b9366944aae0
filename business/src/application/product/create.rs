use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::image_store::ImageStore;
use crate::domain::product::model::{NewProduct, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub image_store: Arc<dyn ImageStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        let dto = params.dto;
        self.logger
            .info(&format!("Creating product: {}", dto.name));

        let price = dto.validate(true)?;

        let created_at = Utc::now();
        let new_product = NewProduct::from_dto(&dto, price, created_at);

        // A failed write still persists the row; the image link stays dangling.
        if let Some(image) = &dto.image
            && let Err(e) = self
                .image_store
                .write(&new_product.image_file_name, &image.bytes)
                .await
        {
            self.logger.error(&format!(
                "Image upload failed for {}: {}",
                new_product.image_file_name, e
            ));
        }

        let product = self.repository.insert(&new_product).await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}
