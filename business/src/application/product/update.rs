use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::image_store::ImageStore;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::product::value_objects::storage_file_name;

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub image_store: Arc<dyn ImageStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        // Verify product exists
        let mut product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        let price = params.dto.validate(false)?;

        if let Some(image) = params.dto.image.as_ref().filter(|image| !image.is_empty()) {
            if !product.image_file_name.is_empty()
                && let Err(e) = self.image_store.delete(&product.image_file_name).await
            {
                self.logger.warn(&format!(
                    "Old image delete failed for product {}: {}",
                    product.id, e
                ));
            }

            let file_name = storage_file_name(Utc::now(), &image.original_file_name);
            match self.image_store.write(&file_name, &image.bytes).await {
                Ok(()) => product.image_file_name = file_name,
                Err(e) => self.logger.error(&format!(
                    "New image upload failed for product {}: {}",
                    product.id, e
                )),
            }
        }

        product.apply(&params.dto, price);
        self.repository.save(&product).await?;

        self.logger.info(&format!("Product updated: {}", product.id));
        Ok(product)
    }
}
