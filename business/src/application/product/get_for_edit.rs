use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductDto;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_for_edit::{
    GetProductForEditParams, GetProductForEditUseCase, ProductForEdit,
};

pub struct GetProductForEditUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductForEditUseCase for GetProductForEditUseCaseImpl {
    async fn execute(
        &self,
        params: GetProductForEditParams,
    ) -> Result<ProductForEdit, ProductError> {
        self.logger
            .info(&format!("Loading product for edit: {}", params.id));

        let product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        let dto = ProductDto::from(&product);
        Ok(ProductForEdit { product, dto })
    }
}
