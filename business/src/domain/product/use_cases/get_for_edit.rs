use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductDto};

pub struct GetProductForEditParams {
    pub id: i32,
}

/// The stored product plus a form pre-filled from it.
#[derive(Debug, Clone)]
pub struct ProductForEdit {
    pub product: Product,
    pub dto: ProductDto,
}

#[async_trait]
pub trait GetProductForEditUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetProductForEditParams,
    ) -> Result<ProductForEdit, ProductError>;
}
