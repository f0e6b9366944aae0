use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use poem::Endpoint;
use poem::http::header::CONTENT_LENGTH;
use poem::test::{TestClient, TestResponse};

use business::domain::product::errors::ProductError;
use business::domain::product::model::Product;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::get_for_edit::{
    GetProductForEditParams, GetProductForEditUseCase, ProductForEdit,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::web::products::handlers::ProductPages;

mock! {
    pub GetAll {}
    #[async_trait]
    impl GetAllProductsUseCase for GetAll {
        async fn execute(&self) -> Result<Vec<Product>, ProductError>;
    }
}

mock! {
    pub GetById {}
    #[async_trait]
    impl GetProductByIdUseCase for GetById {
        async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError>;
    }
}

mock! {
    pub GetForEdit {}
    #[async_trait]
    impl GetProductForEditUseCase for GetForEdit {
        async fn execute(
            &self,
            params: GetProductForEditParams,
        ) -> Result<ProductForEdit, ProductError>;
    }
}

mock! {
    pub Create {}
    #[async_trait]
    impl CreateProductUseCase for Create {
        async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
    }
}

mock! {
    pub Update {}
    #[async_trait]
    impl UpdateProductUseCase for Update {
        async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
    }
}

mock! {
    pub Delete {}
    #[async_trait]
    impl DeleteProductUseCase for Delete {
        async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError>;
    }
}

/// One mock per product use case; set expectations, then turn into `ProductPages`.
pub struct MockUseCases {
    pub get_all: MockGetAll,
    pub get_by_id: MockGetById,
    pub get_for_edit: MockGetForEdit,
    pub create: MockCreate,
    pub update: MockUpdate,
    pub delete: MockDelete,
}

impl MockUseCases {
    pub fn new() -> Self {
        Self {
            get_all: MockGetAll::new(),
            get_by_id: MockGetById::new(),
            get_for_edit: MockGetForEdit::new(),
            create: MockCreate::new(),
            update: MockUpdate::new(),
            delete: MockDelete::new(),
        }
    }

    pub fn into_pages(self) -> Arc<ProductPages> {
        Arc::new(ProductPages {
            get_all_use_case: Arc::new(self.get_all),
            get_by_id_use_case: Arc::new(self.get_by_id),
            get_for_edit_use_case: Arc::new(self.get_for_edit),
            create_use_case: Arc::new(self.create),
            update_use_case: Arc::new(self.update),
            delete_use_case: Arc::new(self.delete),
        })
    }
}

pub fn phone(id: i32) -> Product {
    Product::from_repository(
        id,
        "Phone".to_string(),
        "Acme".to_string(),
        "Electronics".to_string(),
        199.99,
        "A phone".to_string(),
        Utc::now(),
        "1700000000000_photo.jpg".to_string(),
    )
}

const BOUNDARY: &str = "beststore-test-boundary";

/// A `multipart/form-data` body with an exact length, as browsers send it.
pub struct MultipartBody {
    bytes: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.bytes.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, data: &[u8]) -> Self {
        self.bytes.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        self.bytes.extend_from_slice(data);
        self.bytes.extend_from_slice(b"\r\n");
        self
    }

    pub async fn post<E: Endpoint>(mut self, cli: &TestClient<E>, uri: &str) -> TestResponse {
        self.bytes
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        cli.post(uri)
            .content_type(format!("multipart/form-data; boundary={BOUNDARY}"))
            .header(CONTENT_LENGTH, self.bytes.len().to_string())
            .body(self.bytes)
            .send()
            .await
    }
}

/// The text fields of a valid phone form.
pub fn phone_form() -> MultipartBody {
    MultipartBody::new()
        .text("name", "Phone")
        .text("brand", "Acme")
        .text("category", "Electronics")
        .text("price", "199.99")
        .text("description", "A phone")
}

pub async fn body_text(resp: TestResponse) -> String {
    resp.0.into_body().into_string().await.unwrap()
}
