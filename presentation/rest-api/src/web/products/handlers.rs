use std::sync::Arc;

use poem::http::StatusCode;
use poem::middleware::SizeLimit;
use poem::web::{Data, Html, Multipart, Path, Redirect};
use poem::{EndpointExt, IntoResponse, Response, Route, get, handler};

use business::domain::product::errors::ProductError;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::get_for_edit::{
    GetProductForEditParams, GetProductForEditUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use super::form::ProductForm;
use super::views;

const PRODUCTS_PATH: &str = "/products";

/// Use cases behind the server-rendered product pages.
pub struct ProductPages {
    pub get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    pub get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    pub get_for_edit_use_case: Arc<dyn GetProductForEditUseCase>,
    pub create_use_case: Arc<dyn CreateProductUseCase>,
    pub update_use_case: Arc<dyn UpdateProductUseCase>,
    pub delete_use_case: Arc<dyn DeleteProductUseCase>,
}

/// Registers the HTML product routes. Requires `Arc<ProductPages>` as endpoint data.
/// Only the two form posts carry the body limit; `SizeLimit` rejects requests
/// without `Content-Length`.
pub fn mount(route: Route, max_upload_bytes: usize) -> Route {
    route
        .at("/", get(home))
        .at("/products", get(list))
        .at("/products/", get(list))
        .at(
            "/products/create",
            get(show_create).post(create.with(SizeLimit::new(max_upload_bytes))),
        )
        .at(
            "/products/edit/:id",
            get(show_edit).post(update.with(SizeLimit::new(max_upload_bytes))),
        )
        .at("/products/delete/:id", get(delete))
}

fn to_products() -> Response {
    Redirect::see_other(PRODUCTS_PATH).into_response()
}

fn render(page: askama::Result<String>) -> Response {
    match page {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Failed to render page: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn server_error(message: &str) -> Response {
    let mut response = render(views::error_page(message));
    response.set_status(StatusCode::INTERNAL_SERVER_ERROR);
    response
}

#[handler]
async fn home() -> Response {
    to_products()
}

#[handler]
async fn list(Data(pages): Data<&Arc<ProductPages>>) -> Response {
    match pages.get_all_use_case.execute().await {
        Ok(products) => render(views::product_list(&products)),
        Err(e) => {
            tracing::error!("Failed to list products: {}", e);
            server_error("The products could not be loaded.")
        }
    }
}

#[handler]
async fn show_create() -> Response {
    render(views::create_page(&ProductForm::default(), None))
}

#[handler]
async fn create(
    Data(pages): Data<&Arc<ProductPages>>,
    multipart: Multipart,
) -> poem::Result<Response> {
    let (form, image) = ProductForm::from_multipart(multipart).await?;
    let dto = form.to_dto(image);

    let response = match pages
        .create_use_case
        .execute(CreateProductParams { dto })
        .await
    {
        Ok(_) => to_products(),
        Err(ProductError::Validation(errors)) => render(views::create_page(&form, Some(&errors))),
        Err(e) => {
            tracing::error!("Failed to create product: {}", e);
            server_error("The product could not be saved.")
        }
    };
    Ok(response)
}

#[handler]
async fn show_edit(Data(pages): Data<&Arc<ProductPages>>, Path(id): Path<i32>) -> Response {
    match pages
        .get_for_edit_use_case
        .execute(GetProductForEditParams { id })
        .await
    {
        Ok(found) => {
            let form = ProductForm::from(&found.dto);
            render(views::edit_page(&found.product, &form, None))
        }
        Err(ProductError::NotFound) => to_products(),
        Err(e) => {
            tracing::error!("Failed to load product {} for edit: {}", id, e);
            to_products()
        }
    }
}

#[handler]
async fn update(
    Data(pages): Data<&Arc<ProductPages>>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> poem::Result<Response> {
    let (form, image) = ProductForm::from_multipart(multipart).await?;
    let dto = form.to_dto(image);

    let errors = match pages
        .update_use_case
        .execute(UpdateProductParams { id, dto })
        .await
    {
        Ok(_) | Err(ProductError::NotFound) => return Ok(to_products()),
        Err(ProductError::Validation(errors)) => errors,
        Err(e) => {
            tracing::error!("Failed to update product {}: {}", id, e);
            return Ok(to_products());
        }
    };

    // The edit page needs the stored id, image and creation date next to the typed values.
    let response = match pages
        .get_by_id_use_case
        .execute(GetProductByIdParams { id })
        .await
    {
        Ok(product) => render(views::edit_page(&product, &form, Some(&errors))),
        Err(_) => to_products(),
    };
    Ok(response)
}

#[handler]
async fn delete(Data(pages): Data<&Arc<ProductPages>>, Path(id): Path<i32>) -> Response {
    match pages
        .delete_use_case
        .execute(DeleteProductParams { id })
        .await
    {
        Ok(()) | Err(ProductError::NotFound) => {}
        Err(e) => tracing::error!("Failed to delete product {}: {}", id, e),
    }
    to_products()
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;
    use business::domain::product::model::ProductDto;
    use business::domain::product::use_cases::get_for_edit::ProductForEdit;
    use business::domain::product::value_objects::{ProductField, ValidationErrors};
    use poem::test::TestClient;

    use crate::test_support::{MockUseCases, MultipartBody, body_text, phone, phone_form};

    const LIMIT: usize = 64 * 1024;

    fn client(mocks: MockUseCases) -> TestClient<impl poem::Endpoint> {
        TestClient::new(mount(Route::new(), LIMIT).data(mocks.into_pages()))
    }

    #[tokio::test]
    async fn should_redirect_root_to_products() {
        let cli = client(MockUseCases::new());

        let resp = cli.get("/").send().await;

        resp.assert_status(StatusCode::SEE_OTHER);
        resp.assert_header("location", "/products");
    }

    #[tokio::test]
    async fn should_render_product_list_on_both_paths() {
        let mut mocks = MockUseCases::new();
        mocks
            .get_all
            .expect_execute()
            .times(2)
            .returning(|| Ok(vec![phone(1), phone(2)]));
        let cli = client(mocks);

        for path in ["/products", "/products/"] {
            let resp = cli.get(path).send().await;
            resp.assert_status_is_ok();
            let html = body_text(resp).await;
            assert!(html.contains(r#"href="/products/edit/1""#));
            assert!(html.contains(r#"href="/products/delete/2""#));
        }
    }

    #[tokio::test]
    async fn should_show_error_page_when_listing_fails() {
        let mut mocks = MockUseCases::new();
        mocks
            .get_all
            .expect_execute()
            .returning(|| Err(RepositoryError::database_error().into()));
        let cli = client(mocks);

        let resp = cli.get("/products").send().await;

        resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_text(resp).await.contains("The products could not be loaded."));
    }

    #[tokio::test]
    async fn should_render_create_form() {
        let cli = client(MockUseCases::new());

        let resp = cli.get("/products/create").send().await;

        resp.assert_status_is_ok();
        assert!(body_text(resp).await.contains(r#"name="imageFile""#));
    }

    #[tokio::test]
    async fn should_redirect_after_successful_create() {
        let mut mocks = MockUseCases::new();
        mocks
            .create
            .expect_execute()
            .withf(|params| {
                params.dto.name == "Phone"
                    && params.dto.price == Some(199.99)
                    && params.dto.image.as_ref().is_some_and(|i| {
                        i.original_file_name == "photo.jpg" && i.bytes == vec![0xFF, 0xD8, 0xFF]
                    })
            })
            .times(1)
            .returning(|_| Ok(phone(1)));
        let cli = client(mocks);

        let resp = phone_form()
            .file("imageFile", "photo.jpg", &[0xFF, 0xD8, 0xFF])
            .post(&cli, "/products/create")
            .await;

        resp.assert_status(StatusCode::SEE_OTHER);
        resp.assert_header("location", "/products");
    }

    #[tokio::test]
    async fn should_rerender_create_form_with_errors() {
        let mut mocks = MockUseCases::new();
        mocks.create.expect_execute().returning(|_| {
            let mut errors = ValidationErrors::new();
            errors.add(ProductField::ImageFile, "product.image_required");
            Err(ProductError::Validation(errors))
        });
        let cli = client(mocks);

        let resp = phone_form().post(&cli, "/products/create").await;

        resp.assert_status_is_ok();
        let html = body_text(resp).await;
        assert!(html.contains("The image file is required"));
        assert!(html.contains(r#"value="Phone""#));
    }

    #[tokio::test]
    async fn should_show_error_page_when_create_fails() {
        let mut mocks = MockUseCases::new();
        mocks
            .create
            .expect_execute()
            .returning(|_| Err(RepositoryError::database_error().into()));
        let cli = client(mocks);

        let resp = phone_form().post(&cli, "/products/create").await;

        resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn should_reject_oversized_form_posts() {
        let mut mocks = MockUseCases::new();
        mocks.create.expect_execute().never();
        mocks.update.expect_execute().never();
        let cli = client(mocks);
        let photo = vec![0u8; LIMIT + 1];

        for path in ["/products/create", "/products/edit/7"] {
            let resp = phone_form()
                .file("imageFile", "photo.jpg", &photo)
                .post(&cli, path)
                .await;

            resp.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
        }
    }

    #[tokio::test]
    async fn should_render_edit_form_prefilled() {
        let mut mocks = MockUseCases::new();
        mocks
            .get_for_edit
            .expect_execute()
            .withf(|params| params.id == 7)
            .returning(|_| {
                let product = phone(7);
                let dto = ProductDto::from(&product);
                Ok(ProductForEdit { product, dto })
            });
        let cli = client(mocks);

        let resp = cli.get("/products/edit/7").send().await;

        resp.assert_status_is_ok();
        let html = body_text(resp).await;
        assert!(html.contains(r#"action="/products/edit/7""#));
        assert!(html.contains(r#"value="Acme""#));
    }

    #[tokio::test]
    async fn should_redirect_when_edit_target_is_missing() {
        let mut mocks = MockUseCases::new();
        mocks
            .get_for_edit
            .expect_execute()
            .returning(|_| Err(ProductError::NotFound));
        let cli = client(mocks);

        let resp = cli.get("/products/edit/999").send().await;

        resp.assert_status(StatusCode::SEE_OTHER);
        resp.assert_header("location", "/products");
    }

    #[tokio::test]
    async fn should_redirect_after_successful_update() {
        let mut mocks = MockUseCases::new();
        mocks
            .update
            .expect_execute()
            .withf(|params| params.id == 7 && params.dto.image.is_none())
            .times(1)
            .returning(|_| Ok(phone(7)));
        let cli = client(mocks);

        let resp = phone_form().post(&cli, "/products/edit/7").await;

        resp.assert_status(StatusCode::SEE_OTHER);
        resp.assert_header("location", "/products");
    }

    #[tokio::test]
    async fn should_rerender_edit_form_with_errors_and_stored_context() {
        let mut mocks = MockUseCases::new();
        mocks.update.expect_execute().returning(|_| {
            let mut errors = ValidationErrors::new();
            errors.add(ProductField::Price, "product.price_invalid");
            Err(ProductError::Validation(errors))
        });
        mocks
            .get_by_id
            .expect_execute()
            .withf(|params| params.id == 7)
            .returning(|_| Ok(phone(7)));
        let cli = client(mocks);

        let resp = MultipartBody::new()
            .text("name", "Phone")
            .text("price", "-1")
            .post(&cli, "/products/edit/7")
            .await;

        resp.assert_status_is_ok();
        let html = body_text(resp).await;
        assert!(html.contains("The price must be a number of at least 0"));
        assert!(html.contains(r#"value="-1""#));
        assert!(html.contains("1700000000000_photo.jpg"));
    }

    #[tokio::test]
    async fn should_redirect_after_delete_even_when_missing() {
        let mut mocks = MockUseCases::new();
        mocks
            .delete
            .expect_execute()
            .withf(|params| params.id == 999)
            .times(1)
            .returning(|_| Err(ProductError::NotFound));
        let cli = client(mocks);

        let resp = cli.get("/products/delete/999").send().await;

        resp.assert_status(StatusCode::SEE_OTHER);
        resp.assert_header("location", "/products");
    }
}
