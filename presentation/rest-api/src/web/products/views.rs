use askama::Template;

use business::domain::product::model::{MAX_IMAGE_NAME_LEN, MAX_PRICE, MAX_TEXT_LEN, Product};
use business::domain::product::value_objects::{FieldError, ProductField, ValidationErrors};

use super::form::ProductForm;
use crate::images::image_path_segment;

fn required_message(field: ProductField) -> &'static str {
    match field {
        ProductField::Name => "The name is required",
        ProductField::Brand => "The brand is required",
        ProductField::Category => "The category is required",
        ProductField::Price => "The price must be a number of at least 0",
        ProductField::Description => "The description is required",
        ProductField::ImageFile => "The image file is required",
    }
}

fn field_message(error: &FieldError) -> String {
    match error.code {
        "product.name_too_long" | "product.brand_too_long" | "product.category_too_long" => {
            format!("The {} must be at most {} characters", error.field, MAX_TEXT_LEN)
        }
        "product.price_too_large" => format!("The price must be at most {MAX_PRICE:.2}"),
        "product.image_name_too_long" => {
            format!("The image file name must be at most {MAX_IMAGE_NAME_LEN} characters")
        }
        _ => required_message(error.field).to_string(),
    }
}

/// Message shown under the input, empty when the field is fine.
fn error_for(field: ProductField, errors: Option<&ValidationErrors>) -> String {
    errors
        .and_then(|errors| errors.for_field(field))
        .map(field_message)
        .unwrap_or_default()
}

struct ProductRow {
    id: i32,
    name: String,
    brand: String,
    category: String,
    price: String,
    image: String,
    created_at: String,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            brand: product.brand.clone(),
            category: product.category.clone(),
            price: format!("{:.2}", product.price),
            image: image_path_segment(&product.image_file_name),
            created_at: product.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

struct FieldInput {
    name: ProductField,
    label: &'static str,
    value: String,
    error: String,
    multiline: bool,
}

fn form_fields(form: &ProductForm, errors: Option<&ValidationErrors>) -> Vec<FieldInput> {
    [
        (ProductField::Name, "Name", &form.name),
        (ProductField::Brand, "Brand", &form.brand),
        (ProductField::Category, "Category", &form.category),
        (ProductField::Price, "Price", &form.price),
        (ProductField::Description, "Description", &form.description),
    ]
    .into_iter()
    .map(|(name, label, value)| FieldInput {
        name,
        label,
        value: value.clone(),
        error: error_for(name, errors),
        multiline: name == ProductField::Description,
    })
    .collect()
}

#[derive(Template)]
#[template(path = "products/list.html")]
struct ProductListPage {
    products: Vec<ProductRow>,
}

#[derive(Template)]
#[template(path = "products/create.html")]
struct CreatePage {
    fields: Vec<FieldInput>,
    image_error: String,
}

#[derive(Template)]
#[template(path = "products/edit.html")]
struct EditPage {
    product_id: i32,
    name: String,
    image: String,
    created_at: String,
    fields: Vec<FieldInput>,
    image_error: String,
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorPage<'a> {
    message: &'a str,
}

pub fn product_list(products: &[Product]) -> askama::Result<String> {
    ProductListPage {
        products: products.iter().map(ProductRow::from).collect(),
    }
    .render()
}

pub fn create_page(form: &ProductForm, errors: Option<&ValidationErrors>) -> askama::Result<String> {
    CreatePage {
        fields: form_fields(form, errors),
        image_error: error_for(ProductField::ImageFile, errors),
    }
    .render()
}

/// Edit form showing the stored id, image and creation date next to the typed values.
pub fn edit_page(
    product: &Product,
    form: &ProductForm,
    errors: Option<&ValidationErrors>,
) -> askama::Result<String> {
    EditPage {
        product_id: product.id,
        name: product.name.clone(),
        image: image_path_segment(&product.image_file_name),
        created_at: product.created_at.format("%Y-%m-%d").to_string(),
        fields: form_fields(form, errors),
        image_error: error_for(ProductField::ImageFile, errors),
    }
    .render()
}

pub fn error_page(message: &str) -> askama::Result<String> {
    ErrorPage { message }.render()
}
