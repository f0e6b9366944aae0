use poem::http::StatusCode;
use poem::web::Multipart;

use business::domain::product::model::ProductDto;
use business::domain::product::value_objects::{ImageUpload, ProductField};

/// Text values of the product form exactly as the user typed them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price: String,
    pub description: String,
}

impl ProductForm {
    /// Reads a `multipart/form-data` product form. Unknown fields are ignored.
    pub async fn from_multipart(
        mut multipart: Multipart,
    ) -> poem::Result<(Self, Option<ImageUpload>)> {
        let mut form = ProductForm::default();
        let mut image = None;

        while let Some(field) = multipart.next_field().await? {
            let Some(kind) = field.name().and_then(|name| name.parse::<ProductField>().ok())
            else {
                continue;
            };

            if kind == ProductField::ImageFile {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(bad_request)?;
                image = Some(ImageUpload::new(file_name, bytes));
            } else {
                let value = field.text().await.map_err(bad_request)?;
                form.set(kind, value);
            }
        }

        Ok((form, image))
    }

    fn set(&mut self, field: ProductField, value: String) {
        match field {
            ProductField::Name => self.name = value,
            ProductField::Brand => self.brand = value,
            ProductField::Category => self.category = value,
            ProductField::Price => self.price = value,
            ProductField::Description => self.description = value,
            ProductField::ImageFile => {}
        }
    }

    /// Builds the use-case input; an unparsable price becomes `None`.
    pub fn to_dto(&self, image: Option<ImageUpload>) -> ProductDto {
        ProductDto {
            name: self.name.clone(),
            brand: self.brand.clone(),
            category: self.category.clone(),
            price: self.price.trim().parse::<f64>().ok(),
            description: self.description.clone(),
            image,
        }
    }
}

impl From<&ProductDto> for ProductForm {
    fn from(dto: &ProductDto) -> Self {
        Self {
            name: dto.name.clone(),
            brand: dto.brand.clone(),
            category: dto.category.clone(),
            price: dto.price.map(|p| p.to_string()).unwrap_or_default(),
            description: dto.description.clone(),
        }
    }
}

fn bad_request(e: poem::error::ParseMultipartError) -> poem::Error {
    poem::Error::from_string(format!("invalid form field: {e}"), StatusCode::BAD_REQUEST)
}
