use chrono::{DateTime, Utc};

use super::value_objects::{ImageUpload, ProductField, ValidationErrors, storage_file_name};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price: f64,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub image_file_name: String,
}

/// A product that has not been stored yet; the repository assigns its id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price: f64,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub image_file_name: String,
}

impl NewProduct {
    /// Builds a product from a form that already passed validation.
    pub fn from_dto(dto: &ProductDto, price: f64, created_at: DateTime<Utc>) -> Self {
        let image_file_name = dto
            .image
            .as_ref()
            .map(|image| storage_file_name(created_at, &image.original_file_name))
            .unwrap_or_default();

        Self {
            name: dto.name.clone(),
            brand: dto.brand.clone(),
            category: dto.category.clone(),
            price,
            description: dto.description.clone(),
            created_at,
            image_file_name,
        }
    }
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: i32,
        name: String,
        brand: String,
        category: String,
        price: f64,
        description: String,
        created_at: DateTime<Utc>,
        image_file_name: String,
    ) -> Self {
        Self {
            id,
            name,
            brand,
            category,
            price,
            description,
            created_at,
            image_file_name,
        }
    }

    /// Copies the editable text and price fields of a validated form.
    pub fn apply(&mut self, dto: &ProductDto, price: f64) {
        self.name = dto.name.clone();
        self.brand = dto.brand.clone();
        self.category = dto.category.clone();
        self.price = price;
        self.description = dto.description.clone();
    }
}

/// Form input for creating or editing a product. Never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDto {
    pub name: String,
    pub brand: String,
    pub category: String,
    /// `None` when the submitted price was blank or not a number.
    pub price: Option<f64>,
    pub description: String,
    pub image: Option<ImageUpload>,
}

/// Longest `name`, `brand` or `category` the `VARCHAR(255)` columns hold.
pub const MAX_TEXT_LEN: usize = 255;
/// Largest price a `NUMERIC(12,2)` column holds.
pub const MAX_PRICE: f64 = 9_999_999_999.99;
/// Longest uploaded file name (bytes, last path component) kept in storage names.
pub const MAX_IMAGE_NAME_LEN: usize = 200;

impl ProductDto {
    /// Checks field presence, lengths and the price range, collecting every failure.
    ///
    /// Returns the validated price so callers never read an unchecked value.
    pub fn validate(&self, require_image: bool) -> Result<f64, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        check_text(
            &mut errors,
            ProductField::Name,
            &self.name,
            "product.name_empty",
            "product.name_too_long",
        );
        check_text(
            &mut errors,
            ProductField::Brand,
            &self.brand,
            "product.brand_empty",
            "product.brand_too_long",
        );
        check_text(
            &mut errors,
            ProductField::Category,
            &self.category,
            "product.category_empty",
            "product.category_too_long",
        );
        let price = match self.price {
            Some(p) if p.is_finite() && p > MAX_PRICE => {
                errors.add(ProductField::Price, "product.price_too_large");
                None
            }
            Some(p) if p.is_finite() && p >= 0.0 => Some(p),
            _ => {
                errors.add(ProductField::Price, "product.price_invalid");
                None
            }
        };
        if self.description.trim().is_empty() {
            errors.add(ProductField::Description, "product.description_empty");
        }
        if self.has_image() {
            if self
                .image
                .as_ref()
                .is_some_and(|image| image.base_name().len() > MAX_IMAGE_NAME_LEN)
            {
                errors.add(ProductField::ImageFile, "product.image_name_too_long");
            }
        } else if require_image {
            errors.add(ProductField::ImageFile, "product.image_required");
        }

        errors.into_result()?;
        Ok(price.unwrap_or_default())
    }

    /// True when a non-empty image was uploaded.
    pub fn has_image(&self) -> bool {
        self.image.as_ref().is_some_and(|image| !image.is_empty())
    }
}

fn check_text(
    errors: &mut ValidationErrors,
    field: ProductField,
    value: &str,
    empty_code: &'static str,
    too_long_code: &'static str,
) {
    if value.trim().is_empty() {
        errors.add(field, empty_code);
    } else if value.chars().count() > MAX_TEXT_LEN {
        errors.add(field, too_long_code);
    }
}

impl From<&Product> for ProductDto {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            brand: product.brand.clone(),
            category: product.category.clone(),
            price: Some(product.price),
            description: product.description.clone(),
            image: None,
        }
    }
}
