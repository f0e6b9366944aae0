use chrono::{DateTime, Utc};

/// Editable product form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Name,
    Brand,
    Category,
    Price,
    Description,
    ImageFile,
}

impl std::fmt::Display for ProductField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductField::Name => write!(f, "name"),
            ProductField::Brand => write!(f, "brand"),
            ProductField::Category => write!(f, "category"),
            ProductField::Price => write!(f, "price"),
            ProductField::Description => write!(f, "description"),
            ProductField::ImageFile => write!(f, "imageFile"),
        }
    }
}

impl std::str::FromStr for ProductField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(ProductField::Name),
            "brand" => Ok(ProductField::Brand),
            "category" => Ok(ProductField::Category),
            "price" => Ok(ProductField::Price),
            "description" => Ok(ProductField::Description),
            "imageFile" => Ok(ProductField::ImageFile),
            _ => Err(format!("Invalid product field: {}", s)),
        }
    }
}

/// A rejected form field together with its i18n code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: ProductField,
    pub code: &'static str,
}

/// Every field error found while validating a product form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: ProductField, code: &'static str) {
        self.errors.push(FieldError { field, code });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_error(&self, field: ProductField) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    pub fn for_field(&self, field: ProductField) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

/// Raw uploaded image as received from the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub original_file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(original_file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            original_file_name: original_file_name.into(),
            bytes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Last path component of the client file name.
    pub fn base_name(&self) -> &str {
        base_name(&self.original_file_name)
    }
}

fn base_name(file_name: &str) -> &str {
    file_name.rsplit(['/', '\\']).next().unwrap_or_default()
}

/// Builds the blob store name `{millis}_{original}` for an upload.
///
/// Only the last path component of the client file name is kept, so the
/// result never contains `/` or `\`.
pub fn storage_file_name(at: DateTime<Utc>, original_file_name: &str) -> String {
    format!("{}_{}", at.timestamp_millis(), base_name(original_file_name))
}
