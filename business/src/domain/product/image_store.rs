use async_trait::async_trait;

use crate::domain::errors::ImageStoreError;

/// Port for the directory holding uploaded product images.
///
/// Files are addressed by their generated storage name only.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Writes `bytes` under `file_name`, creating the directory if needed and
    /// replacing any existing file with the same name.
    async fn write(&self, file_name: &str, bytes: &[u8]) -> Result<(), ImageStoreError>;

    /// Removes `file_name`. A file that is already gone is not an error.
    async fn delete(&self, file_name: &str) -> Result<(), ImageStoreError>;
}
