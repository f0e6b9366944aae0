use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use business::domain::errors::ImageStoreError;
use business::domain::product::image_store::ImageStore;

/// Product images kept as plain files in a single directory.
pub struct LocalImageStore {
    root: PathBuf,
}

impl LocalImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, file_name: &str) -> Result<PathBuf, ImageStoreError> {
        if file_name.is_empty()
            || file_name == "."
            || file_name == ".."
            || file_name.contains(['/', '\\'])
        {
            return Err(ImageStoreError::InvalidFileName(file_name.to_string()));
        }
        Ok(self.root.join(file_name))
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn write(&self, file_name: &str, bytes: &[u8]) -> Result<(), ImageStoreError> {
        let path = self.resolve(file_name)?;

        tokio::fs::create_dir_all(&self.root).await.map_err(|e| {
            ImageStoreError::WriteFailed(format!("{}: {}", self.root.display(), e))
        })?;
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| ImageStoreError::WriteFailed(format!("{}: {}", path.display(), e)))?;

        tracing::debug!("stored image {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    async fn delete(&self, file_name: &str) -> Result<(), ImageStoreError> {
        let path = self.resolve(file_name)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::debug!("removed image {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ImageStoreError::DeleteFailed(format!(
                "{}: {}",
                path.display(),
                e
            ))),
        }
    }
}
