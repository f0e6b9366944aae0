/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Persistence,
    #[error("repository.database_error")]
    DatabaseError,
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn persistence() -> Self {
        RepositoryError::Persistence
    }
    pub fn database_error() -> Self {
        RepositoryError::DatabaseError
    }
}

/// Image store errors. The detail string carries the underlying cause for logs.
#[derive(Debug, thiserror::Error)]
pub enum ImageStoreError {
    #[error("image_store.write_failed: {0}")]
    WriteFailed(String),
    #[error("image_store.delete_failed: {0}")]
    DeleteFailed(String),
    #[error("image_store.invalid_file_name: {0}")]
    InvalidFileName(String),
}
