use std::env;
use std::path::PathBuf;

const DEFAULT_IMAGES_DIR: &str = "public/images";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Where uploaded product images live and how large a form post may be
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub images_dir: PathBuf,
    pub max_upload_bytes: usize,
}

impl StorageConfig {
    /// Load storage configuration from environment variables
    ///
    /// Environment variables:
    /// - IMAGES_DIR: Directory for uploaded images (default: "public/images")
    /// - MAX_UPLOAD_BYTES: Request body limit for form posts (default: 10 MiB)
    pub fn from_env() -> Self {
        Self::from_values(env::var("IMAGES_DIR").ok(), env::var("MAX_UPLOAD_BYTES").ok())
    }

    fn from_values(images_dir: Option<String>, max_upload_bytes: Option<String>) -> Self {
        let images_dir = images_dir
            .filter(|dir| !dir.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_IMAGES_DIR.to_string());
        let max_upload_bytes = max_upload_bytes
            .and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|limit| *limit > 0)
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        Self {
            images_dir: PathBuf::from(images_dir),
            max_upload_bytes,
        }
    }
}
