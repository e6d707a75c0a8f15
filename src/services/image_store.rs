//! Image Store
//!
//! Filesystem storage for uploaded product images. Stored filenames are
//! UUID-derived so uploads can never collide; the original filename is kept
//! as row metadata instead of being part of the path.

use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::utils::{AppError, AppResult};

/// Maximum file size (5MB)
const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Supported image formats
const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// An uploaded image as extracted from a multipart request
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub original_name: String,
    pub data: Vec<u8>,
}

/// Filesystem-backed store for product image files
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Validate and persist an upload. Returns the stored filename.
    ///
    /// Write failures are fatal to the request.
    pub fn save(&self, original_name: &str, data: &[u8]) -> AppResult<String> {
        let ext = Path::new(original_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .ok_or_else(|| {
                AppError::validation(format!("Invalid file extension for: {}", original_name))
            })?;

        validate_image(data, &ext)?;

        fs::create_dir_all(&self.dir)
            .map_err(|e| AppError::internal(format!("Failed to create images directory: {}", e)))?;

        let stored = format!("{}.{}", Uuid::new_v4(), ext);
        let path = self.dir.join(&stored);
        fs::write(&path, data)
            .map_err(|e| AppError::internal(format!("Failed to save image: {}", e)))?;

        tracing::info!(
            original_name = %original_name,
            stored = %stored,
            size = data.len(),
            "Image stored"
        );
        Ok(stored)
    }

    /// Best-effort removal; failures are logged and never surfaced.
    pub fn remove(&self, stored: &str) {
        let path = match self.resolve(stored) {
            Ok(p) => p,
            Err(_) => return,
        };
        if let Err(e) = fs::remove_file(&path) {
            tracing::warn!(file = %stored, error = %e, "Failed to remove image file");
        }
    }

    /// Resolve a stored filename inside the upload directory.
    ///
    /// Rejects path separators and parent components so nothing outside the
    /// directory is ever reachable.
    pub fn resolve(&self, stored: &str) -> AppResult<PathBuf> {
        if stored.is_empty()
            || stored.contains('/')
            || stored.contains('\\')
            || stored.contains("..")
        {
            return Err(AppError::validation(format!("Invalid image name: {}", stored)));
        }
        Ok(self.dir.join(stored))
    }
}

/// Validate image file
fn validate_image(data: &[u8], ext: &str) -> AppResult<()> {
    if data.is_empty() {
        return Err(AppError::validation("Empty file provided".to_string()));
    }

    if data.len() > MAX_FILE_SIZE {
        return Err(AppError::validation(format!(
            "File too large. Maximum size is {} bytes ({}MB)",
            MAX_FILE_SIZE,
            MAX_FILE_SIZE / 1024 / 1024
        )));
    }

    if !SUPPORTED_FORMATS.contains(&ext) {
        return Err(AppError::validation(format!(
            "Unsupported file format '{}'. Supported: {}",
            ext,
            SUPPORTED_FORMATS.join(", ")
        )));
    }

    // Verify it's actually an image by trying to load it
    if let Err(e) = image::load_from_memory(data) {
        return Err(AppError::validation(format!(
            "Invalid image file ({}): {}",
            ext, e
        )));
    }

    Ok(())
}
