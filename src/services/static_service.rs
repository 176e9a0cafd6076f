use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, warn};

use crate::errors::AppError;

/// Service for serving files from the static asset directory
#[derive(Debug, Clone)]
pub struct StaticService {
    root: PathBuf,
}

impl StaticService {
    /// Create a new static service rooted at the given directory
    pub fn new(root: PathBuf) -> Self {
        debug!("Creating StaticService rooted at {:?}", root);
        Self { root }
    }

    /// Read an asset by request path
    pub fn read(&self, req_path: &str) -> Result<Vec<u8>, AppError> {
        let relative = Self::sanitize(req_path)?;
        let full_path = self.root.join(&relative);
        debug!("Reading static asset {:?} (full path {:?})", relative, full_path);

        if !full_path.exists() {
            warn!("Static asset does not exist: {:?}", full_path);
            return Err(AppError::NotFound);
        }
        if !full_path.is_file() {
            warn!("Static path is not a file: {:?}", full_path);
            return Err(AppError::InvalidPath);
        }

        fs::read(&full_path).map_err(|e| {
            error!("Failed to read static asset {:?}: {}", full_path, e);
            AppError::Io(e)
        })
    }

    /// Determine content type for a file
    pub fn content_type_for(&self, path: &Path) -> String {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        let content_type = match extension.as_str() {
            "html" | "htm" => "text/html",
            "css" => "text/css",
            "js" => "application/javascript",
            "json" => "application/json",
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "gif" => "image/gif",
            "webp" => "image/webp",
            "svg" => "image/svg+xml",
            "ico" => "image/x-icon",
            "txt" => "text/plain",
            _ => "application/octet-stream",
        };

        debug!("Content type for {:?}: {}", path, content_type);
        content_type.to_string()
    }

    /// Normalize a request path, rejecting traversal out of the root
    fn sanitize(req_path: &str) -> Result<PathBuf, AppError> {
        let mut clean = PathBuf::new();
        for part in req_path.trim_start_matches('/').split('/') {
            match part {
                "" | "." => continue,
                ".." => return Err(AppError::InvalidPath),
                segment if segment.contains('\\') => return Err(AppError::InvalidPath),
                segment => clean.push(segment),
            }
        }
        if clean.as_os_str().is_empty() {
            return Err(AppError::InvalidPath);
        }
        Ok(clean)
    }
}
