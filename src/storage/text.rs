//! Plain text file operations

use crate::etl::{EtlError, Extractor};

use eyre::Result;
use std::path::{Path, PathBuf};

/// Read a whole text file
pub struct FileExtractor {
    path: PathBuf,
}

impl FileExtractor {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read the file as UTF-8 text
    pub async fn read(&self) -> Result<String, EtlError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| EtlError::source_unavailable(&self.path, e))
    }
}

// Implement Extractor trait for reading text files

impl Extractor for FileExtractor {
    type Output = String;

    async fn extract(&self) -> Result<Self::Output> {
        log::debug!("Reading {}", self.path.display());
        let content = self.read().await?;
        log::info!(
            "Extracted {} bytes from {}",
            content.len(),
            self.path.display()
        );
        Ok(content)
    }
}
