//! Typed errors raised by the file-backed pipeline stages

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised at the I/O edges of a pipeline run.
///
/// Stages return these inside an [`eyre::Report`] without further wrapping,
/// so callers can recover the kind with `report.downcast_ref::<EtlError>()`.
#[derive(Error, Debug)]
pub enum EtlError {
    /// The source is missing or cannot be read as UTF-8 text
    #[error("Source unavailable: {}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The destination cannot be created or written
    #[error("Destination unwritable: {}", .path.display())]
    DestinationUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl EtlError {
    pub fn source_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EtlError::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    pub fn destination_unwritable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EtlError::DestinationUnwritable {
            path: path.into(),
            source,
        }
    }

    /// Path of the file the failing stage was working on
    pub fn path(&self) -> &std::path::Path {
        match self {
            EtlError::SourceUnavailable { path, .. } => path,
            EtlError::DestinationUnwritable { path, .. } => path,
        }
    }
}
