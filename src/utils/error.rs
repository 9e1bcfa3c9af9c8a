// src/utils/error.rs
use std::path::PathBuf;
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Directory not found: {0}")]
    RootNotFound(PathBuf),

    #[error("Failed to read directory {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to write LaTeX source {path}: {source}")]
    WriteSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PDF not generated: {diagnostics}")]
    PdfNotGenerated { diagnostics: String },

    #[error("PNG conversion failed: {diagnostics}")]
    PngConversionFailed { diagnostics: String },
}

/// Why a single file did not produce a PNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FailureKind {
    NoTableFound,
    ReadFailed,
    WorkDirFailed,
    PdfNotGenerated,
    PngConversionFailed,
}

impl FailureKind {
    /// The one-line reason printed for a failed file.
    pub fn message(self) -> &'static str {
        match self {
            FailureKind::NoTableFound => "No table found.",
            FailureKind::ReadFailed => "Could not read file.",
            FailureKind::WorkDirFailed => "Could not create working directory.",
            FailureKind::PdfNotGenerated => "PDF not generated.",
            FailureKind::PngConversionFailed => "PNG conversion failed.",
        }
    }
}

/// Per-file conversion error. Never aborts a batch.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("No table found")]
    NoTableFound,

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("Failed to create working directory: {0}")]
    WorkDir(#[source] std::io::Error),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl ConvertError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ConvertError::NoTableFound => FailureKind::NoTableFound,
            ConvertError::Extract(_) => FailureKind::ReadFailed,
            ConvertError::WorkDir(_) => FailureKind::WorkDirFailed,
            ConvertError::Render(RenderError::WriteSource { .. }) => FailureKind::WorkDirFailed,
            ConvertError::Render(RenderError::PdfNotGenerated { .. }) => FailureKind::PdfNotGenerated,
            ConvertError::Render(RenderError::PngConversionFailed { .. }) => {
                FailureKind::PngConversionFailed
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error("Data processing failed: {0}")]
    Processing(String),
}
