// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum SaveCheckError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<SaveCheckError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),
}

pub type Result<T> = std::result::Result<T, SaveCheckError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid manifest: {reason}")]
    InvalidManifest { reason: String },

    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Errors raised by the external document load/save engine. The harness
/// never swallows these; a malformed fixture fails the run loudly.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Malformed document '{path}': {details}")]
    MalformedDocument { path: PathBuf, details: String },

    #[error("Unsupported element '{element}' in '{path}'")]
    UnsupportedElement { element: String, path: PathBuf },

    #[error("Engine I/O failure on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization failed: {details}")]
    Serialization { details: String },
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;

/// Infrastructure-layer errors (fixture store, manifest loading, dumps).
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} data: {details}")]
    SerializationError { format: String, details: String },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SaveCheckError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<SaveCheckError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| SaveCheckError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| SaveCheckError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
