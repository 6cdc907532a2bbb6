//! Error types for the crocgodyl SDK.
//!
//! Every panel-originating failure surfaces as [`ApiError`]; transport and
//! decode failures keep their underlying error so callers can see exactly
//! what went wrong on the wire.

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Result type for crocgodyl operations.
pub type Result<T> = std::result::Result<T, CrocError>;

/// A single error entry from the panel's error envelope.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g. "NotFoundHttpException").
    pub code: String,
    /// HTTP status as text (e.g. "404").
    pub status: String,
    /// Human-readable description.
    pub detail: String,
    /// Additional structured context, when the panel provides it.
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.status, self.code, self.detail)
    }
}

/// The panel's error envelope: one or more [`ErrorDetail`] entries in the
/// order the panel returned them.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiError {
    /// The error entries, panel order preserved.
    pub errors: Vec<ErrorDetail>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "API returned {} errors:", self.errors.len())?;
        for err in &self.errors {
            writeln!(f, "\t - {err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Errors that can occur when using the crocgodyl SDK.
#[derive(Error, Debug)]
pub enum CrocError {
    /// The panel answered with a non-success status and a parseable error
    /// envelope.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Transport failure: connection, TLS, timeout, body read.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// A response body could not be decoded against the expected schema,
    /// or an error body was not a valid error envelope.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Local file I/O failure in a download or upload helper.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A session was constructed with an empty panel URL.
    #[error("a valid panel url is required")]
    MissingUrl,

    /// A session was constructed with an empty API key.
    #[error("a valid {scope} api key is required")]
    MissingKey {
        /// Which API surface the key was for ("application" or "client").
        scope: &'static str,
    },

    /// The downloader's destination already exists as a regular file.
    #[error("refusing to overwrite existing file path")]
    RefusingOverwrite,

    /// The requested remote entry is a directory, not a file.
    #[error("cannot download a directory")]
    DirectoryDownload,

    /// The uploader was executed without a local path.
    #[error("no file path has been specified")]
    MissingFilePath,

    /// The uploader's local path does not exist.
    #[error("file path does not exist")]
    FilePathNotFound,

    /// The uploader's local path names a directory.
    #[error("path must go to a file not a directory")]
    PathIsDirectory,

    /// A one-shot download/upload URL answered with something other
    /// than 200.
    #[error("received an unexpected response: {0}")]
    UnexpectedStatus(reqwest::StatusCode),
}

impl CrocError {
    /// Returns the panel error envelope, if this is an API error.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            CrocError::Api(err) => Some(err),
            _ => None,
        }
    }
}
