/// Network module
///
/// This module handles everything fetched from outside the process:
/// - Where data lives and how to read it (source.rs)
/// - The photo list download and validation (loader.rs)
/// - Thumbnail and full-size image downloads (images.rs)

pub mod images;
pub mod loader;
pub mod source;

use thiserror::Error;

/// Errors raised while fetching the photo list or an image
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The configured location is not a usable URL or path
    #[error("invalid photo source: {0}")]
    InvalidSource(String),

    /// Connection, timeout or body transfer failure
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("server answered {status} for {url}")]
    Status { status: u16, url: String },

    /// A local source could not be read
    #[error("could not read {path}: {message}")]
    Io { path: String, message: String },

    /// The body is not a JSON array
    #[error("photo data is not a JSON array: {0}")]
    Parse(String),
}
