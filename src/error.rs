use thiserror::Error;

use crate::net::LoadError;
use crate::ui::compose::CompositionError;

/// Errors that can stop the gallery or one of its code paths
#[derive(Error, Debug)]
pub enum GalleryError {
    /// Fetching the photo list failed
    #[error("failed to load photos: {0}")]
    Load(#[from] LoadError),

    /// The page could not be assembled
    #[error("failed to build the page: {0}")]
    Composition(#[from] CompositionError),

    /// The config file could not be read or parsed
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The HTTP client could not be created
    #[error("failed to create HTTP client: {0}")]
    Client(String),

    /// The window or its event loop failed
    #[error("GUI error: {0}")]
    Gui(#[from] iced::Error),
}
