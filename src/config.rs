use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

use crate::error::GalleryError;
use crate::net::loader::PHOTOS_PATH;

/// Where the gallery gets its data from.
///
/// Loaded from the user's config directory when present:
/// - Linux: ~/.config/photo-gallery/config.json
/// - macOS: ~/Library/Application Support/photo-gallery/config.json
/// - Windows: %APPDATA%\photo-gallery\config.json
///
/// then overridden by `GALLERY_BASE_URL`, `GALLERY_PHOTOS_PATH` and
/// `GALLERY_TIMEOUT_SECS`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Origin the photo list is served from (or a local directory)
    pub base_url: String,
    /// Path of the photo list under `base_url`
    pub photos_path: String,
    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            photos_path: PHOTOS_PATH.to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    /// Load the config file (if any) and apply environment overrides.
    ///
    /// A malformed file is reported and ignored.
    pub fn load() -> Self {
        let from_file = match Self::config_path() {
            Some(path) if path.exists() => match Self::from_file(&path) {
                Ok(config) => {
                    info!(path = %path.display(), "📁 Config loaded");
                    config
                }
                Err(e) => {
                    warn!(error = %e, "⚠️  Ignoring config file, using defaults");
                    Self::default()
                }
            },
            _ => Self::default(),
        };

        from_file.with_overrides(|key| std::env::var(key).ok())
    }

    /// Get the path where the config file is expected
    pub fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("photo-gallery");
        path.push("config.json");
        Some(path)
    }

    /// Parse a config file; missing fields take their defaults
    pub fn from_file(path: &Path) -> Result<Self, GalleryError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| GalleryError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, GalleryError> {
        serde_json::from_str(json).map_err(|e| GalleryError::Config(e.to_string()))
    }

    /// Apply overrides from a key lookup (the environment, in practice)
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(base_url) = lookup("GALLERY_BASE_URL") {
            self.base_url = base_url;
        }
        if let Some(photos_path) = lookup("GALLERY_PHOTOS_PATH") {
            self.photos_path = photos_path;
        }
        if let Some(timeout) = lookup("GALLERY_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) if secs > 0 => self.request_timeout_secs = secs,
                _ => warn!(value = %timeout, "⚠️  GALLERY_TIMEOUT_SECS is not a positive number"),
            }
        }
        self
    }

    /// Full location of the photo list
    pub fn photos_location(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if self.photos_path.starts_with('/') {
            format!("{base}{}", self.photos_path)
        } else {
            format!("{base}/{}", self.photos_path)
        }
    }

    /// A zero timeout (from the config file) falls back to the default
    pub fn request_timeout(&self) -> Duration {
        match self.request_timeout_secs {
            0 => Duration::from_secs(Self::default().request_timeout_secs),
            secs => Duration::from_secs(secs),
        }
    }
}
