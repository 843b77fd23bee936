use reqwest::{Client, Url};
use std::fmt;
use std::path::PathBuf;

use super::LoadError;

/// A location data can be read from: an HTTP(S) URL or a local file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Http(Url),
    File(PathBuf),
}

impl Source {
    /// Parse a location string.
    ///
    /// Anything with a `scheme://` prefix must be `http`, `https` or `file`;
    /// everything else is taken as a filesystem path.
    pub fn parse(location: &str) -> Result<Self, LoadError> {
        let location = location.trim();
        if location.is_empty() {
            return Err(LoadError::InvalidSource("empty location".to_string()));
        }

        if !location.contains("://") {
            return Ok(Source::File(PathBuf::from(location)));
        }

        let url = Url::parse(location)
            .map_err(|e| LoadError::InvalidSource(format!("{location}: {e}")))?;

        match url.scheme() {
            "http" | "https" => Ok(Source::Http(url)),
            "file" => url
                .to_file_path()
                .map(Source::File)
                .map_err(|()| LoadError::InvalidSource(location.to_string())),
            other => Err(LoadError::InvalidSource(format!(
                "unsupported scheme '{other}' in {location}"
            ))),
        }
    }

    /// Resolve a reference found inside this source's data.
    ///
    /// Absolute URLs are returned unchanged; relative ones are joined to
    /// the source URL, or to the source file's directory.
    pub fn resolve(&self, reference: &str) -> String {
        match self {
            Source::Http(base) => base
                .join(reference)
                .map(|url| url.to_string())
                .unwrap_or_else(|_| reference.to_string()),
            Source::File(_) if Url::parse(reference).is_ok() => reference.to_string(),
            Source::File(path) => path
                .parent()
                .map(|dir| dir.join(reference))
                .unwrap_or_else(|| PathBuf::from(reference))
                .to_string_lossy()
                .into_owned(),
        }
    }

    /// Read the whole resource
    pub async fn fetch(&self, client: &Client) -> Result<Vec<u8>, LoadError> {
        match self {
            Source::Http(url) => {
                let response = client
                    .get(url.clone())
                    .send()
                    .await
                    .map_err(|e| LoadError::Network(e.to_string()))?;

                let status = response.status();
                if !status.is_success() {
                    return Err(LoadError::Status {
                        status: status.as_u16(),
                        url: url.to_string(),
                    });
                }

                let body = response
                    .bytes()
                    .await
                    .map_err(|e| LoadError::Network(e.to_string()))?;
                Ok(body.to_vec())
            }
            Source::File(path) => tokio::fs::read(path).await.map_err(|e| LoadError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            }),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Http(url) => write!(f, "{url}"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}
