//! Shared data structures for the gallery state
//!
//! These structs represent the data model that flows between
//! the network layer and the UI layer.

use serde::Deserialize;
use std::fmt;

/// Alt text used when a photo has no description
pub const ALT_PLACEHOLDER: &str = "image";

/// Stable identifier assigned to a photo when it enters the store.
///
/// Grid items carry this id so a click never has to be resolved
/// from the item's position among its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhotoId(pub usize);

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The two resolutions every photo is published in
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PhotoUrls {
    /// Thumbnail shown in the grid
    pub small: String,
    /// Full-size image shown in the modal
    pub regular: String,
}

/// Represents a single validated photo in the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    /// Position-independent identifier
    pub id: PhotoId,
    /// Free-form caption, used as alt text
    pub description: Option<String>,
    /// Image locations (already resolved against the data source)
    pub urls: PhotoUrls,
}

impl Photo {
    /// Alt text for this photo: the description, or the placeholder
    /// when the description is missing or empty.
    pub fn alt_text(&self) -> &str {
        self.description
            .as_deref()
            .filter(|description| !description.is_empty())
            .unwrap_or(ALT_PLACEHOLDER)
    }
}

/// Wire shape of one entry of the photo payload.
///
/// Unknown fields are ignored; `description` may be null or absent.
#[derive(Debug, Clone, Deserialize)]
pub struct PhotoRecord {
    #[serde(default)]
    pub description: Option<String>,
    pub urls: PhotoUrls,
}

impl PhotoRecord {
    /// Check the fields serde cannot: both URLs must be non-empty
    pub fn is_complete(&self) -> bool {
        !self.urls.small.trim().is_empty() && !self.urls.regular.trim().is_empty()
    }

    /// Turn the wire record into a stored photo with the given id
    pub fn into_photo(self, id: PhotoId) -> Photo {
        Photo {
            id,
            description: self.description,
            urls: self.urls,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(description: Option<&str>) -> Photo {
        Photo {
            id: PhotoId(0),
            description: description.map(str::to_string),
            urls: PhotoUrls {
                small: "s.jpg".to_string(),
                regular: "r.jpg".to_string(),
            },
        }
    }

    #[test]
    fn test_alt_text_uses_description() {
        assert_eq!(photo(Some("A red fox")).alt_text(), "A red fox");
    }

    #[test]
    fn test_alt_text_falls_back_to_placeholder() {
        assert_eq!(photo(None).alt_text(), ALT_PLACEHOLDER);
        assert_eq!(photo(Some("")).alt_text(), ALT_PLACEHOLDER);
    }

    #[test]
    fn test_record_accepts_null_and_missing_description() {
        let with_null: PhotoRecord = serde_json::from_str(
            r#"{"description": null, "urls": {"small": "a", "regular": "b"}}"#,
        )
        .unwrap();
        assert!(with_null.description.is_none());

        let without: PhotoRecord =
            serde_json::from_str(r#"{"urls": {"small": "a", "regular": "b"}, "likes": 3}"#)
                .unwrap();
        assert!(without.description.is_none());
        assert!(without.is_complete());
    }

    #[test]
    fn test_record_with_empty_url_is_incomplete() {
        let record: PhotoRecord =
            serde_json::from_str(r#"{"urls": {"small": "", "regular": "b"}}"#).unwrap();
        assert!(!record.is_complete());
    }

    #[test]
    fn test_photo_id_display() {
        assert_eq!(PhotoId(7).to_string(), "#7");
    }
}
