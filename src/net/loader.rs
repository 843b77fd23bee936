use reqwest::Client;
use tracing::{info, warn};

use super::source::Source;
use super::LoadError;
use crate::state::data::{Photo, PhotoId, PhotoRecord};

/// Resource path of the photo list, relative to the configured base URL
pub const PHOTOS_PATH: &str = "/data/photos.json";

/// Outcome of a successful fetch
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    /// Valid photos, in payload order, ids assigned
    pub photos: Vec<Photo>,
    /// Number of entries that did not have the photo shape
    pub rejected: usize,
}

/// Fetch the photo list from `source` and validate it.
///
/// # Returns
/// * `Ok(report)` - Valid photos plus the count of skipped records
/// * `Err(LoadError)` - The source could not be read or is not a JSON array
pub async fn fetch_photos(client: &Client, source: &Source) -> Result<LoadReport, LoadError> {
    info!(%source, "📥 Fetching photo list");
    let body = source.fetch(client).await?;
    let report = parse_photos(&body, source)?;

    info!(
        photos = report.photos.len(),
        rejected = report.rejected,
        "✅ Photo list loaded"
    );
    Ok(report)
}

/// Validate a raw payload.
///
/// The top level must be a JSON array. Each entry that does not match the
/// photo shape is skipped and counted; the others get sequential ids and
/// have their URLs resolved against `source`.
pub fn parse_photos(body: &[u8], source: &Source) -> Result<LoadReport, LoadError> {
    let entries: Vec<serde_json::Value> =
        serde_json::from_slice(body).map_err(|e| LoadError::Parse(e.to_string()))?;

    let mut photos = Vec::with_capacity(entries.len());
    let mut rejected = 0;

    for (position, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<PhotoRecord>(entry) {
            Ok(record) if record.is_complete() => {
                let mut photo = record.into_photo(PhotoId(photos.len()));
                photo.urls.small = source.resolve(&photo.urls.small);
                photo.urls.regular = source.resolve(&photo.urls.regular);
                photos.push(photo);
            }
            Ok(_) => {
                warn!(position, "⚠️  Photo record has an empty url, skipping");
                rejected += 1;
            }
            Err(e) => {
                warn!(position, error = %e, "⚠️  Malformed photo record, skipping");
                rejected += 1;
            }
        }
    }

    Ok(LoadReport { photos, rejected })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn http_source() -> Source {
        Source::parse("http://localhost:8080/data/photos.json").unwrap()
    }

    #[test]
    fn test_parse_valid_payload() {
        let body = br#"[
            {"description": "Lake", "urls": {"small": "https://cdn.test/1s.jpg", "regular": "https://cdn.test/1r.jpg"}},
            {"description": null, "urls": {"small": "https://cdn.test/2s.jpg", "regular": "https://cdn.test/2r.jpg"}, "id": "abc"}
        ]"#;

        let report = parse_photos(body, &http_source()).unwrap();
        assert_eq!(report.rejected, 0);
        assert_eq!(report.photos.len(), 2);
        assert_eq!(report.photos[0].id, PhotoId(0));
        assert_eq!(report.photos[0].description.as_deref(), Some("Lake"));
        assert_eq!(report.photos[1].id, PhotoId(1));
        assert_eq!(report.photos[1].urls.regular, "https://cdn.test/2r.jpg");
    }

    #[test]
    fn test_parse_empty_array() {
        let report = parse_photos(b"[]", &http_source()).unwrap();
        assert!(report.photos.is_empty());
        assert_eq!(report.rejected, 0);
    }

    #[test]
    fn test_malformed_records_are_rejected() {
        let body = br#"[
            {"description": "no urls"},
            {"urls": {"small": "a.jpg"}},
            {"urls": {"small": "", "regular": "b.jpg"}},
            {"description": 5, "urls": {"small": "c.jpg", "regular": "d.jpg"}},
            "not an object",
            {"urls": {"small": "e.jpg", "regular": "f.jpg"}}
        ]"#;

        let report = parse_photos(body, &http_source()).unwrap();
        assert_eq!(report.rejected, 5);
        assert_eq!(report.photos.len(), 1);

        // Ids stay dense over the accepted photos
        assert_eq!(report.photos[0].id, PhotoId(0));
        assert_eq!(
            report.photos[0].urls.small,
            "http://localhost:8080/data/e.jpg"
        );
    }

    #[test]
    fn test_non_array_is_a_parse_error() {
        let bodies: [&[u8]; 4] = [b"{}", b"null", b"<html>oops</html>", b""];
        for body in bodies {
            assert!(matches!(
                parse_photos(body, &http_source()),
                Err(LoadError::Parse(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_fetch_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photos.json");
        std::fs::write(
            &path,
            r#"[{"description": "Dune", "urls": {"small": "img/1s.jpg", "regular": "img/1r.jpg"}}]"#,
        )
        .unwrap();

        let source = Source::File(path);
        let report = fetch_photos(&Client::new(), &source).await.unwrap();

        assert_eq!(report.photos.len(), 1);
        let expected: PathBuf = dir.path().join("img/1s.jpg");
        assert_eq!(report.photos[0].urls.small, expected.to_string_lossy());
    }

    #[tokio::test]
    async fn test_fetch_network_failure_is_an_error() {
        // Nothing listens on port 1
        let source = Source::parse("http://127.0.0.1:1/data/photos.json").unwrap();
        let result = fetch_photos(&Client::new(), &source).await;
        assert!(matches!(result, Err(LoadError::Network(_))));
    }
}
