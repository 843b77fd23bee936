use reqwest::Client;
use tracing::debug;

use super::source::Source;
use super::LoadError;

/// Download the encoded bytes of one image.
///
/// Takes owned arguments so the future can run as a detached UI task.
pub async fn fetch_image(client: Client, location: String) -> Result<Vec<u8>, LoadError> {
    let source = Source::parse(&location)?;
    let bytes = source.fetch(&client).await?;
    debug!(%source, size = bytes.len(), "Image downloaded");
    Ok(bytes)
}
