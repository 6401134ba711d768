//! Turns a selected image into a base64 payload for inline request parts.

use crate::error::{GenEditError, Result};
use crate::image::types::{
    EncodedImage, ImageFormat, ImageSource, SelectedImage, FALLBACK_MIME_TYPE,
};
use base64::Engine;

/// Reads the selected image fully and encodes it.
///
/// The bytes are rendered as a `data:` URL and only the segment after the
/// first comma is kept. An empty read leaves no payload and fails with
/// [`GenEditError::Decode`]; read failures surface as [`GenEditError::Io`].
pub async fn encode_image(image: &SelectedImage) -> Result<EncodedImage> {
    let owned;
    let bytes: &[u8] = match image.source() {
        ImageSource::Path(path) => {
            owned = tokio::fs::read(path).await?;
            owned.as_slice()
        }
        ImageSource::Bytes(bytes) => &bytes[..],
    };

    let mime_type = resolve_mime_type(image, bytes);
    let data_url = to_data_url(&mime_type, bytes);
    let data = data_url_payload(&data_url).ok_or_else(|| {
        GenEditError::Decode(format!("no image data could be read from {}", image.name()))
    })?;

    tracing::debug!(
        name = image.name(),
        mime_type = %mime_type,
        size_bytes = bytes.len(),
        "encoded selected image"
    );

    Ok(EncodedImage::new(data, mime_type))
}

/// Returns the base64 segment of a `data:` URL, if it has a non-empty one.
pub fn data_url_payload(data_url: &str) -> Option<&str> {
    data_url
        .split_once(',')
        .map(|(_, payload)| payload)
        .filter(|payload| !payload.is_empty())
}

fn to_data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        mime_type,
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

/// Explicit type, then extension (already folded in at selection), then
/// magic bytes.
fn resolve_mime_type(image: &SelectedImage, bytes: &[u8]) -> String {
    image
        .mime_type()
        .map(str::to_string)
        .or_else(|| ImageFormat::from_magic_bytes(bytes).map(|f| f.mime_type().to_string()))
        .unwrap_or_else(|| FALLBACK_MIME_TYPE.to_string())
}
