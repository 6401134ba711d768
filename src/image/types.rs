//! Core types for image editing requests and responses.

use crate::error::{GenEditError, Result};
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Media type used when nothing better can be determined.
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Image formats recognised when resolving media types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// PNG format (lossless).
    Png,
    /// JPEG format (lossy).
    Jpeg,
    /// WebP format.
    WebP,
    /// GIF format.
    Gif,
    /// HEIC (HEVC-coded HEIF).
    Heic,
    /// Generic HEIF container.
    Heif,
}

impl ImageFormat {
    /// Returns the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::WebP => "webp",
            Self::Gif => "gif",
            Self::Heic => "heic",
            Self::Heif => "heif",
        }
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::WebP => "image/webp",
            Self::Gif => "image/gif",
            Self::Heic => "image/heic",
            Self::Heif => "image/heif",
        }
    }

    /// Attempts to detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "webp" => Some(Self::WebP),
            "gif" => Some(Self::Gif),
            "heic" => Some(Self::Heic),
            "heif" => Some(Self::Heif),
            _ => None,
        }
    }

    /// Maps a MIME type back to a format.
    pub fn from_mime_type(mime: &str) -> Option<Self> {
        match mime.to_lowercase().as_str() {
            "image/png" => Some(Self::Png),
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "image/webp" => Some(Self::WebP),
            "image/gif" => Some(Self::Gif),
            "image/heic" => Some(Self::Heic),
            "image/heif" => Some(Self::Heif),
            _ => None,
        }
    }

    /// Detects image format from magic bytes.
    pub fn from_magic_bytes(data: &[u8]) -> Option<Self> {
        if data.len() < 12 {
            return None;
        }

        // PNG: 89 50 4E 47 0D 0A 1A 0A
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
            return Some(Self::Png);
        }

        // JPEG: FF D8 FF
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(Self::Jpeg);
        }

        // WebP: RIFF....WEBP
        if data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
            return Some(Self::WebP);
        }

        if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
            return Some(Self::Gif);
        }

        // ISO-BMFF: ....ftyp<brand>
        if &data[4..8] == b"ftyp" {
            return match &data[8..12] {
                b"heic" | b"heix" => Some(Self::Heic),
                b"mif1" | b"heif" => Some(Self::Heif),
                _ => None,
            };
        }

        None
    }
}

/// Content kind requested from (and returned by) the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Modality {
    /// Image output.
    Image,
    /// Text output.
    Text,
}

impl Modality {
    /// Returns the wire name of this modality.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "IMAGE",
            Self::Text => "TEXT",
        }
    }
}

/// Base64 payload together with its media type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedImage {
    /// Base64 (standard alphabet, padded) payload.
    pub data: String,
    /// Media type of the decoded bytes.
    pub mime_type: String,
}

impl EncodedImage {
    /// Creates a new encoded image.
    pub fn new(data: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Returns the payload as a `data:` URL.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// Decodes the base64 payload.
    pub fn decode(&self) -> Result<Vec<u8>> {
        base64::engine::general_purpose::STANDARD
            .decode(&self.data)
            .map_err(|e| GenEditError::Decode(e.to_string()))
    }
}

/// One typed unit of a multimodal request or response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    /// Inline binary data with a media type.
    InlineData(EncodedImage),
    /// Plain text.
    Text(String),
}

impl Part {
    /// Returns the inline data if this part carries any.
    pub fn as_inline_data(&self) -> Option<&EncodedImage> {
        match self {
            Self::InlineData(data) => Some(data),
            Self::Text(_) => None,
        }
    }

    /// Returns the text if this is a text part.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::InlineData(_) => None,
        }
    }
}

/// Where the bytes of a selected image live.
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// A file on the local filesystem, read on demand.
    Path(PathBuf),
    /// Bytes already held in memory.
    Bytes(Arc<[u8]>),
}

/// The image the user picked for editing.
///
/// Cloning is cheap, so a submission can capture the selection by value.
#[derive(Debug, Clone)]
pub struct SelectedImage {
    name: String,
    source: ImageSource,
    mime_type: Option<String>,
}

impl SelectedImage {
    /// Selects a file on disk. The media type is taken from the extension
    /// when it is recognised.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let mime_type = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(ImageFormat::from_extension)
            .map(|f| f.mime_type().to_string());

        Self {
            name,
            source: ImageSource::Path(path),
            mime_type,
        }
    }

    /// Selects an in-memory image.
    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            source: ImageSource::Bytes(bytes.into()),
            mime_type: None,
        }
    }

    /// Overrides the media type.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Display name (file name for on-disk images).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where the bytes come from.
    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    /// The media type known at selection time, if any.
    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    /// Returns the path for on-disk images.
    pub fn path(&self) -> Option<&Path> {
        match &self.source {
            ImageSource::Path(p) => Some(p.as_path()),
            ImageSource::Bytes(_) => None,
        }
    }
}

/// A request to edit an image: the encoded image followed by the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Ordered request parts.
    pub parts: Vec<Part>,
    /// Content kinds the service should return.
    pub response_modalities: Vec<Modality>,
}

impl GenerationRequest {
    /// Builds the two-part edit request, asking for image and text output.
    pub fn edit(image: EncodedImage, prompt: impl Into<String>) -> Self {
        Self {
            parts: vec![Part::InlineData(image), Part::Text(prompt.into())],
            response_modalities: vec![Modality::Image, Modality::Text],
        }
    }

    /// Returns the first inline image part.
    pub fn image(&self) -> Option<&EncodedImage> {
        self.parts.iter().find_map(Part::as_inline_data)
    }

    /// Returns the first text part.
    pub fn prompt(&self) -> Option<&str> {
        self.parts.iter().find_map(Part::as_text)
    }
}

/// Metadata about the generation process.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationMetadata {
    /// Model used for generation.
    pub model: Option<String>,
    /// Model version reported by the service.
    pub model_version: Option<String>,
    /// Finish reason of the consumed candidate.
    pub finish_reason: Option<String>,
    /// Round-trip duration in milliseconds.
    pub duration_ms: Option<u64>,
}

/// The ordered parts the service returned.
#[derive(Debug, Clone, Default)]
pub struct GenerationResponse {
    /// Response parts, in service order.
    pub parts: Vec<Part>,
    /// Generation metadata.
    pub metadata: GenerationMetadata,
}

impl GenerationResponse {
    /// Creates a response from parts with empty metadata.
    pub fn from_parts(parts: Vec<Part>) -> Self {
        Self {
            parts,
            metadata: GenerationMetadata::default(),
        }
    }

    /// Concatenated text parts, if there are any.
    pub fn text(&self) -> Option<String> {
        let texts: Vec<&str> = self.parts.iter().filter_map(Part::as_text).collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.join("\n"))
        }
    }

    /// Takes the first inline-data part; later image parts are ignored.
    pub fn into_image(self) -> Result<GeneratedImage> {
        let text = self.text();
        let image = self
            .parts
            .into_iter()
            .find_map(|p| match p {
                Part::InlineData(data) => Some(data),
                Part::Text(_) => None,
            })
            .ok_or(GenEditError::NoImage)?;

        Ok(GeneratedImage {
            image,
            text,
            metadata: self.metadata,
        })
    }
}

/// The image selected from a response.
#[derive(Debug, Clone)]
#[must_use = "generated image should be saved or displayed"]
pub struct GeneratedImage {
    /// The inline payload as returned by the service.
    pub image: EncodedImage,
    /// Text the model returned alongside the image.
    pub text: Option<String>,
    /// Generation metadata.
    pub metadata: GenerationMetadata,
}

impl GeneratedImage {
    /// Returns the image as a data URL.
    pub fn to_data_url(&self) -> String {
        self.image.to_data_url()
    }

    /// Media type reported by the service.
    pub fn mime_type(&self) -> &str {
        &self.image.mime_type
    }

    /// Known format for the reported media type.
    pub fn format(&self) -> Option<ImageFormat> {
        ImageFormat::from_mime_type(&self.image.mime_type)
    }

    /// Decodes the image bytes.
    pub fn decode(&self) -> Result<Vec<u8>> {
        self.image.decode()
    }

    /// Decodes and saves the image to the specified path.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.decode()?)?;
        Ok(())
    }
}
